//! The coffee shop record.

use crate::csv::Row;

/// One coffee shop, as parsed from the directory file.
///
/// Every field is kept as trimmed text, exactly as it appeared in the
/// source row. Field presence is best-effort: a column missing from the
/// row is an empty string, never an error. Records are immutable after
/// parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoffeeShop {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub rating: String,
    pub specialty: String,
    pub hours: String,
    pub yelp_url: String,
    pub lat: String,
    pub lng: String,
}

impl CoffeeShop {
    /// Build a record from a parsed row. Columns the row does not carry
    /// become empty strings; unrecognized columns are ignored.
    pub fn from_row(row: &Row) -> Self {
        let field = |name: &str| row.get(name).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            address: field("address"),
            phone: field("phone"),
            rating: field("rating"),
            specialty: field("specialty"),
            hours: field("hours"),
            yelp_url: field("yelp_url"),
            lat: field("lat"),
            lng: field("lng"),
        }
    }

    /// The shop's position as (lat, lng).
    ///
    /// Returns `None` when either part does not parse as a float. Such a
    /// record keeps its place in the directory but gets no map marker.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        let lat = self.lat.parse::<f64>().ok()?;
        let lng = self.lng.parse::<f64>().ok()?;
        Some((lat, lng))
    }
}
