//! The ordered directory of coffee shops for one session.

use std::fs;
use std::path::{Path, PathBuf};

use crate::csv;
use crate::error::Result;
use crate::record::CoffeeShop;

/// The in-memory coffee shop collection.
///
/// Index-addressable, with insertion order equal to source-row order. A
/// directory is built once, at startup, and never modified afterwards;
/// there is no update, delete, or re-fetch path.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    shops: Vec<CoffeeShop>,
    source_path: Option<PathBuf>,
}

impl Directory {
    /// Parse a directory from raw delimited text.
    pub fn from_text(text: &str) -> Self {
        let shops = csv::parse(text).iter().map(CoffeeShop::from_row).collect();
        Self {
            shops,
            source_path: None,
        }
    }

    /// Read and parse the directory file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut directory = Self::from_text(&text);
        directory.source_path = Some(path.to_path_buf());
        Ok(directory)
    }

    /// Get the shop at `index`, in source order.
    pub fn get(&self, index: usize) -> Option<&CoffeeShop> {
        self.shops.get(index)
    }

    /// Number of shops in the directory.
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// Iterate shops in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CoffeeShop> {
        self.shops.iter()
    }

    /// Where this directory was loaded from, if it came from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
name,address,phone,rating,specialty,hours,yelp_url,lat,lng
Dinosaur Coffee,4334 W Sunset Blvd,(323) 663-0106,4.4,Pour over,7am-6pm,https://example.com/dinosaur,34.0945,-118.2814
Maru Coffee,1019 S Santa Fe Ave,(213) 265-7974,4.6,Cream top,8am-5pm,https://example.com/maru,34.0330,-118.2326";

    #[test]
    fn test_from_text_preserves_order() {
        let directory = Directory::from_text(SAMPLE);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get(0).unwrap().name, "Dinosaur Coffee");
        assert_eq!(directory.get(1).unwrap().name, "Maru Coffee");
        assert!(directory.get(2).is_none());
        assert!(directory.source_path().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coffee_shops.csv");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let directory = Directory::load(&path).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.source_path(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        assert!(Directory::load(&path).is_err());
    }

    #[test]
    fn test_empty_text_yields_empty_directory() {
        let directory = Directory::from_text("");
        assert!(directory.is_empty());
    }
}
