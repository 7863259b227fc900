//! # BrewMap Core
//!
//! Data layer for the BrewMap coffee shop directory.
//!
//! This crate provides:
//! - `CoffeeShop`: one parsed coffee shop record
//! - `Directory`: the ordered, index-addressable record collection
//! - Naive delimiter-based CSV parsing (header line + value lines)
//!
//! No UI types live here; the GUI crate consumes these through read-only
//! references.

pub mod csv;
pub mod directory;
pub mod error;
pub mod record;

pub use directory::Directory;
pub use error::{Error, Result};
pub use record::CoffeeShop;
