//! Data-driven farm scenarios: crop catalogs, plantings, environment and
//! model settings read from RON, JSON, or TOML files.
//!
//! The loader only reads. Schema structs in [`schema`] mirror the files and
//! are resolved into [`harvest_core`] types by [`farm`].

pub mod farm;
pub mod loader;
pub mod schema;

pub use farm::{FarmData, load_farm};
pub use loader::{DataLoadError, Format};
