//! CatalogTUI library
//!
//! Core pieces of the catalog browser: the option value model, catalog
//! sources, the view toolkit and the helper functions the screens use.
//! Modules are exposed for the binary and for integration testing.

pub mod config;
pub mod logging;
pub mod model;
pub mod stores;
pub mod traits;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use model::{CatalogPage, OptionValue};
pub use stores::JsonFileCatalog;
pub use traits::CatalogSource;
pub use utils::ArgumentError;
