pub mod catalog;
pub mod config;
pub mod css;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod registry;

pub use catalog::ColorCatalog;
pub use error::{Error, Result};
pub use registry::{ColorDefinition, FALLBACK_COLOR_ID};
