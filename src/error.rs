use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while loading configuration or translation files
///
/// Catalog lookups themselves are total and never produce errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
