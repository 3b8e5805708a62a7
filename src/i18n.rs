//! Localization collaborator
//!
//! Display names are stored untranslated in the registry and only localized
//! at presentation time, so lookup stays locale-independent.

use std::collections::HashMap;

use crate::error::Error;

/// Canonical-text to locale-specific string mapping
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Translator that returns every string unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Map-backed translator, identity for unknown strings
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    entries: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a translation table from a flat TOML document:
    ///
    /// ```toml
    /// "Yellow" = "Jaune"
    /// "All colors" = "Toutes les couleurs"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let entries: HashMap<String, String> = toml::from_str(content)?;
        Ok(Self::new(entries))
    }
}

impl Translator for MapTranslator {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
