//! Color catalog service
//!
//! Ties the registry to the external collaborators: the configuration store
//! supplying the default color, the translator used for presentation labels
//! and the hook dispatcher extending the exposed list. All operations are
//! total; unknown identifiers degrade to the default color instead of
//! failing.

use crate::config::{ConfigStore, MemoryConfig};
use crate::css;
use crate::hooks::{ColorList, HookDispatcher, COLOR_LIST_EXTENSION};
use crate::i18n::{IdentityTranslator, Translator};
use crate::registry::{self, ColorDefinition, FALLBACK_COLOR_ID};

/// Configuration key holding the preferred default color identifier
const DEFAULT_COLOR_KEY: &str = "default_color";

pub struct ColorCatalog {
    settings: Box<dyn ConfigStore>,
    translator: Box<dyn Translator>,
    hooks: HookDispatcher,
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::new(
            Box::new(MemoryConfig::new()),
            Box::new(IdentityTranslator),
        )
    }
}

impl ColorCatalog {
    pub fn new(settings: Box<dyn ConfigStore>, translator: Box<dyn Translator>) -> Self {
        Self {
            settings,
            translator,
            hooks: HookDispatcher::new(),
        }
    }

    /// Access the hook dispatcher for extension registration
    pub fn hooks_mut(&mut self) -> &mut HookDispatcher {
        &mut self.hooks
    }

    /// The system-wide default color identifier
    ///
    /// Read from the configuration store on every call; unset falls back to
    /// [`FALLBACK_COLOR_ID`].
    pub fn default_color(&self) -> String {
        self.settings.get(DEFAULT_COLOR_KEY, FALLBACK_COLOR_ID)
    }

    /// Get the definition for `id`, substituting the default color's
    /// definition when `id` is unknown
    ///
    /// A configured default that is itself unknown degrades to the fixed
    /// fallback entry, so this never fails.
    pub fn definition(&self, id: &str) -> &'static ColorDefinition {
        registry::get(id)
            .or_else(|| registry::get(&self.default_color()))
            .unwrap_or(&registry::COLORS[0])
    }

    /// Background color value for `id`, with the default-color fallback
    pub fn background_color(&self, id: &str) -> &'static str {
        self.definition(id).background
    }

    /// Border color value for `id`, with the default-color fallback
    pub fn border_color(&self, id: &str) -> &'static str {
        self.definition(id).border
    }

    /// Find a color identifier from an identifier or a canonical name
    ///
    /// Unlike the value lookups above, an unmatched input returns an empty
    /// string rather than the default color: reverse lookup callers decide
    /// their own fallback policy.
    pub fn find(&self, input: &str) -> &'static str {
        registry::find(input)
    }

    /// Build the presentation list for selection widgets
    ///
    /// Entries follow registry order with translated labels. When
    /// `include_all` is set, an empty-identifier "All colors" entry comes
    /// first. Hooks registered on [`COLOR_LIST_EXTENSION`] then run over the
    /// finished base list and may reshape it arbitrarily.
    pub fn list(&self, include_all: bool) -> ColorList {
        let mut listing = ColorList::new();

        if include_all {
            listing.push((String::new(), self.translator.translate("All colors")));
        }

        for color in registry::all() {
            listing.push((color.id.to_string(), self.translator.translate(color.name)));
        }

        self.hooks.dispatch(COLOR_LIST_EXTENSION, &mut listing);

        listing
    }

    /// CSS fragment covering every catalog color
    pub fn css(&self) -> String {
        css::stylesheet()
    }
}
