//! Fixed catalog of task-card colors
//!
//! The registry is the source of truth for every other part of the crate:
//! listings, CSS output and value lookups all iterate or index into it.
//! It is constructed at compile time and never mutated, so concurrent
//! readers need no coordination.

/// A single catalog entry
///
/// The `id` is the stable identity persisted on other entities (tasks,
/// categories) as a foreign reference; `name` is the untranslated display
/// string used for locale-independent name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDefinition {
    /// Stable lowercase snake_case identifier, unique across the catalog
    pub id: &'static str,
    /// Canonical human-readable name, localized at presentation time
    pub name: &'static str,
    /// CSS background color value
    pub background: &'static str,
    /// CSS border color value
    pub border: &'static str,
}

/// Identifier used when no default color is configured
pub const FALLBACK_COLOR_ID: &str = "yellow";

/// The full catalog, in canonical order
///
/// Order is significant: it drives iteration order in listings and in the
/// generated stylesheet.
pub static COLORS: [ColorDefinition; 10] = [
    ColorDefinition {
        id: "yellow",
        name: "Yellow",
        background: "rgb(230, 192, 123)",
        border: "rgb(161, 134, 86)",
    },
    ColorDefinition {
        id: "blue",
        name: "Blue",
        background: "rgb(97, 174, 238)",
        border: "rgb(67, 121, 166)",
    },
    ColorDefinition {
        id: "green",
        name: "Green",
        background: "rgb(152, 195, 121)",
        border: "rgb(106, 136, 84)",
    },
    ColorDefinition {
        id: "purple",
        name: "Purple",
        background: "rgb(198, 120, 221)",
        border: "rgb(138, 84, 154)",
    },
    ColorDefinition {
        id: "red",
        name: "Red",
        background: "rgb(190, 80, 70)",
        border: "rgb(133, 56, 49)",
    },
    ColorDefinition {
        id: "orange",
        name: "Orange",
        background: "rgb(209, 154, 102)",
        border: "rgb(146, 107, 71)",
    },
    ColorDefinition {
        id: "grey",
        name: "Grey",
        background: "rgb(238, 238, 238)",
        border: "rgb(204, 204, 204)",
    },
    ColorDefinition {
        id: "dark_grey",
        name: "Dark Grey",
        background: "#cfd8dc",
        border: "#455a64",
    },
    ColorDefinition {
        id: "pink",
        name: "Pink",
        background: "#e06c75",
        border: "#9c4b51",
    },
    ColorDefinition {
        id: "teal",
        name: "Teal",
        background: "#56b6c2",
        border: "#3c7f87",
    },
];

/// Get the full catalog in canonical order
pub fn all() -> &'static [ColorDefinition] {
    &COLORS
}

/// Look up a definition by identifier, without any fallback
pub fn get(id: &str) -> Option<&'static ColorDefinition> {
    COLORS.iter().find(|color| color.id == id)
}

/// Find a color identifier from an identifier or a canonical name
///
/// Matching is case-insensitive. Each entry is checked identifier-first,
/// then by its lowercased canonical (untranslated) name, so lookups behave
/// the same in every locale. Returns the first match, or an empty string
/// when nothing matches.
pub fn find(input: &str) -> &'static str {
    let input = input.to_lowercase();

    for color in &COLORS {
        if color.id == input {
            return color.id;
        } else if input == color.name.to_lowercase() {
            return color.id;
        }
    }

    ""
}
