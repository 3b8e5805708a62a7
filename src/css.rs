//! Stylesheet generation
//!
//! Renders the whole registry into a CSS fragment the host UI embeds once
//! per page. Output is regenerated on every call; callers that want caching
//! do it themselves.

use std::fmt::Write;

use crate::registry;

/// UI surfaces that share the combined background/border rule
const GROUP_SELECTORS: [&str; 6] = [
    ".task-board",
    ".task-summary-container",
    ".color-picker-square",
    ".task-board-category",
    ".table-list-category",
    ".task-tag",
];

/// Render every registry color as utility classes
///
/// Each entry produces three rule blocks in registry order: the combined
/// surface rule, a table-cell rule and a list-row rule. Color values are
/// emitted exactly as stored in the registry.
pub fn stylesheet() -> String {
    let mut buffer = String::new();

    for color in registry::all() {
        let selectors: Vec<String> = GROUP_SELECTORS
            .iter()
            .map(|prefix| format!("{}.color-{}", prefix, color.id))
            .collect();

        let _ = write!(
            buffer,
            "{} {{background-color: {};border-color: {}}}",
            selectors.join(", "),
            color.background,
            color.border,
        );
        let _ = write!(
            buffer,
            "td.color-{} {{background-color: {}}}",
            color.id, color.background,
        );
        let _ = write!(
            buffer,
            ".table-list-row.color-{} {{border-left: 5px solid {}}}",
            color.id, color.border,
        );
    }

    buffer
}
