//! Tests for the public catalog surface

use taskpalette::catalog::ColorCatalog;
use taskpalette::config::MemoryConfig;
use taskpalette::hooks::{ColorList, COLOR_LIST_EXTENSION};
use taskpalette::i18n::{IdentityTranslator, MapTranslator};
use taskpalette::registry;

// ===================
// Lookup tests
// ===================

#[test]
fn test_find_every_id_and_name() {
    for color in registry::all() {
        assert_eq!(registry::find(color.id), color.id);
        assert_eq!(registry::find(&color.id.to_uppercase()), color.id);
        assert_eq!(registry::find(&color.name.to_lowercase()), color.id);
    }
}

#[test]
fn test_find_unmatched_input() {
    assert_eq!(registry::find("not-a-real-color"), "");
}

// ===================
// Fallback policy tests
// ===================

#[test]
fn test_unknown_id_matches_default_definition() {
    let catalog = ColorCatalog::default();
    let default_id = catalog.default_color();
    assert_eq!(catalog.definition("unknown_id"), catalog.definition(&default_id));
}

#[test]
fn test_reference_scenario() {
    let catalog = ColorCatalog::default();

    assert_eq!(catalog.find("Yellow"), "yellow");
    assert_eq!(catalog.find("YELLOW"), "yellow");
    assert_eq!(catalog.background_color("yellow"), "rgb(230, 192, 123)");
    assert_eq!(catalog.default_color(), "yellow");
    assert_eq!(catalog.border_color("does_not_exist"), "rgb(161, 134, 86)");
}

#[test]
fn test_configured_default_steers_fallback() {
    let mut config = MemoryConfig::new();
    config.set("default_color", "pink");
    let catalog = ColorCatalog::new(Box::new(config), Box::new(IdentityTranslator));

    assert_eq!(catalog.default_color(), "pink");
    assert_eq!(catalog.background_color("does_not_exist"), "#e06c75");
    // The reverse lookup still reports unresolved
    assert_eq!(catalog.find("does_not_exist"), "");
}

// ===================
// Listing tests
// ===================

#[test]
fn test_list_shapes() {
    let catalog = ColorCatalog::default();

    let plain = catalog.list(false);
    assert_eq!(plain.len(), registry::all().len());
    assert!(plain.iter().all(|(id, _)| !id.is_empty()));

    let with_all = catalog.list(true);
    assert_eq!(with_all.len(), plain.len() + 1);
    assert_eq!(with_all[0].0, "");
    assert_eq!(&with_all[1..], &plain[..]);
}

#[test]
fn test_list_translation_and_hooks_compose() {
    let translator = MapTranslator::from_toml_str(
        "\"All colors\" = \"Alle Farben\"\n\"Grey\" = \"Grau\"",
    )
    .unwrap();
    let mut catalog = ColorCatalog::new(Box::new(MemoryConfig::new()), Box::new(translator));
    catalog
        .hooks_mut()
        .on(COLOR_LIST_EXTENSION, |list: &mut ColorList| {
            // Host plugin pinning grey to the top, below the sentinel
            if let Some(pos) = list.iter().position(|(id, _)| id == "grey") {
                let entry = list.remove(pos);
                list.insert(1, entry);
            }
        });

    let listing = catalog.list(true);
    assert_eq!(listing[0].1, "Alle Farben");
    assert_eq!(listing[1], ("grey".to_string(), "Grau".to_string()));
    assert_eq!(listing[2].0, "yellow");
}

// ===================
// Stylesheet tests
// ===================

#[test]
fn test_css_covers_registry() {
    let catalog = ColorCatalog::default();
    let css = catalog.css();

    for color in registry::all() {
        assert!(css.contains(&format!(".task-tag.color-{}", color.id)));
        assert!(css.contains(color.background));
        assert!(css.contains(color.border));
    }
}
