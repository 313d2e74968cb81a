//! Integration tests for loading copy catalogs from disk

use port_common::test_utils::{copy_fixtures, create_temp_dir};
use port_i18n::{CopyCatalog, Fallback, I18nError, Locale, Translator};
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory with Fluent files for English and Dutch
fn create_test_locales() -> TempDir {
    let temp_dir = create_temp_dir();

    for (locale, source) in copy_fixtures::catalog_ftl() {
        fs::create_dir_all(temp_dir.path().join(locale)).unwrap();
        fs::write(temp_dir.path().join(locale).join("main.ftl"), source).unwrap();
    }

    temp_dir
}

#[test]
fn test_ftl_dir_follows_locale_order() {
    let temp_dir = create_test_locales();
    let locales = Locale::parse_all(["nl", "en"]).unwrap();
    let catalog = CopyCatalog::load_ftl_dir(temp_dir.path(), &locales).unwrap();

    assert_eq!(catalog.len(), 3);
    let title = catalog.get("title").unwrap();
    assert_eq!(title.locales().collect::<Vec<_>>(), vec!["nl", "en"]);
    assert_eq!(title.get("en"), Some("Welcome"));
    assert_eq!(title.get("nl"), Some("Welkom"));

    // Only English has the privacy label, so Dutch readers fall through to it.
    let translator = Translator::default();
    let label = catalog.get("privacy-label").unwrap();
    let resolution = translator.resolve_detailed(label, "nl");
    assert_eq!(resolution.fallback, Fallback::FirstAvailable);
    assert_eq!(resolution.text, "I have read and agree with the above terms.");
}

#[test]
fn test_ftl_dir_skips_missing_locale() {
    let temp_dir = create_test_locales();
    let locales = Locale::parse_all(["en", "de"]).unwrap();
    let catalog = CopyCatalog::load_ftl_dir(temp_dir.path(), &locales).unwrap();

    let title = catalog.get("title").unwrap();
    assert!(!title.contains_locale("de"));
    assert_eq!(
        catalog.missing_locales(&locales).len(),
        3,
        "every entry lacks German copy"
    );
}

#[test]
fn test_ftl_parse_error_is_reported() {
    let temp_dir = create_temp_dir();
    fs::create_dir_all(temp_dir.path().join("en")).unwrap();
    fs::write(temp_dir.path().join("en/main.ftl"), "= no identifier\n").unwrap();

    let err = CopyCatalog::load_ftl_dir(temp_dir.path(), &[Locale::english()]).unwrap_err();
    assert!(matches!(err, I18nError::FluentParse { .. }));
}

#[test]
fn test_load_dispatches_on_path() {
    let temp_dir = create_test_locales();
    let yaml_path = temp_dir.path().join("copy.yaml");
    fs::write(&yaml_path, copy_fixtures::catalog_yaml()).unwrap();

    let catalog = CopyCatalog::load(&yaml_path, &[]).unwrap();
    assert_eq!(catalog.len(), 4);

    let pending = catalog.get("pending").unwrap();
    let entries: Vec<_> = pending.translations().collect();
    assert_eq!(entries, vec![("de", None), ("fr", Some("Bientôt")), ("en", Some("Soon"))]);
    assert!(catalog.get("empty").unwrap().is_empty());

    let from_dir = CopyCatalog::load(temp_dir.path(), &[Locale::english()]).unwrap();
    assert_eq!(from_dir.get("title").unwrap().get("en"), Some("Welcome"));
}

#[test]
fn test_load_rejects_unknown_extension_and_missing_file() {
    let temp_dir = create_temp_dir();
    let txt_path = temp_dir.path().join("copy.txt");
    fs::write(&txt_path, "title: x").unwrap();

    assert!(matches!(
        CopyCatalog::load(&txt_path, &[]),
        Err(I18nError::CatalogFormat(_))
    ));
    assert!(matches!(
        CopyCatalog::load(temp_dir.path().join("absent.yaml"), &[]),
        Err(I18nError::ResourceLoad { .. })
    ));
}

#[test]
fn test_yaml_catalog_resolution_tiers() {
    let catalog = CopyCatalog::from_yaml_str(copy_fixtures::catalog_yaml()).unwrap();
    let translator = Translator::default();

    assert_eq!(translator.translate(catalog.get("title").unwrap(), "de"), "Bedankt");
    assert_eq!(translator.translate(catalog.get("greeting").unwrap(), "nl"), "Hi");
    assert_eq!(translator.translate(catalog.get("pending").unwrap(), "de"), "Bientôt");
    assert_eq!(translator.translate(catalog.get("empty").unwrap(), "en"), "?text?");
}
