//! Tests for locale resolution and rendering of translated copy

use port_common::escape_html;
use port_common::test_utils::{copy_fixtures, init_test_logging, property_testing};
use port_i18n::{is_translatable, text_bundle, Fallback, TextBundle, Translatable, Translator};
use proptest::prelude::*;

fn bundle_from(entries: &[(String, String)]) -> TextBundle {
    entries.iter().cloned().collect()
}

#[test]
fn test_documented_scenarios() {
    init_test_logging();
    let translator = Translator::new("nl");
    let thank_you: TextBundle = copy_fixtures::thank_you().into_iter().collect();

    // Requested locale present
    assert_eq!(translator.translate(&thank_you, "en"), "Thank you");

    // Requested locale absent, default present
    assert_eq!(translator.translate(&thank_you, "fr"), "Bedankt");

    // Only a non-default locale present
    let hi = text_bundle! { "en" => "Hi" };
    assert_eq!(translator.translate(&hi, "fr"), "Hi");

    // Nothing present
    assert_eq!(translator.translate(&TextBundle::new(), "en"), "?text?");

    // Markup is escaped
    let markup: TextBundle = copy_fixtures::markup().into_iter().collect();
    assert_eq!(translator.translate(&markup, "en"), "&lt;b&gt;Hi&lt;/b&gt;");
}

#[test]
fn test_malformed_locale_is_a_miss() {
    let translator = Translator::default();
    let bundle = text_bundle! { "en" => "Hi", "nl" => "Hoi" };

    let resolution = translator.resolve_detailed(&bundle, "");
    assert_eq!(resolution.fallback, Fallback::DefaultLocale);
    assert_eq!(resolution.text, "Hoi");

    let resolution = translator.resolve_detailed(&bundle, "<<not a locale>>");
    assert_eq!(resolution.text, "Hoi");
}

#[test]
fn test_pass_through_is_unchanged() {
    let translator = Translator::default();
    let raw = "<b>already safe?</b>";
    assert_eq!(translator.translate(raw, "en"), raw);
    assert_eq!(translator.translate(String::from("a & b"), "nl"), "a & b");
}

#[test]
fn test_translator_is_shareable_across_threads() {
    let translator = std::sync::Arc::new(Translator::default());
    let bundle = std::sync::Arc::new(text_bundle! { "en" => "Hi", "nl" => "Hoi" });

    let handles: Vec<_> = ["en", "nl", "fr"]
        .into_iter()
        .map(|locale| {
            let translator = translator.clone();
            let bundle = bundle.clone();
            std::thread::spawn(move || translator.translate(bundle.as_ref(), locale))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["Hi", "Hoi", "Hoi"]);
}

proptest! {
    #[test]
    fn test_property_requested_locale_is_exact(
        entries in property_testing::entries_strategy(6),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!entries.is_empty());
        let bundle = bundle_from(&entries);
        let (locale, _) = &entries[pick.index(entries.len())];
        let expected = bundle.get(locale).unwrap().to_string();

        let translator = Translator::default();
        prop_assert_eq!(translator.resolve(&bundle, locale), expected.as_str());
    }

    #[test]
    fn test_property_default_locale_fallback(
        entries in property_testing::entries_strategy(6),
        default_text in property_testing::copy_text_strategy(),
    ) {
        let bundle = bundle_from(&entries).add("zz", default_text.clone());
        let translator = Translator::new("zz");

        prop_assume!(!bundle.contains_locale("qq"));
        prop_assert_eq!(translator.resolve(&bundle, "qq"), default_text.as_str());
    }

    #[test]
    fn test_property_first_inserted_fallback(entries in property_testing::entries_strategy(6)) {
        let bundle = bundle_from(&entries);
        let translator = Translator::new("xx");
        prop_assume!(!bundle.contains_locale("xx") && !bundle.contains_locale("yy"));

        // The first locale keeps its position but carries its last text.
        let expected = entries.first().map_or_else(
            || "?text?".to_string(),
            |(first, _)| {
                entries
                    .iter()
                    .rev()
                    .find(|(locale, _)| locale == first)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default()
            },
        );
        prop_assert_eq!(translator.resolve(&bundle, "yy"), expected.as_str());
    }

    #[test]
    fn test_property_blank_bundles_give_placeholder(
        locales in prop::collection::vec(property_testing::locale_strategy(), 0..5),
        requested in property_testing::locale_strategy(),
    ) {
        let bundle = locales.iter().fold(TextBundle::new(), |b, l| b.declare(l.as_str()));
        let translator = Translator::default();
        prop_assert_eq!(translator.translate(&bundle, &requested), "?text?");
    }

    #[test]
    fn test_property_translate_output_is_html_safe(
        entries in property_testing::entries_strategy(6),
        requested in property_testing::locale_strategy(),
    ) {
        let bundle = bundle_from(&entries);
        let translator = Translator::default();
        let out = translator.translate(&bundle, &requested);
        prop_assert_eq!(&out, &escape_html(translator.resolve(&bundle, &requested)));
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
        prop_assert!(!out.contains('\''));
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            prop_assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {:?}",
                out
            );
        }
    }

    #[test]
    fn test_property_only_bundles_are_translatable(text in ".*", n in any::<i64>()) {
        prop_assert!(!is_translatable(&Translatable::from(text.as_str())));
        prop_assert!(!is_translatable(&Translatable::from(n)));
        let bundle = text_bundle! { "en" => text.clone() };
        prop_assert!(is_translatable(&Translatable::from(&bundle)));
    }
}
