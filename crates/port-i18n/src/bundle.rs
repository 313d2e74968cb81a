//! Text bundles: the translations of a single piece of copy

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered mapping from locale code to translated text.
///
/// Entries keep the order in which their locale was first added. That order
/// decides which text wins when neither the requested nor the default locale
/// has one. An entry may be declared without text; such an entry keeps its
/// position but is skipped during resolution.
///
/// ```rust
/// use port_i18n::TextBundle;
///
/// let title = TextBundle::new()
///     .add("en", "Welcome")
///     .add("nl", "Welkom");
///
/// assert_eq!(title.get("nl"), Some("Welkom"));
/// assert_eq!(title.first_available(), Some(("en", "Welcome")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBundle {
    translations: Vec<(String, Option<String>)>,
}

impl TextBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the text for a locale and return the bundle.
    ///
    /// Adding a locale twice keeps its original position and replaces its
    /// text; the last write wins.
    #[must_use]
    pub fn add(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locale.into(), Some(text.into()));
        self
    }

    /// Declare a locale without text, e.g. a translation that is still pending.
    #[must_use]
    pub fn declare(mut self, locale: impl Into<String>) -> Self {
        self.insert(locale.into(), None);
        self
    }

    fn insert(&mut self, locale: String, text: Option<String>) {
        match self.translations.iter_mut().find(|(existing, _)| *existing == locale) {
            Some(entry) => entry.1 = text,
            None => self.translations.push((locale, text)),
        }
    }

    /// Get the text for a locale, if it has any
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|(existing, _)| existing == locale)
            .and_then(|(_, text)| text.as_deref())
    }

    /// Whether the locale has an entry, with or without text
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.translations.iter().any(|(existing, _)| existing == locale)
    }

    /// The first-inserted entry that has text
    pub fn first_available(&self) -> Option<(&str, &str)> {
        self.translations
            .iter()
            .find_map(|(locale, text)| text.as_deref().map(|text| (locale.as_str(), text)))
    }

    /// All entries in insertion order
    pub fn translations(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.translations
            .iter()
            .map(|(locale, text)| (locale.as_str(), text.as_deref()))
    }

    /// All locales in insertion order, including those without text
    pub fn locales(&self) -> impl Iterator<Item = &str> + '_ {
        self.translations.iter().map(|(locale, _)| locale.as_str())
    }

    /// Number of entries, including those without text
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the bundle has no entries at all
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Whether no entry has text; such a bundle always resolves to the placeholder
    pub fn is_blank(&self) -> bool {
        self.first_available().is_none()
    }
}

impl<K, V> FromIterator<(K, V)> for TextBundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |bundle, (locale, text)| bundle.add(locale, text))
    }
}

impl Serialize for TextBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.translations.len()))?;
        for (locale, text) in &self.translations {
            map.serialize_entry(locale, text)?;
        }
        map.end()
    }
}

struct TextBundleVisitor;

impl<'de> Visitor<'de> for TextBundleVisitor {
    type Value = TextBundle;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map from locale to text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut bundle = TextBundle::new();
        while let Some((locale, text)) = access.next_entry::<String, Option<String>>()? {
            bundle.insert(locale, text);
        }
        Ok(bundle)
    }
}

impl<'de> Deserialize<'de> for TextBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TextBundleVisitor)
    }
}

/// Build a [`TextBundle`] from `locale => text` pairs.
///
/// ```rust
/// use port_i18n::text_bundle;
///
/// let start = text_bundle! { "en" => "Start", "nl" => "Start" };
/// assert_eq!(start.len(), 2);
/// ```
#[macro_export]
macro_rules! text_bundle {
    () => {
        $crate::TextBundle::new()
    };
    ($($locale:expr => $text:expr),+ $(,)?) => {
        $crate::TextBundle::new()$(.add($locale, $text))+
    };
}
