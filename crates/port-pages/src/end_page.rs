//! The page shown after a donation flow has finished.

use once_cell::sync::Lazy;
use port_i18n::{text_bundle, TextBundle, Translator};
use serde::Serialize;

static TITLE: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Thank you",
        "nl" => "Bedankt",
    }
});

static TEXT: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Thank you for your participation. You can now close the page or refresh to restart the donation flow.",
        "nl" => "Hartelijk dank voor uw deelname. U kunt deze pagina nu sluiten of de pagina verversen om de flow nogmaals te doorlopen.",
    }
});

/// Resolved, HTML-escaped copy of the end page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndPageCopy {
    /// Page title.
    pub title: String,
    /// Body text.
    pub text: String,
}

/// The end page for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndPage {
    locale: String,
}

impl EndPage {
    /// Creates the end page for a locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Gets the page locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolves the page copy.
    pub fn copy(&self, translator: &Translator) -> EndPageCopy {
        EndPageCopy {
            title: translator.translate(&*TITLE, &self.locale),
            text: translator.translate(&*TEXT, &self.locale),
        }
    }

    /// The untranslated bundles of this page, keyed by name.
    pub fn bundles() -> [(&'static str, &'static TextBundle); 2] {
        [("title", &*TITLE), ("text", &*TEXT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_copy() {
        let copy = EndPage::new("en").copy(&Translator::default());
        assert_eq!(copy.title, "Thank you");
        assert!(copy.text.starts_with("Thank you for your participation."));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_dutch() {
        let copy = EndPage::new("fr").copy(&Translator::default());
        assert_eq!(copy.title, "Bedankt");
        assert!(copy.text.starts_with("Hartelijk dank"));
    }
}
