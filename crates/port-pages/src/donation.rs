//! Copy of the donation page, shown once per platform between the splash
//! screen and the end page.
//!
//! The page prompts for the platform's data download, asks to retry when the
//! file could not be processed, and titles the tables the participant
//! reviews before donating. Part of this copy names the platform, so those
//! bundles are built per [`DonationPage`] rather than once per process.

use once_cell::sync::Lazy;
use port_i18n::{text_bundle, TextBundle, Translator};
use serde::Serialize;

/// MIME types accepted by the file prompt.
pub const FILE_EXTENSIONS: &str = "application/zip, text/plain";

/// Platforms that have a donation page.
pub const PLATFORMS: &[&str] = &["Instagram"];

static RETRY_OK: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Try again",
        "nl" => "Probeer opnieuw",
    }
});

static RETRY_CANCEL: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Continue",
        "nl" => "Verder",
    }
});

static YOUR_TOPICS: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Topics in which you are interested in according to Instagram:",
        "nl" => "Onderwerpen waar jij volgens Instagram geintereseerd in bent:",
    }
});

static INTERESTS: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Your interests according to Instagram:",
        "nl" => "Jouw interesses volgens Instagram:",
    }
});

// Dutch copy for these two was never written; the English text ships for both.
static YOUR_PERSONAL_INFO: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Your personal info:",
        "nl" => "Your personal info:",
    }
});

static MESSAGES_SUMMARY: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Your messages summary:",
        "nl" => "Your messages summary:",
    }
});

static EMPTY_RESULT_SET: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "We could not extract any data:",
        "nl" => "We konden de gegevens niet in je donatie vinden:",
    }
});

/// Titles of the tables shown on the consent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableTitle {
    /// Topics Instagram thinks the participant is interested in.
    InstagramYourTopics,
    /// Advertising interests.
    InstagramInterests,
    /// Profile summary with follower counts.
    InstagramYourPersonalInfo,
    /// Per-contact message counts.
    InstagramMessagesSummary,
    /// Shown when a valid download held no usable data.
    EmptyResultSet,
}

impl TableTitle {
    /// Every table title, in display order.
    pub const ALL: [Self; 5] = [
        Self::InstagramYourTopics,
        Self::InstagramInterests,
        Self::InstagramYourPersonalInfo,
        Self::InstagramMessagesSummary,
        Self::EmptyResultSet,
    ];

    /// The key the title is known by.
    pub const fn key(self) -> &'static str {
        match self {
            Self::InstagramYourTopics => "instagram_your_topics",
            Self::InstagramInterests => "instagram_interests",
            Self::InstagramYourPersonalInfo => "instagram_your_personal_info",
            Self::InstagramMessagesSummary => "instagram_messages_summary",
            Self::EmptyResultSet => "empty_result_set",
        }
    }

    /// The untranslated title.
    pub fn bundle(self) -> &'static TextBundle {
        match self {
            Self::InstagramYourTopics => &*YOUR_TOPICS,
            Self::InstagramInterests => &*INTERESTS,
            Self::InstagramYourPersonalInfo => &*YOUR_PERSONAL_INFO,
            Self::InstagramMessagesSummary => &*MESSAGES_SUMMARY,
            Self::EmptyResultSet => &*EMPTY_RESULT_SET,
        }
    }
}

/// Resolved copy of the file prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePromptCopy {
    /// Download instructions, HTML-escaped.
    pub description: String,
    /// Accepted MIME types.
    pub extensions: &'static str,
}

/// Resolved copy of the dialog shown when a file could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetryConfirmationCopy {
    /// Explanation, HTML-escaped.
    pub text: String,
    /// Label of the button that picks another file.
    pub ok: String,
    /// Label of the button that moves on without a file.
    pub cancel: String,
}

/// Resolved copy of a donation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationPageCopy {
    /// Page header, the platform name.
    pub header: String,
    /// File prompt.
    pub file_prompt: FilePromptCopy,
    /// Retry dialog.
    pub retry_confirmation: RetryConfirmationCopy,
    /// Consent form table titles, in [`TableTitle::ALL`] order.
    pub table_titles: Vec<String>,
}

/// The donation page of one platform, for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationPage {
    platform: String,
    locale: String,
}

impl DonationPage {
    /// Creates the donation page of `platform` for a locale.
    pub fn new(platform: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            locale: locale.into(),
        }
    }

    /// Gets the platform name.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Gets the page locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The header bundle: the platform name in every locale.
    pub fn header(&self) -> TextBundle {
        text_bundle! {
            "en" => self.platform.as_str(),
            "nl" => self.platform.as_str(),
        }
    }

    /// Instructions above the file picker.
    pub fn file_prompt(&self) -> TextBundle {
        let platform = &self.platform;
        text_bundle! {
            "en" => format!("Please follow the download instructions and choose the file that you stored on your device. Click \u{201c}Skip\u{201d} at the right bottom, if you do not have a file from {platform}."),
            "nl" => format!("Volg de download instructies en kies het bestand dat u opgeslagen heeft op uw apparaat. Als u geen {platform} bestand heeft klik dan op \u{201c}Overslaan\u{201d} rechts onder."),
        }
    }

    /// Explanation shown when the chosen file is not a download of the platform.
    pub fn retry_text(&self) -> TextBundle {
        let platform = &self.platform;
        text_bundle! {
            "en" => format!("Unfortunately, we could not process your {platform} file. If you are sure that you selected the correct file, press Continue. To select a different file, press Try again."),
            "nl" => format!("Helaas, kunnen we uw {platform} bestand niet verwerken. Weet u zeker dat u het juiste bestand heeft gekozen? Ga dan verder. Probeer opnieuw als u een ander bestand wilt kiezen."),
        }
    }

    /// Resolves the page copy.
    pub fn copy(&self, translator: &Translator) -> DonationPageCopy {
        let locale = self.locale.as_str();
        DonationPageCopy {
            header: translator.translate(&self.header(), locale),
            file_prompt: FilePromptCopy {
                description: translator.translate(&self.file_prompt(), locale),
                extensions: FILE_EXTENSIONS,
            },
            retry_confirmation: RetryConfirmationCopy {
                text: translator.translate(&self.retry_text(), locale),
                ok: translator.translate(&*RETRY_OK, locale),
                cancel: translator.translate(&*RETRY_CANCEL, locale),
            },
            table_titles: TableTitle::ALL
                .iter()
                .map(|title| translator.translate(title.bundle(), locale))
                .collect(),
        }
    }

    /// The untranslated bundles of this page, keyed by name.
    ///
    /// Table titles are shared by all platforms and listed by
    /// [`DonationPage::table_bundles`] instead.
    pub fn bundles(&self) -> [(&'static str, TextBundle); 5] {
        [
            ("header", self.header()),
            ("file_prompt", self.file_prompt()),
            ("retry_text", self.retry_text()),
            ("retry_ok", RETRY_OK.clone()),
            ("retry_cancel", RETRY_CANCEL.clone()),
        ]
    }

    /// The untranslated table titles, keyed by [`TableTitle::key`].
    pub fn table_bundles() -> impl Iterator<Item = (&'static str, &'static TextBundle)> {
        TableTitle::ALL
            .into_iter()
            .map(|title| (title.key(), title.bundle()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_is_interpolated() {
        let copy = DonationPage::new("Instagram", "en").copy(&Translator::default());
        assert_eq!(copy.header, "Instagram");
        assert!(copy
            .file_prompt
            .description
            .ends_with("if you do not have a file from Instagram."));
        assert!(copy
            .retry_confirmation
            .text
            .starts_with("Unfortunately, we could not process your Instagram file."));
        assert_eq!(copy.file_prompt.extensions, FILE_EXTENSIONS);
    }

    #[test]
    fn test_dutch_retry_buttons() {
        let copy = DonationPage::new("Instagram", "nl").copy(&Translator::default());
        assert_eq!(copy.retry_confirmation.ok, "Probeer opnieuw");
        assert_eq!(copy.retry_confirmation.cancel, "Verder");
        assert!(copy.file_prompt.description.contains("geen Instagram bestand"));
    }

    #[test]
    fn test_platform_name_is_escaped() {
        let copy = DonationPage::new("<Chat & Co>", "en").copy(&Translator::default());
        assert_eq!(copy.header, "&lt;Chat &amp; Co&gt;");
    }

    #[test]
    fn test_table_titles_follow_key_order() {
        let copy = DonationPage::new("Instagram", "nl").copy(&Translator::default());
        assert_eq!(copy.table_titles.len(), TableTitle::ALL.len());
        assert_eq!(
            copy.table_titles[4],
            "We konden de gegevens niet in je donatie vinden:"
        );
        assert_eq!(TableTitle::EmptyResultSet.key(), "empty_result_set");
    }
}
