//! The consent page that opens a donation flow.
//!
//! The participant has to tick the privacy checkbox before the continue
//! button does anything. The first accepted click puts the page into a
//! waiting state and hands [`Payload::Void`] back to the host; later clicks
//! are ignored so the payload is sent at most once.

use once_cell::sync::Lazy;
use port_common::Payload;
use port_i18n::{text_bundle, TextBundle, Translator};
use serde::Serialize;
use tracing::{debug, info};

static TITLE: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Welcome",
        "nl" => "Welkom",
    }
});

static CONTINUE_BUTTON: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "Start",
        "nl" => "Start",
    }
});

static PRIVACY_LABEL: Lazy<TextBundle> = Lazy::new(|| {
    text_bundle! {
        "en" => "I have read and agree with the above terms.",
        "nl" => "Ik heb deze voorwaarden gelezen en ben hiermee akkoord.",
    }
});

/// The study description shown above the consent checkbox.
///
/// Unlike the rest of the copy this is raw text: escape it before embedding
/// it in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Description {
    /// Introductory paragraphs.
    pub paragraphs: &'static [&'static str],
    /// Sentence introducing the bullet list.
    pub lead_in: Option<&'static str>,
    /// Bullet points.
    pub bullets: &'static [&'static str],
    /// Closing paragraph.
    pub closing: Option<&'static str>,
}

const EN_DESCRIPTION: Description = Description {
    paragraphs: &[
        "You are about to start the process of donating your data to research institute ASCoR at Amsterdam University. The data that we ask you to donate will be used for academic research to gain insight into how social media platforms work.",
        "We will walk you through this process step by step. During this process no data is stored or sent to ASCoR. You can delete rows from the data before donating. Data will only be donated and stored when you click the button \u{201c}Yes, donate\u{201d} on the page that shows your data.",
    ],
    lead_in: Some("By clicking the button \u{201c}Yes, donate\u{201d}:"),
    bullets: &[
        "you fully and voluntarily agree to donate your data for this research.",
        "you are aware that when your data is used for academic publications, or made publicly available in some other form, this will be anonymous.",
        "you are aware that you have the right to withdraw your permission within 7 days by contacting Panel Inzicht.",
    ],
    closing: Some("This website keeps track of your activity - for example on which pages of this website you click - as part of this research. More information can be found on our privacy page."),
};

const NL_DESCRIPTION: Description = Description {
    paragraphs: &[
        "Via deze website kun je veilig je sociale media gesprekken delen met de onderzoekers van de Erasmus Universiteit Rotterdam.",
        "Deze keer vragen we om de gehele Instagram data (als .zip bestand) met ons te delen. Deze website zal alleen de personen waarmee je praat op Instagram opslaan en hoevaak je met deze mensen praat. Alle namen worden vervangen door codes zodat er wij niet weten wie het zijn. Foto's en video's worden nooit met ons gedeeld, ook niet als deze voorkomen in de gesprekken.",
        "We leggen stap voor stap uit hoe je dit kunt doen.",
    ],
    lead_in: None,
    bullets: &[
        "Eerst sleep je het .zip bestand in het kader, of kies je het .zip bestand vanaf je computer. Vervolgens zie je de gegevens zoals deze gedeeld zullen worden. Hier kun je ook kiezen om bepaalde mensen niet met ons te delen door ze te verwijderen. Je kunt hiervoor de zoekfunctie gebruiken om bepaalde mensen te zoeken en te verwijderen.",
        "Pas als je op de knop \"Versturen\" klikt, worden de gegevens verstuurd en opgeslagen. Door op de knop \u{201c}Versturen\u{201d} te klikken geef je aan goed ge\u{ef}nformeerd te zijn over het onderzoek en vrijwillig je Instagram data met ons te delen.",
    ],
    closing: None,
};

/// Resolved copy of the splash screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplashScreenCopy {
    /// Page title, HTML-escaped.
    pub title: String,
    /// Continue button label, HTML-escaped.
    pub continue_button: String,
    /// Checkbox label, HTML-escaped.
    pub privacy_label: String,
    /// Study description, raw.
    pub description: Description,
}

/// The splash screen for one locale, with its consent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashScreen {
    locale: String,
    checked: bool,
    waiting: bool,
}

impl SplashScreen {
    /// Creates an unchecked splash screen for a locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            checked: false,
            waiting: false,
        }
    }

    /// Gets the page locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Ticks the consent checkbox. There is no way to untick it.
    pub fn check(&mut self) {
        if !self.checked {
            debug!("Consent checkbox ticked");
        }
        self.checked = true;
    }

    /// Whether the consent checkbox is ticked.
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the payload has been handed back and the page awaits the host.
    pub const fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Whether the continue button is enabled.
    pub const fn continue_enabled(&self) -> bool {
        self.checked
    }

    /// Whether the continue button shows its spinner.
    pub const fn spinning(&self) -> bool {
        self.waiting
    }

    /// Handles a click on the continue button.
    ///
    /// Sends [`Payload::Void`] to `resolve` only when consent was given and
    /// no payload was sent before. Returns whether this click was accepted.
    pub fn continue_with<F>(&mut self, resolve: Option<F>) -> bool
    where
        F: FnOnce(Payload),
    {
        if !self.checked || self.waiting {
            debug!(
                checked = self.checked,
                waiting = self.waiting,
                "Ignoring continue click"
            );
            return false;
        }

        self.waiting = true;
        let payload = Payload::Void;
        info!(
            payload = payload.type_name(),
            "Consent given, resolving splash screen"
        );
        if let Some(resolve) = resolve {
            resolve(payload);
        }
        true
    }

    /// The study description for this page's locale: Dutch for `nl`, English otherwise.
    pub fn description(&self) -> &'static Description {
        if self.locale == "nl" {
            &NL_DESCRIPTION
        } else {
            &EN_DESCRIPTION
        }
    }

    /// Resolves the page copy.
    pub fn copy(&self, translator: &Translator) -> SplashScreenCopy {
        SplashScreenCopy {
            title: translator.translate(&*TITLE, &self.locale),
            continue_button: translator.translate(&*CONTINUE_BUTTON, &self.locale),
            privacy_label: translator.translate(&*PRIVACY_LABEL, &self.locale),
            description: *self.description(),
        }
    }

    /// The untranslated bundles of this page, keyed by name.
    pub fn bundles() -> [(&'static str, &'static TextBundle); 3] {
        [
            ("title", &*TITLE),
            ("continue_button", &*CONTINUE_BUTTON),
            ("privacy_label", &*PRIVACY_LABEL),
        ]
    }
}
