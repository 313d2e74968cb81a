//! # Port Pages
//!
//! Copy and local state of the pages that frame a donation flow.
//!
//! Each page defines its copy once as [`TextBundle`](port_i18n::TextBundle)s
//! and resolves it per render through a [`Translator`](port_i18n::Translator).
//! Layout and rendering belong to the host; this crate only decides what
//! text is shown and when a page hands its payload back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod donation;
pub mod end_page;
pub mod splash_screen;

pub use donation::{
    DonationPage, DonationPageCopy, FilePromptCopy, RetryConfirmationCopy, TableTitle,
    FILE_EXTENSIONS, PLATFORMS,
};
pub use end_page::{EndPage, EndPageCopy};
pub use splash_screen::{Description, SplashScreen, SplashScreenCopy};
