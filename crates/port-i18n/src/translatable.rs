//! Values handed to the translator

use crate::bundle::TextBundle;
use std::borrow::Cow;

/// A value to display: either translatable copy or text that passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translatable<'a> {
    /// Copy with one entry per locale
    Bundle(&'a TextBundle),
    /// Anything else, displayed as is
    Plain(Cow<'a, str>),
}

impl<'a> Translatable<'a> {
    /// Wrap text that should pass through untranslated
    pub fn plain(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Plain(text.into())
    }

    /// Whether this value carries translations
    pub const fn is_translatable(&self) -> bool {
        matches!(self, Self::Bundle(_))
    }
}

impl<'a> From<&'a TextBundle> for Translatable<'a> {
    fn from(bundle: &'a TextBundle) -> Self {
        Self::Bundle(bundle)
    }
}

impl<'a> From<&'a str> for Translatable<'a> {
    fn from(text: &'a str) -> Self {
        Self::Plain(Cow::Borrowed(text))
    }
}

impl From<String> for Translatable<'_> {
    fn from(text: String) -> Self {
        Self::Plain(Cow::Owned(text))
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Translatable<'_> {
                fn from(value: $ty) -> Self {
                    Self::Plain(Cow::Owned(value.to_string()))
                }
            }
        )+
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f64);
