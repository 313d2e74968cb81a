//! Copy catalogs loaded from files
//!
//! A catalog maps message ids to [`TextBundle`]s. Two layouts are supported:
//!
//! - a single YAML or JSON document of the form `id: { locale: text }`
//! - a directory with one Fluent file per locale, `<dir>/<locale>/main.ftl`
//!
//! Fluent messages must be plain text. String literal placeables such as
//! `{"{"}` are allowed; variables, terms, and selectors are rejected because
//! the copy is shown verbatim.

use crate::bundle::TextBundle;
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;
use fluent_syntax::unicode::unescape_unicode_to_string;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the Fluent file inside each locale directory
pub const FTL_FILE_NAME: &str = "main.ftl";

/// A set of named text bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CopyCatalog {
    entries: BTreeMap<String, TextBundle>,
}

/// A catalog entry that lacks text for some locales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCopy {
    /// The message id
    pub id: String,
    /// Locales without text, in the order they were asked for
    pub locales: Vec<String>,
}

impl CopyCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a bundle
    pub fn insert(&mut self, id: impl Into<String>, bundle: TextBundle) {
        self.entries.insert(id.into(), bundle);
    }

    /// Get the bundle for a message id
    pub fn get(&self, id: &str) -> Option<&TextBundle> {
        self.entries.get(id)
    }

    /// All message ids, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All entries, sorted by id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextBundle)> + '_ {
        self.entries.iter().map(|(id, bundle)| (id.as_str(), bundle))
    }

    /// Number of message ids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report every entry that has no text for one of the given locales
    pub fn missing_locales(&self, locales: &[Locale]) -> Vec<MissingCopy> {
        self.entries
            .iter()
            .filter_map(|(id, bundle)| {
                let missing: Vec<String> = locales
                    .iter()
                    .filter(|locale| bundle.get(locale.as_str()).is_none())
                    .map(ToString::to_string)
                    .collect();

                (!missing.is_empty()).then(|| MissingCopy {
                    id: id.clone(),
                    locales: missing,
                })
            })
            .collect()
    }

    /// Parse a YAML catalog
    pub fn from_yaml_str(source: &str) -> I18nResult<Self> {
        serde_yaml::from_str(source).map_err(|e| I18nError::CatalogFormat(e.to_string()))
    }

    /// Parse a JSON catalog
    pub fn from_json_str(source: &str) -> I18nResult<Self> {
        serde_json::from_str(source).map_err(|e| I18nError::CatalogFormat(e.to_string()))
    }

    /// Load a catalog from a file or a Fluent directory.
    ///
    /// `locales` is only used for directories; it sets which locale files
    /// are read and in which order their entries are added.
    pub fn load<P: AsRef<Path>>(path: P, locales: &[Locale]) -> I18nResult<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            return Self::load_ftl_dir(path, locales);
        }

        let content = fs::read_to_string(path).map_err(|_| I18nError::ResourceLoad {
            path: path.to_string_lossy().to_string(),
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(I18nError::CatalogFormat(format!(
                    "unsupported catalog file: {}",
                    path.display()
                )))
            }
        };

        info!("Loaded copy catalog {:?} with {} entries", path, catalog.len());
        Ok(catalog)
    }

    /// Load `<dir>/<locale>/main.ftl` for each locale, in order.
    ///
    /// A missing locale file is skipped with a warning.
    pub fn load_ftl_dir<P: AsRef<Path>>(dir: P, locales: &[Locale]) -> I18nResult<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for locale in locales {
            let resource_path = dir.join(locale.as_str()).join(FTL_FILE_NAME);

            if !resource_path.exists() {
                warn!("Resource file does not exist: {:?}", resource_path);
                continue;
            }

            debug!("Loading resource file: {:?}", resource_path);
            let content = fs::read_to_string(&resource_path)?;

            for (id, text) in parse_ftl(&resource_path, locale, &content)? {
                let bundle = catalog.entries.entry(id).or_default();
                *bundle = std::mem::take(bundle).add(locale.as_str(), text);
            }
        }

        info!(
            "Loaded copy catalog from {:?} with {} entries",
            dir,
            catalog.len()
        );
        Ok(catalog)
    }
}

/// Extract `(id, text)` pairs from a Fluent source
fn parse_ftl(path: &Path, locale: &Locale, source: &str) -> I18nResult<Vec<(String, String)>> {
    let resource = parse(source).map_err(|(_, errors)| I18nError::FluentParse {
        path: path.to_string_lossy().to_string(),
        errors: errors.into_iter().map(|e| format!("{e:?}")).collect(),
    })?;

    let mut messages = Vec::new();
    for entry in resource.body {
        let Entry::Message(message) = entry else {
            continue;
        };
        // Attribute-only messages carry no copy.
        let Some(pattern) = message.value else {
            continue;
        };

        let id = message.id.name.to_string();
        let text = pattern_text(&pattern).ok_or_else(|| I18nError::UnsupportedPlaceable {
            id: id.clone(),
            locale: locale.to_string(),
        })?;
        messages.push((id, text));
    }

    Ok(messages)
}

fn pattern_text(pattern: &Pattern<&str>) -> Option<String> {
    let mut text = String::new();
    for element in &pattern.elements {
        match element {
            PatternElement::TextElement { value } => text.push_str(value),
            PatternElement::Placeable {
                expression: Expression::Inline(InlineExpression::StringLiteral { value }),
            } => text.push_str(&unescape_unicode_to_string(value)),
            PatternElement::Placeable { .. } => return None,
        }
    }
    Some(text)
}
