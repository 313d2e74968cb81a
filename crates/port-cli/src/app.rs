//! Command execution.

use crate::cli::{Cli, Command, PageKind};
use crate::error::{CliError, CliResult};
use crate::logging::init_logging;
use port_config::{Config, ConfigLoader};
use port_common::escape_html;
use port_i18n::{CopyCatalog, Fallback, Locale, MissingCopy, TextBundle, Translator};
use port_pages::{
    DonationPage, DonationPageCopy, EndPage, EndPageCopy, SplashScreen, SplashScreenCopy,
    PLATFORMS,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// One resolved catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    /// The message id that was asked for.
    pub id: String,
    /// HTML-escaped copy.
    pub text: String,
    /// Locale the copy came from; `None` for the placeholder.
    pub locale: Option<String>,
    /// The fallback step that produced the copy.
    pub fallback: Fallback,
    /// Whether the id exists in the catalog.
    pub found: bool,
}

/// Loads configuration, installs logging, and runs the command against stdout.
pub fn run(cli: &Cli) -> CliResult<()> {
    let loader = cli
        .config
        .as_ref()
        .map_or_else(ConfigLoader::defaults_only, ConfigLoader::new);
    let config = loader.load().map_err(CliError::Config)?;

    init_logging(&config.logging)?;
    info!(
        "port-copy starting with default locale {}",
        config.i18n.default_locale
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &config, &mut out)
}

/// Runs the command, writing its output to `out`.
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> CliResult<()> {
    let translator = Translator::new(config.i18n.default_locale.as_str());
    let locale = cli
        .locale
        .as_deref()
        .unwrap_or(config.i18n.default_locale.as_str());

    match &cli.command {
        Command::Page { page, platform } => {
            print_page(*page, platform, &translator, locale, cli.json, out)
        }
        Command::Lookup { catalog, ids } => {
            let path = catalog_path(catalog.as_deref(), config).ok_or_else(|| {
                CliError::Config("no catalog given and none configured".into())
            })?;
            let catalog = load_catalog(path, config)?;
            let entries = lookup(&catalog, ids, &translator, locale);
            print_lookup(&entries, cli.json, out)
        }
        Command::Check { catalog } => {
            let locales = Locale::parse_all(&config.i18n.supported_locales)?;
            let report = match catalog_path(catalog.as_deref(), config) {
                Some(path) => load_catalog(path, config)?.missing_locales(&locales),
                None => builtin_catalog().missing_locales(&locales),
            };
            print_report(&report, cli.json, out)?;

            if report.is_empty() {
                Ok(())
            } else {
                Err(CliError::IncompleteCopy {
                    count: report.len(),
                })
            }
        }
    }
}

/// The copy of all built-in pages as a catalog, keyed `<page>.<name>`.
pub fn builtin_catalog() -> CopyCatalog {
    let mut catalog = CopyCatalog::new();
    for (name, bundle) in EndPage::bundles() {
        catalog.insert(format!("end_page.{name}"), bundle.clone());
    }
    for (name, bundle) in SplashScreen::bundles() {
        catalog.insert(format!("splash_screen.{name}"), bundle.clone());
    }
    for platform in PLATFORMS {
        let page = DonationPage::new(*platform, "");
        let prefix = platform.to_lowercase();
        for (name, bundle) in page.bundles() {
            catalog.insert(format!("donation.{prefix}.{name}"), bundle);
        }
    }
    for (key, bundle) in DonationPage::table_bundles() {
        catalog.insert(format!("donation.table.{key}"), bundle.clone());
    }
    catalog
}

/// Resolves each id; unknown ids resolve to the placeholder.
pub fn lookup(
    catalog: &CopyCatalog,
    ids: &[String],
    translator: &Translator,
    locale: &str,
) -> Vec<LookupEntry> {
    let empty = TextBundle::new();

    ids.iter()
        .map(|id| {
            let found = catalog.get(id);
            if found.is_none() {
                warn!("Catalog has no entry {:?}", id);
            }

            let resolution = translator.resolve_detailed(found.unwrap_or(&empty), locale);
            LookupEntry {
                id: id.clone(),
                text: escape_html(resolution.text),
                locale: resolution.locale.map(ToString::to_string),
                fallback: resolution.fallback,
                found: found.is_some(),
            }
        })
        .collect()
}

fn catalog_path<'a>(arg: Option<&'a Path>, config: &'a Config) -> Option<&'a Path> {
    arg.or(config.i18n.catalog_path.as_deref())
}

fn load_catalog(path: &Path, config: &Config) -> CliResult<CopyCatalog> {
    let locales = Locale::parse_all(&config.i18n.supported_locales)?;
    Ok(CopyCatalog::load(path, &locales)?)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_page<W: Write>(
    page: PageKind,
    platform: &str,
    translator: &Translator,
    locale: &str,
    json: bool,
    out: &mut W,
) -> CliResult<()> {
    match page {
        PageKind::End => {
            let copy = EndPage::new(locale).copy(translator);
            if json {
                write_json(out, &copy)
            } else {
                write_end_page(&copy, out)
            }
        }
        PageKind::Donation => {
            let copy = DonationPage::new(platform, locale).copy(translator);
            if json {
                write_json(out, &copy)
            } else {
                write_donation_page(&copy, out)
            }
        }
        PageKind::Splash => {
            let copy = SplashScreen::new(locale).copy(translator);
            if json {
                write_json(out, &copy)
            } else {
                write_splash_screen(&copy, out)
            }
        }
    }
}

fn write_end_page<W: Write>(copy: &EndPageCopy, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", copy.title)?;
    writeln!(out)?;
    writeln!(out, "{}", copy.text)?;
    Ok(())
}

fn write_donation_page<W: Write>(copy: &DonationPageCopy, out: &mut W) -> CliResult<()> {
    let retry = &copy.retry_confirmation;

    writeln!(out, "{}", copy.header)?;
    writeln!(out)?;
    writeln!(out, "{}", copy.file_prompt.description)?;
    writeln!(out, "  ({})", copy.file_prompt.extensions)?;
    writeln!(out)?;
    writeln!(out, "{}", retry.text)?;
    writeln!(out, "[{}] [{}]", retry.ok, retry.cancel)?;
    writeln!(out)?;
    for title in &copy.table_titles {
        writeln!(out, "  - {title}")?;
    }
    Ok(())
}

fn write_splash_screen<W: Write>(copy: &SplashScreenCopy, out: &mut W) -> CliResult<()> {
    let description = &copy.description;

    writeln!(out, "{}", copy.title)?;
    for paragraph in description.paragraphs {
        writeln!(out)?;
        writeln!(out, "{paragraph}")?;
    }
    writeln!(out)?;
    if let Some(lead_in) = description.lead_in {
        writeln!(out, "{lead_in}")?;
    }
    for bullet in description.bullets {
        writeln!(out, "  - {bullet}")?;
    }
    if let Some(closing) = description.closing {
        writeln!(out)?;
        writeln!(out, "{closing}")?;
    }
    writeln!(out)?;
    writeln!(out, "[ ] {}", copy.privacy_label)?;
    writeln!(out, "[{}]", copy.continue_button)?;
    Ok(())
}

fn print_lookup<W: Write>(entries: &[LookupEntry], json: bool, out: &mut W) -> CliResult<()> {
    if json {
        return write_json(out, &entries);
    }

    for entry in entries {
        writeln!(out, "{}: {}", entry.id, entry.text)?;
    }
    Ok(())
}

fn print_report<W: Write>(report: &[MissingCopy], json: bool, out: &mut W) -> CliResult<()> {
    if json {
        return write_json(out, &report);
    }

    if report.is_empty() {
        writeln!(out, "All copy is complete")?;
    }
    for missing in report {
        writeln!(out, "{}: missing {}", missing.id, missing.locales.join(", "))?;
    }
    Ok(())
}
