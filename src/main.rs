//! Command-line front end for compact number formatting
//!
//! ```sh
//! compact-number 1234 999999 --locale es --style long
//! compact-number --parse "1.2K" "3 millones" --locale es --all-locales
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use compact_number::{locales, FormatOptions, LocaleData, LocaleStore, RoundingMode, Style};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "compact-number")]
#[command(version, about = "Format numbers in compact notation and parse them back", long_about = None)]
struct Cli {
    /// Numbers to format, or compact strings with --parse
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Locale tag, e.g. en, de, es-MX
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// short or long
    #[arg(short, long, default_value_t = Style::Short)]
    style: Style,

    #[arg(long = "min-fraction-digits", default_value_t = 0, allow_negative_numbers = true)]
    min_fraction_digits: i32,

    #[arg(long = "max-fraction-digits", default_value_t = 1, allow_negative_numbers = true)]
    max_fraction_digits: i32,

    /// round, floor or ceil
    #[arg(short, long = "rounding-mode", default_value_t = RoundingMode::Round)]
    rounding_mode: RoundingMode,

    /// Relative distance below a tier at which values are promoted into it
    #[arg(short, long, default_value_t = 0.0005)]
    threshold: f64,

    /// Parse compact strings instead of formatting numbers
    #[arg(short, long)]
    parse: bool,

    /// Register every bundled locale, not just en
    #[arg(short, long = "all-locales")]
    all_locales: bool,

    /// JSON locale bundle or CLDR numbers.json document to register
    #[arg(long = "locale-file")]
    locale_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = LocaleStore::new();

    if cli.all_locales {
        store.register_many(locales::all());
    }
    if let Some(path) = &cli.locale_file {
        load_locale_file(&mut store, path)?;
    }
    debug!("registered locales: {:?}", store.registered_locales());

    if cli.parse {
        for text in &cli.values {
            let value = store
                .uncompact(text, &cli.locale)
                .with_context(|| format!("failed to parse '{text}'"))?;
            println!("{text}\t{value}");
        }
        return Ok(());
    }

    let options = FormatOptions::new()
        .with_locale(cli.locale.as_str())
        .with_style(cli.style)
        .with_minimum_fraction_digits(cli.min_fraction_digits)
        .with_maximum_fraction_digits(cli.max_fraction_digits)
        .with_rounding_mode(cli.rounding_mode)
        .with_threshold(cli.threshold);

    for value in &cli.values {
        let text = store
            .compact(value.as_str(), &options)
            .with_context(|| format!("failed to format '{value}'"))?;
        println!("{value}\t{text}");
    }

    Ok(())
}

/// Register a file holding either a CLDR document (top-level `main`) or a
/// locale bundle keyed by locale tag
fn load_locale_file(store: &mut LocaleStore, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    if document.get("main").is_some() {
        store.register_from_cldr(&document)?;
    } else {
        let data: LocaleData = serde_json::from_value(document)
            .with_context(|| format!("{} is not a locale bundle", path.display()))?;
        store.register(data);
    }
    Ok(())
}
