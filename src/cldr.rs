//! Conversion of CLDR `numbers.json` documents into [`LocaleData`]
//!
//! Only the `decimalFormats-numberSystem-latn` section is read. Each entry key
//! looks like `1000-count-one`: the leading number becomes the divisor, the
//! trailing tag picks the plural form. Entries tagged with anything other than
//! `one` or `other` are dropped, as are divisors above 2^53 - 1.

use crate::error::{CompactNumberError, CompactResult};
use crate::locale::{FormatRule, FormatRules, Locale, LocaleData, PluralizedFormat};
use crate::template::Template;
use log::debug;
use serde_json::{Map, Value};

/// Largest integer an `f64` represents exactly
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

const LATN_DECIMAL_FORMATS: &str = "decimalFormats-numberSystem-latn";

/// Transform one CLDR `main/<locale>/numbers.json` document
///
/// # Errors
///
/// Returns [`CompactNumberError::InvalidLocaleData`] if the document lacks the
/// `main.<locale>.numbers` decimal-format sections.
pub fn parse_cldr(document: &Value) -> CompactResult<LocaleData> {
    let main = document
        .get("main")
        .and_then(Value::as_object)
        .ok_or_else(|| invalid("missing 'main' object"))?;
    let (key, body) = main
        .iter()
        .next()
        .ok_or_else(|| invalid("'main' has no locale entry"))?;

    let formats = body
        .pointer("/numbers")
        .and_then(|numbers| numbers.get(LATN_DECIMAL_FORMATS))
        .ok_or_else(|| invalid(&format!("'{key}' has no {LATN_DECIMAL_FORMATS} section")))?;

    let short = transform_rules(decimal_format(formats, "short")?)?;
    let long = transform_rules(decimal_format(formats, "long")?)?;

    let mut locale = Locale::new(key.clone(), short, long);
    if key == "de" {
        apply_german_abbreviations(&mut locale)?;
    }
    debug!(
        "transformed CLDR locale '{key}': {} short rules, {} long rules",
        locale.decimal.short.len(),
        locale.decimal.long.len()
    );

    Ok(LocaleData::single(locale))
}

fn decimal_format<'a>(formats: &'a Value, style: &str) -> CompactResult<&'a Map<String, Value>> {
    formats
        .get(style)
        .and_then(|s| s.get("decimalFormat"))
        .and_then(Value::as_object)
        .ok_or_else(|| invalid(&format!("missing {style}.decimalFormat")))
}

/// Build a sorted rule table from the raw `"<power>-count-<plural>"` entries
fn transform_rules(entries: &Map<String, Value>) -> CompactResult<FormatRules> {
    let mut rules: Vec<FormatRule> = Vec::new();

    for (key, value) in entries {
        let parts: Vec<&str> = key.split('-').collect();
        if parts.len() < 2 {
            continue;
        }
        let plural = parts[parts.len() - 1];
        if plural != "one" && plural != "other" {
            continue;
        }
        let Ok(divisor) = parts[0].parse::<u64>() else {
            continue;
        };
        if divisor > MAX_SAFE_INTEGER {
            continue;
        }
        let Some(pattern) = value.as_str() else {
            continue;
        };
        let template = Template::new(pattern, pattern.matches('0').count());

        let index = match rules.iter().position(|r| r.divisor == divisor) {
            Some(index) => index,
            None => {
                rules.push(FormatRule::new(
                    divisor,
                    PluralizedFormat::new(Template::empty(), Template::empty()),
                ));
                rules.len() - 1
            }
        };
        if plural == "one" {
            rules[index].format.one = template;
        } else {
            rules[index].format.other = template;
        }
    }

    FormatRules::from_unsorted(rules)
}

/// German data uses `Tsd.` for the thousand tiers instead of CLDR's empty
/// short forms.
fn apply_german_abbreviations(locale: &mut Locale) -> CompactResult<()> {
    let mut rules = std::mem::take(&mut locale.decimal.short).into_inner();
    for rule in &mut rules {
        let pattern = match rule.divisor {
            1_000 => "0 Tsd.",
            10_000 => "00 Tsd.",
            100_000 => "000 Tsd.",
            _ => continue,
        };
        rule.format = PluralizedFormat::uniform((pattern, pattern.matches('0').count()));
    }
    locale.decimal.short = FormatRules::new(rules)?;
    Ok(())
}

fn invalid(reason: &str) -> CompactNumberError {
    CompactNumberError::InvalidLocaleData(format!("CLDR document: {reason}"))
}
