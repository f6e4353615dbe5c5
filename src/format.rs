//! Compact formatting: `1234` → `1.2K`, `2000000` → `2 millones`
//!
//! The engine picks the largest tier whose divisor the value reaches, promotes
//! to the next tier when the value is within `threshold` of it, pre-scales the
//! value to the template's digit count, rounds, and substitutes the result into
//! the singular or plural template.

use crate::error::{CompactNumberError, CompactResult};
use crate::locale::{FormatRule, LocaleData, Style};
use crate::rounding::{pre_scale, round, RoundingMode};
use crate::store::{LocaleStore, DEFAULT_LOCALE};
use log::trace;
use serde::Deserialize;

/// Values below this are rendered without a tier symbol
const COMPACT_FLOOR: f64 = 1000.0;

/// Options for [`compact`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Locale tag; parent locales are used when the exact tag is missing
    pub locale: String,

    /// Bundle registered into the store before formatting
    pub locale_data: Option<LocaleData>,

    pub style: Style,

    pub minimum_fraction_digits: i32,

    pub maximum_fraction_digits: i32,

    pub rounding_mode: RoundingMode,

    /// Relative distance below the next tier's divisor at which a value is
    /// promoted into that tier (999,950 → `1M` rather than `1000K`)
    pub threshold: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            locale_data: None,
            style: Style::Short,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 1,
            rounding_mode: RoundingMode::Round,
            threshold: 0.0005,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_locale_data(mut self, data: LocaleData) -> Self {
        self.locale_data = Some(data);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_minimum_fraction_digits(mut self, digits: i32) -> Self {
        self.minimum_fraction_digits = digits;
        self
    }

    pub fn with_maximum_fraction_digits(mut self, digits: i32) -> Self {
        self.maximum_fraction_digits = digits;
        self
    }

    /// Set both fraction-digit bounds to the same value
    pub fn with_fraction_digits(self, digits: i32) -> Self {
        self.with_minimum_fraction_digits(digits)
            .with_maximum_fraction_digits(digits)
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Parse options from a JSON object such as `{"maximumFractionDigits": 2}`
    ///
    /// # Errors
    ///
    /// Unknown rounding modes and styles map to their dedicated errors; any
    /// other malformed input to [`CompactNumberError::InvalidOptions`].
    pub fn from_json(json: &str) -> CompactResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| CompactNumberError::InvalidOptions(e.to_string()))?;
        if let Some(mode) = value.get("roundingMode").and_then(serde_json::Value::as_str) {
            mode.parse::<RoundingMode>()?;
        }
        if let Some(style) = value.get("style").and_then(serde_json::Value::as_str) {
            style.parse::<Style>()?;
        }
        serde_json::from_value(value).map_err(|e| CompactNumberError::InvalidOptions(e.to_string()))
    }

    /// Checked fraction digits as `(minimum, maximum)`
    fn fraction_digits(&self) -> CompactResult<(u32, u32)> {
        let min = u32::try_from(self.minimum_fraction_digits)
            .map_err(|_| CompactNumberError::NegativeFractionDigits)?;
        let max = u32::try_from(self.maximum_fraction_digits)
            .map_err(|_| CompactNumberError::NegativeFractionDigits)?;
        if min > max {
            return Err(CompactNumberError::FractionDigitsOrder);
        }
        Ok((min, max))
    }
}

/// A value accepted by the formatter: a number, numeric text, or null
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Number(f64),
    Text(String),
    Null,
}

impl NumberInput {
    /// Convert to a finite `f64`.
    ///
    /// Text is trimmed; empty text is zero; decimal literals with exponents and
    /// `0x`/`0o`/`0b` integers are accepted. Null is zero.
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidInput`] for anything that is not a
    /// finite number.
    pub fn to_f64(&self) -> CompactResult<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => parse_numeric_text(text).ok_or(CompactNumberError::InvalidInput)?,
            Self::Null => 0.0,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CompactNumberError::InvalidInput)
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_numeric_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // Rust accepts "inf"/"nan" spellings; they are rejected as non-finite later
    text.parse::<f64>().ok()
}

macro_rules! number_input_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput {
                fn from(value: $t) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

number_input_from!(f64, f32, i8, i16, i32, u8, u16, u32);

#[allow(clippy::cast_precision_loss)]
impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for NumberInput {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for NumberInput {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<NumberInput>> From<Option<T>> for NumberInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Format `value` in compact notation.
///
/// When `options.locale_data` is set it is registered into `store` first, which
/// is why the store is borrowed mutably.
///
/// # Errors
///
/// Fails on non-finite input, invalid fraction digits, or a locale the store
/// cannot resolve.
pub fn compact(
    store: &mut LocaleStore,
    value: impl Into<NumberInput>,
    options: &FormatOptions,
) -> CompactResult<String> {
    if let Some(data) = &options.locale_data {
        store.register(data.clone());
    }
    compact_registered(store, value, options)
}

/// Format `value` against the locales already in `store`.
///
/// `options.locale_data` is ignored.
///
/// # Errors
///
/// Same as [`compact`].
pub fn compact_registered(
    store: &LocaleStore,
    value: impl Into<NumberInput>,
    options: &FormatOptions,
) -> CompactResult<String> {
    let num = value.into().to_f64()?;
    let (min, max) = options.fraction_digits()?;
    let locale = store.require(&options.locale)?;
    let rules = locale.rules(options.style);
    let mode = options.rounding_mode;
    let abs = num.abs();

    if abs < COMPACT_FLOOR {
        let rounded = round(num, max, mode);
        if rounded.abs() >= COMPACT_FLOOR {
            if let Some(first) = rules.first() {
                trace!("{num} rounded up to {rounded}, entering tier {}", first.divisor);
                return Ok(render_tier(rounded, first, min, max, mode));
            }
        }
        return Ok(format_plain(rounded, min, max));
    }

    let Some(mut index) = rules.tier_index(abs) else {
        return Ok(format_plain(round(num, max, mode), min, max));
    };

    if let Some(next) = rules.get(index + 1) {
        if 1.0 - abs / next.divisor_f64() <= options.threshold {
            trace!("{num} promoted from tier {} to {}", rules[index].divisor, next.divisor);
            index += 1;
        }
    }

    trace!("{num} formatted in tier {}", rules[index].divisor);
    Ok(render_tier(num, &rules[index], min, max, mode))
}

/// Render a value (sign included) with the templates of `rule`
fn render_tier(num: f64, rule: &FormatRule, min: u32, max: u32, mode: RoundingMode) -> String {
    let negative = num < 0.0;
    let scaled = pre_scale(num.abs(), rule.divisor_f64(), rule.digits());
    let rounded = round(scaled, max, mode);

    let template = rule.format.select(rounded);
    if !template.has_affix() {
        return format_plain(round(num, max, mode), min, max);
    }

    let signed = if negative { -rounded } else { rounded };
    template.render(&format_plain(signed, min, max))
}

/// Decimal text with at most `max` and at least `min` fraction digits.
///
/// The shortest round-trip form of `value` is used whenever it fits in `max`
/// digits, so a large `max` never exposes the binary expansion. Integer digits
/// are always written out in full; there is no exponent form.
#[must_use]
pub fn format_plain(value: f64, min: u32, max: u32) -> String {
    // -0.0 renders as "0"
    let value = if value == 0.0 { 0.0 } else { value };
    let (min, max) = (min as usize, max as usize);

    let shortest = value.to_string();
    let text = match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > max => format!("{value:.max$}"),
        _ => shortest,
    };

    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() && min == 0 {
        return integer.to_string();
    }
    format!("{integer}.{fraction:0<min$}")
}
