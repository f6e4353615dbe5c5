//! Locale records and their compact-notation rule tables
//!
//! The serialized shape matches the JSON emitted by the CLDR transformation:
//!
//! ```json
//! { "en": { "locale": "en", "numbers": { "decimal": {
//!     "short": [[1000, { "one": ["0K", 1], "other": ["0K", 1] }]],
//!     "long":  [[1000, { "one": ["0 thousand", 1], "other": ["0 thousand", 1] }]]
//! } } } }
//! ```

use crate::error::{CompactNumberError, CompactResult};
use crate::template::Template;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Display style: abbreviations (`1.2K`) or words (`1.2 thousand`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Short,
    Long,
}

impl FromStr for Style {
    type Err = CompactNumberError;

    fn from_str(s: &str) -> CompactResult<Self> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(CompactNumberError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

/// Singular and plural renderings of one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralizedFormat {
    pub one: Template,
    pub other: Template,
}

impl PluralizedFormat {
    pub fn new(one: impl Into<Template>, other: impl Into<Template>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
        }
    }

    /// Same template for both plural forms
    pub fn uniform(template: impl Into<Template>) -> Self {
        let template = template.into();
        Self {
            one: template.clone(),
            other: template,
        }
    }

    /// Template for a rounded magnitude.
    ///
    /// Exactly `1` selects `one`, unless that form is empty.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn select(&self, magnitude: f64) -> &Template {
        if magnitude == 1.0 && !self.one.is_empty() {
            &self.one
        } else {
            &self.other
        }
    }
}

/// A magnitude tier: values at or above `divisor` may use `format`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u64, PluralizedFormat)", into = "(u64, PluralizedFormat)")]
pub struct FormatRule {
    pub divisor: u64,
    pub format: PluralizedFormat,
}

impl FormatRule {
    pub fn new(divisor: u64, format: PluralizedFormat) -> Self {
        Self { divisor, format }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn divisor_f64(&self) -> f64 {
        self.divisor as f64
    }

    /// Placeholder digit count used for pre-scaling (taken from `other`)
    #[must_use]
    pub fn digits(&self) -> usize {
        self.format.other.digits()
    }
}

impl From<(u64, PluralizedFormat)> for FormatRule {
    fn from((divisor, format): (u64, PluralizedFormat)) -> Self {
        Self { divisor, format }
    }
}

impl From<FormatRule> for (u64, PluralizedFormat) {
    fn from(rule: FormatRule) -> Self {
        (rule.divisor, rule.format)
    }
}

/// Rule table ordered by strictly increasing divisor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FormatRule>", into = "Vec<FormatRule>")]
pub struct FormatRules(Vec<FormatRule>);

impl FormatRules {
    /// Build a table, rejecting zero divisors and non-ascending order
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidLocaleData`] when the ordering
    /// invariant does not hold.
    pub fn new(rules: Vec<FormatRule>) -> CompactResult<Self> {
        if rules.iter().any(|r| r.divisor == 0) {
            return Err(CompactNumberError::InvalidLocaleData(
                "divisor must be positive".to_string(),
            ));
        }
        if let Some(pair) = rules.windows(2).find(|w| w[0].divisor >= w[1].divisor) {
            return Err(CompactNumberError::InvalidLocaleData(format!(
                "rule divisors must be strictly ascending ({} followed by {})",
                pair[0].divisor, pair[1].divisor
            )));
        }
        Ok(Self(rules))
    }

    /// Sort by divisor first, then validate (duplicates still fail)
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidLocaleData`] on duplicate or zero divisors.
    pub fn from_unsorted(mut rules: Vec<FormatRule>) -> CompactResult<Self> {
        rules.sort_by_key(|r| r.divisor);
        Self::new(rules)
    }

    /// Index of the tier `value` falls in: the last rule whose divisor is <= `value`
    #[must_use]
    pub fn tier_index(&self, value: f64) -> Option<usize> {
        self.0
            .iter()
            .take_while(|r| value >= r.divisor_f64())
            .count()
            .checked_sub(1)
    }

    pub fn into_inner(self) -> Vec<FormatRule> {
        self.0
    }
}

impl Deref for FormatRules {
    type Target = [FormatRule];

    fn deref(&self) -> &[FormatRule] {
        &self.0
    }
}

impl TryFrom<Vec<FormatRule>> for FormatRules {
    type Error = CompactNumberError;

    fn try_from(rules: Vec<FormatRule>) -> CompactResult<Self> {
        Self::new(rules)
    }
}

impl From<FormatRules> for Vec<FormatRule> {
    fn from(rules: FormatRules) -> Self {
        rules.0
    }
}

/// Rule tables for both display styles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalFormats {
    pub short: FormatRules,
    pub long: FormatRules,
}

impl DecimalFormats {
    #[must_use]
    pub fn rules(&self, style: Style) -> &FormatRules {
        match style {
            Style::Short => &self.short,
            Style::Long => &self.long,
        }
    }
}

/// Compact-notation data for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocaleRepr", into = "LocaleRepr")]
pub struct Locale {
    pub locale: String,
    pub parent_locale: Option<String>,
    pub decimal: DecimalFormats,
}

impl Locale {
    pub fn new(locale: impl Into<String>, short: FormatRules, long: FormatRules) -> Self {
        Self {
            locale: locale.into(),
            parent_locale: None,
            decimal: DecimalFormats { short, long },
        }
    }

    #[must_use]
    pub fn rules(&self, style: Style) -> &FormatRules {
        self.decimal.rules(style)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocaleRepr {
    locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_locale: Option<String>,
    numbers: NumbersRepr,
}

#[derive(Clone, Serialize, Deserialize)]
struct NumbersRepr {
    decimal: DecimalFormats,
}

impl From<LocaleRepr> for Locale {
    fn from(repr: LocaleRepr) -> Self {
        Self {
            locale: repr.locale,
            parent_locale: repr.parent_locale,
            decimal: repr.numbers.decimal,
        }
    }
}

impl From<Locale> for LocaleRepr {
    fn from(locale: Locale) -> Self {
        Self {
            locale: locale.locale,
            parent_locale: locale.parent_locale,
            numbers: NumbersRepr {
                decimal: locale.decimal,
            },
        }
    }
}

/// A bundle of locale records keyed by locale tag, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleData(IndexMap<String, Locale>);

impl LocaleData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle holding a single locale under its own tag
    #[must_use]
    pub fn single(locale: Locale) -> Self {
        let mut data = Self::new();
        data.insert(locale.locale.clone(), locale);
        data
    }

    /// Parse a bundle from JSON
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidLocaleData`] for malformed JSON or
    /// rule tables that are out of order.
    pub fn from_json(json: &str) -> CompactResult<Self> {
        serde_json::from_str(json).map_err(|e| CompactNumberError::InvalidLocaleData(e.to_string()))
    }

    /// Serialize the bundle to JSON
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidLocaleData`] if serialization fails.
    pub fn to_json(&self) -> CompactResult<String> {
        serde_json::to_string(self).map_err(|e| CompactNumberError::InvalidLocaleData(e.to_string()))
    }

    pub fn insert(&mut self, key: impl Into<String>, locale: Locale) -> Option<Locale> {
        self.0.insert(key.into(), locale)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Locale> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Locale)> {
        self.0.iter()
    }
}

impl IntoIterator for LocaleData {
    type Item = (String, Locale);
    type IntoIter = indexmap::map::IntoIter<String, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Locale)> for LocaleData {
    fn from_iter<T: IntoIterator<Item = (String, Locale)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fold a locale tag to its lookup form: lower case, `_` replaced by `-`
#[must_use]
pub fn normalize_locale(locale: &str) -> String {
    locale.replace('_', "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(divisor: u64, pattern: &str, digits: usize) -> FormatRule {
        FormatRule::new(divisor, PluralizedFormat::uniform((pattern, digits)))
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en_US"), "en-us");
        assert_eq!(normalize_locale("es-MX"), "es-mx");
        assert_eq!(normalize_locale("zh_Hant_TW"), "zh-hant-tw");
    }

    #[test]
    fn test_rules_must_ascend() {
        let err = FormatRules::new(vec![rule(10_000, "00K", 2), rule(1_000, "0K", 1)]);
        assert!(matches!(err, Err(CompactNumberError::InvalidLocaleData(_))));

        let dup = FormatRules::new(vec![rule(1_000, "0K", 1), rule(1_000, "0K", 1)]);
        assert!(dup.is_err());

        let zero = FormatRules::new(vec![rule(0, "0", 1)]);
        assert!(zero.is_err());
    }

    #[test]
    fn test_from_unsorted_sorts() {
        let rules =
            FormatRules::from_unsorted(vec![rule(1_000_000, "0M", 1), rule(1_000, "0K", 1)])
                .unwrap();
        assert_eq!(rules[0].divisor, 1_000);
        assert_eq!(rules[1].divisor, 1_000_000);
    }

    #[test]
    fn test_tier_index() {
        let rules = FormatRules::new(vec![
            rule(1_000, "0K", 1),
            rule(10_000, "00K", 2),
            rule(1_000_000, "0M", 1),
        ])
        .unwrap();
        assert_eq!(rules.tier_index(999.0), None);
        assert_eq!(rules.tier_index(1_000.0), Some(0));
        assert_eq!(rules.tier_index(9_999.0), Some(0));
        assert_eq!(rules.tier_index(10_000.0), Some(1));
        assert_eq!(rules.tier_index(5e9), Some(2));
    }

    #[test]
    fn test_plural_select() {
        let format = PluralizedFormat::new(("0 millón", 1), ("0 millones", 1));
        assert_eq!(format.select(1.0).pattern(), "0 millón");
        assert_eq!(format.select(2.0).pattern(), "0 millones");
        assert_eq!(format.select(0.0).pattern(), "0 millones");
        assert_eq!(format.select(1.5).pattern(), "0 millones");

        let no_one = PluralizedFormat::new(Template::empty(), ("0万", 1));
        assert_eq!(no_one.select(1.0).pattern(), "0万");
    }

    #[test]
    fn test_locale_data_json_shape() {
        let json = r#"{
            "fr-CA": {
                "locale": "fr-CA",
                "numbers": {
                    "decimal": {
                        "long": [[1000, { "one": ["0 mille", 1], "other": ["0 mille", 1] }]],
                        "short": [[1000, { "one": ["0k", 1], "other": ["0k", 1] }]]
                    }
                }
            }
        }"#;
        let data = LocaleData::from_json(json).unwrap();
        let locale = data.get("fr-CA").unwrap();
        assert_eq!(locale.locale, "fr-CA");
        assert_eq!(locale.rules(Style::Short)[0].format.one.pattern(), "0k");
        assert_eq!(locale.rules(Style::Long)[0].divisor, 1000);

        let again = LocaleData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(again, data);
    }

    #[test]
    fn test_locale_data_json_rejects_unordered() {
        let json = r#"{ "xx": { "locale": "xx", "numbers": { "decimal": {
            "short": [[10000, { "one": ["00K", 2], "other": ["00K", 2] }],
                      [1000, { "one": ["0K", 1], "other": ["0K", 1] }]],
            "long": []
        } } } }"#;
        assert!(matches!(
            LocaleData::from_json(json),
            Err(CompactNumberError::InvalidLocaleData(_))
        ));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("long".parse::<Style>(), Ok(Style::Long));
        assert!("tiny".parse::<Style>().is_err());
    }
}
