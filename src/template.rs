//! Display templates such as `0K`, `00 Mio'.'` or `0 thousand`
//!
//! A template holds one run of `0` characters standing in for the rendered
//! number. The run is located once, when the template is built, and the text
//! around it is kept with literal-quote markers already removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character used by CLDR patterns to quote literal text (`'.'`)
const QUOTE: char = '\'';

/// A compact-notation template with its placeholder digit count
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, usize)", into = "(String, usize)")]
pub struct Template {
    pattern: String,
    digits: usize,
    prefix: String,
    suffix: String,
    has_placeholder: bool,
}

impl Template {
    /// Build a template from its raw pattern and placeholder digit count
    pub fn new(pattern: impl Into<String>, digits: usize) -> Self {
        let pattern = pattern.into();
        let (prefix, suffix, has_placeholder) = match placeholder_span(&pattern) {
            Some((start, end)) => (&pattern[..start], &pattern[end..], true),
            None => (pattern.as_str(), "", false),
        };

        Self {
            prefix: strip_quotes(prefix),
            suffix: strip_quotes(suffix),
            has_placeholder,
            digits,
            pattern,
        }
    }

    /// The empty template, meaning "no compact form at this tier"
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", 0)
    }

    /// The raw pattern as it appears in locale data
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of placeholder digits, used when pre-scaling
    #[must_use]
    pub fn digits(&self) -> usize {
        self.digits
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// True when the template carries text besides the placeholder.
    ///
    /// A bare `0` (or an empty pattern) is CLDR's way of saying the tier has no
    /// abbreviation.
    #[must_use]
    pub fn has_affix(&self) -> bool {
        !self.prefix.is_empty() || !self.suffix.is_empty()
    }

    /// Substitute `number` for the placeholder run.
    ///
    /// Templates without a placeholder render as their literal text.
    #[must_use]
    pub fn render(&self, number: &str) -> String {
        if !self.has_placeholder {
            return self.prefix.clone();
        }
        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(number);
        out.push_str(&self.suffix);
        out
    }

    /// The bare, lower-cased tier symbol used for parsing (`k`, `million`, `mio.`)
    #[must_use]
    pub fn symbol(&self) -> String {
        let mut symbol = String::with_capacity(self.prefix.len() + self.suffix.len());
        symbol.push_str(&self.prefix);
        symbol.push_str(&self.suffix);
        symbol.trim().to_lowercase()
    }
}

/// Byte range of the first run of `0` characters
fn placeholder_span(pattern: &str) -> Option<(usize, usize)> {
    let start = pattern.find('0')?;
    let len = pattern[start..]
        .bytes()
        .take_while(|&b| b == b'0')
        .count();
    Some((start, start + len))
}

fn strip_quotes(text: &str) -> String {
    text.chars().filter(|&c| c != QUOTE).collect()
}

impl From<(String, usize)> for Template {
    fn from((pattern, digits): (String, usize)) -> Self {
        Self::new(pattern, digits)
    }
}

impl From<(&str, usize)> for Template {
    fn from((pattern, digits): (&str, usize)) -> Self {
        Self::new(pattern, digits)
    }
}

impl From<Template> for (String, usize) {
    fn from(template: Template) -> Self {
        (template.pattern, template.digits)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template({:?}, {})", self.pattern, self.digits)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
