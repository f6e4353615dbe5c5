use crate::locale::{FormatRules, Locale};
use indexmap::IndexMap;

/// Lower-cased tier symbols of one locale mapped back to their divisors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    symbols: IndexMap<String, u64>,
}

impl SymbolMap {
    /// Derive the map from a locale's short table, then its long table.
    ///
    /// For each rule the `one` symbol is considered before `other`; the first
    /// divisor seen for a symbol wins. Empty symbols are skipped.
    #[must_use]
    pub fn from_locale(locale: &Locale) -> Self {
        let mut map = Self::default();
        map.add_rules(&locale.decimal.short);
        map.add_rules(&locale.decimal.long);
        map
    }

    fn add_rules(&mut self, rules: &FormatRules) {
        for rule in rules.iter() {
            for template in [&rule.format.one, &rule.format.other] {
                let symbol = template.symbol();
                if !symbol.is_empty() {
                    self.symbols.entry(symbol).or_insert(rule.divisor);
                }
            }
        }
    }

    /// Divisor for an already lower-cased symbol
    #[must_use]
    pub fn divisor(&self, symbol: &str) -> Option<u64> {
        self.symbols.get(symbol).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.symbols.iter().map(|(s, &d)| (s.as_str(), d))
    }
}
