//! Locale data compiled into the crate
//!
//! Each constructor returns a one-entry [`LocaleData`] bundle ready for
//! [`LocaleStore::register`](crate::LocaleStore::register). `en` is also the
//! seed of every new store.

mod de;
mod en;
mod es;
mod fr;
mod ja;
mod zh;

pub use de::de;
pub use en::en;
pub use es::es;
pub use fr::fr;
pub use ja::ja;
pub use zh::zh;

use crate::locale::{FormatRule, FormatRules, Locale, LocaleData, PluralizedFormat};

/// `(divisor, (one pattern, digits), (other pattern, digits))`
type RuleRow = (u64, (&'static str, usize), (&'static str, usize));

/// Every bundled locale
#[must_use]
pub fn all() -> Vec<LocaleData> {
    vec![en(), de(), es(), fr(), ja(), zh()]
}

fn rules(rows: &[RuleRow]) -> FormatRules {
    let rules = rows
        .iter()
        .map(|&(divisor, one, other)| FormatRule::new(divisor, PluralizedFormat::new(one, other)))
        .collect();
    FormatRules::new(rules).expect("bundled rule tables are sorted by divisor")
}

fn bundle(key: &str, short: &[RuleRow], long: &[RuleRow]) -> LocaleData {
    LocaleData::single(Locale::new(key, rules(short), rules(long)))
}
