use super::{bundle, RuleRow};
use crate::locale::LocaleData;

// Same table for both styles; only the other form exists.
const DECIMAL: &[RuleRow] = &[
    (1_000, ("", 0), ("0", 1)),
    (10_000, ("", 0), ("0万", 1)),
    (100_000, ("", 0), ("00万", 2)),
    (1_000_000, ("", 0), ("000万", 3)),
    (10_000_000, ("", 0), ("0000万", 4)),
    (100_000_000, ("", 0), ("0億", 1)),
    (1_000_000_000, ("", 0), ("00億", 2)),
    (10_000_000_000, ("", 0), ("000億", 3)),
    (100_000_000_000, ("", 0), ("0000億", 4)),
    (1_000_000_000_000, ("", 0), ("0兆", 1)),
    (10_000_000_000_000, ("", 0), ("00兆", 2)),
    (100_000_000_000_000, ("", 0), ("000兆", 3)),
    (1_000_000_000_000_000, ("", 0), ("0000兆", 4)),
];

/// Japanese
#[must_use]
pub fn ja() -> LocaleData {
    bundle("ja", DECIMAL, DECIMAL)
}
