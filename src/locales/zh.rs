use super::{bundle, RuleRow};
use crate::locale::LocaleData;

const DECIMAL: &[RuleRow] = &[
    (1_000, ("", 0), ("0", 1)),
    (10_000, ("", 0), ("0万", 1)),
    (100_000, ("", 0), ("00万", 2)),
    (1_000_000, ("", 0), ("000万", 3)),
    (10_000_000, ("", 0), ("0000万", 4)),
    (100_000_000, ("", 0), ("0亿", 1)),
    (1_000_000_000, ("", 0), ("00亿", 2)),
    (10_000_000_000, ("", 0), ("000亿", 3)),
    (100_000_000_000, ("", 0), ("0000亿", 4)),
    (1_000_000_000_000, ("", 0), ("0万亿", 1)),
    (10_000_000_000_000, ("", 0), ("00万亿", 2)),
    (100_000_000_000_000, ("", 0), ("000万亿", 3)),
];

/// Chinese
#[must_use]
pub fn zh() -> LocaleData {
    bundle("zh", DECIMAL, DECIMAL)
}
