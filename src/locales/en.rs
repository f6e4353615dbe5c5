use super::{bundle, RuleRow};
use crate::locale::LocaleData;

const SHORT: &[RuleRow] = &[
    (1_000, ("0K", 1), ("0K", 1)),
    (10_000, ("00K", 2), ("00K", 2)),
    (100_000, ("000K", 3), ("000K", 3)),
    (1_000_000, ("0M", 1), ("0M", 1)),
    (10_000_000, ("00M", 2), ("00M", 2)),
    (100_000_000, ("000M", 3), ("000M", 3)),
    (1_000_000_000, ("0B", 1), ("0B", 1)),
    (10_000_000_000, ("00B", 2), ("00B", 2)),
    (100_000_000_000, ("000B", 3), ("000B", 3)),
    (1_000_000_000_000, ("0T", 1), ("0T", 1)),
    (10_000_000_000_000, ("00T", 2), ("00T", 2)),
    (100_000_000_000_000, ("000T", 3), ("000T", 3)),
];

const LONG: &[RuleRow] = &[
    (1_000, ("0 thousand", 1), ("0 thousand", 1)),
    (10_000, ("00 thousand", 2), ("00 thousand", 2)),
    (100_000, ("000 thousand", 3), ("000 thousand", 3)),
    (1_000_000, ("0 million", 1), ("0 million", 1)),
    (10_000_000, ("00 million", 2), ("00 million", 2)),
    (100_000_000, ("000 million", 3), ("000 million", 3)),
    (1_000_000_000, ("0 billion", 1), ("0 billion", 1)),
    (10_000_000_000, ("00 billion", 2), ("00 billion", 2)),
    (100_000_000_000, ("000 billion", 3), ("000 billion", 3)),
    (1_000_000_000_000, ("0 trillion", 1), ("0 trillion", 1)),
    (10_000_000_000_000, ("00 trillion", 2), ("00 trillion", 2)),
    (100_000_000_000_000, ("000 trillion", 3), ("000 trillion", 3)),
];

/// English
#[must_use]
pub fn en() -> LocaleData {
    bundle("en", SHORT, LONG)
}
