use super::{bundle, RuleRow};
use crate::locale::LocaleData;

const SHORT: &[RuleRow] = &[
    (1_000, ("0\u{a0}k", 1), ("0\u{a0}k", 1)),
    (10_000, ("00\u{a0}k", 2), ("00\u{a0}k", 2)),
    (100_000, ("000\u{a0}k", 3), ("000\u{a0}k", 3)),
    (1_000_000, ("0\u{a0}M", 1), ("0\u{a0}M", 1)),
    (10_000_000, ("00\u{a0}M", 2), ("00\u{a0}M", 2)),
    (100_000_000, ("000\u{a0}M", 3), ("000\u{a0}M", 3)),
    (1_000_000_000, ("0\u{a0}Md", 1), ("0\u{a0}Md", 1)),
    (10_000_000_000, ("00\u{a0}Md", 2), ("00\u{a0}Md", 2)),
    (100_000_000_000, ("000\u{a0}Md", 3), ("000\u{a0}Md", 3)),
    (1_000_000_000_000, ("0\u{a0}Bn", 1), ("0\u{a0}Bn", 1)),
    (10_000_000_000_000, ("00\u{a0}Bn", 2), ("00\u{a0}Bn", 2)),
    (100_000_000_000_000, ("000\u{a0}Bn", 3), ("000\u{a0}Bn", 3)),
];

const LONG: &[RuleRow] = &[
    (1_000, ("0 millier", 1), ("0 mille", 1)),
    (10_000, ("00 mille", 2), ("00 mille", 2)),
    (100_000, ("000 mille", 3), ("000 mille", 3)),
    (1_000_000, ("0 million", 1), ("0 millions", 1)),
    (10_000_000, ("00 million", 2), ("00 millions", 2)),
    (100_000_000, ("000 million", 3), ("000 millions", 3)),
    (1_000_000_000, ("0 milliard", 1), ("0 milliards", 1)),
    (10_000_000_000, ("00 milliard", 2), ("00 milliards", 2)),
    (100_000_000_000, ("000 milliard", 3), ("000 milliards", 3)),
    (1_000_000_000_000, ("0 billion", 1), ("0 billions", 1)),
    (10_000_000_000_000, ("00 billion", 2), ("00 billions", 2)),
    (100_000_000_000_000, ("000 billion", 3), ("000 billions", 3)),
];

/// French
#[must_use]
pub fn fr() -> LocaleData {
    bundle("fr", SHORT, LONG)
}
