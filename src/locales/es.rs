use super::{bundle, RuleRow};
use crate::locale::LocaleData;

const SHORT: &[RuleRow] = &[
    (1_000, ("0\u{a0}mil", 1), ("0\u{a0}mil", 1)),
    (10_000, ("00\u{a0}mil", 2), ("00\u{a0}mil", 2)),
    (100_000, ("000\u{a0}mil", 3), ("000\u{a0}mil", 3)),
    (1_000_000, ("0\u{a0}M", 1), ("0\u{a0}M", 1)),
    (10_000_000, ("00\u{a0}M", 2), ("00\u{a0}M", 2)),
    (100_000_000, ("000\u{a0}M", 3), ("000\u{a0}M", 3)),
    (1_000_000_000, ("0000\u{a0}M", 4), ("0000\u{a0}M", 4)),
    (10_000_000_000, ("00\u{a0}mil\u{a0}M", 2), ("00\u{a0}mil\u{a0}M", 2)),
    (100_000_000_000, ("000\u{a0}mil\u{a0}M", 3), ("000\u{a0}mil\u{a0}M", 3)),
    (1_000_000_000_000, ("0\u{a0}B", 1), ("0\u{a0}B", 1)),
    (10_000_000_000_000, ("00\u{a0}B", 2), ("00\u{a0}B", 2)),
    (100_000_000_000_000, ("000\u{a0}B", 3), ("000\u{a0}B", 3)),
];

const LONG: &[RuleRow] = &[
    (1_000, ("0 mil", 1), ("0 mil", 1)),
    (10_000, ("00 mil", 2), ("00 mil", 2)),
    (100_000, ("000 mil", 3), ("000 mil", 3)),
    (1_000_000, ("0 millón", 1), ("0 millones", 1)),
    (10_000_000, ("00 millones", 2), ("00 millones", 2)),
    (100_000_000, ("000 millones", 3), ("000 millones", 3)),
    (1_000_000_000, ("0 mil millones", 1), ("0 mil millones", 1)),
    (10_000_000_000, ("00 mil millones", 2), ("00 mil millones", 2)),
    (100_000_000_000, ("000 mil millones", 3), ("000 mil millones", 3)),
    (1_000_000_000_000, ("0 billón", 1), ("0 billones", 1)),
    (10_000_000_000_000, ("00 billones", 2), ("00 billones", 2)),
    (100_000_000_000_000, ("000 billones", 3), ("000 billones", 3)),
];

/// Spanish
#[must_use]
pub fn es() -> LocaleData {
    bundle("es", SHORT, LONG)
}
