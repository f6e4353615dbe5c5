use super::{bundle, RuleRow};
use crate::locale::LocaleData;

// The thousand tiers use "Tsd." rather than the CLDR short forms.
const SHORT: &[RuleRow] = &[
    (1_000, ("0 Tsd.", 1), ("0 Tsd.", 1)),
    (10_000, ("00 Tsd.", 2), ("00 Tsd.", 2)),
    (100_000, ("000 Tsd.", 3), ("000 Tsd.", 3)),
    (1_000_000, ("0\u{a0}Mio'.'", 1), ("0\u{a0}Mio'.'", 1)),
    (10_000_000, ("00\u{a0}Mio'.'", 2), ("00\u{a0}Mio'.'", 2)),
    (100_000_000, ("000\u{a0}Mio'.'", 3), ("000\u{a0}Mio'.'", 3)),
    (1_000_000_000, ("0\u{a0}Mrd'.'", 1), ("0\u{a0}Mrd'.'", 1)),
    (10_000_000_000, ("00\u{a0}Mrd'.'", 2), ("00\u{a0}Mrd'.'", 2)),
    (100_000_000_000, ("000\u{a0}Mrd'.'", 3), ("000\u{a0}Mrd'.'", 3)),
    (1_000_000_000_000, ("0\u{a0}Bio'.'", 1), ("0\u{a0}Bio'.'", 1)),
    (10_000_000_000_000, ("00\u{a0}Bio'.'", 2), ("00\u{a0}Bio'.'", 2)),
    (100_000_000_000_000, ("000\u{a0}Bio'.'", 3), ("000\u{a0}Bio'.'", 3)),
];

const LONG: &[RuleRow] = &[
    (1_000, ("0 Tausend", 1), ("0 Tausend", 1)),
    (10_000, ("00 Tausend", 2), ("00 Tausend", 2)),
    (100_000, ("000 Tausend", 3), ("000 Tausend", 3)),
    (1_000_000, ("0 Million", 1), ("0 Millionen", 1)),
    (10_000_000, ("00 Millionen", 2), ("00 Millionen", 2)),
    (100_000_000, ("000 Millionen", 3), ("000 Millionen", 3)),
    (1_000_000_000, ("0 Milliarde", 1), ("0 Milliarden", 1)),
    (10_000_000_000, ("00 Milliarden", 2), ("00 Milliarden", 2)),
    (100_000_000_000, ("000 Milliarden", 3), ("000 Milliarden", 3)),
    (1_000_000_000_000, ("0 Billion", 1), ("0 Billionen", 1)),
    (10_000_000_000_000, ("00 Billionen", 2), ("00 Billionen", 2)),
    (100_000_000_000_000, ("000 Billionen", 3), ("000 Billionen", 3)),
];

/// German
#[must_use]
pub fn de() -> LocaleData {
    bundle("de", SHORT, LONG)
}
