//! Decimal rounding on `f64` values
//!
//! Half-way cases are resolved on the shortest decimal representation of the
//! value rather than on its binary expansion, so `1.005` rounds to `1.01` at two
//! places and `0.1 + 0.2` rounds to `0.3` at ten.

use crate::error::{CompactNumberError, CompactResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a value is brought down to a fixed number of fraction digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Nearest value, half-way cases away from zero
    #[default]
    Round,
    /// Towards negative infinity
    Floor,
    /// Towards positive infinity
    Ceil,
}

impl RoundingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = CompactNumberError;

    fn from_str(s: &str) -> CompactResult<Self> {
        match s {
            "round" => Ok(Self::Round),
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            other => Err(CompactNumberError::InvalidRoundingMode(other.to_string())),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round `value` to `precision` fraction digits using `mode`.
///
/// Non-finite values are returned unchanged, as are values whose scaled form
/// overflows. `Floor` and `Ceil` scale by plain multiplication, which is exact
/// enough for the small precisions used when formatting.
#[must_use]
pub fn round(value: f64, precision: u32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = |op: fn(f64) -> f64| {
        let multiplier = pow10(precision);
        let scaled = value * multiplier;
        if scaled.is_finite() {
            op(scaled) / multiplier
        } else {
            value
        }
    };
    match mode {
        RoundingMode::Floor => scale(f64::floor),
        RoundingMode::Ceil => scale(f64::ceil),
        RoundingMode::Round => round_half_away_from_zero(value, precision),
    }
}

/// Round to `precision` fraction digits, half-way cases away from zero.
///
/// The scaling step goes through decimal text (`"{abs}e{precision}"`) instead of
/// a multiplication, so `1.005` scales to exactly `100.5`.
#[must_use]
pub fn round_half_away_from_zero(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let sign = value.signum();
    let abs = value.abs();

    let Some(scaled) = shift_exponent(abs, i64::from(precision)) else {
        return value;
    };
    // f64::round already resolves .5 away from zero
    let rounded = scaled.round();
    let Some(unscaled) = shift_exponent(rounded, -i64::from(precision)) else {
        return value;
    };

    unscaled * sign
}

/// Move the decimal point of `value` by `exponent` places through its
/// shortest round-trip representation.
fn shift_exponent(value: f64, exponent: i64) -> Option<f64> {
    let shifted: f64 = format!("{value}e{exponent}").parse().ok()?;
    shifted.is_finite().then_some(shifted)
}

/// Bring `value` to the leading-digit scale a tier template expects.
///
/// `(11234, 1000, 1)` gives `11.234`, `(11234, 10000, 2)` gives `11.234` too:
/// the template `00K` shows two integer digits at the ten-thousand tier.
#[must_use]
pub fn pre_scale(value: f64, divisor: f64, digits: usize) -> f64 {
    let exponent = i32::try_from(digits).unwrap_or(i32::MAX) - 1;
    (value / divisor) * 10f64.powi(exponent)
}

fn pow10(precision: u32) -> f64 {
    10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_away_rounds_down_and_up() {
        assert_eq!(round_half_away_from_zero(1.234, 2), 1.23);
        assert_eq!(round_half_away_from_zero(1.236, 2), 1.24);
    }

    #[test]
    fn test_half_away_midpoints() {
        assert_eq!(round_half_away_from_zero(1.5, 0), 2.0);
        assert_eq!(round_half_away_from_zero(1.25, 1), 1.3);
        assert_eq!(round_half_away_from_zero(-1.5, 0), -2.0);
        assert_eq!(round_half_away_from_zero(-1.25, 1), -1.3);
    }

    #[test]
    fn test_half_away_negative() {
        assert_eq!(round_half_away_from_zero(-1.234, 2), -1.23);
        assert_eq!(round_half_away_from_zero(-1.236, 2), -1.24);
    }

    #[test]
    fn test_half_away_binary_representation_errors() {
        assert_eq!(round_half_away_from_zero(1.005, 2), 1.01);
        assert_eq!(round_half_away_from_zero(0.1 + 0.2, 10), 0.3);
    }

    #[test]
    fn test_half_away_zero() {
        assert_eq!(round_half_away_from_zero(0.0, 5), 0.0);
    }

    #[test]
    fn test_round_mode() {
        assert_eq!(round(1.234, 2, RoundingMode::Round), 1.23);
        assert_eq!(round(1.236, 2, RoundingMode::Round), 1.24);
        assert_eq!(round(9.9, 0, RoundingMode::Round), 10.0);
        assert_eq!(round(0.0, 5, RoundingMode::Round), 0.0);
        assert_eq!(round(1.005, 2, RoundingMode::Round), 1.01);
    }

    #[test]
    fn test_floor_mode() {
        assert_eq!(round(1.239, 2, RoundingMode::Floor), 1.23);
        assert_eq!(round(1.99, 0, RoundingMode::Floor), 1.0);
        assert_eq!(round(-1.231, 2, RoundingMode::Floor), -1.24);
        assert_eq!(round(-1.01, 0, RoundingMode::Floor), -2.0);
        assert_eq!(round(0.0, 2, RoundingMode::Floor), 0.0);
    }

    #[test]
    fn test_ceil_mode() {
        assert_eq!(round(1.231, 2, RoundingMode::Ceil), 1.24);
        assert_eq!(round(1.01, 0, RoundingMode::Ceil), 2.0);
        assert_eq!(round(-1.239, 2, RoundingMode::Ceil), -1.23);
        assert_eq!(round(-1.99, 0, RoundingMode::Ceil), -1.0);
        assert_eq!(round(0.0, 2, RoundingMode::Ceil), 0.0);
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(round(f64::NAN, 2, RoundingMode::Round).is_nan());
        assert_eq!(
            round(f64::INFINITY, 2, RoundingMode::Floor),
            f64::INFINITY
        );
        assert_eq!(
            round_half_away_from_zero(f64::NEG_INFINITY, 1),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_overflowing_scale_passes_through() {
        for mode in [RoundingMode::Round, RoundingMode::Floor, RoundingMode::Ceil] {
            assert_eq!(round(1.5, 309, mode), 1.5, "{mode}");
            assert_eq!(round(-12.5, 400, mode), -12.5, "{mode}");
            assert_eq!(round(1e300, 20, mode), 1e300, "{mode}");
        }
    }

    #[test]
    fn test_pre_scale() {
        assert!((pre_scale(11234.0, 1000.0, 1) - 11.234).abs() < 1e-12);
        assert!((pre_scale(11234.0, 10000.0, 2) - 11.234).abs() < 1e-12);
        assert!((pre_scale(1234.0, 1000.0, 1) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn test_rounding_mode_from_str() {
        assert_eq!("floor".parse::<RoundingMode>(), Ok(RoundingMode::Floor));
        assert_eq!(
            "invalid".parse::<RoundingMode>(),
            Err(CompactNumberError::InvalidRoundingMode("invalid".into()))
        );
        assert_eq!(RoundingMode::Ceil.to_string(), "ceil");
    }
}
