//! # compact-number
//!
//! Locale-aware compact number formatting and parsing: `1234` → `"1.2K"`,
//! `2000000` → `"2 millones"`, and back again.
//!
//! Formatting is driven by per-locale rule tables. Each rule pairs a
//! power-of-ten divisor with singular and plural templates such as `"0K"` or
//! `"00 mil"`; the number of `0`s in a template is the count of integer digits
//! shown before the fraction.
//!
//! - **Tier selection**: the largest divisor the value reaches, promoted to the
//!   next tier when the value is within a relative `threshold` of it
//! - **Decimal-safe rounding**: half-away-from-zero, floor, or ceil, without
//!   the `1.005 → 1.00` binary artifacts
//! - **Parsing**: any symbol of the short or long tables maps back to its divisor
//! - **Locales**: an explicit [`LocaleStore`], parent fallback (`es-MX` → `es`),
//!   bundled data for `en`, `de`, `es`, `fr`, `ja`, `zh`, and CLDR ingestion
//!
//! ## Examples
//!
//! ```rust
//! use compact_number::{compact, locales, uncompact, FormatOptions, LocaleStore, Style};
//!
//! let mut store = LocaleStore::new();
//! store.register(locales::es());
//!
//! let options = FormatOptions::default();
//! assert_eq!(compact(&mut store, 1234, &options).unwrap(), "1.2K");
//! assert_eq!(compact(&mut store, 999_999, &options).unwrap(), "1M");
//!
//! let long_es = FormatOptions::new().with_locale("es").with_style(Style::Long);
//! assert_eq!(compact(&mut store, 2_000_000, &long_es).unwrap(), "2 millones");
//!
//! assert_eq!(uncompact(&store, "1.5M", "en").unwrap(), 1_500_000.0);
//! ```
//!
//! The `*_global` functions operate on a process-wide store seeded with `en`:
//!
//! ```rust
//! use compact_number::{compact_number_global, uncompact_number_global, FormatOptions};
//!
//! let options = FormatOptions::new().with_maximum_fraction_digits(2);
//! assert_eq!(compact_number_global(1_234_567, &options).unwrap(), "1.23M");
//! assert_eq!(uncompact_number_global("1.2K", "en").unwrap(), 1200.0);
//! ```

pub(crate) mod cldr;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod locale;
pub mod locales;
pub(crate) mod parse;
pub(crate) mod rounding;
pub(crate) mod store;
pub(crate) mod symbols;
pub(crate) mod template;

// Re-export main types and functions
pub use cldr::{parse_cldr, MAX_SAFE_INTEGER};
pub use error::{CompactNumberError, CompactResult};
pub use format::{compact, compact_registered, format_plain, FormatOptions, NumberInput};
pub use locale::{
    normalize_locale, DecimalFormats, FormatRule, FormatRules, Locale, LocaleData,
    PluralizedFormat, Style,
};
pub use parse::uncompact;
pub use rounding::{round, round_half_away_from_zero, RoundingMode};
pub use store::{global_store, LocaleStore, DEFAULT_LOCALE};
pub use symbols::SymbolMap;
pub use template::Template;

use std::sync::PoisonError;

impl LocaleStore {
    /// [`compact`] against this store
    ///
    /// # Errors
    ///
    /// See [`compact`].
    pub fn compact(
        &mut self,
        value: impl Into<NumberInput>,
        options: &FormatOptions,
    ) -> CompactResult<String> {
        compact(self, value, options)
    }

    /// [`uncompact`] against this store
    ///
    /// # Errors
    ///
    /// See [`uncompact`].
    pub fn uncompact(&self, text: &str, locale: &str) -> CompactResult<f64> {
        uncompact(self, text, locale)
    }
}

/// [`compact`] against the [`global_store`].
///
/// Only takes the write lock when `options.locale_data` must be registered.
///
/// # Errors
///
/// See [`compact`].
pub fn compact_number_global(
    value: impl Into<NumberInput>,
    options: &FormatOptions,
) -> CompactResult<String> {
    if options.locale_data.is_some() {
        let mut store = global_store()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        return compact(&mut store, value, options);
    }
    let store = global_store().read().unwrap_or_else(PoisonError::into_inner);
    compact_registered(&store, value, options)
}

/// [`uncompact`] against the [`global_store`]
///
/// # Errors
///
/// See [`uncompact`].
pub fn uncompact_number_global(text: &str, locale: &str) -> CompactResult<f64> {
    let store = global_store().read().unwrap_or_else(PoisonError::into_inner);
    uncompact(&store, text, locale)
}
