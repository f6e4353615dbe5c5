//! Registry of locale rule tables
//!
//! A [`LocaleStore`] maps normalized locale keys to their [`Locale`] records.
//! It starts out seeded with `en`, accepts further bundles through
//! [`register`](LocaleStore::register), and can be returned to the seeded state
//! with [`reset`](LocaleStore::reset).
//!
//! The store also memoizes the parsing [`SymbolMap`] of each locale. Every
//! mutation clears that cache, so parsing never sees symbols from replaced data.

use crate::cldr::parse_cldr;
use crate::error::{CompactNumberError, CompactResult};
use crate::locale::{normalize_locale, Locale, LocaleData};
use crate::locales;
use crate::symbols::SymbolMap;
use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Locale used when nothing else is requested, always present after `reset`
pub const DEFAULT_LOCALE: &str = "en";

static GLOBAL_STORE: Lazy<RwLock<LocaleStore>> = Lazy::new(|| RwLock::new(LocaleStore::new()));

/// Process-wide default store backing the `*_global` convenience functions
pub fn global_store() -> &'static RwLock<LocaleStore> {
    &GLOBAL_STORE
}

/// Locale registry with parent-locale fallback and a derived symbol cache
#[derive(Debug)]
pub struct LocaleStore {
    locales: IndexMap<String, Arc<Locale>>,
    symbol_cache: Mutex<HashMap<String, Arc<SymbolMap>>>,
}

impl LocaleStore {
    /// A store seeded with the bundled `en` locale
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.seed();
        store
    }

    /// A store with no locales at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            locales: IndexMap::new(),
            symbol_cache: Mutex::new(HashMap::new()),
        }
    }

    fn seed(&mut self) {
        for (key, locale) in locales::en() {
            self.locales.insert(normalize_locale(&key), Arc::new(locale));
        }
    }

    /// Merge every entry of `data` under its normalized key.
    ///
    /// Entries with an existing key are replaced; the last registration wins.
    pub fn register(&mut self, data: LocaleData) {
        for (key, locale) in data {
            let key = normalize_locale(&key);
            debug!("registering locale '{key}'");
            self.locales.insert(key, Arc::new(locale));
        }
        self.invalidate_symbols();
    }

    /// Register several bundles in order
    pub fn register_many(&mut self, bundles: impl IntoIterator<Item = LocaleData>) {
        for data in bundles {
            self.register(data);
        }
    }

    /// Transform a CLDR `numbers.json` document and register the result.
    ///
    /// Documents without a `main` object are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::InvalidLocaleData`] if the document has a
    /// `main` object but not the expected decimal-format sections.
    pub fn register_from_cldr(&mut self, cldr: &Value) -> CompactResult<()> {
        if cldr.get("main").is_none() {
            debug!("skipping CLDR document without 'main'");
            return Ok(());
        }
        let data = parse_cldr(cldr)?;
        self.register(data);
        Ok(())
    }

    /// [`register_from_cldr`](Self::register_from_cldr) over several documents
    ///
    /// # Errors
    ///
    /// Stops at the first document that fails to transform; earlier documents
    /// stay registered.
    pub fn register_from_cldr_many<'a>(
        &mut self,
        documents: impl IntoIterator<Item = &'a Value>,
    ) -> CompactResult<()> {
        for document in documents {
            self.register_from_cldr(document)?;
        }
        Ok(())
    }

    /// Look up a locale, falling back to a registered parent.
    ///
    /// `es-MX` resolves to `es` when only `es` is registered. Parents are
    /// searched in registration order.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Locale> {
        self.resolve(locale).map(|(_, locale)| locale)
    }

    /// Like [`get`](Self::get), also returning the key that matched
    fn resolve(&self, locale: &str) -> Option<(&str, &Locale)> {
        let normalized = normalize_locale(locale);
        if let Some((key, found)) = self.locales.get_key_value(&normalized) {
            return Some((key.as_str(), found.as_ref()));
        }

        self.locales
            .iter()
            .find(|(key, _)| {
                normalized
                    .strip_prefix(key.as_str())
                    .is_some_and(|rest| rest.starts_with('-'))
            })
            .map(|(key, found)| (key.as_str(), found.as_ref()))
    }

    /// Like [`get`](Self::get), failing with a descriptive error
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::LocaleNotRegistered`] naming `locale`.
    pub fn require(&self, locale: &str) -> CompactResult<&Locale> {
        self.get(locale)
            .ok_or_else(|| CompactNumberError::LocaleNotRegistered(locale.to_string()))
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    /// Registered keys in registration order
    #[must_use]
    pub fn registered_locales(&self) -> Vec<String> {
        self.locales.keys().cloned().collect()
    }

    /// Drop every registration and return to the seeded `en`-only state
    pub fn reset(&mut self) {
        debug!("resetting locale store");
        self.locales.clear();
        self.seed();
        self.invalidate_symbols();
    }

    /// Symbol map for parsing in `locale`.
    ///
    /// An unresolvable locale falls back to `en`.
    ///
    /// # Errors
    ///
    /// Returns [`CompactNumberError::DefaultLocaleMissing`] if neither the
    /// requested locale nor `en` can be resolved.
    pub fn symbol_map(&self, locale: &str) -> CompactResult<Arc<SymbolMap>> {
        let (key, found) = match self.resolve(locale) {
            Some(resolved) => resolved,
            None => self
                .resolve(DEFAULT_LOCALE)
                .ok_or(CompactNumberError::DefaultLocaleMissing)?,
        };

        let mut cache = self
            .symbol_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(map) = cache.get(key) {
            return Ok(Arc::clone(map));
        }

        let map = Arc::new(SymbolMap::from_locale(found));
        debug!("built symbol map for '{key}' with {} symbols", map.len());
        cache.insert(key.to_string(), Arc::clone(&map));
        Ok(map)
    }

    fn invalidate_symbols(&mut self) {
        self.symbol_cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LocaleStore {
    /// Clones share locale records; the symbol cache starts empty.
    fn clone(&self) -> Self {
        Self {
            locales: self.locales.clone(),
            symbol_cache: Mutex::new(HashMap::new()),
        }
    }
}
