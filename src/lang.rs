//! Embedded JSON localization tables and key lookup.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::Deserialize;
use thiserror::Error;

use crate::types::Locale;

// Include the generated embedding table from build.rs
// Provides: pub static EMBEDDED_LANGS: &[(&str, &str)]
include!(concat!(env!("OUT_DIR"), "/lang_data.rs"));

#[derive(Debug, Error, PartialEq)]
pub enum LangError {
    #[error("missing translation `{key}` for locale `{locale}`")]
    MissingTranslation { locale: Locale, key: String },
    #[error("unsupported locale `{0}`")]
    UnsupportedLocale(String),
}

/// Flat key -> string table for one locale (keys are dotted paths).
#[derive(Debug, Deserialize)]
pub struct LangMap(HashMap<String, String>);

impl LangMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

static TABLES: Lazy<HashMap<Locale, LangMap>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    for &(code, raw) in EMBEDDED_LANGS {
        let Some(locale) = Locale::from_code(code) else {
            eprintln!("[LANG] embedded table for unknown locale `{code}` ignored");
            continue;
        };
        match serde_json::from_str::<LangMap>(raw) {
            Ok(map) => {
                tables.insert(locale, map);
            }
            Err(e) => eprintln!("[LANG] embedded table `{code}` unreadable: {e}"),
        }
    }
    tables
});

// Misses already logged, so a broken key does not spam every re-render.
static REPORTED: Lazy<Mutex<HashSet<(Locale, String)>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Verify every supported locale has an embedded table. Called once at startup.
pub fn init() -> anyhow::Result<()> {
    for &locale in Locale::ALL {
        match TABLES.get(&locale) {
            Some(table) => println!("[LANG] `{locale}` table loaded ({} keys)", table.keys().count()),
            None => anyhow::bail!("no embedded translation table for locale `{locale}`"),
        }
    }
    Ok(())
}

/// Pure lookup of a dotted key path in the table for `locale`.
pub fn resolve(locale: Locale, key: &str) -> Result<&'static str, LangError> {
    TABLES
        .get(&locale)
        .and_then(|table| table.get(key))
        .ok_or_else(|| LangError::MissingTranslation {
            locale,
            key: key.to_string(),
        })
}

/// Translate a key for `locale`, falling back to the raw key when missing.
/// The miss is logged once so a broken translation stays discoverable.
pub fn tr(locale: Locale, key: &str) -> String {
    match resolve(locale, key) {
        Ok(s) => s.to_string(),
        Err(err) => {
            if REPORTED.lock().insert((locale, key.to_string())) {
                eprintln!("[LANG] {err}");
            }
            key.to_string()
        }
    }
}

/// Map a requested locale code onto a supported locale. An empty selector
/// means "no preference"; anything unsupported falls back to the default.
pub fn resolve_locale(code: &str) -> Locale {
    if code.is_empty() {
        return Locale::DEFAULT;
    }
    match Locale::from_code(code) {
        Some(locale) => locale,
        None => {
            eprintln!(
                "[LANG] {}; using `{}`",
                LangError::UnsupportedLocale(code.to_string()),
                Locale::DEFAULT
            );
            Locale::DEFAULT
        }
    }
}

/// Native display name of a locale (the `this.lang` table entry).
pub fn display_name(locale: Locale) -> String {
    tr(locale, "this.lang")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn startup_check_passes_with_embedded_tables() {
        assert!(init().is_ok());
    }

    #[test]
    fn every_locale_covers_every_key() {
        let union: BTreeSet<&str> = TABLES.values().flat_map(LangMap::keys).collect();
        assert!(!union.is_empty());
        for &locale in Locale::ALL {
            for &key in &union {
                let value = resolve(locale, key).unwrap_or_else(|e| panic!("{e}"));
                assert!(!value.is_empty(), "`{key}` empty for `{locale}`");
            }
        }
    }

    #[test]
    fn missing_key_falls_back_to_raw_key() {
        assert_eq!(
            resolve(Locale::En, "nav.bogus"),
            Err(LangError::MissingTranslation {
                locale: Locale::En,
                key: "nav.bogus".into(),
            })
        );
        assert_eq!(tr(Locale::En, "nav.bogus"), "nav.bogus");
    }

    #[test]
    fn concrete_values_per_locale() {
        assert_eq!(resolve(Locale::En, "nav.home").unwrap(), "Home");
        assert_eq!(resolve(Locale::Fa, "nav.home").unwrap(), "خانه");
        // Unsupported selector resolves to the default locale's values.
        assert_eq!(
            tr(resolve_locale("de"), "nav.home"),
            tr(Locale::DEFAULT, "nav.home")
        );
    }

    #[test]
    fn selector_resolution() {
        assert_eq!(resolve_locale("en"), Locale::En);
        assert_eq!(resolve_locale("fa"), Locale::Fa);
        assert_eq!(resolve_locale(""), Locale::DEFAULT);
        assert_eq!(resolve_locale("de"), Locale::DEFAULT);
    }

    #[test]
    fn toggling_twice_restores_the_string_set() {
        let keys: Vec<String> = TABLES[&Locale::En].keys().map(str::to_string).collect();
        for key in &keys {
            let original = tr(Locale::En, key);
            let round_tripped = tr(Locale::En.toggle().toggle(), key);
            assert_eq!(original, round_tripped, "`{key}` changed after round trip");
        }
    }

    #[test]
    fn display_names_are_native() {
        assert_eq!(display_name(Locale::En), "English");
        assert_eq!(display_name(Locale::Fa), "فارسی");
    }
}
