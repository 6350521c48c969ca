//! Keyed journal strings per locale.
//!
//! A [`StringCatalog`] maps `(locale, key)` to a template. Hosts use it for
//! the placeholder of unnamed journal entries and the drop-down overflow
//! label, so both follow the configured locale.
//!
//! # Invariants
//!
//! 1. **Lookup order**: exact tag, then primary language (`es-MX` -> `es`),
//!    then the fallback chain, each locale tried at most once. Nothing
//!    found is `None`, never a panic.
//!
//! 2. **Single-pass `{name}` substitution**: `format()` never re-scans a
//!    substituted value, so arguments cannot inject tokens.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | No locale in the chain has it | `None` |
//! | Missing locale | Tag never registered | Next locale in the chain |
//! | Unknown token | `{name}` with no `name` argument | Kept verbatim |
//! | Bad locale tag | `try_add_locale("")` | `I18nError::InvalidLocale` |
//! | Bad source line | `parse("no equals sign")` | `I18nError::ParseError` |

use std::collections::HashMap;
use std::fmt;

/// Locale tag such as `"en"`, `"de-AT"` or `"pt_BR"`.
pub type Locale = String;

/// Catalog construction errors. Lookups themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// Tag is empty or holds characters other than ASCII alphanumerics,
    /// `-` and `_`.
    InvalidLocale(String),
    /// A `key = value` source line was malformed.
    ParseError(String),
    /// A key appeared twice in one locale source.
    DuplicateKey { locale: String, key: String },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocale(tag) => write!(f, "invalid locale tag '{tag}'"),
            Self::ParseError(msg) => write!(f, "malformed catalog source: {msg}"),
            Self::DuplicateKey { locale, key } => {
                write!(f, "duplicate key '{key}' in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Key to template map for one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key = value` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. `locale` is only
    /// used to label duplicate-key errors.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::ParseError`] for a line without `=` or with an
    /// empty key, and [`I18nError::DuplicateKey`] when a key repeats.
    pub fn parse(locale: &str, source: &str) -> Result<Self, I18nError> {
        let mut strings = Self::new();
        for (lineno, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(I18nError::ParseError(format!(
                    "line {}: expected 'key = value'",
                    lineno + 1
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(I18nError::ParseError(format!(
                    "line {}: empty key",
                    lineno + 1
                )));
            }
            if strings.get(key).is_some() {
                return Err(I18nError::DuplicateKey {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
            }
            strings.insert(key, value.trim());
        }
        Ok(strings)
    }

    /// Insert a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Journal strings for every registered locale.
///
/// # Example
///
/// ```
/// use navjournal_i18n::catalog::{LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
///
/// let mut en = LocaleStrings::new();
/// en.insert("untitled", "Untitled");
/// en.insert("more", "{count} more");
/// catalog.add_locale("en", en);
/// catalog.set_fallback_chain(vec!["en".into()]);
///
/// assert_eq!(catalog.get("fr", "untitled"), Some("Untitled"));
/// assert_eq!(
///     catalog.format("en", "more", &[("count", "3")]),
///     Some("3 more".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
    fallback_chain: Vec<Locale>,
}

impl StringCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for a locale, replacing any previous set.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Add strings for a locale after validating the tag.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidLocale`] for an empty tag or one that
    /// contains characters other than ASCII alphanumerics, `-`, and `_`.
    pub fn try_add_locale(
        &mut self,
        locale: impl Into<String>,
        strings: LocaleStrings,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        let valid = !locale.is_empty()
            && locale
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(I18nError::InvalidLocale(locale));
        }
        self.add_locale(locale, strings);
        Ok(())
    }

    /// Locales consulted, in order, after the requested tag and its
    /// primary language.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain;
    }

    /// Look up a string by key.
    ///
    /// Tries the specified locale, its primary language, then walks the
    /// fallback chain. Returns `None` if no locale provides the key.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(s) = self.lookup(locale, key) {
            return Some(s);
        }

        let language = primary_language(locale);
        if language != locale {
            if let Some(s) = self.lookup(language, key) {
                return Some(s);
            }
        }

        self.fallback_chain
            .iter()
            .filter(|fallback| fallback.as_str() != locale && fallback.as_str() != language)
            .find_map(|fallback| self.lookup(fallback, key))
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales.get(locale).and_then(|ls| ls.get(key))
    }

    /// [`get`](Self::get), then substitute `{name}` tokens from `args`.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|template| substitute(template, args))
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Find keys from `reference_keys` that `locale` cannot resolve, even
    /// through fallback. Sorted alphabetically.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(locale, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Primary language subtag: `"es-MX"` -> `"es"`, `"pt_BR"` -> `"pt"`.
#[must_use]
pub fn primary_language(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
}

fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unclosed brace: emit the remainder verbatim.
            out.push_str(&rest[open..]);
            return out;
        };
        let token = &after[..close];
        match args.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNTITLED: &str = "journal.entry.untitled";
    const OVERFLOW: &str = "journal.menu.overflow";
    const BACK: &str = "journal.menu.back";

    fn journal_catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();

        let mut en = LocaleStrings::new();
        en.insert(UNTITLED, "Untitled");
        en.insert(OVERFLOW, "{count} more");
        en.insert(BACK, "Back");
        catalog.add_locale("en", en);

        let mut es = LocaleStrings::new();
        es.insert(UNTITLED, "Sin título");
        catalog.add_locale("es", es);

        let mut es_mx = LocaleStrings::new();
        es_mx.insert(BACK, "Regresar");
        catalog.add_locale("es-MX", es_mx);

        catalog.set_fallback_chain(vec!["en".into()]);
        catalog
    }

    #[test]
    fn exact_locale_wins() {
        let catalog = journal_catalog();
        assert_eq!(catalog.get("en", UNTITLED), Some("Untitled"));
        assert_eq!(catalog.get("es", UNTITLED), Some("Sin título"));
        assert_eq!(catalog.get("en", "journal.nope"), None);
    }

    #[test]
    fn unknown_locale_walks_chain() {
        let catalog = journal_catalog();
        assert_eq!(catalog.get("fr", UNTITLED), Some("Untitled"));
    }

    #[test]
    fn region_tries_language_before_chain() {
        let catalog = journal_catalog();
        assert_eq!(catalog.get("es-MX", BACK), Some("Regresar"));
        assert_eq!(catalog.get("es-MX", UNTITLED), Some("Sin título"));
        assert_eq!(catalog.get("es-MX", OVERFLOW), Some("{count} more"));
    }

    #[test]
    fn primary_language_subtags() {
        assert_eq!(primary_language("es-MX"), "es");
        assert_eq!(primary_language("pt_BR"), "pt");
        assert_eq!(primary_language("en"), "en");
        assert_eq!(primary_language(""), "");
    }

    #[test]
    fn overflow_label_substitution() {
        let catalog = journal_catalog();
        assert_eq!(
            catalog.format("en", OVERFLOW, &[("count", "12")]),
            Some("12 more".into())
        );
        assert_eq!(
            catalog.format("en", OVERFLOW, &[]),
            Some("{count} more".into())
        );
        assert_eq!(catalog.format("en", "journal.nope", &[]), None);
    }

    #[test]
    fn substitution_is_single_pass() {
        assert_eq!(substitute("{count} more", &[("count", "{count}")]), "{count} more");
        assert_eq!(substitute("{n} of {n}", &[("n", "3")]), "3 of 3");
        assert_eq!(substitute("open {brace", &[]), "open {brace");
        assert_eq!(substitute("empty {}", &[]), "empty {}");
        assert_eq!(substitute("plain", &[("n", "3")]), "plain");
    }

    #[test]
    fn parse_lines() {
        let strings = LocaleStrings::parse(
            "de",
            "# journal\njournal.entry.untitled = Unbenannt\n\nmore = {count} weitere\n",
        )
        .unwrap();
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.get("journal.entry.untitled"), Some("Unbenannt"));
        assert_eq!(strings.get("more"), Some("{count} weitere"));
    }

    #[test]
    fn parse_rejects_missing_equals() {
        let err = LocaleStrings::parse("de", "just text").unwrap_err();
        assert_eq!(
            err,
            I18nError::ParseError("line 1: expected 'key = value'".into())
        );
    }

    #[test]
    fn parse_rejects_empty_key() {
        let err = LocaleStrings::parse("de", "a = 1\n = 2").unwrap_err();
        assert_eq!(err, I18nError::ParseError("line 2: empty key".into()));
    }

    #[test]
    fn parse_rejects_duplicates() {
        let err = LocaleStrings::parse("de", "a = 1\na = 2").unwrap_err();
        assert_eq!(err.to_string(), "duplicate key 'a' in locale 'de'");
    }

    #[test]
    fn try_add_locale_validates_tag() {
        let mut catalog = StringCatalog::new();
        assert!(catalog.try_add_locale("en-US", LocaleStrings::new()).is_ok());
        let err = catalog
            .try_add_locale("", LocaleStrings::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid locale tag ''");
        assert!(catalog.try_add_locale("en US", LocaleStrings::new()).is_err());
        assert_eq!(catalog.locales(), vec!["en-US"]);
    }

    #[test]
    fn missing_keys_respect_fallback() {
        let catalog = journal_catalog();
        assert!(catalog.missing_keys("es", &[UNTITLED, OVERFLOW, BACK]).is_empty());

        let mut bare = StringCatalog::new();
        let mut es = LocaleStrings::new();
        es.insert(UNTITLED, "Sin título");
        bare.add_locale("es", es);
        assert_eq!(bare.missing_keys("es", &[UNTITLED, OVERFLOW]), vec![OVERFLOW]);
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.get("en", UNTITLED), None);
        assert!(catalog.locales().is_empty());
        assert!(LocaleStrings::new().is_empty());
    }
}
