//! Built-in journal strings.

use crate::catalog::{I18nError, LocaleStrings, StringCatalog};

/// Locale every lookup falls back to.
pub const DEFAULT_LOCALE: &str = "en";

/// Catalog keys used by the journal.
pub mod keys {
    /// Placeholder for entries nothing else names.
    pub const ENTRY_UNTITLED: &str = "journal.entry.untitled";
    /// Label for drop-down entries beyond the display limit. Takes `{count}`.
    pub const MENU_OVERFLOW: &str = "journal.menu.overflow";
}

const BUILTIN: &[(&str, &str)] = &[
    ("en", "journal.entry.untitled = Untitled\njournal.menu.overflow = {count} more\n"),
    ("de", "journal.entry.untitled = Unbenannt\njournal.menu.overflow = {count} weitere\n"),
    ("es", "journal.entry.untitled = Sin título\njournal.menu.overflow = {count} más\n"),
    ("fr", "journal.entry.untitled = Sans titre\njournal.menu.overflow = {count} de plus\n"),
    ("it", "journal.entry.untitled = Senza titolo\njournal.menu.overflow = altri {count}\n"),
    ("ja", "journal.entry.untitled = 無題\njournal.menu.overflow = 他 {count} 件\n"),
    ("pt", "journal.entry.untitled = Sem título\njournal.menu.overflow = mais {count}\n"),
];

/// Build a catalog from `(locale, "key = value" source)` pairs.
///
/// Fails on the first malformed source or invalid locale tag. No fallback
/// chain is set.
pub fn catalog_from_sources(sources: &[(&str, &str)]) -> Result<StringCatalog, I18nError> {
    let mut catalog = StringCatalog::new();
    for (locale, source) in sources {
        let strings = LocaleStrings::parse(locale, source)?;
        catalog.try_add_locale(*locale, strings)?;
    }
    Ok(catalog)
}

/// Catalog preloaded with journal strings and an English fallback.
///
/// Lookups that find nothing fall back to the caller's own default, so a
/// catalog that failed to load still yields usable labels.
#[must_use]
pub fn builtin_catalog() -> StringCatalog {
    let mut catalog = catalog_from_sources(BUILTIN).unwrap_or_default();
    catalog.set_fallback_chain(vec![DEFAULT_LOCALE.to_string()]);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_load() {
        let catalog = catalog_from_sources(BUILTIN).expect("builtin sources parse");
        assert_eq!(catalog.locales(), vec!["de", "en", "es", "fr", "it", "ja", "pt"]);
    }

    #[test]
    fn sources_report_errors() {
        let err = catalog_from_sources(&[("en", "journal.entry.untitled Untitled")]).unwrap_err();
        assert!(matches!(err, I18nError::ParseError(_)));

        let err = catalog_from_sources(&[("e n", "a = b")]).unwrap_err();
        assert!(matches!(err, I18nError::InvalidLocale(_)));
    }

    #[test]
    fn every_locale_is_complete() {
        let catalog = builtin_catalog();
        for locale in catalog.locales() {
            let missing = catalog.missing_keys(locale, &[keys::ENTRY_UNTITLED, keys::MENU_OVERFLOW]);
            assert!(missing.is_empty(), "{locale} missing {missing:?}");
        }
    }

    #[test]
    fn untitled_is_localized() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.get("en", keys::ENTRY_UNTITLED), Some("Untitled"));
        assert_eq!(catalog.get("de-AT", keys::ENTRY_UNTITLED), Some("Unbenannt"));
        assert_eq!(catalog.get("fr", keys::ENTRY_UNTITLED), Some("Sans titre"));
    }

    #[test]
    fn unknown_locale_uses_english() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.get("sv", keys::ENTRY_UNTITLED), Some("Untitled"));
        assert_eq!(
            catalog.format("sv", keys::MENU_OVERFLOW, &[("count", "4")]),
            Some("4 more".into())
        );
    }
}
