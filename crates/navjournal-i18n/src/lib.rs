#![forbid(unsafe_code)]

//! Internationalization for journal presentation.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, and `{name}` interpolation, plus the built-in catalog
//! holding the placeholder shown for unnamed journal entries.

pub mod builtin;
pub mod catalog;

pub use builtin::{DEFAULT_LOCALE, builtin_catalog, catalog_from_sources, keys};
pub use catalog::{I18nError, LocaleStrings, StringCatalog};
