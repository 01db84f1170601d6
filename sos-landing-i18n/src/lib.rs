//! SOS Landing i18n Core Library
//!
//! Provides the internationalization core for the SOS landing page:
//! - Supported language set (Language)
//! - Immutable translation catalog (Catalog / TextNode)
//! - Active-language state with dotted key-path lookup (LanguageContext)
//! - Best-effort language-preference persistence (PreferenceStore)
//!
//! This library is UI-independent; the presentational shell only consumes
//! `current_language` / `available_languages` / `set_language` / `translate`.

pub mod catalog;
pub mod context;
pub mod language;
pub mod store;

// Re-export common types
pub use catalog::{Catalog, TextNode, CATALOG};
pub use context::LanguageContext;
pub use language::Language;
pub use store::{LocalPreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};
