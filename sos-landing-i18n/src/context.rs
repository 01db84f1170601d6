//! Active-language state and translation lookup

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::Catalog;
use crate::language::Language;
use crate::store::PreferenceStore;

/// Key under which the selected language is persisted.
const LANGUAGE_KEY: &str = "battle-royale-language";

/// Holder of the active-language selection.
///
/// Explicitly owned and injected into consumers (single writer via
/// [`set_language`](Self::set_language), many readers); there is no ambient
/// global. The active language lives in an atomic cell so a shared reference
/// is all any consumer needs.
///
/// # Example
///
/// ```
/// use sos_landing_i18n::{LanguageContext, Language, MemoryPreferenceStore, CATALOG};
///
/// let i18n = LanguageContext::new(&CATALOG, Box::new(MemoryPreferenceStore::new()));
/// i18n.initialize();
///
/// assert_eq!(i18n.translate("hero.title"), "SURVIVE AT ALL COSTS");
/// i18n.set_language(Language::Rus);
/// assert_eq!(i18n.translate("hero.title"), "ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ");
/// ```
pub struct LanguageContext {
    catalog: &'static Catalog,
    // Index into Language::all(); atomics keep the cell shareable without a lock.
    current: AtomicUsize,
    store: Box<dyn PreferenceStore>,
}

impl LanguageContext {
    /// Create a context over `catalog`, defaulting to the base language.
    /// Persistence is not touched until [`initialize`](Self::initialize).
    pub fn new(catalog: &'static Catalog, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            catalog,
            current: AtomicUsize::new(0),
            store,
        }
    }

    /// Restore a previously persisted selection, if there is one and it
    /// names a supported language. Any store failure or unknown value is
    /// treated as "no preference": the active language stays at the default
    /// and the problem is only surfaced as a non-fatal diagnostic.
    pub fn initialize(&self) {
        match self.store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => {
                if let Some(language) = Language::from_code(&code) {
                    self.set_current(language);
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("could not load language preference: {err}");
            }
        }
    }

    /// Switch the active language. The in-memory change is immediate and
    /// observable to every consumer; persistence is best-effort and a store
    /// failure only costs the selection surviving a restart.
    pub fn set_language(&self, language: Language) {
        self.set_current(language);

        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            log::warn!("could not save language preference: {err}");
        }
    }

    /// The language currently governing [`translate`](Self::translate).
    pub fn current_language(&self) -> Language {
        let index = self.current.load(Ordering::Relaxed);
        *Language::all().get(index).unwrap_or(&Language::En)
    }

    /// The fixed set of selectable languages, for building a menu.
    pub fn available_languages(&self) -> &'static [Language] {
        Language::all()
    }

    /// Resolve a dotted key path to a display string.
    ///
    /// Tries the active language's catalog entry, then the base language's
    /// (when they differ), then falls back to echoing the key path itself.
    /// The result is always a renderable string.
    pub fn translate<'a>(&self, key_path: &'a str) -> &'a str {
        let language = self.current_language();

        if let Some(text) = self.catalog.lookup(language, key_path) {
            return text;
        }
        if language != Language::En {
            if let Some(text) = self.catalog.lookup(Language::En, key_path) {
                return text;
            }
        }
        key_path
    }

    fn set_current(&self, language: Language) {
        let index = Language::all()
            .iter()
            .position(|lang| *lang == language)
            .unwrap_or(0);
        self.current.store(index, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::store::MemoryPreferenceStore;

    fn context() -> LanguageContext {
        LanguageContext::new(&CATALOG, Box::new(MemoryPreferenceStore::new()))
    }

    #[test]
    fn defaults_to_base_language() {
        assert_eq!(context().current_language(), Language::En);
    }

    #[test]
    fn set_language_is_synchronously_visible() {
        let ctx = context();
        for lang in ctx.available_languages() {
            ctx.set_language(*lang);
            assert_eq!(ctx.current_language(), *lang);
        }
    }

    #[test]
    fn translate_follows_active_language() {
        let ctx = context();
        ctx.set_language(Language::Rus);
        assert_eq!(ctx.translate("hero.title"), "ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ");
        ctx.set_language(Language::En);
        assert_eq!(ctx.translate("hero.title"), "SURVIVE AT ALL COSTS");
    }

    #[test]
    fn unknown_path_echoes_the_key() {
        let ctx = context();
        for lang in ctx.available_languages() {
            ctx.set_language(*lang);
            assert_eq!(ctx.translate("nonexistent.path"), "nonexistent.path");
        }
    }
}
