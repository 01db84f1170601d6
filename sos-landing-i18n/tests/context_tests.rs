#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `LanguageContext`: restore, fallback and
//! persistence behavior.

use std::sync::Mutex;

use sos_landing_i18n::{
    Catalog, Language, LanguageContext, LocalPreferenceStore, MemoryPreferenceStore,
    PreferenceStore, StoreError, TextNode, CATALOG,
};

const LANGUAGE_KEY: &str = "battle-royale-language";

// ===== Mock Implementations =====

/// Store whose reads and writes always fail, for degradation paths.
struct BrokenPreferenceStore;

impl PreferenceStore for BrokenPreferenceStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::ConfigDirUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::ConfigDirUnavailable)
    }
}

/// Store that accepts writes but refuses reads.
struct WriteOnlyStore {
    written: Mutex<Vec<(String, String)>>,
}

impl WriteOnlyStore {
    fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
        }
    }
}

impl PreferenceStore for WriteOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::ConfigDirUnavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.written
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

fn memory_context() -> LanguageContext {
    LanguageContext::new(&CATALOG, Box::new(MemoryPreferenceStore::new()))
}

fn seeded_store(value: &str) -> Box<MemoryPreferenceStore> {
    let store = MemoryPreferenceStore::new();
    store.set(LANGUAGE_KEY, value).unwrap();
    Box::new(store)
}

// ===== Catalog coverage =====

/// Collect every leaf key path of a translation tree.
fn collect_paths(node: &'static TextNode, prefix: &str, out: &mut Vec<String>) {
    match node {
        TextNode::Text(_) => out.push(prefix.to_string()),
        TextNode::Group(entries) => {
            for (name, child) in *entries {
                let path = if prefix.is_empty() {
                    (*name).to_string()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_paths(child, &path, out);
            }
        }
    }
}

#[test]
fn every_base_path_translates_under_every_language() {
    let base = CATALOG.entry(Language::En).expect("base entry");
    let mut paths = Vec::new();
    collect_paths(base, "", &mut paths);
    assert!(paths.len() > 50, "base catalog unexpectedly small");

    let ctx = memory_context();
    for lang in ctx.available_languages() {
        ctx.set_language(*lang);
        for path in &paths {
            let text = ctx.translate(path);
            assert!(!text.is_empty(), "empty translation for {path:?}");
            assert_ne!(text, path, "literal-key fallback hit for {path:?}");
        }
    }
}

#[test]
fn nonexistent_path_is_echoed_in_every_language() {
    let ctx = memory_context();
    for lang in ctx.available_languages() {
        ctx.set_language(*lang);
        assert_eq!(ctx.translate("nonexistent.path"), "nonexistent.path");
    }
}

#[test]
fn hero_title_switches_with_language() {
    let ctx = memory_context();

    ctx.set_language(Language::Rus);
    assert_eq!(ctx.translate("hero.title"), "ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ");

    ctx.set_language(Language::En);
    assert_eq!(ctx.translate("hero.title"), "SURVIVE AT ALL COSTS");
}

// ===== Fallback policy =====

// A reduced catalog whose Russian entry omits `footer.links.conduct` and
// everything under `hero`.
static PARTIAL_EN: TextNode = TextNode::Group(&[
    (
        "hero",
        TextNode::Group(&[("title", TextNode::Text("SURVIVE AT ALL COSTS"))]),
    ),
    (
        "footer",
        TextNode::Group(&[(
            "links",
            TextNode::Group(&[("conduct", TextNode::Text("CODE OF CONDUCT"))]),
        )]),
    ),
]);

static PARTIAL_RUS: TextNode = TextNode::Group(&[(
    "footer",
    TextNode::Group(&[(
        "links",
        TextNode::Group(&[("terms", TextNode::Text("УСЛОВИЯ ОБСЛУЖИВАНИЯ"))]),
    )]),
)]);

static PARTIAL_CATALOG: Catalog = Catalog::new(&[
    (Language::En, &PARTIAL_EN),
    (Language::Rus, &PARTIAL_RUS),
]);

#[test]
fn omitted_path_falls_back_to_base_language() {
    let ctx = LanguageContext::new(&PARTIAL_CATALOG, Box::new(MemoryPreferenceStore::new()));
    ctx.set_language(Language::Rus);

    // Defined only in the base entry: base value, not the literal key.
    assert_eq!(ctx.translate("footer.links.conduct"), "CODE OF CONDUCT");
    assert_eq!(ctx.translate("hero.title"), "SURVIVE AT ALL COSTS");

    // Defined in the active entry: no fallback.
    assert_eq!(ctx.translate("footer.links.terms"), "УСЛОВИЯ ОБСЛУЖИВАНИЯ");

    // Defined nowhere: literal key.
    assert_eq!(ctx.translate("footer.links.missing"), "footer.links.missing");
}

#[test]
fn language_without_entry_falls_back_entirely() {
    let ctx = LanguageContext::new(&PARTIAL_CATALOG, Box::new(MemoryPreferenceStore::new()));
    // Fra has no entry in the partial catalog at all.
    ctx.set_language(Language::Fra);
    assert_eq!(ctx.translate("hero.title"), "SURVIVE AT ALL COSTS");
}

// ===== Initialize / restore =====

#[test]
fn initialize_restores_supported_language() {
    let ctx = LanguageContext::new(&CATALOG, seeded_store("deu"));
    ctx.initialize();
    assert_eq!(ctx.current_language(), Language::Deu);
}

#[test]
fn initialize_ignores_unsupported_value() {
    let ctx = LanguageContext::new(&CATALOG, seeded_store("klingon"));
    ctx.initialize();
    assert_eq!(ctx.current_language(), Language::En);
}

#[test]
fn initialize_ignores_empty_store() {
    let ctx = memory_context();
    ctx.initialize();
    assert_eq!(ctx.current_language(), Language::En);
}

#[test]
fn initialize_survives_broken_store() {
    let ctx = LanguageContext::new(&CATALOG, Box::new(BrokenPreferenceStore));
    ctx.initialize();
    assert_eq!(ctx.current_language(), Language::En);
}

#[test]
fn set_language_survives_broken_store() {
    let ctx = LanguageContext::new(&CATALOG, Box::new(BrokenPreferenceStore));
    ctx.set_language(Language::Fra);
    // Selection holds for the session even though it cannot be persisted.
    assert_eq!(ctx.current_language(), Language::Fra);
    assert_eq!(ctx.translate("nav.main"), "ACCUEIL");
}

#[test]
fn set_language_persists_the_code() {
    let store = std::sync::Arc::new(WriteOnlyStore::new());
    let ctx = LanguageContext::new(&CATALOG, Box::new(std::sync::Arc::clone(&store)));

    ctx.set_language(Language::Rus);
    ctx.set_language(Language::Deu);

    // Every successful change was written under the fixed key, in order.
    let written = store.written.lock().unwrap();
    assert_eq!(
        *written,
        vec![
            (LANGUAGE_KEY.to_string(), "rus".to_string()),
            (LANGUAGE_KEY.to_string(), "deu".to_string()),
        ]
    );
}

// ===== Round trip across a simulated restart =====

#[test]
fn selection_round_trips_through_local_store() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("preferences.json");

    {
        let store = LocalPreferenceStore::with_path(path.clone());
        let ctx = LanguageContext::new(&CATALOG, Box::new(store));
        ctx.initialize();
        ctx.set_language(Language::Fra);
    }

    // "Restart": a fresh context over the same file.
    let store = LocalPreferenceStore::with_path(path);
    let ctx = LanguageContext::new(&CATALOG, Box::new(store));
    ctx.initialize();
    assert_eq!(ctx.current_language(), Language::Fra);
    assert_eq!(ctx.translate("hero.title"), "SURVIVRE À TOUT PRIX");
}
