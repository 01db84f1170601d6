//! Translation catalog
//!
//! Pure, immutable build-time data: one nested tree of display strings per
//! supported language. Constructing it has no side effects and no failure
//! modes. Consistency of key paths across languages is an author
//! responsibility; the lookup's fallback policy covers omissions.

use crate::language::Language;

mod deu;
mod en;
mod fra;
mod rus;

/// One node of a language's translation tree: either a leaf display string
/// or a list of named children. Nesting is bounded (four levels deep in the
/// shipped data, e.g. `features.items.survive.title`).
#[derive(Debug)]
pub enum TextNode {
    Text(&'static str),
    Group(&'static [(&'static str, TextNode)]),
}

impl TextNode {
    /// Child lookup on a group node. A leaf has no children.
    fn child(&self, segment: &str) -> Option<&TextNode> {
        match self {
            TextNode::Group(entries) => entries
                .iter()
                .find(|(name, _)| *name == segment)
                .map(|(_, node)| node),
            TextNode::Text(_) => None,
        }
    }

    /// Resolve a dotted key path to a leaf string.
    ///
    /// Descends one segment at a time; a missing segment at any depth fails
    /// the whole resolution, as does a leaf encountered mid-path or a group
    /// at the final segment. No partial credit.
    pub fn resolve(&'static self, key_path: &str) -> Option<&'static str> {
        let mut node = self;
        for segment in key_path.split('.') {
            node = node.child(segment)?;
        }
        match node {
            TextNode::Text(text) => Some(text),
            TextNode::Group(_) => None,
        }
    }
}

/// Mapping from language to its translation tree.
pub struct Catalog {
    entries: &'static [(Language, &'static TextNode)],
}

impl Catalog {
    /// Build a catalog from static entries.
    pub const fn new(entries: &'static [(Language, &'static TextNode)]) -> Self {
        Self { entries }
    }

    /// The translation tree for one language, if the catalog has an entry.
    pub fn entry(&self, language: Language) -> Option<&'static TextNode> {
        self.entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, node)| *node)
    }

    /// Resolve a key path against one language's entry. No fallback here;
    /// the fallback policy lives in [`crate::context::LanguageContext`].
    pub fn lookup(&self, language: Language, key_path: &str) -> Option<&'static str> {
        self.entry(language)?.resolve(key_path)
    }
}

/// The shipped landing-page catalog, one entry per supported language.
pub static CATALOG: Catalog = Catalog::new(&[
    (Language::En, &en::TRANSLATIONS),
    (Language::Rus, &rus::TRANSLATIONS),
    (Language::Fra, &fra::TRANSLATIONS),
    (Language::Deu, &deu::TRANSLATIONS),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use TextNode::{Group, Text};

    static TREE: TextNode = Group(&[
        ("hero", Group(&[("title", Text("SURVIVE"))])),
        (
            "footer",
            Group(&[("links", Group(&[("privacy", Text("PRIVACY POLICY"))]))]),
        ),
    ]);

    #[test]
    fn resolves_nested_leaf() {
        assert_eq!(TREE.resolve("hero.title"), Some("SURVIVE"));
        assert_eq!(TREE.resolve("footer.links.privacy"), Some("PRIVACY POLICY"));
    }

    #[test]
    fn missing_segment_fails_at_any_depth() {
        assert_eq!(TREE.resolve("missing"), None);
        assert_eq!(TREE.resolve("hero.missing"), None);
        assert_eq!(TREE.resolve("footer.links.missing"), None);
    }

    #[test]
    fn group_at_final_segment_is_not_a_string() {
        assert_eq!(TREE.resolve("hero"), None);
        assert_eq!(TREE.resolve("footer.links"), None);
    }

    #[test]
    fn leaf_mid_path_fails() {
        assert_eq!(TREE.resolve("hero.title.extra"), None);
    }

    #[test]
    fn empty_path_fails() {
        assert_eq!(TREE.resolve(""), None);
    }

    #[test]
    fn shipped_catalog_has_all_languages() {
        for lang in Language::all() {
            assert!(CATALOG.entry(*lang).is_some());
        }
    }

    #[test]
    fn shipped_catalog_base_strings() {
        assert_eq!(
            CATALOG.lookup(Language::En, "hero.title"),
            Some("SURVIVE AT ALL COSTS")
        );
        assert_eq!(
            CATALOG.lookup(Language::Rus, "hero.title"),
            Some("ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ")
        );
    }
}
