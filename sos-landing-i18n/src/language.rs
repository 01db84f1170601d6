//! Supported language set

/// Supported languages for the landing page.
///
/// A closed set: adding a language means adding one variant here and one
/// catalog entry in [`crate::catalog`]. Nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (base language, fallback target)
    #[default]
    En,
    /// Russian
    Rus,
    /// French
    Fra,
    /// German
    Deu,
}

impl Language {
    /// All supported languages, in menu order.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Rus, Language::Fra, Language::Deu]
    }

    /// Identifier used for persistence.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Rus => "rus",
            Language::Fra => "fra",
            Language::Deu => "deu",
        }
    }

    /// Parse a persisted identifier. Exact match only; anything else is
    /// treated as "no preference".
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "rus" => Some(Language::Rus),
            "fra" => Some(Language::Fra),
            "deu" => Some(Language::Deu),
            _ => None,
        }
    }

    /// Menu label, written in the language itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Rus => "Русский",
            Language::Fra => "Français",
            Language::Deu => "Deutsch",
        }
    }

    /// Next language in menu order, wrapping around.
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Rus,
            Language::Rus => Language::Fra,
            Language::Fra => Language::Deu,
            Language::Deu => Language::En,
        }
    }

    /// Previous language in menu order, wrapping around.
    #[must_use]
    pub fn prev(&self) -> Language {
        match self {
            Language::En => Language::Deu,
            Language::Rus => Language::En,
            Language::Fra => Language::Rus,
            Language::Deu => Language::Fra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Language::from_code("jp"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn next_prev_cycle_covers_all() {
        let mut lang = Language::En;
        for _ in 0..Language::all().len() {
            assert_eq!(lang.next().prev(), lang);
            lang = lang.next();
        }
        assert_eq!(lang, Language::En);
    }
}
