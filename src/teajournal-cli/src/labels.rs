//! Localized labels.
//!
//! All user-facing text lives in `labels.toml`, embedded at build time.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use teajournal_storage::{ListStore, keys};

const LABELS_TOML: &str = include_str!("labels.toml");

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// Code stored under the `lang` key.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Parse a language code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// The next language in the cycle.
    pub fn next(&self) -> Language {
        let pos = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Language persisted in the store, else `fallback`.
    pub fn from_store(store: &ListStore, fallback: Language) -> Language {
        store
            .get_item(keys::LANG)
            .and_then(Language::from_code)
            .unwrap_or(fallback)
    }
}

/// Text of one language.
#[derive(Debug, Clone, Deserialize)]
pub struct Labels {
    pub language_name: String,
    pub welcome: String,
    pub form_title: String,
    pub list_title: String,
    pub name: String,
    pub name_placeholder: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "type_placeholder")]
    pub kind_placeholder: String,
    pub brand: String,
    pub brand_placeholder: String,
    pub ingredients: String,
    pub ingredients_placeholder: String,
    pub add: String,
    pub comment: String,
    pub comment_placeholder: String,
    pub other: String,
    pub submit: String,
    pub missing_name: String,
    pub missing_type: String,
    pub missing_ingredients: String,
    pub saved: String,
    pub save_failed: String,
    pub empty_list: String,
    pub delete_title: String,
    pub delete_message: String,
    pub yes: String,
    pub cancel: String,
    pub deleted: String,
    pub hint_form: String,
    pub hint_list: String,
    pub hint_language: String,
    pub hint_quit: String,
    pub hint_delete: String,
    /// Key hint descriptions keyed by their English text. Missing entries
    /// are shown as is.
    #[serde(default)]
    pub hints: HashMap<String, String>,
}

impl Labels {
    /// Translate a key hint description.
    pub fn hint<'a>(&'a self, text: &'a str) -> &'a str {
        self.hints.get(text).map_or(text, String::as_str)
    }
}

/// Labels for every language.
#[derive(Debug, Clone)]
pub struct LabelSet {
    by_language: HashMap<Language, Labels>,
}

impl LabelSet {
    /// Parse the embedded label file.
    pub fn embedded() -> Result<Self> {
        Self::parse(LABELS_TOML)
    }

    fn parse(content: &str) -> Result<Self> {
        let raw: HashMap<String, Labels> =
            toml::from_str(content).context("Failed to parse labels.toml")?;

        let mut by_language = HashMap::new();
        for language in Language::ALL {
            let labels = raw
                .get(language.code())
                .cloned()
                .with_context(|| format!("labels.toml has no [{}] table", language.code()))?;
            by_language.insert(language, labels);
        }
        Ok(Self { by_language })
    }

    pub fn get(&self, language: Language) -> &Labels {
        // Every language is checked at parse time.
        &self.by_language[&language]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_labels_cover_all_languages() {
        let set = LabelSet::embedded().unwrap();
        assert_eq!(set.get(Language::En).yes, "Yes");
        assert_eq!(set.get(Language::Fr).yes, "Oui");
        assert_eq!(
            set.get(Language::En).missing_ingredients,
            "Please add at least 1 ingredient."
        );
        assert_eq!(
            set.get(Language::Fr).delete_message,
            "Voulez-vous vraiment supprimer ce thé ?"
        );
    }

    #[test]
    fn test_hint_translation() {
        let set = LabelSet::embedded().unwrap();
        let fr = set.get(Language::Fr);
        assert_eq!(fr.hint("Next field"), "Champ suivant");
        assert_eq!(fr.hint("Add"), "Ajouter");
        assert_eq!(fr.hint("Unknown"), "Unknown");
        assert_eq!(set.get(Language::En).hint("Next field"), "Next field");
    }

    #[test]
    fn test_every_component_hint_is_translated() {
        let set = LabelSet::embedded().unwrap();
        let fr = set.get(Language::Fr);
        for text in [
            "Add", "Navigate", "Pick", "Close", "Next", "Next field", "Save", "Clear",
            "Choose", "Type", "Select", "Confirm", "Cancel",
        ] {
            assert!(fr.hints.contains_key(text), "no French hint for {text:?}");
        }
    }

    #[test]
    fn test_missing_language_table_is_an_error() {
        let en_only = LABELS_TOML.split("[fr]").next().unwrap();
        assert!(LabelSet::parse(en_only).is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("FR"), Some(Language::Fr));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::En.next(), Language::Fr);
        assert_eq!(Language::Fr.next(), Language::En);
    }

    #[test]
    fn test_language_from_store() {
        let mut store = ListStore::in_memory();
        assert_eq!(Language::from_store(&store, Language::Fr), Language::Fr);

        store.set_item(keys::LANG, "en").unwrap();
        assert_eq!(Language::from_store(&store, Language::Fr), Language::En);

        store.set_item(keys::LANG, "klingon").unwrap();
        assert_eq!(Language::from_store(&store, Language::En), Language::En);
    }
}
