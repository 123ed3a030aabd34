use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Two-way dictionary between built words and their translations.
///
/// Words are stored as letter lists and looked up either by translation or by
/// their joined surface form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Translation -> word letters.
    words: FxHashMap<String, Vec<String>>,
    /// Joined surface form -> translation.
    translations: FxHashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a word/translation pair, reachable from either side.
    pub fn add_entry(&mut self, word: Vec<String>, translation: impl Into<String>) {
        let translation = translation.into();
        self.translations.insert(word.concat(), translation.clone());
        self.words.insert(translation, word);
    }

    /// The letters of the word meaning `translation`.
    pub fn word_for(&self, translation: &str) -> Option<&[String]> {
        self.words.get(translation).map(Vec::as_slice)
    }

    /// The translation of a joined surface form.
    pub fn translation_of(&self, surface: &str) -> Option<&str> {
        self.translations.get(surface).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// One `surface: translation` line per entry, sorted A-Z for stable
    /// output.
    pub fn dictionary(&self) -> String {
        let mut lines: Vec<String> = self
            .translations
            .iter()
            .map(|(surface, translation)| format!("{surface}: {translation}"))
            .collect();
        lines.sort();
        lines.join("\n")
    }
}
