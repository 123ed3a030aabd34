use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::WordOptions;
use super::lexicon::Lexicon;
use crate::affix::Affixes;
use crate::errors::BuildError;
use crate::inventory::Inventory;
use crate::syllable::{Segment, Syllables};

/// A language: everything needed to build and store words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    name: String,
    inventory: Inventory,
    syllables: Syllables,
    affixes: Affixes,
    lexicon: Lexicon,
}

impl Language {
    pub fn new(
        name: impl Into<String>,
        inventory: Inventory,
        syllables: Syllables,
        affixes: Affixes,
    ) -> Self {
        Self {
            name: name.into(),
            inventory,
            syllables,
            affixes,
            lexicon: Lexicon::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn syllables(&self) -> &Syllables {
        &self.syllables
    }

    pub fn affixes(&self) -> &Affixes {
        &self.affixes
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Build one word: root syllables, then affixes, then name formatting.
    pub fn build_word<R: Rng>(
        &self,
        rng: &mut R,
        options: &WordOptions,
    ) -> Result<Vec<String>, BuildError> {
        let mut word = self.build_root(rng, options.syllables)?;
        for property in &options.properties {
            word = self.affixes.attach(word, property)?;
        }
        if options.proper {
            word = format_name(word);
        }
        debug!(word = %word.concat(), "built word");
        Ok(word)
    }

    /// Concatenate `count` syllables into a root.
    pub fn build_root<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<String>, BuildError> {
        let mut root = Vec::new();
        for _ in 0..count {
            root.extend(self.build_syllable(rng)?);
        }
        debug!(root = %root.concat(), "built root");
        Ok(root)
    }

    /// Fill one randomly chosen syllable template with letters.
    pub fn build_syllable<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>, BuildError> {
        let pattern = self
            .syllables
            .patterns()
            .choose(rng)
            .ok_or(BuildError::NoSyllablePatterns)?;
        let mut syllable = Vec::new();
        for segment in pattern {
            if let Some(letter) = self.pick_letter(rng, segment)? {
                if !letter.is_empty() {
                    syllable.push(letter);
                }
            }
        }
        debug!(syllable = %syllable.concat(), "built syllable");
        Ok(syllable)
    }

    /// Choose a letter for one template segment.
    ///
    /// A feature intersection with no candidates yields `None` and the slot
    /// is skipped; an empty consonant or vowel class is an error.
    fn pick_letter<R: Rng>(
        &self,
        rng: &mut R,
        segment: &Segment,
    ) -> Result<Option<String>, BuildError> {
        match segment {
            Segment::Consonant => choose_sorted(rng, self.inventory.consonants())
                .ok_or(BuildError::EmptyLetterClass {
                    class: "consonants",
                })
                .map(Some),
            Segment::Vowel => choose_sorted(rng, self.inventory.vowels())
                .ok_or(BuildError::EmptyLetterClass { class: "vowels" })
                .map(Some),
            Segment::Letter(letter) => Ok(Some(letter.clone())),
            Segment::Features(features) => {
                let candidates = self.inventory.letters_matching(features);
                Ok(choose_sorted(rng, &candidates))
            }
        }
    }

    /// Store a word/translation pair in the lexicon.
    pub fn add_entry(&mut self, word: Vec<String>, translation: impl Into<String>) {
        self.lexicon.add_entry(word, translation);
    }

    /// Render the lexicon, one entry per line.
    pub fn dictionary(&self) -> String {
        self.lexicon.dictionary()
    }
}

/// Draw from a set through a sorted list so seeded builds are reproducible.
fn choose_sorted<R: Rng>(rng: &mut R, letters: &FxHashSet<String>) -> Option<String> {
    let mut candidates: Vec<&String> = letters.iter().collect();
    candidates.sort();
    candidates.choose(rng).map(|letter| (*letter).clone())
}

/// Uppercase the first character of the first non-empty grapheme, lowercase
/// everything else.
pub fn format_name(word: Vec<String>) -> Vec<String> {
    let Some(first_index) = word.iter().position(|grapheme| !grapheme.is_empty()) else {
        return word;
    };
    word.into_iter()
        .enumerate()
        .map(|(i, grapheme)| {
            if i == first_index {
                capitalize(&grapheme)
            } else {
                grapheme.to_lowercase()
            }
        })
        .collect()
}

fn capitalize(grapheme: &str) -> String {
    let mut chars = grapheme.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
