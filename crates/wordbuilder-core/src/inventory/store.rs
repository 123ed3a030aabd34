use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::types::{ConsonantFeatures, Feature, FeatureMatrix, VowelFeatures};

/// Sound inventory: letters indexed by feature, matrix, and class.
///
/// Each letter is a grapheme string ("b", "ng"). The same letter can be
/// re-registered; the later matrix wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Letters reachable from each single feature.
    letters_by_feature: FxHashMap<Feature, FxHashSet<String>>,
    /// Feature matrix recorded for each letter.
    features: FxHashMap<String, FeatureMatrix>,
    /// Letter recorded for each full matrix.
    letters: FxHashMap<FeatureMatrix, String>,
    /// Every consonant letter.
    consonants: FxHashSet<String>,
    /// Every vowel letter.
    vowels: FxHashSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a consonant letter under its feature matrix.
    pub fn add_consonant(&mut self, letter: impl Into<String>, features: ConsonantFeatures) {
        self.add_letter(letter.into(), FeatureMatrix::Consonant(features));
    }

    /// Register a vowel letter under its feature matrix.
    pub fn add_vowel(&mut self, letter: impl Into<String>, features: VowelFeatures) {
        self.add_letter(letter.into(), FeatureMatrix::Vowel(features));
    }

    fn add_letter(&mut self, letter: String, matrix: FeatureMatrix) {
        for feature in matrix.features() {
            self.letters_by_feature
                .entry(feature)
                .or_default()
                .insert(letter.clone());
        }
        self.letters.insert(matrix, letter.clone());
        match matrix {
            FeatureMatrix::Consonant(_) => self.consonants.insert(letter.clone()),
            FeatureMatrix::Vowel(_) => self.vowels.insert(letter.clone()),
        };
        self.features.insert(letter, matrix);
    }

    /// The feature matrix equivalent to a letter.
    pub fn features_of(&self, letter: &str) -> Option<&FeatureMatrix> {
        self.features.get(letter)
    }

    /// The letter equivalent to a full feature matrix.
    pub fn letter_for(&self, matrix: &FeatureMatrix) -> Option<&str> {
        self.letters.get(matrix).map(String::as_str)
    }

    /// Whether a letter is registered at all.
    pub fn contains(&self, letter: &str) -> bool {
        self.features.contains_key(letter)
    }

    /// Every consonant being stored.
    pub fn consonants(&self) -> &FxHashSet<String> {
        &self.consonants
    }

    /// Every vowel being stored.
    pub fn vowels(&self) -> &FxHashSet<String> {
        &self.vowels
    }

    /// Letters carrying a single feature.
    pub fn letters_with(&self, feature: Feature) -> Option<&FxHashSet<String>> {
        self.letters_by_feature.get(&feature)
    }

    /// Letters carrying every feature in the list.
    ///
    /// An empty list or an unindexed feature yields no letters.
    pub fn letters_matching(&self, features: &[Feature]) -> FxHashSet<String> {
        let mut matching: Option<FxHashSet<String>> = None;
        for feature in features {
            let Some(letters) = self.letters_by_feature.get(feature) else {
                return FxHashSet::default();
            };
            matching = Some(match matching {
                None => letters.clone(),
                Some(current) => current.intersection(letters).cloned().collect(),
            });
        }
        matching.unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::types::{Backness, Height, Manner, Place, Rounding, Voicing};

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_consonant(
            "b",
            ConsonantFeatures::new(Voicing::Voiced, Place::Bilabial, Manner::Plosive),
        );
        inventory.add_consonant(
            "p",
            ConsonantFeatures::new(Voicing::Voiceless, Place::Bilabial, Manner::Plosive),
        );
        inventory.add_consonant(
            "g",
            ConsonantFeatures::new(Voicing::Voiced, Place::Velar, Manner::Plosive),
        );
        inventory.add_vowel(
            "i",
            VowelFeatures::new(Height::Close, Backness::Front, Rounding::Unrounded),
        );
        inventory
    }

    #[test]
    fn test_letter_and_matrix_lookups_are_inverse() {
        let inventory = sample();
        let matrix = *inventory.features_of("b").unwrap();
        assert_eq!(inventory.letter_for(&matrix), Some("b"));
        assert!(matrix.is_consonant());
    }

    #[test]
    fn test_classes_split_consonants_and_vowels() {
        let inventory = sample();
        assert!(inventory.consonants().contains("b"));
        assert!(inventory.consonants().contains("p"));
        assert!(!inventory.consonants().contains("i"));
        assert!(inventory.vowels().contains("i"));
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_letters_with_single_feature() {
        let inventory = sample();
        let voiced = inventory
            .letters_with(Feature::Voicing(Voicing::Voiced))
            .unwrap();
        assert!(voiced.contains("b"));
        assert!(voiced.contains("g"));
        assert!(!voiced.contains("p"));
    }

    #[test]
    fn test_letters_matching_intersects_features() {
        let inventory = sample();
        let matching = inventory.letters_matching(&[
            Feature::Voicing(Voicing::Voiced),
            Feature::Place(Place::Bilabial),
        ]);
        assert_eq!(matching.len(), 1);
        assert!(matching.contains("b"));
    }

    #[test]
    fn test_letters_matching_empty_cases() {
        let inventory = sample();
        assert!(inventory.letters_matching(&[]).is_empty());
        assert!(inventory
            .letters_matching(&[Feature::Manner(Manner::Nasal)])
            .is_empty());
    }

    #[test]
    fn test_unknown_letter_has_no_features() {
        let inventory = sample();
        assert_eq!(inventory.features_of("z"), None);
        assert!(!inventory.contains("z"));
    }
}
