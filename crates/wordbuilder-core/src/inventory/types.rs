//! Feature matrices for simple phonological modeling.
//!
//! A consonant is described by voicing, place, and manner; a vowel by height,
//! backness, and rounding. Keeping the dimensions as enums makes a malformed
//! matrix unrepresentable, so no runtime matrix check is needed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Voicing dimension of a consonant matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voicing {
    Voiced,
    Voiceless,
}

/// Place-of-articulation dimension of a consonant matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Glottal,
}

/// Manner-of-articulation dimension of a consonant matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manner {
    Nasal,
    Plosive,
    Affricate,
    Fricative,
    Approximant,
    Lateral,
}

/// Height dimension of a vowel matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Height {
    Close,
    Mid,
    Open,
}

/// Backness dimension of a vowel matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backness {
    Front,
    Central,
    Back,
}

/// Rounding dimension of a vowel matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    Rounded,
    Unrounded,
}

/// Any single feature from either matrix kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Voicing(Voicing),
    Place(Place),
    Manner(Manner),
    Height(Height),
    Backness(Backness),
    Rounding(Rounding),
}

impl Feature {
    /// The lowercase label used in patterns and rendered text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Voicing(Voicing::Voiced) => "voiced",
            Feature::Voicing(Voicing::Voiceless) => "voiceless",
            Feature::Place(Place::Bilabial) => "bilabial",
            Feature::Place(Place::Labiodental) => "labiodental",
            Feature::Place(Place::Dental) => "dental",
            Feature::Place(Place::Alveolar) => "alveolar",
            Feature::Place(Place::Palatal) => "palatal",
            Feature::Place(Place::Velar) => "velar",
            Feature::Place(Place::Uvular) => "uvular",
            Feature::Place(Place::Pharyngeal) => "pharyngeal",
            Feature::Place(Place::Glottal) => "glottal",
            Feature::Manner(Manner::Nasal) => "nasal",
            Feature::Manner(Manner::Plosive) => "plosive",
            Feature::Manner(Manner::Affricate) => "affricate",
            Feature::Manner(Manner::Fricative) => "fricative",
            Feature::Manner(Manner::Approximant) => "approximant",
            Feature::Manner(Manner::Lateral) => "lateral",
            Feature::Height(Height::Close) => "close",
            Feature::Height(Height::Mid) => "mid",
            Feature::Height(Height::Open) => "open",
            Feature::Backness(Backness::Front) => "front",
            Feature::Backness(Backness::Central) => "central",
            Feature::Backness(Backness::Back) => "back",
            Feature::Rounding(Rounding::Rounded) => "rounded",
            Feature::Rounding(Rounding::Unrounded) => "unrounded",
        }
    }

    /// Parse a lowercase feature label.
    pub fn from_label(label: &str) -> Option<Self> {
        let feature = match label {
            "voiced" => Feature::Voicing(Voicing::Voiced),
            "voiceless" => Feature::Voicing(Voicing::Voiceless),
            "bilabial" => Feature::Place(Place::Bilabial),
            "labiodental" => Feature::Place(Place::Labiodental),
            "dental" => Feature::Place(Place::Dental),
            "alveolar" => Feature::Place(Place::Alveolar),
            "palatal" => Feature::Place(Place::Palatal),
            "velar" => Feature::Place(Place::Velar),
            "uvular" => Feature::Place(Place::Uvular),
            "pharyngeal" => Feature::Place(Place::Pharyngeal),
            "glottal" => Feature::Place(Place::Glottal),
            "nasal" => Feature::Manner(Manner::Nasal),
            "plosive" => Feature::Manner(Manner::Plosive),
            "affricate" => Feature::Manner(Manner::Affricate),
            "fricative" => Feature::Manner(Manner::Fricative),
            "approximant" => Feature::Manner(Manner::Approximant),
            "lateral" => Feature::Manner(Manner::Lateral),
            "close" => Feature::Height(Height::Close),
            "mid" => Feature::Height(Height::Mid),
            "open" => Feature::Height(Height::Open),
            "front" => Feature::Backness(Backness::Front),
            "central" => Feature::Backness(Backness::Central),
            "back" => Feature::Backness(Backness::Back),
            "rounded" => Feature::Rounding(Rounding::Rounded),
            "unrounded" => Feature::Rounding(Rounding::Unrounded),
            _ => return None,
        };
        Some(feature)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Voicing> for Feature {
    fn from(value: Voicing) -> Self {
        Feature::Voicing(value)
    }
}

impl From<Place> for Feature {
    fn from(value: Place) -> Self {
        Feature::Place(value)
    }
}

impl From<Manner> for Feature {
    fn from(value: Manner) -> Self {
        Feature::Manner(value)
    }
}

impl From<Height> for Feature {
    fn from(value: Height) -> Self {
        Feature::Height(value)
    }
}

impl From<Backness> for Feature {
    fn from(value: Backness) -> Self {
        Feature::Backness(value)
    }
}

impl From<Rounding> for Feature {
    fn from(value: Rounding) -> Self {
        Feature::Rounding(value)
    }
}

/// The three-feature matrix describing one consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsonantFeatures {
    pub voicing: Voicing,
    pub place: Place,
    pub manner: Manner,
}

impl ConsonantFeatures {
    pub fn new(voicing: Voicing, place: Place, manner: Manner) -> Self {
        Self {
            voicing,
            place,
            manner,
        }
    }

    pub fn features(&self) -> [Feature; 3] {
        [
            self.voicing.into(),
            self.place.into(),
            self.manner.into(),
        ]
    }
}

/// The three-feature matrix describing one vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VowelFeatures {
    pub height: Height,
    pub backness: Backness,
    pub rounding: Rounding,
}

impl VowelFeatures {
    pub fn new(height: Height, backness: Backness, rounding: Rounding) -> Self {
        Self {
            height,
            backness,
            rounding,
        }
    }

    pub fn features(&self) -> [Feature; 3] {
        [
            self.height.into(),
            self.backness.into(),
            self.rounding.into(),
        ]
    }
}

/// A full feature matrix: what the inventory records per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "features")]
#[serde(rename_all = "snake_case")]
pub enum FeatureMatrix {
    Consonant(ConsonantFeatures),
    Vowel(VowelFeatures),
}

impl FeatureMatrix {
    pub fn features(&self) -> [Feature; 3] {
        match self {
            FeatureMatrix::Consonant(features) => features.features(),
            FeatureMatrix::Vowel(features) => features.features(),
        }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, FeatureMatrix::Consonant(_))
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, FeatureMatrix::Vowel(_))
    }
}

impl fmt::Display for FeatureMatrix {
    /// Comma-joined labels, e.g. "voiced,bilabial,plosive".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.features();
        write!(f, "{a},{b},{c}")
    }
}
