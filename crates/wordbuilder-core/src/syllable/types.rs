use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

use crate::inventory::Feature;

/// Template token for a generic consonant slot.
pub const CONSONANT_TOKEN: &str = "C";
/// Template token for a generic vowel slot.
pub const VOWEL_TOKEN: &str = "V";

/// One position of a syllable template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Any consonant from the inventory (`C`).
    Consonant,
    /// Any vowel from the inventory (`V`).
    Vowel,
    /// A specific grapheme, used verbatim.
    Letter(String),
    /// Any letter carrying all of these features.
    Features(SmallVec<[Feature; 3]>),
}

impl Segment {
    /// Classify a single template token.
    ///
    /// `C` and `V` take precedence, then feature labels (single or
    /// comma-separated), then a verbatim letter. Unknown labels inside a
    /// comma-separated list are dropped rather than demoting the token to a
    /// letter.
    pub fn parse(token: &str) -> Self {
        if token == CONSONANT_TOKEN {
            return Segment::Consonant;
        }
        if token == VOWEL_TOKEN {
            return Segment::Vowel;
        }
        if token.contains(',') {
            let features = token
                .split(',')
                .filter_map(|label| Feature::from_label(label.trim()))
                .collect();
            return Segment::Features(features);
        }
        match Feature::from_label(token) {
            Some(feature) => Segment::Features(smallvec![feature]),
            None => Segment::Letter(token.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Consonant => f.write_str(CONSONANT_TOKEN),
            Segment::Vowel => f.write_str(VOWEL_TOKEN),
            Segment::Letter(letter) => f.write_str(letter),
            Segment::Features(features) => {
                let labels: Vec<&str> = features.iter().map(Feature::as_str).collect();
                f.write_str(&labels.join(","))
            }
        }
    }
}
