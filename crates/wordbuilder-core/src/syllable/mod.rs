//! Syllable templates: the shapes (`C V C`) words are assembled from.

mod patterns;
mod types;

pub use patterns::Syllables;
pub use types::{Segment, CONSONANT_TOKEN, VOWEL_TOKEN};
