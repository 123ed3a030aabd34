//! wordbuilder-core: phonology-driven word building
//!
//! This crate provides the components for modeling a constructed language's
//! sound system and building words from it:
//! - Environment: sound-change contexts and their natural-language rendering
//! - Inventory: letters indexed by phonological feature matrices
//! - Syllable: syllable templates (`C V C`) and their segments
//! - Affix: property-keyed prefixes and suffixes
//! - Language: the word builder and its two-way lexicon

pub mod affix;
pub mod environment;
pub mod errors;
pub mod inventory;
pub mod language;
pub mod syllable;

// Re-exports for convenience
pub use affix::{Affix, Affixes};
pub use environment::{Environment, Slot, Structure, FOCUS_TOKEN};
pub use errors::{AffixError, BuildError, EnvironmentError};
pub use inventory::{
    Backness, ConsonantFeatures, Feature, FeatureMatrix, Height, Inventory, Manner, Place,
    Rounding, Voicing, VowelFeatures,
};
pub use language::{Language, Lexicon, WordOptions};
pub use syllable::{Segment, Syllables};
