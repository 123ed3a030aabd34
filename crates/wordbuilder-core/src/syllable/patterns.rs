use serde::{Deserialize, Serialize};

use super::types::Segment;

/// The set of syllable templates a language draws from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Syllables {
    patterns: Vec<Vec<Segment>>,
}

impl Syllables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, e.g. `[Consonant, Vowel, Consonant]`.
    pub fn add_pattern(&mut self, pattern: Vec<Segment>) {
        self.patterns.push(pattern);
    }

    /// Parse and register a whitespace-separated template such as `"C V C"`.
    pub fn add_pattern_str(&mut self, pattern: &str) {
        self.add_pattern(pattern.split_whitespace().map(Segment::parse).collect());
    }

    pub fn patterns(&self) -> &[Vec<Segment>] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}
