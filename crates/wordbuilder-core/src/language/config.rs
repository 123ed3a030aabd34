use serde::{Deserialize, Serialize};

/// Options for building a single word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordOptions {
    /// Number of syllables in the root.
    pub syllables: usize,
    /// Format the result as a proper name.
    pub proper: bool,
    /// Properties whose affixes get attached, in order.
    pub properties: Vec<String>,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            syllables: 2,
            proper: false,
            properties: Vec::new(),
        }
    }
}

impl WordOptions {
    /// A root with the given number of syllables and no affixes.
    pub fn with_syllables(syllables: usize) -> Self {
        Self {
            syllables,
            ..Self::default()
        }
    }

    /// Attach the affix for a property, builder style.
    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    /// Format the result as a proper name, builder style.
    pub fn proper(mut self) -> Self {
        self.proper = true;
        self
    }
}
