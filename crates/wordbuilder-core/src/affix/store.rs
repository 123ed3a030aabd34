use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::Affix;
use crate::errors::AffixError;

/// Affixes keyed by the word property they mark ("plural", "strong", ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affixes {
    by_property: FxHashMap<String, Affix>,
}

impl Affixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the affix attached for a property.
    pub fn add(&mut self, property: impl Into<String>, affix: Affix) {
        self.by_property.insert(property.into(), affix);
    }

    pub fn get(&self, property: &str) -> Option<&Affix> {
        self.by_property.get(property)
    }

    pub fn is_empty(&self) -> bool {
        self.by_property.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_property.len()
    }

    /// Attach the affix registered for a property to a root.
    pub fn attach(&self, root: Vec<String>, property: &str) -> Result<Vec<String>, AffixError> {
        let affix = self
            .by_property
            .get(property)
            .ok_or_else(|| AffixError::UnknownProperty {
                property: property.to_string(),
            })?;
        let word = match affix {
            Affix::Prefix(letters) => {
                let mut word = letters.clone();
                word.extend(root);
                word
            }
            Affix::Suffix(letters) => {
                let mut word = root;
                word.extend(letters.iter().cloned());
                word
            }
        };
        debug!(property, word = %word.concat(), "attached affix to root");
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AffixError;

    fn letters(word: &[&str]) -> Vec<String> {
        word.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_attach_prefix() {
        let mut affixes = Affixes::new();
        affixes.add("strong", Affix::prefix(["t"]));
        let word = affixes.attach(letters(&["a", "b"]), "strong").unwrap();
        assert_eq!(word, letters(&["t", "a", "b"]));
    }

    #[test]
    fn test_attach_suffix() {
        let mut affixes = Affixes::new();
        affixes.add("human", Affix::suffix(["g", "u", "d"]));
        let word = affixes.attach(letters(&["a"]), "human").unwrap();
        assert_eq!(word, letters(&["a", "g", "u", "d"]));
    }

    #[test]
    fn test_attach_unknown_property_fails() {
        let affixes = Affixes::new();
        assert_eq!(
            affixes.attach(letters(&["a"]), "plural"),
            Err(AffixError::UnknownProperty {
                property: "plural".to_string(),
            }),
        );
    }
}
