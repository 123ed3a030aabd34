use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::renderer;
use crate::errors::EnvironmentError;

/// Token that marks the position where a sound change applies.
pub const FOCUS_TOKEN: &str = "_";

/// One slot of an environment structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The `_` marker: the position where the sound change occurs.
    Focus,
    /// A bare phonological category name, e.g. "vowel".
    Category(String),
    /// An ordered, non-empty bundle of feature labels attached to one slot.
    Features(SmallVec<[String; 3]>),
}

impl Slot {
    /// Classify a single pattern token.
    ///
    /// `_` is the focus marker, a comma-separated token is a feature bundle,
    /// anything else is a bare category label.
    pub fn parse(token: &str) -> Self {
        if token == FOCUS_TOKEN {
            Slot::Focus
        } else if token.contains(',') {
            Slot::Features(token.split(',').map(|label| label.trim().to_string()).collect())
        } else {
            Slot::Category(token.to_string())
        }
    }

    /// A category slot.
    pub fn category(label: impl Into<String>) -> Self {
        Slot::Category(label.into())
    }

    /// A feature-bundle slot.
    pub fn features<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Slot::Features(labels.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Focus => f.write_str(FOCUS_TOKEN),
            Slot::Category(label) => f.write_str(label),
            Slot::Features(labels) => f.write_str(&labels.join(",")),
        }
    }
}

/// A validated environment structure.
///
/// `Invalid` is a stored state, not an error: a candidate that fails
/// validation is kept as `Invalid`, and callers detect it by inspecting the
/// variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "slots")]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    /// An ordered slot sequence holding the focus marker exactly once.
    Valid(Vec<Slot>),
    /// The absence marker: no valid environment is stored.
    #[default]
    Invalid,
}

impl Structure {
    pub fn is_valid(&self) -> bool {
        matches!(self, Structure::Valid(_))
    }

    /// The slots when valid.
    pub fn slots(&self) -> Option<&[Slot]> {
        match self {
            Structure::Valid(slots) => Some(slots),
            Structure::Invalid => None,
        }
    }
}

/// A phonological environment: the context in which a sound change applies.
///
/// Construction and re-assignment both funnel through [`Environment::set`],
/// which stores [`Structure::Invalid`] when validation fails instead of
/// raising anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    structure: Structure,
}

impl Environment {
    /// Validate and store a candidate slot sequence.
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut env = Self {
            structure: Structure::Invalid,
        };
        env.set(slots);
        env
    }

    /// Parse a whitespace-separated pattern such as `"V _ V"`.
    pub fn from_pattern(pattern: &str) -> Self {
        Self::new(pattern.split_whitespace().map(Slot::parse).collect())
    }

    /// True iff the sequence contains the focus marker exactly once.
    pub fn is_structure(slots: &[Slot]) -> bool {
        slots.iter().filter(|slot| matches!(slot, Slot::Focus)).count() == 1
    }

    /// The single write path: replaces the whole stored structure.
    ///
    /// A candidate that fails validation is stored as [`Structure::Invalid`].
    pub fn set(&mut self, slots: Vec<Slot>) -> &Structure {
        self.structure = if Self::is_structure(&slots) {
            Structure::Valid(slots)
        } else {
            Structure::Invalid
        };
        &self.structure
    }

    /// The stored structure, verbatim.
    pub fn get(&self) -> &Structure {
        &self.structure
    }

    /// Render the stored structure as natural language.
    ///
    /// Fails with [`EnvironmentError::InvalidStructure`] when no valid
    /// structure is stored.
    pub fn pretty(&self) -> Result<String, EnvironmentError> {
        match self.structure.slots() {
            Some(slots) => Ok(renderer::describe(slots)),
            None => Err(EnvironmentError::InvalidStructure),
        }
    }
}

impl Default for Environment {
    /// An empty candidate fails validation, so the default holds `Invalid`.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_structure_requires_exactly_one_focus() {
        assert!(Environment::is_structure(&[Slot::Focus]));
        assert!(Environment::is_structure(&[
            Slot::category("vowel"),
            Slot::Focus,
            Slot::category("vowel"),
        ]));

        assert!(!Environment::is_structure(&[]));
        assert!(!Environment::is_structure(&[
            Slot::category("a"),
            Slot::category("b"),
        ]));
        assert!(!Environment::is_structure(&[Slot::Focus, Slot::Focus]));
    }

    #[test]
    fn test_new_stores_valid_candidate_verbatim() {
        let slots = vec![Slot::features(["consonant"]), Slot::Focus];
        let env = Environment::new(slots.clone());
        assert_eq!(env.get(), &Structure::Valid(slots));
    }

    #[test]
    fn test_new_stores_invalid_candidate_as_absence_marker() {
        let env = Environment::new(vec![Slot::category("a"), Slot::category("b")]);
        assert_eq!(env.get(), &Structure::Invalid);

        let env = Environment::new(vec![Slot::Focus, Slot::Focus]);
        assert_eq!(env.get(), &Structure::Invalid);
    }

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Environment::default().get(), &Structure::Invalid);
    }

    #[test]
    fn test_set_is_idempotent() {
        let slots = vec![Slot::Focus, Slot::category("vowel")];
        let mut env = Environment::new(slots.clone());
        let first = env.set(slots.clone()).clone();
        let second = env.set(slots.clone()).clone();
        assert_eq!(first, second);
        assert_eq!(env.get(), &Structure::Valid(slots));
    }

    #[test]
    fn test_set_replaces_whole_structure() {
        let mut env = Environment::new(vec![Slot::Focus]);
        env.set(vec![Slot::category("a")]);
        assert_eq!(env.get(), &Structure::Invalid);

        env.set(vec![Slot::category("a"), Slot::Focus]);
        assert!(env.get().is_valid());
    }

    #[test]
    fn test_slot_parse_classifies_tokens() {
        assert_eq!(Slot::parse("_"), Slot::Focus);
        assert_eq!(Slot::parse("vowel"), Slot::category("vowel"));
        assert_eq!(
            Slot::parse("voiced,plosive"),
            Slot::features(["voiced", "plosive"]),
        );
    }

    #[test]
    fn test_from_pattern() {
        let env = Environment::from_pattern("V _ V");
        assert_eq!(
            env.get(),
            &Structure::Valid(vec![
                Slot::category("V"),
                Slot::Focus,
                Slot::category("V"),
            ]),
        );

        assert_eq!(Environment::from_pattern("V V").get(), &Structure::Invalid);
    }

    #[test]
    fn test_slot_display_round_trips_tokens() {
        for token in ["_", "vowel", "voiced,plosive"] {
            assert_eq!(Slot::parse(token).to_string(), token);
        }
    }

    #[test]
    fn test_pretty_fails_on_invalid_structure() {
        let env = Environment::new(vec![Slot::category("a"), Slot::category("b")]);
        assert_eq!(env.pretty(), Err(EnvironmentError::InvalidStructure));
    }
}
