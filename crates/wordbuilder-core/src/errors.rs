//! Error types shared across the crate.

/// Errors from the environment component.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    #[error("cannot render an invalid environment structure")]
    InvalidStructure,
}

/// Errors from affix parsing and attachment.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AffixError {
    #[error("no affix registered for property: {property}")]
    UnknownProperty { property: String },

    #[error("affix has no leading or trailing position marker: {affix}")]
    MissingPositionMarker { affix: String },
}

/// Errors from word building.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("no syllable patterns registered")]
    NoSyllablePatterns,

    #[error("inventory has no {class} to fill a syllable slot")]
    EmptyLetterClass { class: &'static str },

    #[error(transparent)]
    Affix(#[from] AffixError),
}
