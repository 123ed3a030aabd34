use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AffixError;

/// Marker used in affix token lists to show the attachment side.
pub const POSITION_MARKER: &str = "-";

/// A bound morpheme and the side of the root it attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "letters")]
#[serde(rename_all = "snake_case")]
pub enum Affix {
    /// Letters prepended to the root (`t-`).
    Prefix(Vec<String>),
    /// Letters appended to the root (`-gud`).
    Suffix(Vec<String>),
}

impl Affix {
    /// A prefix from its letters.
    pub fn prefix<I, S>(letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Affix::Prefix(letters.into_iter().map(Into::into).collect())
    }

    /// A suffix from its letters.
    pub fn suffix<I, S>(letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Affix::Suffix(letters.into_iter().map(Into::into).collect())
    }

    /// Parse the dash convention: a trailing `-` marks a prefix, a leading
    /// `-` marks a suffix. The trailing check wins if both are present.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, AffixError> {
        let letters: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        if letters.len() > 1 && letters.last().map(String::as_str) == Some(POSITION_MARKER) {
            return Ok(Affix::Prefix(letters[..letters.len() - 1].to_vec()));
        }
        if letters.len() > 1 && letters.first().map(String::as_str) == Some(POSITION_MARKER) {
            return Ok(Affix::Suffix(letters[1..].to_vec()));
        }
        Err(AffixError::MissingPositionMarker {
            affix: letters.concat(),
        })
    }

    /// The affix letters, whichever side they attach to.
    pub fn letters(&self) -> &[String] {
        match self {
            Affix::Prefix(letters) | Affix::Suffix(letters) => letters,
        }
    }
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affix::Prefix(letters) => write!(f, "{}{POSITION_MARKER}", letters.concat()),
            Affix::Suffix(letters) => write!(f, "{POSITION_MARKER}{}", letters.concat()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trailing_marker_is_prefix() {
        assert_eq!(Affix::parse(&["t", "-"]).unwrap(), Affix::prefix(["t"]));
    }

    #[test]
    fn test_parse_leading_marker_is_suffix() {
        assert_eq!(
            Affix::parse(&["-", "g", "u", "d"]).unwrap(),
            Affix::suffix(["g", "u", "d"]),
        );
    }

    #[test]
    fn test_parse_without_marker_fails() {
        assert_eq!(
            Affix::parse(&["g", "u", "d"]),
            Err(AffixError::MissingPositionMarker {
                affix: "gud".to_string(),
            }),
        );
        assert!(Affix::parse(&["-"]).is_err());
    }

    #[test]
    fn test_display_uses_dash_convention() {
        assert_eq!(Affix::prefix(["t"]).to_string(), "t-");
        assert_eq!(Affix::suffix(["i", "d"]).to_string(), "-id");
    }
}
