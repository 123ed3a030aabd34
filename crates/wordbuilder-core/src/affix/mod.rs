//! Affixes: bound morphemes attached to a root for a word property.
//!
//! Affixes are written with the dash convention: `t-` is a prefix, `-gud` is
//! a suffix.

mod store;
mod types;

pub use store::Affixes;
pub use types::{Affix, POSITION_MARKER};
