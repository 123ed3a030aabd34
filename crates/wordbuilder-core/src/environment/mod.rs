//! Phonological environments: the context a sound change applies in.
//!
//! An environment is an ordered sequence of slots holding the focus marker
//! (`_`) exactly once, plus a natural-language rendering of that context,
//! e.g. "before a vowel" or "between a consonant and a vowel".

mod renderer;
mod types;

pub use types::{Environment, Slot, Structure, FOCUS_TOKEN};
