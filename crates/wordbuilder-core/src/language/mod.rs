//! Word building: a language ties an inventory, syllable templates, and
//! affixes together, and stores what it builds in a two-way lexicon.

mod builder;
mod config;
mod lexicon;

pub use builder::{format_name, Language};
pub use config::WordOptions;
pub use lexicon::Lexicon;
