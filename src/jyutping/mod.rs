//! Jyutping syllable model and parser.

mod parse;
mod syllable;

pub use parse::parse;
pub use syllable::{Coda, Initial, Nucleus, ParseOutcome, Syllable};
