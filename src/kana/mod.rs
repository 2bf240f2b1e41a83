//! Kana rendering of parsed Jyutping syllables.

mod map;
mod table;

pub use map::{map_outcome, map_to_kana};
pub use table::{LONG_MARK, NASAL_MARK, STOP_MARK};
