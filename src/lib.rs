//! Zhengyu transliteration engine.
//!
//! Converts Chinese text into Cantonese pronunciation rendered in a
//! kana-style phonetic script, preserving externally nominated spans
//! (pronouns, numerals, proper nouns, embedded ASCII, punctuation) as
//! logographs. The pipeline is dictionary lookup → Jyutping parse → kana
//! mapping, driven by a greedy longest-match segmentation walk.

pub mod convert;
pub mod dict;
pub mod engine;
pub mod error;
pub mod jyutping;
pub mod kana;
pub mod preserve;
pub mod resources;
pub mod trace_init;
pub mod unicode;

pub use convert::{convert_with, ConversionResult, Segment};
pub use engine::{convert, ZhengyuEngine};
pub use error::EngineError;
