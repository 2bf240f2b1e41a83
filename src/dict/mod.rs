pub mod builtin;
mod char_dict;

pub use char_dict::CharDictionary;

use std::io;

/// Error type for dictionary source parsing and binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected ZYDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Character-to-romanization lookup capability.
///
/// A miss is not an error; the segmentation pipeline falls back to the
/// character itself.
pub trait Romanization: Send + Sync {
    fn lookup(&self, ch: char) -> Option<&str>;

    /// Batch form, same order and length as the input.
    fn lookup_many(&self, chars: &[char]) -> Vec<Option<&str>> {
        chars.iter().map(|&c| self.lookup(c)).collect()
    }
}
