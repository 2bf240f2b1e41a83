//! Process-wide dictionary residence.
//!
//! The dictionary is installed once behind an explicit init call and is
//! read-only afterwards. Conversion refuses to run before init rather than
//! silently degrading every lookup to the identity fallback.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::dict::CharDictionary;
use crate::error::EngineError;

static DICTIONARY: OnceLock<Arc<CharDictionary>> = OnceLock::new();

/// Install the process-wide dictionary. The first call wins; returns
/// `false` if a dictionary was already resident.
pub fn init_dictionary(dict: CharDictionary) -> bool {
    let entries = dict.len();
    let installed = DICTIONARY.set(Arc::new(dict)).is_ok();
    if installed {
        debug!(entries, "dictionary installed");
    }
    installed
}

/// Install the embedded seed dictionary. Convenience for tools and tests.
pub fn init_seed_dictionary() -> bool {
    init_dictionary(crate::dict::builtin::seed())
}

/// Fetch the resident dictionary, or fail if init has not happened.
pub fn dictionary() -> Result<Arc<CharDictionary>, EngineError> {
    DICTIONARY
        .get()
        .cloned()
        .ok_or(EngineError::ResourcesNotReady)
}
