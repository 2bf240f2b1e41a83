use std::sync::Arc;

use tracing::debug_span;

use crate::convert::{convert_with, ConversionResult};
use crate::dict::Romanization;
use crate::error::EngineError;
use crate::preserve::{terms_or_empty, LexiconPreserve, PreserveSource};
use crate::resources;

/// Conversion entrypoint: a dictionary plus a preserve-term source.
///
/// All per-call state is local, so one engine can serve concurrent
/// `convert` calls.
pub struct ZhengyuEngine {
    dict: Arc<dyn Romanization>,
    preserve: Arc<dyn PreserveSource>,
}

impl ZhengyuEngine {
    pub fn new(dict: Arc<dyn Romanization>, preserve: Arc<dyn PreserveSource>) -> Self {
        Self { dict, preserve }
    }

    /// Build an engine on the process-wide dictionary. Fails until
    /// [`resources::init_dictionary`] has run.
    pub fn with_resources(preserve: Arc<dyn PreserveSource>) -> Result<Self, EngineError> {
        Ok(Self::new(resources::dictionary()?, preserve))
    }

    /// Convert `text` into the three output streams. Deterministic for a
    /// fixed dictionary and preserve source; preserve-source failures
    /// degrade to full phoneticization.
    pub fn convert(&self, text: &str) -> ConversionResult {
        let _span = debug_span!("convert", chars = text.chars().count()).entered();
        let terms = terms_or_empty(self.preserve.as_ref(), text);
        convert_with(self.dict.as_ref(), &terms, text)
    }
}

/// Convert with the process-wide dictionary and the built-in preserve
/// lexicon.
pub fn convert(text: &str) -> Result<ConversionResult, EngineError> {
    let engine = ZhengyuEngine::with_resources(Arc::new(LexiconPreserve::default_lexicon()))?;
    Ok(engine.convert(text))
}
