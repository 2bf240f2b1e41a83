/// Failures surfaced to conversion callers.
///
/// Lookup misses, unparseable tokens, and preserve-source faults are not
/// errors; they resolve to in-band fallbacks inside the pipeline. The only
/// hard precondition is a resident dictionary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("conversion resources not ready (dictionary not initialized)")]
    ResourcesNotReady,
}
