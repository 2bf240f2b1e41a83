//! Runs in its own process: nothing here may install the process-wide
//! dictionary before the assertion.

use zhengyu_engine::{convert, EngineError};

#[test]
fn test_convert_refuses_before_init() {
    match convert("我食飯") {
        Err(EngineError::ResourcesNotReady) => {}
        other => panic!("expected ResourcesNotReady, got {other:?}"),
    }
}
