use itemfeed::{ItemfeedError, Result};

#[test]
fn test_error_display() {
    let err = ItemfeedError::Transport("connection refused".to_string());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_not_implemented() {
    let err = ItemfeedError::NotImplemented("getPage");
    assert!(err.to_string().contains("not implemented"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(ItemfeedError::Timeout)
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Transient error classification
// ============================================================================

#[test]
fn transient_errors() {
    assert!(ItemfeedError::Transport("reset".into()).is_transient());
    assert!(ItemfeedError::Stream("broken mid-call".into()).is_transient());
    assert!(ItemfeedError::Timeout.is_transient());
}

#[test]
fn permanent_errors() {
    assert!(!ItemfeedError::InvalidInput("bad length".into()).is_transient());
    assert!(!ItemfeedError::Configuration("no address".into()).is_transient());
    assert!(!ItemfeedError::NotImplemented("getPage").is_transient());
}
