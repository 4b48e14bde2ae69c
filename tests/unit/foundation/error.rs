use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GraffitiError::unsupported("x")
            .to_string()
            .contains("unsupported environment:")
    );
    assert!(GraffitiError::render("x").to_string().contains("render error:"));
    assert!(GraffitiError::export("x").to_string().contains("export error:"));
    assert!(
        GraffitiError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GraffitiError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_render_and_export_failures_are_retryable() {
    assert!(GraffitiError::render("x").is_retryable());
    assert!(GraffitiError::export("x").is_retryable());
    assert!(!GraffitiError::unsupported("x").is_retryable());
    assert!(!GraffitiError::validation("x").is_retryable());
}
