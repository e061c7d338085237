use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrafficError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TrafficError::unknown_level("x")
            .to_string()
            .contains("unknown traffic level:")
    );
    assert!(
        TrafficError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        TrafficError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrafficError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
