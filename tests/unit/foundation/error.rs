use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WalletQrError::invalid_address("x")
            .to_string()
            .contains("invalid wallet address:")
    );
    assert!(
        WalletQrError::invalid_config("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        WalletQrError::resource("x")
            .to_string()
            .contains("resource error:")
    );
    assert!(
        WalletQrError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WalletQrError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn generation_keeps_cause_message_and_kind() {
    let err = WalletQrError::generation(WalletQrError::invalid_config("box_size must be > 0"));
    let msg = err.to_string();
    assert!(msg.contains("generation failed:"));
    assert!(msg.contains("box_size must be > 0"));
    assert!(matches!(err.cause(), WalletQrError::InvalidConfig(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn generation_does_not_double_wrap() {
    let once = WalletQrError::generation(WalletQrError::serde("bad"));
    let twice = WalletQrError::generation(once);
    let WalletQrError::Generation(inner) = &twice else {
        panic!("expected generation error");
    };
    assert!(matches!(inner.as_ref(), WalletQrError::Serde(_)));
}
