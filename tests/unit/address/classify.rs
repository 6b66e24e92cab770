use super::*;

#[test]
fn short_inputs_are_invalid() {
    for s in ["", "short", "0xinvalid", "123456789", "         "] {
        assert_eq!(validate_address(s), (false, "invalid"), "input {s:?}");
    }
}

#[test]
fn ethereum_shape_is_detected() {
    let c = classify("0x742d35Cc6634C0532925a3b844Bc9e90a3b9e0a1");
    assert!(c.valid);
    assert_eq!(c.family, AddressFamily::Ethereum);
    assert_eq!(
        validate_address("0x1234567890abcdef1234567890abcdef12345678"),
        (true, "ethereum")
    );
}

#[test]
fn families_follow_priority_order() {
    let cases = [
        ("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq", "bitcoin"),
        ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "bitcoin"),
        ("LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", "litecoin"),
        ("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T", "solana"),
        ("dGhpcyBpcyBhIHRlc3Q=", "base64"),
        ("UQDe1kBdULQE3RBtE24jIZYDD7nPov5S-xM-PA3dCzGXHc7X", "generic"),
        ("wallet.name_01", "generic"),
    ];
    for (addr, tag) in cases {
        assert_eq!(validate_address(addr), (true, tag), "input {addr}");
    }
}

#[test]
fn surrounding_whitespace_is_trimmed_before_matching() {
    assert_eq!(
        validate_address("  0x742d35Cc6634C0532925a3b844Bc9e90a3b9e0a1\n"),
        (true, "ethereum")
    );
}

#[test]
fn unmatched_inputs_are_unknown() {
    assert_eq!(validate_address("address with spaces"), (false, "unknown"));
    assert_eq!(validate_address("wallet#1234567"), (false, "unknown"));
}

#[test]
fn require_valid_maps_rejection_to_error() {
    assert_eq!(
        require_valid("0x742d35Cc6634C0532925a3b844Bc9e90a3b9e0a1").unwrap(),
        AddressFamily::Ethereum
    );
    let err = require_valid("nope").unwrap_err();
    assert!(matches!(err, WalletQrError::InvalidAddress(_)));
    assert!(err.to_string().contains("invalid"));
}
