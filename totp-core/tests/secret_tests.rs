#![allow(missing_docs)]
use totp_core::defaults;
use totp_core::secret;

#[test]
fn test_base32_round_trip() {
    let cases: [&[u8]; 6] = [
        b"",
        b"\x00",
        b"\xff\x00\x07",
        b"hi",
        b"hello",
        b"a longer, non-aligned byte sequence!",
    ];
    for bytes in cases {
        let encoded = secret::encode_base32(bytes);
        let decoded = secret::decode_base32(&encoded).expect("encoder output must decode");
        assert_eq!(decoded, bytes);
    }
}

#[test]
fn test_known_base32_mapping() {
    // The RFC 4226 reference secret and a short padded case.
    assert_eq!(
        secret::text_to_base32("12345678901234567890"),
        "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ"
    );
    assert_eq!(secret::encode_base32(b"hi"), "NBUQ====");
    assert_eq!(
        secret::decode_base32("NBUQ====").expect("padded input decodes"),
        b"hi"
    );
}

#[test]
fn test_decode_rejects_malformed_text() {
    assert!(secret::decode_base32("!!! not base32 !!!").is_err());
}

#[test]
fn test_random_secret_is_alphanumeric_text() {
    let text = secret::random_secret(20, false).expect("entropy source available");
    assert_eq!(text.len(), 20);
    assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_encoded_random_secret_decodes_to_requested_length() {
    let encoded = secret::random_secret(20, true).expect("entropy source available");
    let decoded = secret::decode_base32(&encoded).expect("generated secret decodes");
    assert_eq!(decoded.len(), 20);
    assert!(decoded.iter().all(u8::is_ascii_alphanumeric));
}

#[test]
fn test_random_secrets_differ() {
    let first = secret::random_secret(defaults::DEFAULT_RANDOM_SECRET_LENGTH, true)
        .expect("entropy source available");
    let second = secret::random_secret(defaults::DEFAULT_RANDOM_SECRET_LENGTH, true)
        .expect("entropy source available");
    assert_ne!(first, second);
}

#[test]
fn test_random_bytes_length() {
    let bytes = secret::random_bytes(32).expect("entropy source available");
    assert_eq!(bytes.len(), 32);
}
