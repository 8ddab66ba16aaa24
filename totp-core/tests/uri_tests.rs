#![allow(missing_docs)]
use totp_core::algorithm::HashAlgorithm;
use totp_core::totp::{Totp, TotpParameters};
use totp_core::uri;

const SHARED_SECRET: &str = "NM2VG3CRIVBVGMLKMFUWIRDEJJUE4STGKVGW4T2SNJVE6MBWHFWTCUCVOZYWQMLPPJJFQMLJIFEEY23IGNDDSYKNKZTFON3VMNXFC4ZQNVCWE2SXKRRUY6DYO5BWQSBXMNGVETD2KZWUWV2XJBGVOULUKRLU2MLV";

fn bare_engine(algorithm: HashAlgorithm, algorithm_in_uri: bool) -> Totp {
    Totp::new(TotpParameters {
        secret: SHARED_SECRET.to_string(),
        algorithm: Some(algorithm),
        algorithm_in_uri,
        ..TotpParameters::default()
    })
    .expect("the fixture secret is valid base32")
}

#[test]
fn test_escaping_keeps_spaces_literal() {
    assert_eq!(
        uri::query_escape("This is ~!@#$%^&*()_+"),
        "This is ~%21%40%23%24%25%5E%26%2A%28%29_%2B"
    );
}

#[test]
fn test_escaping_leaves_unreserved_text_alone() {
    assert_eq!(uri::query_escape("ABCxyz019-_.~ "), "ABCxyz019-_.~ ");
}

#[test]
fn test_escaping_is_utf8_aware() {
    assert_eq!(uri::query_escape("Café"), "Caf%C3%A9");
}

#[test]
fn test_plus_variant_renders_spaces_as_plus() {
    assert_eq!(uri::query_escape_plus("My Company"), "My+Company");
}

#[test]
fn test_uri_with_empty_label_and_issuer() {
    let totp = bare_engine(HashAlgorithm::Sha1, false);
    assert_eq!(
        totp.provisioning_uri(),
        format!("otpauth://totp/?secret={SHARED_SECRET}&digits=6&period=30&issuer=")
    );
}

#[test]
fn test_uri_algorithm_parameter_is_opt_in() {
    assert!(
        bare_engine(HashAlgorithm::Sha1, true)
            .provisioning_uri()
            .ends_with("&algorithm=sha1")
    );
    assert!(
        bare_engine(HashAlgorithm::Sha256, true)
            .provisioning_uri()
            .ends_with("&algorithm=sha256")
    );
    assert!(
        bare_engine(HashAlgorithm::Sha512, true)
            .provisioning_uri()
            .ends_with("&algorithm=sha512")
    );
    assert!(
        !bare_engine(HashAlgorithm::Sha512, false)
            .provisioning_uri()
            .contains("algorithm")
    );
}

#[test]
fn test_uri_label_and_issuer_keep_their_spaces() {
    let totp = Totp::new(TotpParameters {
        secret: SHARED_SECRET.to_string(),
        label: "My Name".to_string(),
        issuer: "My Company".to_string(),
        ..TotpParameters::default()
    })
    .expect("the fixture secret is valid base32");
    let uri = totp.provisioning_uri();
    assert!(uri.starts_with("otpauth://totp/My Name?secret="));
    assert!(uri.ends_with("&issuer=My Company"));
}

#[test]
fn test_chart_url_embeds_the_escaped_uri() {
    let totp = bare_engine(HashAlgorithm::Sha1, false);
    assert_eq!(
        totp.chart_url(),
        format!(
            "https://chart.googleapis.com/chart?cht=qr&chs=200x200&chl=otpauth%3A%2F%2Ftotp%2F%3Fsecret%3D{SHARED_SECRET}%26digits%3D6%26period%3D30%26issuer%3D"
        )
    );
}
