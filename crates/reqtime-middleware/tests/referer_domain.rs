#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqtime_core::TldError;
use reqtime_middleware::tld::{PublicSuffixResolver, TldResolver};

#[test]
fn multi_label_suffix() {
    let r = PublicSuffixResolver;
    assert_eq!(
        r.registrable_domain("https://www.google.co.uk/search?q=rust").unwrap(),
        "google.co.uk"
    );
    assert_eq!(
        r.registrable_domain("http://blog.example.com:8080/").unwrap(),
        "example.com"
    );
}

#[test]
fn malformed_url() {
    let err = PublicSuffixResolver.registrable_domain("not a url").unwrap_err();
    assert!(matches!(err, TldError::BadUrl(_)));
}

#[test]
fn url_without_host() {
    let err = PublicSuffixResolver
        .registrable_domain("mailto:someone@example.com")
        .unwrap_err();
    assert_eq!(err, TldError::NoHost);
}

#[test]
fn ip_host_has_no_domain() {
    let err = PublicSuffixResolver
        .registrable_domain("http://127.0.0.1:8000/admin/")
        .unwrap_err();
    assert!(matches!(err, TldError::DomainNotFound(_)));
}
