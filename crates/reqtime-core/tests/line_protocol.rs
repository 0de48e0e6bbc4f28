//! Line protocol encoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqtime_core::line::{encode_point, encode_points};
use reqtime_core::{BackendError, Point};

#[test]
fn encodes_tags_in_key_order_with_integer_field() {
    let p = Point::builder("django_request")
        .tag("method", "GET")
        .tag("host", "web-1")
        .tag("is_ajax", false)
        .field("value", 2)
        .build();

    assert_eq!(
        encode_point(&p).unwrap(),
        "django_request,host=web-1,is_ajax=False,method=GET value=2i"
    );
}

#[test]
fn escapes_special_characters() {
    let p = Point::builder("my request,x")
        .tag("content type", "text/html; charset=utf-8")
        .tag("full_path", "/a?b=c,d")
        .field("value", 0)
        .build();

    assert_eq!(
        encode_point(&p).unwrap(),
        r"my\ request\,x,content\ type=text/html;\ charset\=utf-8,full_path=/a?b\=c\,d value=0i"
    );
}

#[test]
fn trailing_backslash_does_not_swallow_next_tag() {
    let p = Point::builder("request")
        .tag("referer", r"http://a.com/x\")
        .tag("referer_tld", "a.com")
        .field("value", 1)
        .build();

    assert_eq!(
        encode_point(&p).unwrap(),
        r"request,referer=http://a.com/x\\ ,referer_tld=a.com value=1i"
    );
}

#[test]
fn escapes_backslash_and_newline() {
    let p = Point::builder(r"req\uest")
        .tag(r"a\b", "c\\d\ne")
        .field("value", 4)
        .build();

    assert_eq!(
        encode_point(&p).unwrap(),
        r"req\\uest,a\\b=c\\d\ne value=4i"
    );
}

#[test]
fn skips_empty_tag_values() {
    let p = Point::builder("request")
        .tag("referer", "")
        .tag("referer_tld", None::<String>)
        .tag("is_staff", true)
        .field("value", 17)
        .build();

    assert_eq!(encode_point(&p).unwrap(), "request,is_staff=True value=17i");
}

#[test]
fn rejects_point_without_fields() {
    let p = Point::builder("request").tag("host", "a").build();
    let err = encode_point(&p).unwrap_err();
    assert!(matches!(err, BackendError::Encode(_)));
}

#[test]
fn batch_is_newline_joined() {
    let a = Point::builder("a").field("value", 1).build();
    let b = Point::builder("b").field("value", 2).build();
    assert_eq!(encode_points(&[a, b]).unwrap(), "a value=1i\nb value=2i");
    assert_eq!(encode_points(&[]).unwrap(), "");
}
