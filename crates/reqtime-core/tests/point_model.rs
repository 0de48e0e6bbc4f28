//! Point construction and tag normalization.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqtime_core::{Point, TagValue};

#[test]
fn absent_tag_values_become_empty_strings() {
    let p = Point::builder("request")
        .tag("referer", None::<&str>)
        .tag("content_type", None::<String>)
        .field("value", 3)
        .build();

    assert_eq!(p.tag("referer"), Some(&TagValue::Str(String::new())));
    assert_eq!(p.tag("content_type").and_then(TagValue::as_str), Some(""));
}

#[test]
fn later_tag_replaces_earlier() {
    let p = Point::builder("request")
        .tag("view", "first")
        .tag("view", "second")
        .field("value", 1)
        .build();

    assert_eq!(p.tag("view").and_then(TagValue::as_str), Some("second"));
    assert_eq!(p.tags().len(), 1);
    assert_eq!(p.field("value"), Some(1));
    assert_eq!(p.field("missing"), None);
}

#[test]
fn bool_tags_keep_their_type() {
    let p = Point::builder("request")
        .tag("is_ajax", true)
        .field("value", 0)
        .build();
    assert_eq!(p.tag("is_ajax").and_then(TagValue::as_bool), Some(true));
    assert_eq!(p.tag("is_ajax").and_then(TagValue::as_str), None);
}
