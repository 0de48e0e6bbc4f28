//! InfluxDB line protocol encoding.
//!
//! `measurement[,tag=value...] field=value[,field=value...]`
//!
//! No timestamp is written; the backend stamps points on arrival. Tags whose
//! value is the empty string are skipped because the backend refuses them.

use std::fmt::Write;

use crate::error::BackendError;
use crate::point::{Point, TagValue};

fn escape_measurement(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '\\' | ',' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}

/// Tag keys, tag values and field keys share one escape set. Backslashes are
/// doubled so an input `\` can never swallow a separator.
fn escape_key(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '\\' | ',' | '=' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}

/// Tag value escaping. A value that still ends in `\` after escaping gets a
/// trailing space so the following `,` or ` ` stays a separator.
fn escape_tag_value(s: &str, out: &mut String) {
    escape_key(s, out);
    if out.ends_with('\\') {
        out.push(' ');
    }
}

fn tag_text(v: &TagValue) -> &str {
    match v {
        TagValue::Str(s) => s,
        TagValue::Bool(true) => "True",
        TagValue::Bool(false) => "False",
    }
}

/// Encode a single point as one line (without trailing newline).
pub fn encode_point(point: &Point) -> Result<String, BackendError> {
    if point.name().is_empty() {
        return Err(BackendError::Encode("measurement name is empty".into()));
    }
    if point.fields().is_empty() {
        return Err(BackendError::Encode(format!(
            "point {} has no fields",
            point.name()
        )));
    }

    let mut out = String::with_capacity(128);
    escape_measurement(point.name(), &mut out);

    for (k, v) in point.tags() {
        let text = tag_text(v);
        if k.is_empty() || text.is_empty() {
            continue;
        }
        out.push(',');
        escape_key(k, &mut out);
        out.push('=');
        escape_tag_value(text, &mut out);
    }

    let mut sep = ' ';
    for (k, v) in point.fields() {
        out.push(sep);
        escape_key(k, &mut out);
        let _ = write!(out, "={v}i");
        sep = ',';
    }

    Ok(out)
}

/// Encode a batch, one line per point, joined by `\n`.
pub fn encode_points(points: &[Point]) -> Result<String, BackendError> {
    let lines = points
        .iter()
        .map(encode_point)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
