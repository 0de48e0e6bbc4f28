//! Measurement points.
//!
//! A [`Point`] is built once through [`PointBuilder`] and has no mutating
//! accessors afterwards. Tag values are always primitive; absent inputs are
//! turned into an empty string when the tag is added.

use std::collections::BTreeMap;

/// Primitive tag value. There is no null variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Str(String),
    Bool(bool),
}

impl TagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Str(s) => Some(s),
            TagValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TagValue::Bool(b) => Some(*b),
            TagValue::Str(_) => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(v: &str) -> Self {
        TagValue::Str(v.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(v: String) -> Self {
        TagValue::Str(v)
    }
}

impl From<bool> for TagValue {
    fn from(v: bool) -> Self {
        TagValue::Bool(v)
    }
}

impl From<Option<String>> for TagValue {
    fn from(v: Option<String>) -> Self {
        TagValue::Str(v.unwrap_or_default())
    }
}

impl From<Option<&str>> for TagValue {
    fn from(v: Option<&str>) -> Self {
        TagValue::Str(v.unwrap_or_default().to_owned())
    }
}

/// One tagged, field-valued sample for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    name: String,
    tags: BTreeMap<String, TagValue>,
    fields: BTreeMap<String, i64>,
}

impl Point {
    pub fn builder(name: impl Into<String>) -> PointBuilder {
        PointBuilder {
            name: name.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &BTreeMap<String, TagValue> {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, i64> {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<i64> {
        self.fields.get(key).copied()
    }
}

#[derive(Debug)]
pub struct PointBuilder {
    name: String,
    tags: BTreeMap<String, TagValue>,
    fields: BTreeMap<String, i64>,
}

impl PointBuilder {
    /// Add a tag. Later calls with the same key replace earlier ones.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: i64) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Point {
        Point {
            name: self.name,
            tags: self.tags,
            fields: self.fields,
        }
    }
}
