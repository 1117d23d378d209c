use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step into a JSON document: an object key or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member lookup
    Key(&'static str),
    /// Array element lookup
    Index(usize),
}

/// Location of a value inside the decoded document, e.g. `artists.items[0].id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Path of the document root
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of member `key` below this one
    #[must_use]
    pub fn key(&self, key: &'static str) -> Self {
        self.push(PathSegment::Key(key))
    }

    /// Path of element `index` below this one
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Segments from the root down
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Kind of a JSON value, as reported in type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Any whole number fitting `i64`; only ever expected, never reported
    Integer,
    /// A number representable as `u64`
    UnsignedInteger,
    /// A number below zero with no fractional part
    NegativeInteger,
    /// Any other number
    Float,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl JsonKind {
    /// Classify `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if n.is_u64() => JsonKind::UnsignedInteger,
            Value::Number(n) if n.is_i64() => JsonKind::NegativeInteger,
            Value::Number(_) => JsonKind::Float,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::UnsignedInteger => "unsigned integer",
            JsonKind::NegativeInteger => "negative integer",
            JsonKind::Float => "floating-point number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        })
    }
}

/// Reasons a search response could not be decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer is not syntactically valid JSON (or not UTF-8)
    #[error("Malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A required key is absent
    #[error("Missing required field: {0}")]
    MissingField(FieldPath),

    /// A key is present but holds the wrong kind of value
    #[error("Type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Where the offending value sits
        path: FieldPath,
        /// What the schema asks for
        expected: JsonKind,
        /// What the document holds
        actual: JsonKind,
    },
}

impl DecodeError {
    pub(crate) fn type_mismatch(path: FieldPath, expected: JsonKind, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            path,
            expected,
            actual: JsonKind::of(found),
        }
    }

    /// Location of the failure, if the document parsed at all.
    #[must_use]
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            DecodeError::MalformedInput(_) => None,
            DecodeError::MissingField(path) | DecodeError::TypeMismatch { path, .. } => Some(path),
        }
    }
}
