use serde_json::{Map, Value};

use crate::search::errors::{DecodeError, FieldPath, JsonKind};

/// Decode mode for the few fields where a missing, `null` or mistyped value
/// means "no value". Every other field is required and fails the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestEffort;

impl BestEffort {
    /// Turn any decode failure into `None`.
    pub fn apply<T>(decoded: Result<T, DecodeError>) -> Option<T> {
        decoded.ok()
    }
}

pub(crate) fn expect_string(value: &Value, path: FieldPath) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DecodeError::type_mismatch(path, JsonKind::String, other)),
    }
}

pub(crate) fn expect_integer(value: &Value, path: FieldPath) -> Result<i64, DecodeError> {
    whole_number(value)
        .and_then(|n| i64::try_from(n).ok())
        .ok_or_else(|| DecodeError::type_mismatch(path, JsonKind::Integer, value))
}

pub(crate) fn expect_unsigned(value: &Value, path: FieldPath) -> Result<u64, DecodeError> {
    whole_number(value)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| DecodeError::type_mismatch(path, JsonKind::UnsignedInteger, value))
}

// Integral floats such as `64.0` count as whole numbers
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(value: &Value) -> Option<i128> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(n) = n.as_u64() {
        return Some(i128::from(n));
    }
    if let Some(n) = n.as_i64() {
        return Some(i128::from(n));
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= u64::MAX as f64 {
        Some(f as i128)
    } else {
        None
    }
}

/// Keyed view over one JSON object that knows where it sits in the document.
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value, path: FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self { fields, path }),
            other => Err(DecodeError::type_mismatch(path, JsonKind::Object, other)),
        }
    }

    fn member(&self, key: &'static str) -> Result<(&'a Value, FieldPath), DecodeError> {
        let path = self.path.key(key);
        match self.fields.get(key) {
            Some(value) => Ok((value, path)),
            None => Err(DecodeError::MissingField(path)),
        }
    }

    pub(crate) fn string(&self, key: &'static str) -> Result<String, DecodeError> {
        let (value, path) = self.member(key)?;
        expect_string(value, path)
    }

    pub(crate) fn integer(&self, key: &'static str) -> Result<i64, DecodeError> {
        let (value, path) = self.member(key)?;
        expect_integer(value, path)
    }

    pub(crate) fn unsigned(&self, key: &'static str) -> Result<u64, DecodeError> {
        let (value, path) = self.member(key)?;
        expect_unsigned(value, path)
    }

    pub(crate) fn object(&self, key: &'static str) -> Result<ObjectReader<'a>, DecodeError> {
        let (value, path) = self.member(key)?;
        ObjectReader::new(value, path)
    }

    pub(crate) fn array(&self, key: &'static str) -> Result<ArrayReader<'a>, DecodeError> {
        let (value, path) = self.member(key)?;
        match value {
            Value::Array(items) => Ok(ArrayReader { items, path }),
            other => Err(DecodeError::type_mismatch(path, JsonKind::Array, other)),
        }
    }
}

/// Indexed view over one JSON array.
pub(crate) struct ArrayReader<'a> {
    items: &'a [Value],
    path: FieldPath,
}

impl<'a> ArrayReader<'a> {
    /// Decode every element in order, stopping at the first failure.
    pub(crate) fn map<T, F>(self, mut decode: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&'a Value, FieldPath) -> Result<T, DecodeError>,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| decode(item, self.path.index(index)))
            .collect()
    }

    pub(crate) fn strings(self) -> Result<Vec<String>, DecodeError> {
        self.map(expect_string)
    }
}
