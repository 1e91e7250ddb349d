use mongodb::bson::oid::ObjectId;
use serde_json::{Map, Number, Value};

use crate::error::AppError;
use crate::models::{Submission, TextField};

/// Build a [`Submission`] from a parsed JSON body.
///
/// `name` and `email` are cast to text: strings pass through, numbers and
/// booleans take their textual form, `null` is stored as `null`. Arrays and
/// objects cannot be cast and fail the whole submission. A supplied `_id` must
/// be a 24-character hex ObjectId. Every other field is kept, except that
/// integers above `i64::MAX` are stored as doubles since BSON has no unsigned
/// 64-bit type.
pub fn from_body(body: Map<String, Value>) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    for (key, value) in body {
        match key.as_str() {
            "_id" => submission.id = cast_object_id(value)?,
            "name" => submission.name = cast_text("name", value)?,
            "email" => submission.email = cast_text("email", value)?,
            _ => {
                submission.extra.insert(key, widen_unsigned(value));
            }
        }
    }

    Ok(submission)
}

fn cast_text(field: &str, value: Value) -> Result<TextField, AppError> {
    match value {
        Value::Null => Ok(Some(None)),
        Value::String(s) => Ok(Some(Some(s))),
        Value::Number(n) => Ok(Some(Some(n.to_string()))),
        Value::Bool(b) => Ok(Some(Some(b.to_string()))),
        Value::Array(_) => Err(AppError::InvalidField(format!(
            "{field}: expected text, got array"
        ))),
        Value::Object(_) => Err(AppError::InvalidField(format!(
            "{field}: expected text, got object"
        ))),
    }
}

fn cast_object_id(value: Value) -> Result<Option<ObjectId>, AppError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => ObjectId::parse_str(&s)
            .map(Some)
            .map_err(|e| AppError::InvalidField(format!("_id: {e}"))),
        other => Err(AppError::InvalidField(format!(
            "_id: expected ObjectId hex string, got {other}"
        ))),
    }
}

fn widen_unsigned(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) if i64::try_from(u).is_err() => {
                Number::from_f64(u as f64).map_or(Value::Number(n), Value::Number)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(widen_unsigned).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, widen_unsigned(v)))
                .collect(),
        ),
        other => other,
    }
}
