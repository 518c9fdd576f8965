use serde::Deserialize;
use serde_json::Value;

use crate::practicum::error::{PracticumError, SchemaError};

/// A single homework entry from the statuses response.
///
/// The fields are optional on purpose: the shape is checked lazily so that a
/// missing field is reported through the error taxonomy at render time rather
/// than as a deserialization failure.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[must_use]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Check the response shape and pull out the homework list.
///
/// The check tolerates either of the two expected keys being present on its
/// own, so minor API-shape drift does not kill the notifications: a missing
/// `homeworks` key next to a `current_date` is treated as an empty list.
/// A present `homeworks` value must be an array.
pub fn validate(raw: &Value) -> Result<Vec<Homework>, PracticumError> {
    let Some(fields) = raw.as_object() else {
        return Err(SchemaError::WrongType("the response body is not an object").into());
    };
    if !fields.contains_key("homeworks") && !fields.contains_key("current_date") {
        return Err(
            SchemaError::MissingFields("neither `homeworks` nor `current_date` is present").into(),
        );
    }
    match fields.get("homeworks") {
        None => Ok(Vec::new()),
        Some(Value::Array(homeworks)) => homeworks
            .iter()
            .map(|homework| serde_json::from_value(homework.clone()))
            .collect::<Result<_, _>>()
            .map_err(|_| SchemaError::WrongType("a homework entry is not an object").into()),
        Some(_) => Err(SchemaError::WrongType("`homeworks` is not an array").into()),
    }
}

/// Extract the server-side timestamp used to advance the polling window.
#[must_use]
pub fn current_date(raw: &Value) -> Option<i64> {
    raw.get("current_date").and_then(Value::as_i64)
}
