use crate::models::{ExercisePatch, NewExercise};
use serde_json::{Map, Value};
use thiserror::Error;

pub const SETS_RANGE: (i64, i64) = (1, 10);
pub const REPS_RANGE: (i64, i64) = (1, 20);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid body: day_id(int), name, sets(1-10), reps(1-20) required")]
    MissingRequired,
    #[error("weight_lbs>=0, rest_seconds>=0 (ints)")]
    NegativeLoad,
    #[error("{0} must be non-negative int")]
    NotNonNegative(&'static str),
    #[error("sets 1-10")]
    SetsOutOfRange,
    #[error("reps 1-20")]
    RepsOutOfRange,
    #[error("name must be a non-empty string")]
    EmptyName,
    #[error("No valid fields to update")]
    NoFields,
    #[error("id must be int")]
    BadId,
    #[error("day_id required (int)")]
    BadDayId,
    #[error("request body must be a JSON object")]
    NotAnObject,
}

pub fn body_object(body: Value) -> Result<Map<String, Value>, ValidationError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::NotAnObject),
    }
}

pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::BadId)
}

pub fn parse_day_id(raw: Option<&str>) -> Result<i64, ValidationError> {
    raw.and_then(|value| value.trim().parse().ok())
        .ok_or(ValidationError::BadDayId)
}

impl NewExercise {
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let day_id = field(body, "day_id").and_then(as_int).filter(|id| *id > 0);
        let name = field(body, "name").and_then(as_name);
        let sets = field(body, "sets").and_then(as_int).filter(|v| in_range(*v, SETS_RANGE));
        let reps = field(body, "reps").and_then(as_int).filter(|v| in_range(*v, REPS_RANGE));

        let (Some(day_id), Some(name), Some(sets), Some(reps)) = (day_id, name, sets, reps) else {
            return Err(ValidationError::MissingRequired);
        };

        let weight_lbs = optional_non_negative(body, "weight_lbs").ok_or(ValidationError::NegativeLoad)?;
        let rest_seconds =
            optional_non_negative(body, "rest_seconds").ok_or(ValidationError::NegativeLoad)?;
        let position = optional_non_negative(body, "position")
            .ok_or(ValidationError::NotNonNegative("position"))?;

        Ok(Self {
            day_id,
            name,
            sets,
            reps,
            weight_lbs,
            rest_seconds,
            position,
        })
    }
}

impl ExercisePatch {
    // Only allow-listed columns are read; other keys are ignored.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut patch = Self::default();

        if let Some(value) = field(body, "name") {
            patch.name = Some(as_name(value).ok_or(ValidationError::EmptyName)?);
        }
        if let Some(value) = field(body, "sets") {
            let sets = as_int(value).filter(|v| in_range(*v, SETS_RANGE));
            patch.sets = Some(sets.ok_or(ValidationError::SetsOutOfRange)?);
        }
        if let Some(value) = field(body, "reps") {
            let reps = as_int(value).filter(|v| in_range(*v, REPS_RANGE));
            patch.reps = Some(reps.ok_or(ValidationError::RepsOutOfRange)?);
        }
        patch.weight_lbs = non_negative_field(body, "weight_lbs")?;
        patch.rest_seconds = non_negative_field(body, "rest_seconds")?;
        patch.position = non_negative_field(body, "position")?;
        patch.day_id = non_negative_field(body, "day_id")?;

        if patch.is_empty() {
            return Err(ValidationError::NoFields);
        }
        Ok(patch)
    }
}

// `null` counts as absent.
fn field<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

fn as_int(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn as_name(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

fn in_range(value: i64, (min, max): (i64, i64)) -> bool {
    (min..=max).contains(&value)
}

fn optional_non_negative(body: &Map<String, Value>, key: &str) -> Option<i64> {
    match field(body, key) {
        None => Some(0),
        Some(value) => as_int(value).filter(|v| *v >= 0),
    }
}

fn non_negative_field(
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<i64>, ValidationError> {
    field(body, key)
        .map(|value| {
            as_int(value)
                .filter(|v| *v >= 0)
                .ok_or(ValidationError::NotNonNegative(key))
        })
        .transpose()
}
