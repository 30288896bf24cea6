use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Day {
    pub id: i64,
    pub name: String,
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub day_id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight_lbs: i64,
    pub rest_seconds: i64,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub day_id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight_lbs: i64,
    pub rest_seconds: i64,
    pub position: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight_lbs: Option<i64>,
    pub rest_seconds: Option<i64>,
    pub position: Option<i64>,
    pub day_id: Option<i64>,
}

impl ExercisePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sets.is_none()
            && self.reps.is_none()
            && self.weight_lbs.is_none()
            && self.rest_seconds.is_none()
            && self.position.is_none()
            && self.day_id.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct ExercisesQuery {
    pub day_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}
