use crate::errors::AppError;
use crate::models::{
    CreatedResponse, Day, DeletedResponse, Exercise, ExercisePatch, ExercisesQuery,
    HealthResponse, NewExercise, UpdatedResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::validation::{body_object, parse_day_id, parse_id, ValidationError};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use tracing::{error, info};

type JsonBody = Result<Json<Value>, JsonRejection>;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(err) => {
            error!("health check failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    ok: false,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

pub async fn list_days(State(state): State<AppState>) -> Result<Json<Vec<Day>>, AppError> {
    Ok(Json(state.store.list_days().await?))
}

pub async fn list_exercises(
    State(state): State<AppState>,
    query: Result<Query<ExercisesQuery>, QueryRejection>,
) -> Result<Json<Vec<Exercise>>, AppError> {
    let Query(query) = query.map_err(|_| ValidationError::BadDayId)?;
    let day_id = parse_day_id(query.day_id.as_deref())?;
    Ok(Json(state.store.list_exercises(day_id).await?))
}

pub async fn create_exercise(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = json_object(body)?;
    let exercise = NewExercise::from_json(&body)?;

    let id = state.store.create_exercise(&exercise).await?;
    info!("created exercise {id} on day {}", exercise.day_id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: JsonBody,
) -> Result<Json<UpdatedResponse>, AppError> {
    let id = parse_id(&raw_id)?;
    let body = json_object(body)?;
    let patch = ExercisePatch::from_json(&body)?;

    let updated = state.store.update_exercise(id, &patch).await?;
    Ok(Json(UpdatedResponse { updated }))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = parse_id(&raw_id)?;

    let deleted = state.store.delete_exercise(id).await?;
    if deleted > 0 {
        info!("deleted exercise {id}");
    }
    Ok(Json(DeletedResponse { deleted }))
}

fn json_object(body: JsonBody) -> Result<serde_json::Map<String, Value>, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    Ok(body_object(value)?)
}
