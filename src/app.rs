use crate::errors::AppError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/days", get(handlers::list_days))
        .route(
            "/exercises",
            get(handlers::list_exercises).post(handlers::create_exercise),
        )
        .route(
            "/exercises/:id",
            put(handlers::update_exercise).delete(handlers::delete_exercise),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reject_foreign_origin,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin {origin:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

// Requests without an `Origin` header pass through.
async fn reject_foreign_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    if let Some(origin) = origin {
        if !state.origin_allowed(&origin) {
            warn!("blocked request from origin {origin}");
            return AppError::forbidden(format!("CORS blocked: {origin}")).into_response();
        }
    }

    next.run(request).await
}
