use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Request, StatusCode},
    middleware::{Next, from_fn},
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use skill_flow::{AllowList, RequestEnvelope, ResponseEnvelope, SkillError, SpeechletRunner};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info, warn};
use uuid::Uuid;

use crate::{
    config::ServiceConfig,
    omdb::{LookupError, MovieLookup, OmdbClient},
    speechlet::MovieMasterSpeechlet,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

/// HTTP status the platform sees for a failed turn
fn skill_error(err: SkillError) -> ApiError {
    match &err {
        SkillError::UnsupportedApplication(_) => {
            api_error(StatusCode::FORBIDDEN, &err.to_string())
        }
        SkillError::InvalidRequest(_) => api_error(StatusCode::BAD_REQUEST, &err.to_string()),
        SkillError::InvalidIntent(_) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<SpeechletRunner>,
}

/// Build the application from configuration, with a live OMDb client
pub fn create_app(config: &ServiceConfig) -> Result<Router, LookupError> {
    let lookup: Arc<dyn MovieLookup> = Arc::new(OmdbClient::new(
        config.omdb_base_url.clone(),
        config.omdb_api_key.clone(),
    )?);
    let app_state = create_app_state(lookup, &config.allowed_application_ids);
    Ok(build_router(app_state))
}

pub fn create_app_state(
    lookup: Arc<dyn MovieLookup>,
    allowed_application_ids: &[String],
) -> AppState {
    let speechlet = Arc::new(MovieMasterSpeechlet::new(lookup));
    let allow_list = AllowList::new(allowed_application_ids.iter().cloned());

    AppState {
        runner: Arc::new(SpeechletRunner::new(speechlet, allow_list)),
    }
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(handle_skill_request))
        .route("/movie-master", post(handle_skill_request))
        .route("/health", get(health_check))
        .layer(from_fn(correlation_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Middleware to add correlation ID to all requests
async fn correlation_id_middleware(
    mut request: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let correlation_id = Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        request.headers_mut().insert("x-correlation-id", value);
    }

    let span = tracing::info_span!("skill_request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

async fn handle_skill_request(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<ResponseEnvelope> {
    let envelope: RequestEnvelope = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejecting malformed skill request");
        api_error(StatusCode::BAD_REQUEST, &format!("Invalid request: {}", e))
    })?;

    let request_id = envelope.request.request_id().to_string();
    info!(request_id = %request_id, "Processing skill request");

    match state.runner.run(envelope).await {
        Ok(response) => {
            info!(
                request_id = %request_id,
                should_end_session = response.response.should_end_session,
                "Request completed successfully"
            );
            Ok(Json(response))
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Skill request failed");
            Err(skill_error(e))
        }
    }
}
