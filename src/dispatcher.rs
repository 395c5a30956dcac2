use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api_errors::AppError;
use crate::app_state::AppState;
use crate::errors::{SinkError, SinkResult};

pub const LOG_PATH: &str = "/log";

/// Acknowledgement returned for every committed record
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogAck {
    pub status: String,
}

impl LogAck {
    pub fn logged() -> Self {
        Self {
            status: "logged".to_string(),
        }
    }
}

/// CORS policy for the logging endpoint.
///
/// Answers every OPTIONS request itself (200, empty body) and stamps
/// `Access-Control-Allow-Origin: *` on all other responses.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Allowed methods and headers repeated on every `/log` response, not just preflights
fn log_route_cors_headers() -> (
    SetResponseHeaderLayer<HeaderValue>,
    SetResponseHeaderLayer<HeaderValue>,
) {
    (
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ),
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
    )
}

/// Build the router: `POST /log` commits, other POSTs are 404, the rest is static files
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    let (allow_methods, allow_headers) = log_route_cors_headers();

    Router::new()
        .route(
            LOG_PATH,
            post(post_log)
                .fallback(dispatch_other)
                .layer::<_, std::convert::Infallible>(allow_methods)
                .layer(allow_headers),
        )
        .fallback(dispatch_other)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Declared body length of a `/log` request.
pub fn content_length(headers: &HeaderMap) -> SinkResult<usize> {
    let raw = headers
        .get(header::CONTENT_LENGTH)
        .ok_or_else(|| SinkError::framing("missing Content-Length header"))?;

    raw.to_str()
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .ok_or_else(|| SinkError::framing("Content-Length must be a non-negative integer"))
}

#[axum::debug_handler]
async fn post_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LogAck>, AppError> {
    let declared = content_length(&headers).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected /log request");
    })?;

    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "failed to read /log body");
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
            _ => AppError::bad_request(rejection.body_text()),
        }
    })?;

    // exactly the declared bytes; a short body stays short and fails to parse
    let payload = body.slice(..declared.min(body.len()));

    let sink = state.sink.clone();
    tokio::task::spawn_blocking(move || sink.commit_payload(&payload))
        .await
        .map_err(|e| AppError::internal(format!("commit task failed: {e}")))?
        .map_err(|e| {
            tracing::warn!(error = %e, "log record not committed");
            AppError::from(e)
        })?;

    Ok(Json(LogAck::logged()))
}

async fn dispatch_other(State(state): State<AppState>, req: Request) -> Response {
    if req.method() == Method::POST {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.static_root.as_ref() {
        Some(root) => match ServeDir::new(root).oneshot(req).await {
            Ok(res) => res.into_response(),
            Err(never) => match never {},
        },
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
