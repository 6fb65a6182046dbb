use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Logs one line per completed request with the matched route, status and
/// latency. The level follows the status class so 5xx responses stand out in
/// the default filter.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    match status {
        500..=599 => error!(
            method = %method,
            path = %path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Server error"
        ),
        400..=499 => warn!(
            method = %method,
            path = %path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Client error"
        ),
        _ => info!(
            method = %method,
            path = %path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        ),
    }

    response
}
