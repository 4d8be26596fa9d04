use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

/// Logs every 4xx/5xx response with its body preview, then forwards the
/// response unchanged.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let latency_ms = start.elapsed().as_millis() as u64;
    let (mut parts, body) = response.into_parts();
    match buffer_body(body).await {
        Ok((bytes, preview)) => {
            log_error_event(status.as_u16(), &method, &uri, latency_ms, &preview);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            tracing::warn!(
                status = status.as_u16(),
                method,
                uri,
                latency_ms,
                error = ?err,
                "Failed to read error response body"
            );
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::empty())
        }
    }
}

async fn buffer_body(body: Body) -> Result<(Bytes, String), AxumError> {
    let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES).await?;
    Ok((bytes.clone(), preview(&bytes)))
}

fn preview(bytes: &[u8]) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

fn log_error_event(status: u16, method: &str, uri: &str, latency_ms: u64, body: &str) {
    if status >= 500 {
        tracing::error!(
            status,
            method,
            uri,
            latency_ms,
            body,
            "Request completed with error status"
        );
    } else {
        tracing::warn!(
            status,
            method,
            uri,
            latency_ms,
            body,
            "Request completed with error status"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn preview_truncates_long_bodies() {
        let long = vec![b'a'; MAX_LOGGED_BODY_BYTES + 10];
        let text = preview(&long);
        assert!(text.ends_with(&format!("(truncated, {} bytes total)", long.len())));
        assert_eq!(preview(b"short"), "short");
    }

    #[tokio::test]
    async fn error_body_is_forwarded_intact() {
        let app = Router::new()
            .route(
                "/fail",
                get(|| async { (StatusCode::BAD_REQUEST, "nope") }),
            )
            .layer(axum::middleware::from_fn(log_error_responses));

        let response = app
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"nope");
    }
}
