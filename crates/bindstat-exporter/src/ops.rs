//! HTTP endpoints.
//!
//! - `<metrics_path>` : one scrape cycle, Prometheus text format
//! - `/`              : landing page
//! - `/healthz`       : liveness of the exporter itself

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::exposition;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let path = &state.cfg().exporter.metrics_path;
    Html(format!(
        "<html>\n<head><title>Bind Exporter</title></head>\n<body>\n<h1>Bind Exporter</h1>\n<p><a href='{path}'>Metrics</a></p>\n</body>\n</html>\n"
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let scrape = state.collector().collect().await;

    let mut body = String::new();
    exposition::render(&scrape.metrics, &mut body);
    state.metrics().render(&mut body);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
        body,
    )
        .into_response()
}
