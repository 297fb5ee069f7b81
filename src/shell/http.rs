use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::transactions::use_cases::get_transaction::inbound::http as get_http;
use crate::modules::transactions::use_cases::record_transaction::inbound::http as record_http;
use crate::shell::state::AppState;

pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

// axum falls back to the GET handler for HEAD unless HEAD has its own endpoint.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,POST")],
    )
}

// Any other method on the route is answered with 405 by the method router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            TRANSACTIONS_PATH,
            get(get_http::handle)
                .post(record_http::handle)
                .head(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
