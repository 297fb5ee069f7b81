use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::transactions::core::transaction::{StatusResponse, Transaction};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(error = %e, "record_transaction - error reading body");
            return (StatusCode::BAD_REQUEST, e.body_text()).into_response();
        }
    };

    let transaction: Transaction = match serde_json::from_slice(&body) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(error = %e, "record_transaction - error decoding body");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let id = transaction.id.clone();
    match state.transactions.put(transaction).await {
        Ok(()) => {
            tracing::debug!(%id, "transaction recorded");
            (StatusCode::OK, Json(StatusResponse::success())).into_response()
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "record_transaction - error storing transaction");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
