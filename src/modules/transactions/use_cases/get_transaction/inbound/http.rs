use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::transactions::adapters::outbound::transaction_store::StoreError;
use crate::shell::state::AppState;

pub const MISSING_ID: &str = "param id is missing";
// Unknown ids answer 400 rather than 404; existing clients depend on it.
pub const ID_NOT_FOUND: &str = "id not found";

/// First `id` value of the query string; repeated keys are allowed.
fn first_id(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .filter(|id| !id.is_empty())
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let Some(id) = params.ok().and_then(|Query(params)| first_id(params)) else {
        return (StatusCode::BAD_REQUEST, MISSING_ID).into_response();
    };

    match state.transactions.get(&id).await {
        Ok(transaction) => Json(transaction).into_response(),
        Err(StoreError::NotFound(_)) => (StatusCode::BAD_REQUEST, ID_NOT_FOUND).into_response(),
        Err(e) => {
            tracing::error!(%id, error = %e, "get_transaction - error loading transaction");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
