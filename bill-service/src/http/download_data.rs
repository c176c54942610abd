use axum::{extract::State, Json};
use bill_client::domain::BillRecord;
use serde::Serialize;

use super::AppState;
use crate::error::BillError;

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<BillRecord>,
}

/// Every stored bill. An empty store is reported as an error, not an empty list.
pub async fn download_data(State(state): State<AppState>) -> Result<Json<RecordsResponse>, BillError> {
    metrics::counter!("bill_download_requests_total").increment(1);

    let records = state.store.list().await?;
    if records.is_empty() {
        return Err(BillError::NoData);
    }

    tracing::debug!(count = records.len(), "serving bill records");
    Ok(Json(RecordsResponse { records }))
}
