use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use bill_client::domain::NewBillRecord;
use serde::Serialize;

use super::AppState;
use crate::{error::BillError, validate};

/// Echo of the accepted input, keyed the way it was submitted.
#[derive(Debug, Serialize)]
pub struct Preview {
    pub consumer_name: String,
    #[serde(rename = "Industry_name")]
    pub industry_name: String,
    pub contact_detail: String,
    pub bill_month: String,
    pub net_consumption: f64,
    pub total_amount: f64,
}

impl From<NewBillRecord> for Preview {
    fn from(r: NewBillRecord) -> Self {
        Preview {
            consumer_name: r.consumer_name,
            industry_name: r.industry_name,
            contact_detail: r.contact_detail,
            bill_month: r.bill_month,
            net_consumption: r.net_consumption,
            total_amount: r.total_amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub preview: Preview,
    pub savings: f64,
}

pub async fn manual_save(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveResponse>, BillError> {
    // Unreadable bodies (too large, broken stream) still get a JSON error.
    let record = body
        .map_err(|e| {
            tracing::debug!(error = %e, "request body could not be read");
            BillError::MalformedInput
        })
        .and_then(|body| validate::parse_submission(&body))
        .inspect_err(|e| {
            tracing::warn!(reason = e.reason(), "bill submission rejected");
            metrics::counter!("bill_records_rejected_total", "reason" => e.reason()).increment(1);
        })?;

    let savings = record.savings();
    let id = state.store.insert(&record).await?;

    tracing::info!(id, savings, "bill record saved");
    metrics::counter!("bill_records_saved_total").increment(1);

    Ok(Json(SaveResponse {
        status: "saved",
        preview: record.into(),
        savings,
    }))
}
