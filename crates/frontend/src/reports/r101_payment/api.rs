use contracts::reports::r101_payment::dto::{
    PaymentEnvelope, PaymentRecord, PaymentResponseRaw, PaymentStats,
};
use contracts::shared::error::ApiError;

use crate::reports::store::{ReportClient, ReportQuery};
use crate::shared::api_utils::get_json;

/// HTTP client of the payment report. The endpoint still answers with the
/// legacy double-wrapped payload; it is flattened here so the store only
/// ever sees the normalized envelope.
#[derive(Clone, Copy, Default)]
pub struct PaymentReportClient;

impl ReportClient for PaymentReportClient {
    type Row = PaymentRecord;
    type Stats = PaymentStats;

    async fn fetch(&self, query: &ReportQuery) -> Result<PaymentEnvelope, ApiError> {
        let path = format!("/api/reports/payments?{}", query.to_query_string());
        let raw: PaymentResponseRaw = get_json(&path).await?;
        Ok(raw.into())
    }
}
