use contracts::reports::r102_customer_wise::dto::{
    CustomerWiseEnvelope, Transaction, TransactionStats,
};
use contracts::shared::error::ApiError;

use crate::reports::store::{ReportClient, ReportQuery};
use crate::shared::api_utils::get_json;

/// HTTP client of the customer-wise report.
#[derive(Clone, Copy, Default)]
pub struct CustomerWiseReportClient;

impl ReportClient for CustomerWiseReportClient {
    type Row = Transaction;
    type Stats = TransactionStats;

    async fn fetch(&self, query: &ReportQuery) -> Result<CustomerWiseEnvelope, ApiError> {
        let path = format!("/api/reports/customer-wise?{}", query.to_query_string());
        get_json(&path).await
    }
}
