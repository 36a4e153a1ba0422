use contracts::reports::r103_product_wise::dto::{ProductLine, ProductStats, ProductWiseEnvelope};
use contracts::shared::error::ApiError;

use crate::reports::store::{ReportClient, ReportQuery};
use crate::shared::api_utils::get_json;

/// HTTP client of the product-wise report.
#[derive(Clone, Copy, Default)]
pub struct ProductWiseReportClient;

impl ReportClient for ProductWiseReportClient {
    type Row = ProductLine;
    type Stats = ProductStats;

    async fn fetch(&self, query: &ReportQuery) -> Result<ProductWiseEnvelope, ApiError> {
        let path = format!("/api/reports/product-wise?{}", query.to_query_string());
        get_json(&path).await
    }
}
