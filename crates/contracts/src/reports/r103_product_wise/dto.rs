use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::envelope::ReportEnvelope;

/// One sold-product line aggregated across invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    /// Unit of measure short name (pcs, kg, box).
    pub unit: Option<String>,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
    pub customer_name: Option<String>,
    pub salesman_name: Option<String>,
    /// Invoice date, ISO-8601 (`YYYY-MM-DD`).
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_quantity: f64,
    pub total_amount: f64,
    /// Distinct products in the filtered result.
    pub product_count: u32,
}

pub type ProductWiseEnvelope = ReportEnvelope<ProductLine, ProductStats>;
