use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::envelope::ReportEnvelope;

/// One ledger transaction of the selected customer (sale or receipt).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    /// Transaction date, ISO-8601 (`YYYY-MM-DD`).
    pub date: String,
    pub voucher_no: Option<String>,
    /// "sale" or "receipt".
    pub kind: String,
    pub amount: f64,
    /// Running customer balance after this transaction.
    pub balance: f64,
    pub salesman_name: Option<String>,
    pub salesman_id: Option<Uuid>,
    pub narration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_sales: f64,
    pub total_received: f64,
    /// Outstanding balance over the selected period.
    pub balance: f64,
    pub transaction_count: u32,
}

pub type CustomerWiseEnvelope = ReportEnvelope<Transaction, TransactionStats>;
