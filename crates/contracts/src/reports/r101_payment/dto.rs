use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::envelope::{PageMeta, ReportEnvelope};

/// One row of the payment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    /// Payment date, ISO-8601 (`YYYY-MM-DD`).
    pub date: String,
    pub amount: f64,
    /// Payment mode: cash, cheque, upi, bank_transfer.
    pub mode: Option<String>,
    /// completed / pending / cancelled.
    pub status: Option<String>,
    pub customer_name: Option<String>,
    /// User who received the payment in the field.
    pub receiver_name: Option<String>,
    pub receiver_id: Option<Uuid>,
    pub reference_no: Option<String>,
    pub narration: Option<String>,
}

/// Aggregate summary shown above the payment table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total_amount: f64,
    pub total_count: u32,
    pub completed_count: u32,
    pub pending_count: u32,
    pub cancelled_count: u32,
}

pub type PaymentEnvelope = ReportEnvelope<PaymentRecord, PaymentStats>;

/// Legacy wire shape of the payment endpoint: the payload sits one level
/// deeper than every other report (`{ "data": { "payments": [...] } }`).
/// Deserialized only inside the payment API client, which normalizes it
/// into [`PaymentEnvelope`] before anything else sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponseRaw {
    pub data: PaymentResponseInner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponseInner {
    pub payments: Vec<PaymentRecord>,
    pub stats: PaymentStats,
    pub pagination: PageMeta,
}

impl From<PaymentResponseRaw> for PaymentEnvelope {
    fn from(raw: PaymentResponseRaw) -> Self {
        ReportEnvelope {
            data: raw.data.payments,
            stats: raw.data.stats,
            pagination: raw.data.pagination,
        }
    }
}
