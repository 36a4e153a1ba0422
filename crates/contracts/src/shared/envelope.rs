use serde::{Deserialize, Serialize};

/// Pagination metadata returned with every report page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total: u32,
    #[serde(default, rename = "totalPages")]
    pub total_pages: u32,
}

/// The one normalized response shape every report endpoint resolves to.
///
/// The payment endpoint historically wraps its payload one level deeper
/// (`{ data: { payments, stats, pagination } }`); that wrapper is flattened
/// away inside the payment API client so stores only ever see this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope<R, S> {
    pub data: Vec<R>,
    pub stats: S,
    pub pagination: PageMeta,
}
