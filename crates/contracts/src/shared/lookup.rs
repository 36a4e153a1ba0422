use serde::{Deserialize, Serialize};

/// Minimal id/name pair used by the searchable filter selects
/// (customers, salesmen, receivers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    pub id: String,
    pub name: String,
}
