use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::access::CompanyFeatures;

/// Company as listed in the top-header selector. Carries the feature
/// toggles so the menu filter can gate entries without a second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub features: CompanyFeatures,
}
