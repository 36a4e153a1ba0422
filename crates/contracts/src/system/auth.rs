use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::access::{CompanyAccess, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// The authenticated user as the rest of the app sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    /// Global override: every permission check short-circuits to full
    /// access when set.
    #[serde(default)]
    pub all_permissions: bool,
    /// Per-company grants. A company missing from this list grants nothing.
    #[serde(default)]
    pub access: Vec<CompanyAccess>,
}

impl UserInfo {
    pub fn company_access(&self, company_id: Uuid) -> Option<&CompanyAccess> {
        self.access.iter().find(|a| a.company_id == company_id)
    }
}
