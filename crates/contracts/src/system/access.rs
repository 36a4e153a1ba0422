//! Permission-grant records: per-user, per-company, per-module CRUD
//! capabilities plus the company-level feature toggles that gate whole
//! submodules independently of any grant.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Top-level application modules a grant can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    BusinessManagement,
    InventoryManagement,
    Reports,
    LocationTracking,
    Billing,
}

/// Submodules within a [`Module`]. Flat on purpose: the grant map pairs
/// them with their parent module, so no submodule name may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubModule {
    // BusinessManagement
    Company,
    Vendor,
    Customer,
    Ledger,
    Agent,
    // InventoryManagement
    Product,
    StockGroup,
    StockCategory,
    Unit,
    Godown,
    // Reports
    PaymentReport,
    CustomerWiseReport,
    ProductWiseReport,
    // LocationTracking
    LiveLocation,
    // Billing
    BillTemplate,
}

/// User role. The wire value is matched case-insensitively ("admin",
/// "Admin" and "ADMIN" are the same role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Manager,
    Salesman,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        let v = value.trim();
        [Role::Admin, Role::Client, Role::Manager, Role::Salesman]
            .into_iter()
            .find(|r| v.eq_ignore_ascii_case(r.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
            Role::Manager => "manager",
            Role::Salesman => "salesman",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {raw}")))
    }
}

/// CRUD capability tuple for one submodule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermission {
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub update: bool,
    #[serde(default)]
    pub delete: bool,
    /// Named extra capabilities outside plain CRUD (e.g. "approve").
    #[serde(default)]
    pub extra: Vec<String>,
}

impl ModulePermission {
    pub fn full() -> Self {
        Self {
            create: true,
            read: true,
            update: true,
            delete: true,
            extra: Vec::new(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// The user's grant for one company: module → submodule → CRUD tuple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccess {
    pub company_id: Uuid,
    #[serde(default)]
    pub modules: HashMap<Module, HashMap<SubModule, ModulePermission>>,
}

/// Company-level feature toggles. These gate submodules regardless of any
/// permission grant: both the flag and the grant must allow access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFeatures {
    #[serde(default)]
    pub maintain_agent: bool,
    #[serde(default)]
    pub maintain_godown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("SALESMAN"), Some(Role::Salesman));
        assert_eq!(Role::parse(" client "), Some(Role::Client));
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn role_deserializes_from_any_case() {
        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn permission_fields_default_to_false() {
        let perm: ModulePermission = serde_json::from_str("{\"read\": true}").unwrap();
        assert!(perm.read);
        assert!(!perm.create && !perm.update && !perm.delete);
        assert!(perm.extra.is_empty());
    }

    #[test]
    fn feature_flags_use_camel_case_wire_names() {
        let features: CompanyFeatures =
            serde_json::from_str("{\"maintainAgent\": true}").unwrap();
        assert!(features.maintain_agent);
        assert!(!features.maintain_godown);
    }
}
