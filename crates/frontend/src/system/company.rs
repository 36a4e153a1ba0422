//! Company selection: load the companies the user may work in and keep
//! the chosen one across reloads.

use contracts::shared::error::ApiError;
use contracts::system::company::CompanySummary;
use uuid::Uuid;
use web_sys::window;

use crate::shared::api_utils::get_json;

const SELECTED_COMPANY_KEY: &str = "selected_company_id_v1";

pub async fn fetch_companies() -> Result<Vec<CompanySummary>, ApiError> {
    get_json("/api/system/companies").await
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn persist_selected_company(id: Uuid) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SELECTED_COMPANY_KEY, &id.to_string());
    }
}

pub fn load_selected_company() -> Option<Uuid> {
    let raw = local_storage()?.get_item(SELECTED_COMPANY_KEY).ok()??;
    Uuid::parse_str(&raw).ok()
}
