use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::use_auth;

/// Landing tab. Always reachable, even with zero grants.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_state = use_auth();
    let app = use_app_context();

    let greeting = move || {
        auth_state
            .get()
            .user_info
            .map(|u| {
                let name = u.full_name.unwrap_or(u.username);
                format!("Welcome, {}", name)
            })
            .unwrap_or_else(|| "Welcome".to_string())
    };

    let company_hint = move || match app.company.get() {
        Some(c) => format!("Active company: {}", c.name),
        None => "Select a company in the top bar to load reports.".to_string(),
    };

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1>{greeting}</h1>
            </div>
            <div class="page__content">
                <p>{company_hint}</p>
            </div>
        </PageFrame>
    }
}
