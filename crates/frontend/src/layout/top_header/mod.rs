//! TopHeader - application top bar: sidebar toggle, brand, company
//! selector, user info and logout.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::do_logout;
use crate::system::auth::use_auth;
use crate::system::company::{fetch_companies, load_selected_company};
use contracts::system::company::CompanySummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let auth_state = use_auth();

    let companies = RwSignal::new(Vec::<CompanySummary>::new());

    // Load the company list once and restore the persisted selection
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_companies().await {
                Ok(list) => {
                    let remembered = load_selected_company()
                        .and_then(|id| list.iter().find(|c| c.id == id).cloned())
                        .or_else(|| list.first().cloned());
                    companies.set(list);
                    if let Some(company) = remembered {
                        ctx.select_company(company);
                    }
                }
                Err(e) => log::warn!("failed to load companies: {e}"),
            }
        });
    });

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        spawn_local(async move {
            do_logout(auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let on_company_change = move |ev| {
        let id = event_target_value(&ev);
        let selected = companies
            .get_untracked()
            .into_iter()
            .find(|c| c.id.to_string() == id);
        if let Some(company) = selected {
            ctx.select_company(company);
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Business Console"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Company selector
                <select
                    class="top-header__company-select"
                    on:change=on_company_change
                    prop:value=move || {
                        ctx.company
                            .get()
                            .map(|c| c.id.to_string())
                            .unwrap_or_default()
                    }
                >
                    <For
                        each=move || companies.get()
                        key=|c| c.id
                        children=move |c| {
                            view! {
                                <option value=c.id.to_string()>{c.name.clone()}</option>
                            }
                        }
                    />
                </select>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
