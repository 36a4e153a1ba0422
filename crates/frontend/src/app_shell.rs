//! Application shell: auth gate plus the main layout.

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::use_auth;
use crate::system::pages::LoginPage;
use leptos::prelude::*;

/// Main layout: sidebar + tabbed center. Initializes the `?active=` URL
/// synchronization once on creation.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Shows `LoginPage` until a session exists, then `MainLayout`.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
