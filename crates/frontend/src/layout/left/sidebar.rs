//! Sidebar with collapsible menu groups. The entries it shows are the
//! output of `filter_menu` for the current user and company, so a grant
//! or feature-flag change re-renders the menu immediately.

use crate::layout::global_context::use_app_context;
use crate::layout::left::menu_def::app_menu;
use crate::shared::icons::icon;
use crate::system::access::{filter_menu, AccessContext, MenuEntry, MenuLink};
use crate::system::auth::use_auth;
use leptos::prelude::*;

#[component]
fn SidebarLink(link: MenuLink, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_app_context();
    let key = link.key;
    let padding = if nested { "10px" } else { "12px" };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                ctx.active.get().as_deref() == Some(key)
            }
            style:padding-left=padding
            on:click=move |_| {
                ctx.open_tab(link.key, link.label);
            }
        >
            <div class="app-sidebar__item-content">
                {icon(link.icon)}
                <span>{link.label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = use_app_context();
    let auth_state = use_auth();

    let expanded_groups = RwSignal::new(Vec::<String>::new());

    // Recomputed whenever the session or the selected company changes
    let visible_menu = Signal::derive(move || {
        let auth = auth_state.get();
        let company = app.company.get();
        let ctx = AccessContext {
            user: auth.user_info,
            company_id: company.as_ref().map(|c| c.id),
            features: company.map(|c| c.features).unwrap_or_default(),
            policy: Default::default(),
        };
        filter_menu(&app_menu(), &ctx)
    });

    view! {
        <div class="app-sidebar__content">
            <For
                each=move || visible_menu.get()
                key=|entry| match entry {
                    MenuEntry::Link(l) => l.key,
                    MenuEntry::Accordion(a) => a.key,
                }
                children=move |entry| {
                    match entry {
                        MenuEntry::Link(link) => view! {
                            <SidebarLink link=link />
                        }
                        .into_any(),
                        MenuEntry::Accordion(acc) => {
                            let group_id = acc.key.to_string();
                            let gid_for_click = group_id.clone();
                            let gid_for_exp = group_id.clone();
                            let gid_for_show = group_id.clone();
                            let children = StoredValue::new(acc.children.clone());
                            view! {
                                <div>
                                    <div
                                        class="app-sidebar__item"
                                        style:padding-left="12px"
                                        on:click=move |_| {
                                            let gid = gid_for_click.clone();
                                            expanded_groups.update(move |items| {
                                                if let Some(pos) =
                                                    items.iter().position(|x| x == &gid)
                                                {
                                                    items.remove(pos);
                                                } else {
                                                    items.push(gid);
                                                }
                                            });
                                        }
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(acc.icon)}
                                            <span>{acc.label}</span>
                                        </div>
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || {
                                                expanded_groups.get().contains(&gid_for_exp)
                                            }
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    </div>

                                    <Show when=move || {
                                        expanded_groups.get().contains(&gid_for_show)
                                    }>
                                        <div class="app-sidebar__children">
                                            {children
                                                .get_value()
                                                .into_iter()
                                                .map(|link| {
                                                    view! { <SidebarLink link=link nested=true /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                            .into_any()
                        }
                    }
                }
            />
        </div>
    }
}
