use crate::layout::center::tab::Tab;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Center zone: tab strip on top, tab pages below.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__header">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <Tab tab=tab /> }
                />
            </div>
            {children()}
        </div>
    }
}
