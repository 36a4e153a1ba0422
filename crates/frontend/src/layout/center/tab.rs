use crate::layout::global_context::{use_app_context, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// One entry in the tab strip: activates on click, closes on the cross.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();

    let tab_for_active = tab.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(&tab_for_active.key));

    let tab_for_click = tab.clone();
    let on_click = move |_| ctx.activate_tab(&tab_for_click.key);

    let tab_for_close = tab.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&tab_for_close.key);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}
