use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Debounced search box. Keystrokes update the visible text immediately,
/// but `on_search` only fires after typing pauses for DEBOUNCE_MS.
/// A newer keystroke cancels the pending callback, so stale searches
/// never run; the pending timer is also cancelled on unmount.
#[component]
pub fn SearchInput(
    /// Committed search value (used to seed the box)
    #[prop(into)]
    value: Signal<String>,

    /// Fires with the trimmed text once typing settles
    on_search: Callback<String>,

    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let cancel_pending = move || {
        if let Some(t) = pending.write_value().take() {
            t.cancel();
        }
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        draft.set(text.clone());
        cancel_pending();
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            pending.write_value().take();
            on_search.run(text.trim().to_string());
        });
        pending.set_value(Some(timeout));
    };

    on_cleanup(cancel_pending);

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
                prop:value=draft
                on:input=on_input
            />
        </div>
    }
}
