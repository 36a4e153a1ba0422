use crate::shared::date_utils::{current_month_range, last_days_range, previous_month_range};
use leptos::prelude::*;
use thaw::*;

/// Paired date inputs with quick-range buttons.
///
/// Edits are reported through `on_change`; the component itself holds no
/// committed state, so a parent can keep the values in a draft until the
/// user applies the filters.
#[component]
pub fn DateRangePicker(
    /// "from" value, ISO yyyy-mm-dd (empty = unset)
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value, ISO yyyy-mm-dd (empty = unset)
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with (from, to) on any edit or quick-range click
    on_change: Callback<(String, String)>,

    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };
    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let set_range = move |(start, end): (String, String)| {
        on_change.run((start, end));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"-"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <div class="date-range-picker-compact">
                    <ButtonGroup>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_range(last_days_range(7))
                        >
                            "7D"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_range(last_days_range(30))
                        >
                            "30D"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_range(current_month_range())
                        >
                            "0M"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_range(previous_month_range())
                        >
                            "-1M"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_range((String::new(), String::new()))
                        >
                            "Clear"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>
    }
}
