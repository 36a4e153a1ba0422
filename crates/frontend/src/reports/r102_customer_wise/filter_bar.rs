//! Customer-wise filter bar. Same draft/commit discipline as the payment
//! report, plus one extra rule: Apply refuses to commit while no concrete
//! customer is picked and surfaces an inline hint instead.

use contracts::shared::lookup::IdName;
use leptos::prelude::*;
use thaw::*;

use super::state::CustomerWiseFilters;
use crate::reports::store::{DateRange, ALL};
use crate::shared::components::DateRangePicker;

/// Editable copy of [`CustomerWiseFilters`], testable without a DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerWiseFilterDraft {
    pub customer_id: String,
    pub salesman_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl CustomerWiseFilterDraft {
    pub fn from_filters(filters: &CustomerWiseFilters) -> Self {
        let (date_from, date_to) = match &filters.date_range {
            Some(range) => (range.start.clone(), range.end.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            customer_id: filters.customer_id.clone(),
            salesman_id: filters.salesman_id.clone(),
            date_from,
            date_to,
        }
    }

    pub fn has_customer(&self) -> bool {
        self.customer_id != ALL && !self.customer_id.is_empty()
    }

    pub fn apply_to(&self, filters: &mut CustomerWiseFilters) {
        filters.customer_id = self.customer_id.clone();
        filters.salesman_id = self.salesman_id.clone();
        filters.date_range = if self.date_from.is_empty() || self.date_to.is_empty() {
            None
        } else {
            Some(DateRange {
                start: self.date_from.clone(),
                end: self.date_to.clone(),
            })
        };
    }
}

#[component]
pub fn CustomerWiseFilterBar(
    /// Committed filters; drafts re-seed whenever these change externally
    #[prop(into)]
    filters: Signal<CustomerWiseFilters>,

    #[prop(into)] customers: Signal<Vec<IdName>>,

    #[prop(into)] salesmen: Signal<Vec<IdName>>,

    on_apply: Callback<CustomerWiseFilterDraft>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let customer_id = RwSignal::new(String::new());
    let salesman_id = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let needs_customer = RwSignal::new(false);

    Effect::new(move |_| {
        let draft = CustomerWiseFilterDraft::from_filters(&filters.get());
        customer_id.set(draft.customer_id);
        salesman_id.set(draft.salesman_id);
        date_from.set(draft.date_from);
        date_to.set(draft.date_to);
    });

    let apply = move |_| {
        let draft = CustomerWiseFilterDraft {
            customer_id: customer_id.get_untracked(),
            salesman_id: salesman_id.get_untracked(),
            date_from: date_from.get_untracked(),
            date_to: date_to.get_untracked(),
        };
        if !draft.has_customer() {
            needs_customer.set(true);
            return;
        }
        needs_customer.set(false);
        on_apply.run(draft);
    };

    let clear = move |_| {
        needs_customer.set(false);
        on_clear.run(());
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="width: 240px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Customer:"</Label>
                        <Select value=customer_id>
                            <option value=ALL>"Select customer"</option>
                            {move || customers.get().into_iter().map(|c| {
                                view! { <option value={c.id.clone()}>{c.name.clone()}</option> }
                            }).collect_view()}
                        </Select>
                    </Flex>
                </div>

                <div style="width: 220px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Salesman:"</Label>
                        <Select value=salesman_id>
                            <option value=ALL>"All"</option>
                            {move || salesmen.get().into_iter().map(|s| {
                                view! { <option value={s.id.clone()}>{s.name.clone()}</option> }
                            }).collect_view()}
                        </Select>
                    </Flex>
                </div>

                <div style="min-width: 420px;">
                    <DateRangePicker
                        date_from=Signal::derive(move || date_from.get())
                        date_to=Signal::derive(move || date_to.get())
                        on_change=Callback::new(move |(from, to): (String, String)| {
                            date_from.set(from);
                            date_to.set(to);
                        })
                        label="Period:".to_string()
                    />
                </div>

                <div style="width: 180px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>" "</Label>
                        <Flex gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Primary on_click=apply>
                                "Apply"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=clear>
                                "Clear"
                            </Button>
                        </Flex>
                    </Flex>
                </div>
            </Flex>

            <Show when=move || needs_customer.get()>
                <span class="field-hint field-hint--error">
                    "Select a customer to run the report"
                </span>
            </Show>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::store::ReportFilters;

    #[test]
    fn draft_without_customer_is_not_applicable() {
        let draft = CustomerWiseFilterDraft::from_filters(&CustomerWiseFilters::defaults());
        assert!(!draft.has_customer());
    }

    #[test]
    fn apply_commits_customer_salesman_and_range() {
        let mut committed = CustomerWiseFilters::defaults();
        let mut draft = CustomerWiseFilterDraft::from_filters(&committed);
        draft.customer_id = "c-3".to_string();
        draft.salesman_id = "s-7".to_string();
        draft.date_from = "2026-05-01".to_string();
        draft.date_to = "2026-05-31".to_string();

        draft.apply_to(&mut committed);

        assert_eq!(committed.customer_id, "c-3");
        assert_eq!(committed.salesman_id, "s-7");
        assert_eq!(
            committed.date_range,
            Some(DateRange {
                start: "2026-05-01".to_string(),
                end: "2026-05-31".to_string(),
            })
        );
    }

    #[test]
    fn half_selected_range_is_dropped_on_apply() {
        let mut committed = CustomerWiseFilters::defaults();
        let mut draft = CustomerWiseFilterDraft::from_filters(&committed);
        draft.customer_id = "c-3".to_string();
        draft.date_from = "2026-05-01".to_string();

        draft.apply_to(&mut committed);

        assert_eq!(committed.date_range, None);
    }
}
