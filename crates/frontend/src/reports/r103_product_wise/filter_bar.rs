use contracts::shared::lookup::IdName;
use leptos::prelude::*;
use thaw::*;

use super::state::ProductWiseFilters;
use crate::reports::store::{DateRange, ALL};
use crate::shared::components::DateRangePicker;

/// Editable copy of [`ProductWiseFilters`], testable without a DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductWiseFilterDraft {
    pub customer_id: String,
    pub salesman_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl ProductWiseFilterDraft {
    pub fn from_filters(filters: &ProductWiseFilters) -> Self {
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

    pub fn apply_to(&self, filters: &mut ProductWiseFilters) {
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
pub fn ProductWiseFilterBar(
    #[prop(into)] filters: Signal<ProductWiseFilters>,

    #[prop(into)] customers: Signal<Vec<IdName>>,

    #[prop(into)] salesmen: Signal<Vec<IdName>>,

    on_apply: Callback<ProductWiseFilterDraft>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let customer_id = RwSignal::new(String::new());
    let salesman_id = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    Effect::new(move |_| {
        let draft = ProductWiseFilterDraft::from_filters(&filters.get());
        customer_id.set(draft.customer_id);
        salesman_id.set(draft.salesman_id);
        date_from.set(draft.date_from);
        date_to.set(draft.date_to);
    });

    let apply = move |_| {
        on_apply.run(ProductWiseFilterDraft {
            customer_id: customer_id.get_untracked(),
            salesman_id: salesman_id.get_untracked(),
            date_from: date_from.get_untracked(),
            date_to: date_to.get_untracked(),
        });
    };

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::End>
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

            <div style="width: 240px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Customer:"</Label>
                    <Select value=customer_id>
                        <option value=ALL>"All"</option>
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

            <div style="width: 180px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>" "</Label>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=apply>
                            "Apply"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_clear.run(())>
                            "Clear"
                        </Button>
                    </Flex>
                </Flex>
            </div>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::store::ReportFilters;

    #[test]
    fn apply_commits_dimensions_and_range_as_a_whole() {
        let mut committed = ProductWiseFilters::defaults();
        let mut draft = ProductWiseFilterDraft::from_filters(&committed);
        draft.customer_id = "c-5".to_string();
        draft.date_from = "2026-06-01".to_string();
        // date_to left empty: the half-selected range must not commit
        draft.apply_to(&mut committed);

        assert_eq!(committed.customer_id, "c-5");
        assert_eq!(committed.date_range, None);

        draft.date_to = "2026-06-30".to_string();
        draft.apply_to(&mut committed);
        assert_eq!(
            committed.date_range,
            Some(DateRange {
                start: "2026-06-01".to_string(),
                end: "2026-06-30".to_string(),
            })
        );
    }
}
