//! Payment filter bar: draft fields the user can edit freely; nothing
//! reaches the committed store until Apply.

use contracts::shared::lookup::IdName;
use leptos::prelude::*;
use thaw::*;

use super::state::PaymentFilters;
use crate::reports::store::{DateRange, ALL};
use crate::shared::components::DateRangePicker;

/// Editable copy of [`PaymentFilters`], testable without a DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentFilterDraft {
    pub status: String,
    pub mode: String,
    pub user_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl PaymentFilterDraft {
    pub fn from_filters(filters: &PaymentFilters) -> Self {
        let (date_from, date_to) = match &filters.date_range {
            Some(range) => (range.start.clone(), range.end.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            status: filters.status.clone(),
            mode: filters.mode.clone(),
            user_id: filters.user_id.clone(),
            date_from,
            date_to,
        }
    }

    /// Write every draft field into the committed filters. The date range
    /// is committed as a whole or not at all.
    pub fn apply_to(&self, filters: &mut PaymentFilters) {
        filters.status = self.status.clone();
        filters.mode = self.mode.clone();
        filters.user_id = self.user_id.clone();
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
pub fn PaymentFilterBar(
    /// Committed filters; drafts re-seed whenever these change externally
    #[prop(into)]
    filters: Signal<PaymentFilters>,

    /// Receiving users for the receiver select
    #[prop(into)]
    receivers: Signal<Vec<IdName>>,

    on_apply: Callback<PaymentFilterDraft>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let status = RwSignal::new(String::new());
    let mode = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    // Committed -> draft sync (mount, reset, programmatic change)
    Effect::new(move |_| {
        let draft = PaymentFilterDraft::from_filters(&filters.get());
        status.set(draft.status);
        mode.set(draft.mode);
        user_id.set(draft.user_id);
        date_from.set(draft.date_from);
        date_to.set(draft.date_to);
    });

    let apply = move |_| {
        on_apply.run(PaymentFilterDraft {
            status: status.get_untracked(),
            mode: mode.get_untracked(),
            user_id: user_id.get_untracked(),
            date_from: date_from.get_untracked(),
            date_to: date_to.get_untracked(),
        });
    };

    let clear = move |_| {
        on_clear.run(());
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

            <div style="width: 180px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Status:"</Label>
                    <Select value=status>
                        <option value=ALL>"All"</option>
                        <option value="completed">"Completed"</option>
                        <option value="pending">"Pending"</option>
                        <option value="cancelled">"Cancelled"</option>
                    </Select>
                </Flex>
            </div>

            <div style="width: 180px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Mode:"</Label>
                    <Select value=mode>
                        <option value=ALL>"All"</option>
                        <option value="cash">"Cash"</option>
                        <option value="cheque">"Cheque"</option>
                        <option value="upi">"UPI"</option>
                        <option value="bank_transfer">"Bank Transfer"</option>
                    </Select>
                </Flex>
            </div>

            <div style="width: 220px;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Receiver:"</Label>
                    <Select value=user_id>
                        <option value=ALL>"All"</option>
                        {move || receivers.get().into_iter().map(|u| {
                            view! { <option value={u.id.clone()}>{u.name.clone()}</option> }
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
                        <Button appearance=ButtonAppearance::Subtle on_click=clear>
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
    fn draft_edits_leave_committed_filters_untouched() {
        let committed = PaymentFilters::defaults();
        let mut draft = PaymentFilterDraft::from_filters(&committed);

        draft.status = "completed".to_string();
        draft.date_from = "2026-01-01".to_string();
        draft.date_to = "2026-01-31".to_string();

        assert_eq!(committed, PaymentFilters::defaults());
    }

    #[test]
    fn apply_commits_every_draft_field() {
        let mut committed = PaymentFilters::defaults();
        let mut draft = PaymentFilterDraft::from_filters(&committed);
        draft.status = "pending".to_string();
        draft.user_id = "u-9".to_string();
        draft.date_from = "2026-03-01".to_string();
        draft.date_to = "2026-03-31".to_string();

        draft.apply_to(&mut committed);

        assert_eq!(committed.status, "pending");
        assert_eq!(committed.user_id, "u-9");
        assert_eq!(
            committed.date_range,
            Some(DateRange {
                start: "2026-03-01".to_string(),
                end: "2026-03-31".to_string(),
            })
        );
    }

    #[test]
    fn half_selected_date_range_is_not_committed() {
        let mut committed = PaymentFilters::defaults();
        let mut draft = PaymentFilterDraft::from_filters(&committed);
        draft.date_from = "2026-03-01".to_string();

        draft.apply_to(&mut committed);

        assert_eq!(committed.date_range, None);
    }
}
