mod api;
mod filter_bar;
mod state;

pub use api::PaymentReportClient;
pub use state::PaymentFilters;

use contracts::reports::r101_payment::dto::PaymentRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::reports::store::{persist_filters, ReportClient, ReportFilters, ReportStore};
use crate::shared::api_utils::fetch_id_name_list;
use crate::shared::components::stat_card::{format_amount, format_count};
use crate::shared::components::{FilterPanel, PaginationControls, SearchInput, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::shared::lookup::IdName;
use filter_bar::{PaymentFilterBar, PaymentFilterDraft};

impl CsvExportable for PaymentRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Date", "Customer", "Amount", "Mode", "Status", "Receiver", "Reference", "Narration",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.date),
            self.customer_name.clone().unwrap_or_default(),
            format!("{:.2}", self.amount),
            self.mode.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
            self.receiver_name.clone().unwrap_or_default(),
            self.reference_no.clone().unwrap_or_default(),
            self.narration.clone().unwrap_or_default(),
        ]
    }
}

type PaymentStore = ReportStore<PaymentFilters, PaymentReportClient>;

#[component]
pub fn PaymentReportList() -> impl IntoView {
    let app = use_app_context();
    let store = RwSignal::new(PaymentStore::restored(PaymentReportClient));

    let is_filter_expanded = RwSignal::new(true);
    let card_view = RwSignal::new(false);
    let receivers = RwSignal::new(Vec::<IdName>::new());

    let company_id =
        Signal::derive(move || app.company.get().map(|c| c.id.to_string()).unwrap_or_default());

    let load = move || {
        let cid = company_id.get_untracked();
        let mut query = None;
        store.update(|s| query = s.begin_fetch(&cid));
        let Some(query) = query else { return };
        spawn_local(async move {
            let client = store.with_untracked(|s| s.client());
            let outcome = client.fetch(&query).await;
            store.update(|s| s.finish_fetch(outcome));
        });
    };

    // Reload on company change (and on mount once a company is known)
    Effect::new(move |_| {
        let cid = company_id.get();
        if cid.is_empty() {
            return;
        }
        load();
        spawn_local(async move {
            match fetch_id_name_list("/api/users", &cid).await {
                Ok(users) => receivers.set(users),
                Err(e) => log::warn!("failed to load receivers: {e}"),
            }
        });
    });

    let commit = move |edit: Box<dyn FnOnce(&mut PaymentFilters)>| {
        store.update(|s| s.update_filters(edit));
        store.with_untracked(|s| persist_filters(s.filters()));
        load();
    };

    let on_apply = Callback::new(move |draft: PaymentFilterDraft| {
        commit(Box::new(move |f| draft.apply_to(f)));
        is_filter_expanded.set(false);
    });

    let on_clear = Callback::new(move |_| {
        store.update(|s| s.reset_filters());
        store.with_untracked(|s| persist_filters(s.filters()));
        load();
    });

    let on_search = Callback::new(move |text: String| {
        commit(Box::new(move |f| f.search = text));
    });

    let go_to_page = Callback::new(move |page: u32| {
        store.update(|s| s.set_page(page));
        store.with_untracked(|s| persist_filters(s.filters()));
        load();
    });

    let on_export = move |_| {
        let cid = company_id.get_untracked();
        if cid.is_empty() {
            return;
        }
        let snapshot = store.get_untracked();
        spawn_local(async move {
            match snapshot.fetch_all(&cid).await {
                Ok(rows) => {
                    if let Err(e) = export_to_csv(&rows, "payment_report.csv") {
                        log::warn!("payment export failed: {e}");
                    }
                }
                Err(e) => log::warn!("payment export fetch failed: {e}"),
            }
        });
    };

    let is_loading = Signal::derive(move || store.with(|s| s.loading));
    let total_count = Signal::derive(move || store.with(|s| s.pagination.total));
    let stats = Signal::derive(move || store.with(|s| s.stats.clone()));

    view! {
        <PageFrame page_id="r101_payment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payment Report"</h1>
                    <span class="badge badge--primary">
                        {move || total_count.get().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <button
                        class="top-header__icon-btn"
                        title=move || if card_view.get() { "Table view" } else { "Card view" }
                        on:click=move |_| card_view.update(|v| *v = !*v)
                    >
                        {move || if card_view.get() { icon("table") } else { icon("grid") }}
                    </button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                    >
                        {icon("download")}
                        "Export"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total Amount".to_string()
                        icon_name="receipt".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.total_amount)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Payments".to_string()
                        icon_name="bar-chart".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_count(s.total_count)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Completed".to_string()
                        icon_name="user-check".to_string()
                        accent="success"
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_count(s.completed_count)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Pending".to_string()
                        icon_name="filter".to_string()
                        accent="warning"
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_count(s.pending_count)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                </div>

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || {
                        store.with(|s| s.filters().active_count())
                    })
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || store.with(|s| s.filters().page))
                            total_pages=Signal::derive(move || store.with(|s| s.pagination.total_pages))
                            total_count=total_count
                            on_page_change=go_to_page
                        />
                    }
                    filter_content=move || view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <div style="max-width: 320px;">
                                <SearchInput
                                    value=Signal::derive(move || store.with(|s| s.filters().search.clone()))
                                    on_search=on_search
                                    placeholder="Customer, reference...".to_string()
                                />
                            </div>
                            <PaymentFilterBar
                                filters=Signal::derive(move || store.with(|s| s.filters().clone()))
                                receivers=receivers
                                on_apply=on_apply
                                on_clear=on_clear
                            />
                        </Flex>
                    }
                />

                <Show
                    when=move || !card_view.get()
                    fallback=move || view! {
                        <div class="card-grid">
                            {move || store.with(|s| s.data.clone()).into_iter().map(|row| {
                                view! {
                                    <div class="report-card">
                                        <div class="report-card__title">
                                            {row.customer_name.clone().unwrap_or_default()}
                                        </div>
                                        <div class="report-card__value">
                                            {format_amount(row.amount)}
                                        </div>
                                        <div class="report-card__meta">
                                            {format_date(&row.date)}
                                            " · "
                                            {row.mode.clone().unwrap_or_default()}
                                            " · "
                                            {row.status.clone().unwrap_or_default()}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1000px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=true min_width=110.0>"Date"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=180.0>"Customer"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=110.0>"Amount"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=110.0>"Mode"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=110.0>"Status"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=160.0>"Receiver"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=140.0>"Reference"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=200.0>"Narration"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    if is_loading.get() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="8">
                                                    <TableCellLayout>"Loading..."</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    let data = store.with(|s| s.data.clone());
                                    if data.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="8">
                                                    <TableCellLayout>"No records found"</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    data.into_iter().map(|row| {
                                        let status = row.status.clone().unwrap_or_default();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {format_date(&row.date)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.customer_name.clone().unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_amount(row.amount)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.mode.clone().unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=format!("status-badge status-badge--{status}")>
                                                            {status.clone()}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.receiver_name.clone().unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.reference_no.clone().unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.narration.clone().unwrap_or_default()}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record() -> PaymentRecord {
        PaymentRecord {
            id: Uuid::from_u128(1),
            date: "2026-03-15".to_string(),
            amount: 1500.0,
            mode: Some("cash".to_string()),
            status: Some("completed".to_string()),
            customer_name: Some("Acme Traders".to_string()),
            receiver_name: None,
            receiver_id: None,
            reference_no: None,
            narration: None,
        }
    }

    #[test]
    fn csv_row_matches_headers() {
        let row = record().to_csv_row();
        assert_eq!(row.len(), PaymentRecord::headers().len());
        assert_eq!(row[0], "15/03/2026");
        assert_eq!(row[2], "1500.00");
    }

    #[test]
    fn filter_badge_counts_through_the_store_trait() {
        let mut filters = PaymentFilters::defaults();
        filters.status = "completed".to_string();
        assert_eq!(filters.active_count(), 1);
    }
}
