mod api;
mod filter_bar;
mod state;

pub use api::CustomerWiseReportClient;
pub use state::CustomerWiseFilters;

use contracts::reports::r102_customer_wise::dto::Transaction;
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
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::shared::lookup::IdName;
use filter_bar::{CustomerWiseFilterBar, CustomerWiseFilterDraft};

impl CsvExportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec![
            "Date", "Voucher No", "Type", "Amount", "Balance", "Salesman", "Narration",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.date),
            self.voucher_no.clone().unwrap_or_default(),
            self.kind.clone(),
            format!("{:.2}", self.amount),
            format!("{:.2}", self.balance),
            self.salesman_name.clone().unwrap_or_default(),
            self.narration.clone().unwrap_or_default(),
        ]
    }
}

type CustomerWiseStore = ReportStore<CustomerWiseFilters, CustomerWiseReportClient>;

#[component]
pub fn CustomerWiseReportList() -> impl IntoView {
    let app = use_app_context();
    let store = RwSignal::new(CustomerWiseStore::restored(CustomerWiseReportClient));

    let is_filter_expanded = RwSignal::new(true);
    let customers = RwSignal::new(Vec::<IdName>::new());
    let salesmen = RwSignal::new(Vec::<IdName>::new());

    let company_id =
        Signal::derive(move || app.company.get().map(|c| c.id.to_string()).unwrap_or_default());

    let customer_selected =
        Signal::derive(move || store.with(|s| s.filters().is_customer_selected()));

    // Fetches only run against a concrete customer; until one is picked the
    // table shows a prompt instead of data.
    let load = move || {
        if !store.with_untracked(|s| s.filters().is_customer_selected()) {
            return;
        }
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

    Effect::new(move |_| {
        let cid = company_id.get();
        if cid.is_empty() {
            return;
        }
        load();
        spawn_local(async move {
            match fetch_id_name_list("/api/customers", &cid).await {
                Ok(list) => customers.set(list),
                Err(e) => log::warn!("failed to load customers: {e}"),
            }
            match fetch_id_name_list("/api/salesmen", &cid).await {
                Ok(list) => salesmen.set(list),
                Err(e) => log::warn!("failed to load salesmen: {e}"),
            }
        });
    });

    let commit = move |edit: Box<dyn FnOnce(&mut CustomerWiseFilters)>| {
        store.update(|s| s.update_filters(edit));
        store.with_untracked(|s| persist_filters(s.filters()));
        load();
    };

    let on_apply = Callback::new(move |draft: CustomerWiseFilterDraft| {
        commit(Box::new(move |f| draft.apply_to(f)));
        is_filter_expanded.set(false);
    });

    let on_clear = Callback::new(move |_| {
        store.update(|s| s.reset_filters());
        store.with_untracked(|s| persist_filters(s.filters()));
        // Clearing drops the customer too, so there is nothing to re-fetch;
        // the table falls back to the selection prompt.
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
        if !store.with_untracked(|s| s.filters().is_customer_selected()) {
            return;
        }
        let cid = company_id.get_untracked();
        if cid.is_empty() {
            return;
        }
        let snapshot = store.get_untracked();
        spawn_local(async move {
            match snapshot.fetch_all(&cid).await {
                Ok(rows) => {
                    if let Err(e) = export_to_csv(&rows, "customer_wise_report.csv") {
                        log::warn!("customer-wise export failed: {e}");
                    }
                }
                Err(e) => log::warn!("customer-wise export fetch failed: {e}"),
            }
        });
    };

    let is_loading = Signal::derive(move || store.with(|s| s.loading));
    let total_count = Signal::derive(move || store.with(|s| s.pagination.total));
    let stats = Signal::derive(move || store.with(|s| s.stats.clone()));

    view! {
        <PageFrame page_id="r102_customer_wise--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customer-Wise Report"</h1>
                    <span class="badge badge--primary">
                        {move || total_count.get().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                        disabled=Signal::derive(move || !customer_selected.get())
                    >
                        "Export"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || {
                            is_loading.get() || !customer_selected.get()
                        })
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total Sales".to_string()
                        icon_name="bar-chart".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.total_sales)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Total Received".to_string()
                        icon_name="receipt".to_string()
                        accent="success"
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.total_received)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Balance".to_string()
                        icon_name="book".to_string()
                        accent="warning"
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.balance)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Transactions".to_string()
                        icon_name="file-text".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_count(s.transaction_count)).unwrap_or_else(|| "-".to_string())
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
                                    placeholder="Voucher, narration...".to_string()
                                />
                            </div>
                            <CustomerWiseFilterBar
                                filters=Signal::derive(move || store.with(|s| s.filters().clone()))
                                customers=customers
                                salesmen=salesmen
                                on_apply=on_apply
                                on_clear=on_clear
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=110.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=130.0>"Voucher No"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=100.0>"Type"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=120.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=120.0>"Balance"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=160.0>"Salesman"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=220.0>"Narration"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if !customer_selected.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <TableCellLayout>
                                                    "Select a customer to view the report"
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                if is_loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <TableCellLayout>"Loading..."</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                let data = store.with(|s| s.data.clone());
                                if data.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <TableCellLayout>"No records found"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                data.into_iter().map(|row| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_date(&row.date)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.voucher_no.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("status-badge status-badge--{}", row.kind)>
                                                        {row.kind.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_amount(row.amount)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_amount(row.balance)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.salesman_name.clone().unwrap_or_default()}
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
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn csv_row_matches_headers() {
        let row = Transaction {
            id: Uuid::from_u128(2),
            date: "2026-05-02".to_string(),
            voucher_no: Some("INV-44".to_string()),
            kind: "sale".to_string(),
            amount: 820.5,
            balance: 1320.5,
            salesman_name: None,
            salesman_id: None,
            narration: None,
        }
        .to_csv_row();
        assert_eq!(row.len(), Transaction::headers().len());
        assert_eq!(row[0], "02/05/2026");
        assert_eq!(row[2], "sale");
    }

    #[test]
    fn defaults_resolve_through_the_store_trait() {
        let filters = CustomerWiseFilters::defaults();
        assert_eq!(filters.active_count(), 0);
        assert!(!filters.is_customer_selected());
    }
}
