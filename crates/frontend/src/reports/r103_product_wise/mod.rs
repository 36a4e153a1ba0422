mod api;
mod filter_bar;
mod state;

pub use api::ProductWiseReportClient;
pub use state::ProductWiseFilters;

use contracts::reports::r103_product_wise::dto::ProductLine;
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
use filter_bar::{ProductWiseFilterBar, ProductWiseFilterDraft};

impl CsvExportable for ProductLine {
    fn headers() -> Vec<&'static str> {
        vec![
            "Date", "Product", "Unit", "Quantity", "Rate", "Amount", "Customer", "Salesman",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.date),
            self.product_name.clone(),
            self.unit.clone().unwrap_or_default(),
            format!("{:.2}", self.quantity),
            format!("{:.2}", self.rate),
            format!("{:.2}", self.amount),
            self.customer_name.clone().unwrap_or_default(),
            self.salesman_name.clone().unwrap_or_default(),
        ]
    }
}

type ProductWiseStore = ReportStore<ProductWiseFilters, ProductWiseReportClient>;

#[component]
pub fn ProductWiseReportList() -> impl IntoView {
    let app = use_app_context();
    let store = RwSignal::new(ProductWiseStore::restored(ProductWiseReportClient));

    let is_filter_expanded = RwSignal::new(true);
    let customers = RwSignal::new(Vec::<IdName>::new());
    let salesmen = RwSignal::new(Vec::<IdName>::new());

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

    let commit = move |edit: Box<dyn FnOnce(&mut ProductWiseFilters)>| {
        store.update(|s| s.update_filters(edit));
        store.with_untracked(|s| persist_filters(s.filters()));
        load();
    };

    let on_apply = Callback::new(move |draft: ProductWiseFilterDraft| {
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
                    if let Err(e) = export_to_csv(&rows, "product_wise_report.csv") {
                        log::warn!("product-wise export failed: {e}");
                    }
                }
                Err(e) => log::warn!("product-wise export fetch failed: {e}"),
            }
        });
    };

    let is_loading = Signal::derive(move || store.with(|s| s.loading));
    let total_count = Signal::derive(move || store.with(|s| s.pagination.total));
    let stats = Signal::derive(move || store.with(|s| s.stats.clone()));

    view! {
        <PageFrame page_id="r103_product_wise--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Product-Wise Report"</h1>
                    <span class="badge badge--primary">
                        {move || total_count.get().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_export>
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
                        label="Total Quantity".to_string()
                        icon_name="layers".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.total_quantity)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Total Amount".to_string()
                        icon_name="receipt".to_string()
                        accent="success"
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_amount(s.total_amount)).unwrap_or_else(|| "-".to_string())
                        })
                    />
                    <StatCard
                        label="Products".to_string()
                        icon_name="package".to_string()
                        value=Signal::derive(move || {
                            stats.get().map(|s| format_count(s.product_count)).unwrap_or_else(|| "-".to_string())
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
                                    placeholder="Product name...".to_string()
                                />
                            </div>
                            <ProductWiseFilterBar
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
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=110.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Product"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=80.0>"Unit"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=100.0>"Quantity"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=100.0>"Rate"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=120.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=160.0>"Salesman"</TableHeaderCell>
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
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_date(&row.date)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.product_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {row.unit.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_amount(row.quantity)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_amount(row.rate)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_amount(row.amount)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.customer_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.salesman_name.clone().unwrap_or_default()}
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
        let row = ProductLine {
            id: Uuid::from_u128(3),
            product_id: Uuid::from_u128(4),
            product_name: "Soap 75g".to_string(),
            unit: Some("pcs".to_string()),
            quantity: 12.0,
            rate: 18.5,
            amount: 222.0,
            customer_name: Some("Acme Traders".to_string()),
            salesman_name: None,
            date: "2026-04-10".to_string(),
        }
        .to_csv_row();
        assert_eq!(row.len(), ProductLine::headers().len());
        assert_eq!(row[0], "10/04/2026");
        assert_eq!(row[5], "222.00");
    }

    #[test]
    fn defaults_resolve_through_the_store_trait() {
        assert_eq!(ProductWiseFilters::defaults().active_count(), 0);
    }
}
