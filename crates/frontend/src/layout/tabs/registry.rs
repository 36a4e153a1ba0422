//! Tab content registry - the single mapping from tab key to page view.

use crate::reports::r101_payment::PaymentReportList;
use crate::reports::r102_customer_wise::CustomerWiseReportList;
use crate::reports::r103_product_wise::ProductWiseReportList;
use crate::system::pages::DashboardPage;
use leptos::prelude::*;

use super::tab_label_for_key;

/// Render the page for a tab key. Keys the console does not implement
/// (master-data registration pages, location tracking, settings) fall to
/// the placeholder panel.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <DashboardPage /> }.into_any(),

        "r101_payment" => view! { <PaymentReportList /> }.into_any(),
        "r102_customer_wise" => view! { <CustomerWiseReportList /> }.into_any(),
        "r103_product_wise" => view! { <ProductWiseReportList /> }.into_any(),

        _ => {
            let label = tab_label_for_key(key).to_string();
            view! {
                <div class="page">
                    <div class="page__content">
                        <h2>{label}</h2>
                        <p>"Not implemented yet"</p>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
