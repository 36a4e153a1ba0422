use serde::{Deserialize, Serialize};

use crate::reports::store::{DateRange, ReportFilters, ALL};

/// Committed filter criteria of the customer-wise report.
///
/// Unlike the other reports this one is scoped to a single customer:
/// while `customer_id` still carries the "all" sentinel, the page never
/// fetches until a concrete customer is picked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerWiseFilters {
    pub search: String,
    /// Selected customer id, or the "all" sentinel meaning "not selected".
    pub customer_id: String,
    /// Salesman id, or the "all" sentinel.
    pub salesman_id: String,
    pub date_range: Option<DateRange>,
    pub page: u32,
    pub limit: u32,
}

impl CustomerWiseFilters {
    /// The report is only fetchable once a concrete customer is chosen.
    pub fn is_customer_selected(&self) -> bool {
        self.customer_id != ALL && !self.customer_id.is_empty()
    }
}

impl ReportFilters for CustomerWiseFilters {
    const STORAGE_KEY: &'static str = "r102_customer_wise_report_filters_v1";
    const PAGE_LIMIT: u32 = 10;

    fn defaults() -> Self {
        Self {
            search: String::new(),
            customer_id: ALL.to_string(),
            salesman_id: ALL.to_string(),
            date_range: None,
            page: 1,
            limit: Self::PAGE_LIMIT,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn limit(&self) -> u32 {
        self.limit
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if self.customer_id != ALL {
            params.push(("customerId", self.customer_id.clone()));
        }
        if self.salesman_id != ALL {
            params.push(("salesmanId", self.salesman_id.clone()));
        }
        if let Some(range) = &self.date_range {
            params.push(("startDate", range.start.clone()));
            params.push(("endDate", range.end.clone()));
        }
        params
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.customer_id != ALL)
            + usize::from(self.salesman_id != ALL)
            + usize::from(self.date_range.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::store::{ReportClient, ReportQuery, ReportStore};
    use contracts::reports::r102_customer_wise::dto::{Transaction, TransactionStats};
    use contracts::shared::envelope::{PageMeta, ReportEnvelope};
    use contracts::shared::error::ApiError;
    use futures::executor::block_on;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct FakeClient {
        calls: Arc<Mutex<Vec<ReportQuery>>>,
    }

    impl ReportClient for FakeClient {
        type Row = Transaction;
        type Stats = TransactionStats;

        async fn fetch(
            &self,
            query: &ReportQuery,
        ) -> Result<ReportEnvelope<Transaction, TransactionStats>, ApiError> {
            self.calls.lock().unwrap().push(query.clone());
            Ok(ReportEnvelope {
                data: Vec::new(),
                stats: TransactionStats::default(),
                pagination: PageMeta::default(),
            })
        }
    }

    #[test]
    fn defaults_have_no_customer_selected() {
        let filters = CustomerWiseFilters::defaults();
        assert!(!filters.is_customer_selected());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn concrete_customer_appears_under_wire_name() {
        let mut filters = CustomerWiseFilters::defaults();
        filters.customer_id = "c-12".to_string();
        assert!(filters.is_customer_selected());
        assert_eq!(
            filters.query_params(),
            vec![("customerId", "c-12".to_string())]
        );
    }

    #[test]
    fn no_fetch_until_a_customer_is_picked() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut store: ReportStore<CustomerWiseFilters, FakeClient> =
            ReportStore::new(FakeClient { calls: calls.clone() });

        // Page-level guard: skip the fetch while no customer is selected.
        if store.filters().is_customer_selected() {
            block_on(store.fetch_report("company-1"));
        }
        assert!(calls.lock().unwrap().is_empty());

        store.set_page(4);
        store.update_filters(|f| {
            f.customer_id = "c-12".to_string();
            f.date_range = Some(DateRange {
                start: "2026-02-01".to_string(),
                end: "2026-02-28".to_string(),
            });
        });
        if store.filters().is_customer_selected() {
            block_on(store.fetch_report("company-1"));
        }

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let query = &calls[0];
        assert_eq!(query.page, 1);
        assert!(query
            .params
            .contains(&("customerId", "c-12".to_string())));
        assert!(query
            .params
            .contains(&("startDate", "2026-02-01".to_string())));
        assert!(query.params.contains(&("endDate", "2026-02-28".to_string())));
    }
}
