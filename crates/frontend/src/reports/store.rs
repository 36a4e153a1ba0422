//! Generic filter/pagination state container shared by all report pages.
//!
//! One [`ReportStore`] instance exists per report type. It owns the
//! committed filter criteria, the last fetched page of rows with its
//! aggregate stats, and the loading flag, and it mediates every network
//! call for that report through an injected [`ReportClient`] so tests can
//! substitute a fake client.
//!
//! Concurrency contract: overlapping fetches are neither de-duplicated nor
//! cancelled. Whichever response lands last wins.

use contracts::shared::envelope::{PageMeta, ReportEnvelope};
use contracts::shared::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Sentinel value meaning "this filter dimension is unconstrained".
/// Never forwarded to the network layer.
pub const ALL: &str = "all";

/// Page size used by the unpaged export fetch.
pub const EXPORT_LIMIT: u32 = 10_000;

/// Inclusive date range, ISO-8601 (`YYYY-MM-DD`). Only ever committed as a
/// whole: a half-selected range in a picker never reaches the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Committed filter criteria of one report type.
///
/// `query_params` returns only the non-neutral fields under their wire
/// names; `companyId`, `page` and `limit` are appended by the store.
pub trait ReportFilters:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// localStorage key the committed filters persist under.
    const STORAGE_KEY: &'static str;
    /// Fixed page size of this report.
    const PAGE_LIMIT: u32;

    fn defaults() -> Self;
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn limit(&self) -> u32;
    fn query_params(&self) -> Vec<(&'static str, String)>;
    /// Count of fields differing from their neutral default. Drives the
    /// filter badge; never reflects loading state.
    fn active_count(&self) -> usize;
}

/// One fully resolved report query, ready to hit the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportQuery {
    pub company_id: String,
    pub page: u32,
    pub limit: u32,
    pub params: Vec<(&'static str, String)>,
}

impl ReportQuery {
    pub fn to_query_string(&self) -> String {
        let mut qs = format!(
            "companyId={}&page={}&limit={}",
            urlencoding::encode(&self.company_id),
            self.page,
            self.limit
        );
        for (key, value) in &self.params {
            qs.push('&');
            qs.push_str(key);
            qs.push('=');
            qs.push_str(&urlencoding::encode(value));
        }
        qs
    }
}

/// Injected HTTP dependency of a [`ReportStore`].
#[allow(async_fn_in_trait)]
pub trait ReportClient: Clone + Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;
    type Stats: Clone + Send + Sync + 'static;

    async fn fetch(
        &self,
        query: &ReportQuery,
    ) -> Result<ReportEnvelope<Self::Row, Self::Stats>, ApiError>;
}

#[derive(Clone)]
pub struct ReportStore<F: ReportFilters, C: ReportClient> {
    filters: F,
    pub data: Vec<C::Row>,
    pub stats: Option<C::Stats>,
    pub loading: bool,
    pub pagination: PageMeta,
    client: C,
}

impl<F: ReportFilters, C: ReportClient> ReportStore<F, C> {
    pub fn new(client: C) -> Self {
        Self {
            filters: F::defaults(),
            data: Vec::new(),
            stats: None,
            loading: false,
            pagination: PageMeta::default(),
            client,
        }
    }

    /// Like [`ReportStore::new`] but seeds the filters from localStorage.
    /// Results are never persisted; the first fetch is always fresh.
    pub fn restored(client: C) -> Self {
        let mut store = Self::new(client);
        if let Some(persisted) = load_filters::<F>() {
            store.filters = persisted;
        }
        store
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn client(&self) -> C {
        self.client.clone()
    }

    /// Commit an edit to any non-pagination filter fields. Always snaps
    /// back to page 1, whatever the edit touched.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filters);
        self.filters.set_page(1);
    }

    pub fn set_page(&mut self, page: u32) {
        self.filters.set_page(page.max(1));
    }

    pub fn reset_filters(&mut self) {
        self.filters = F::defaults();
    }

    pub fn query(&self, company_id: &str) -> ReportQuery {
        ReportQuery {
            company_id: company_id.to_string(),
            page: self.filters.page(),
            limit: self.filters.limit(),
            params: self.filters.query_params(),
        }
    }

    /// First half of a paged fetch: flips `loading` and hands out the query
    /// to run. Returns `None` (and stays idle) when no company is selected.
    pub fn begin_fetch(&mut self, company_id: &str) -> Option<ReportQuery> {
        if company_id.is_empty() {
            return None;
        }
        self.loading = true;
        Some(self.query(company_id))
    }

    /// Second half of a paged fetch. A failure is logged and degrades the
    /// report to an empty, zero-stat view; it never propagates.
    pub fn finish_fetch(&mut self, outcome: Result<ReportEnvelope<C::Row, C::Stats>, ApiError>) {
        match outcome {
            Ok(envelope) => {
                self.data = envelope.data;
                self.stats = Some(envelope.stats);
                self.pagination = envelope.pagination;
            }
            Err(err) => {
                log::warn!("report fetch failed: {err}");
                self.data = Vec::new();
                self.stats = None;
                self.pagination = PageMeta::default();
            }
        }
        self.loading = false;
    }

    /// Paged fetch against the current filters. The UI drives the same
    /// transitions through `begin_fetch`/`finish_fetch` because it cannot
    /// hold the store borrowed across the await point.
    pub async fn fetch_report(&mut self, company_id: &str) {
        let Some(query) = self.begin_fetch(company_id) else {
            return;
        };
        let outcome = self.client.fetch(&query).await;
        self.finish_fetch(outcome);
    }

    /// Unpaged export fetch: same criteria, `page=1`, an effectively
    /// unbounded limit. Returns the rows directly and leaves the store
    /// state (including `loading`) untouched.
    pub async fn fetch_all(&self, company_id: &str) -> Result<Vec<C::Row>, ApiError> {
        let mut query = self.query(company_id);
        query.page = 1;
        query.limit = EXPORT_LIMIT;
        Ok(self.client.fetch(&query).await?.data)
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted filter criteria, if any. Only the filters survive a
/// reload; rows, stats and pagination are always re-fetched.
pub fn load_filters<F: ReportFilters>() -> Option<F> {
    let raw = storage()?.get_item(F::STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<F>(&raw).ok()
}

pub fn persist_filters<F: ReportFilters>(filters: &F) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(filters) else {
        return;
    };
    let _ = storage.set_item(F::STORAGE_KEY, &raw);
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestFilters {
        status: String,
        date_range: Option<DateRange>,
        page: u32,
        limit: u32,
    }

    impl ReportFilters for TestFilters {
        const STORAGE_KEY: &'static str = "test_report_filters_v1";
        const PAGE_LIMIT: u32 = 10;

        fn defaults() -> Self {
            Self {
                status: ALL.to_string(),
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
            if self.status != ALL {
                params.push(("status", self.status.clone()));
            }
            if let Some(range) = &self.date_range {
                params.push(("startDate", range.start.clone()));
                params.push(("endDate", range.end.clone()));
            }
            params
        }

        fn active_count(&self) -> usize {
            usize::from(self.status != ALL) + usize::from(self.date_range.is_some())
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct TestRow {
        id: u32,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestStats {
        count: u32,
    }

    #[derive(Clone)]
    struct FakeClient {
        fail: bool,
        calls: Arc<Mutex<Vec<ReportQuery>>>,
    }

    impl FakeClient {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<ReportQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ReportClient for FakeClient {
        type Row = TestRow;
        type Stats = TestStats;

        async fn fetch(
            &self,
            query: &ReportQuery,
        ) -> Result<ReportEnvelope<TestRow, TestStats>, ApiError> {
            self.calls.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(ApiError::Status(500));
            }
            Ok(ReportEnvelope {
                data: vec![TestRow { id: 1 }, TestRow { id: 2 }],
                stats: TestStats { count: 2 },
                pagination: PageMeta {
                    total: 2,
                    total_pages: 1,
                },
            })
        }
    }

    fn store(fail: bool) -> ReportStore<TestFilters, FakeClient> {
        ReportStore::new(FakeClient::new(fail))
    }

    #[test]
    fn neutral_filters_produce_no_optional_params() {
        let qs = store(false).query("c1").to_query_string();
        assert_eq!(qs, "companyId=c1&page=1&limit=10");
        assert!(!qs.contains("status="));
        assert!(!qs.contains("startDate="));
    }

    #[test]
    fn non_neutral_fields_reach_the_wire() {
        let mut s = store(false);
        s.update_filters(|f| {
            f.status = "completed".to_string();
            f.date_range = Some(DateRange {
                start: "2026-01-01".to_string(),
                end: "2026-01-31".to_string(),
            });
        });
        let qs = s.query("c1").to_query_string();
        assert!(qs.contains("status=completed"));
        assert!(qs.contains("startDate=2026-01-01"));
        assert!(qs.contains("endDate=2026-01-31"));
    }

    #[test]
    fn update_filters_resets_page_to_one() {
        let mut s = store(false);
        s.set_page(7);
        assert_eq!(s.filters().page, 7);
        s.update_filters(|f| f.status = "pending".to_string());
        assert_eq!(s.filters().page, 1);
    }

    #[test]
    fn set_page_is_clamped_and_keeps_filters() {
        let mut s = store(false);
        s.update_filters(|f| f.status = "pending".to_string());
        s.set_page(0);
        assert_eq!(s.filters().page, 1);
        s.set_page(3);
        assert_eq!(s.filters().page, 3);
        assert_eq!(s.filters().status, "pending");
    }

    #[test]
    fn reset_restores_type_defaults() {
        let mut s = store(false);
        s.update_filters(|f| f.status = "pending".to_string());
        s.set_page(4);
        s.reset_filters();
        assert_eq!(s.filters(), &TestFilters::defaults());
    }

    #[test]
    fn successful_fetch_replaces_page_wholesale() {
        let mut s = store(false);
        block_on(s.fetch_report("c1"));
        assert_eq!(s.data.len(), 2);
        assert_eq!(s.stats, Some(TestStats { count: 2 }));
        assert_eq!(s.pagination.total, 2);
        assert!(!s.loading);
    }

    #[test]
    fn failed_fetch_degrades_to_empty_view() {
        let mut s = store(true);
        block_on(s.fetch_report("c1"));
        assert!(s.data.is_empty());
        assert_eq!(s.stats, None);
        assert_eq!(s.pagination, PageMeta::default());
        assert!(!s.loading);
    }

    #[test]
    fn fetch_without_company_is_a_noop() {
        let mut s = store(false);
        block_on(s.fetch_report(""));
        assert!(!s.loading);
        assert!(s.client.calls().is_empty());
    }

    #[test]
    fn export_fetch_uses_sentinel_limit_and_leaves_state_alone() {
        let mut s = store(false);
        s.set_page(5);
        let rows = block_on(s.fetch_all("c1")).unwrap();
        assert_eq!(rows.len(), 2);

        let calls = s.client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 1);
        assert_eq!(calls[0].limit, EXPORT_LIMIT);

        assert!(s.data.is_empty());
        assert!(!s.loading);
        assert_eq!(s.filters().page, 5);
    }
}
