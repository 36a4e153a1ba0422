use serde::{Deserialize, Serialize};

use crate::reports::store::{DateRange, ReportFilters, ALL};

/// Committed filter criteria of the payment report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentFilters {
    pub search: String,
    /// completed / pending / cancelled, or the "all" sentinel.
    pub status: String,
    /// cash / cheque / upi / bank_transfer, or the "all" sentinel.
    pub mode: String,
    /// Receiving user id, or the "all" sentinel.
    pub user_id: String,
    pub date_range: Option<DateRange>,
    pub page: u32,
    pub limit: u32,
}

impl ReportFilters for PaymentFilters {
    const STORAGE_KEY: &'static str = "r101_payment_report_filters_v1";
    const PAGE_LIMIT: u32 = 10;

    fn defaults() -> Self {
        Self {
            search: String::new(),
            status: ALL.to_string(),
            mode: ALL.to_string(),
            user_id: ALL.to_string(),
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
        if self.status != ALL {
            params.push(("status", self.status.clone()));
        }
        if self.mode != ALL {
            params.push(("mode", self.mode.clone()));
        }
        if self.user_id != ALL {
            params.push(("userId", self.user_id.clone()));
        }
        if let Some(range) = &self.date_range {
            params.push(("startDate", range.start.clone()));
            params.push(("endDate", range.end.clone()));
        }
        params
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.status != ALL)
            + usize::from(self.mode != ALL)
            + usize::from(self.user_id != ALL)
            + usize::from(self.date_range.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_defaults_have_zero_active_filters() {
        let filters = PaymentFilters::defaults();
        assert_eq!(filters.active_count(), 0);
        assert!(filters.query_params().is_empty());
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, PaymentFilters::PAGE_LIMIT);
    }

    #[test]
    fn single_status_filter_counts_as_one() {
        let mut filters = PaymentFilters::defaults();
        filters.status = "completed".to_string();
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn wire_names_follow_the_api() {
        let filters = PaymentFilters {
            search: "acme".to_string(),
            status: "pending".to_string(),
            mode: "upi".to_string(),
            user_id: "u-1".to_string(),
            date_range: Some(DateRange {
                start: "2026-02-01".to_string(),
                end: "2026-02-28".to_string(),
            }),
            page: 1,
            limit: 10,
        };
        assert_eq!(
            filters.query_params(),
            vec![
                ("search", "acme".to_string()),
                ("status", "pending".to_string()),
                ("mode", "upi".to_string()),
                ("userId", "u-1".to_string()),
                ("startDate", "2026-02-01".to_string()),
                ("endDate", "2026-02-28".to_string()),
            ]
        );
        assert_eq!(filters.active_count(), 5);
    }

    #[test]
    fn persisted_filters_round_trip() {
        let mut filters = PaymentFilters::defaults();
        filters.mode = "cash".to_string();
        let json = serde_json::to_string(&filters).unwrap();
        let back: PaymentFilters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filters);
    }
}
