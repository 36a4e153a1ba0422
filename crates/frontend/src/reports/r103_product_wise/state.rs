use serde::{Deserialize, Serialize};

use crate::reports::store::{DateRange, ReportFilters, ALL};

/// Committed filter criteria of the product-wise report. Customer and
/// salesman are both optional narrowing dimensions here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductWiseFilters {
    pub search: String,
    /// Customer id, or the "all" sentinel.
    pub customer_id: String,
    /// Salesman id, or the "all" sentinel.
    pub salesman_id: String,
    pub date_range: Option<DateRange>,
    pub page: u32,
    pub limit: u32,
}

impl ReportFilters for ProductWiseFilters {
    const STORAGE_KEY: &'static str = "r103_product_wise_report_filters_v1";
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

    #[test]
    fn defaults_produce_no_params() {
        let filters = ProductWiseFilters::defaults();
        assert!(filters.query_params().is_empty());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn every_dimension_appears_under_its_wire_name() {
        let filters = ProductWiseFilters {
            search: "soap".to_string(),
            customer_id: "c-1".to_string(),
            salesman_id: "s-2".to_string(),
            date_range: Some(DateRange {
                start: "2026-04-01".to_string(),
                end: "2026-04-30".to_string(),
            }),
            page: 3,
            limit: 10,
        };
        assert_eq!(
            filters.query_params(),
            vec![
                ("search", "soap".to_string()),
                ("customerId", "c-1".to_string()),
                ("salesmanId", "s-2".to_string()),
                ("startDate", "2026-04-01".to_string()),
                ("endDate", "2026-04-30".to_string()),
            ]
        );
        assert_eq!(filters.active_count(), 4);
    }
}
