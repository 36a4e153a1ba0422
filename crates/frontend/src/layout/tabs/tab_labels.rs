//! Tab titles, one mapping for every openable key. Fallback: the key
//! itself, so a stale `?active=` URL still shows something readable.

pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "dashboard" => "Dashboard",

        // Business management
        "company" => "Company",
        "vendor" => "Vendor",
        "customer" => "Customer",
        "ledger" => "Ledger",
        "salesman" => "Salesman",

        // Inventory
        "product" => "Product",
        "stock_group" => "Stock Group",
        "stock_category" => "Stock Category",
        "unit" => "Unit",
        "godown" => "Godown",

        // Reports
        "r101_payment" => "Payment Report",
        "r102_customer_wise" => "Customer-Wise Report",
        "r103_product_wise" => "Product-Wise Report",

        // Standalone
        "live_location" => "Location Tracking",
        "bill_template" => "Bill Template",
        "settings" => "Settings",

        _ => key,
    }
}
