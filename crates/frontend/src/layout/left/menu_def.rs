//! The application menu, declared once as typed entries. Visibility is
//! decided elsewhere (`system::access::filter_menu`); this module only
//! states what exists and under which grant scope.

use crate::system::access::{MenuAccordion, MenuEntry, MenuLink, DASHBOARD_KEY};
use contracts::system::access::{Module, Role, SubModule};

const ADMIN_ROLES: &[Role] = &[Role::Admin, Role::Client];

pub fn app_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Link(MenuLink::new(DASHBOARD_KEY, "Dashboard", "layout-dashboard")),
        MenuEntry::Accordion(MenuAccordion {
            key: "business_management",
            label: "Business Management",
            icon: "briefcase",
            children: vec![
                MenuLink::new("company", "Company", "building")
                    .scoped(Module::BusinessManagement, SubModule::Company)
                    .restricted(),
                MenuLink::new("vendor", "Vendor", "contact")
                    .scoped(Module::BusinessManagement, SubModule::Vendor),
                MenuLink::new("customer", "Customer", "users")
                    .scoped(Module::BusinessManagement, SubModule::Customer),
                MenuLink::new("ledger", "Ledger", "book")
                    .scoped(Module::BusinessManagement, SubModule::Ledger),
                MenuLink::new("salesman", "Salesman", "user-check")
                    .scoped(Module::BusinessManagement, SubModule::Agent),
            ],
        }),
        MenuEntry::Accordion(MenuAccordion {
            key: "inventory_management",
            label: "Inventory Management",
            icon: "package",
            children: vec![
                MenuLink::new("product", "Product", "package")
                    .scoped(Module::InventoryManagement, SubModule::Product),
                MenuLink::new("stock_group", "Stock Group", "layers")
                    .scoped(Module::InventoryManagement, SubModule::StockGroup),
                MenuLink::new("stock_category", "Stock Category", "tag")
                    .scoped(Module::InventoryManagement, SubModule::StockCategory),
                MenuLink::new("unit", "Unit", "ruler")
                    .scoped(Module::InventoryManagement, SubModule::Unit),
                MenuLink::new("godown", "Godown", "warehouse")
                    .scoped(Module::InventoryManagement, SubModule::Godown),
            ],
        }),
        MenuEntry::Accordion(MenuAccordion {
            key: "reports",
            label: "Reports",
            icon: "bar-chart",
            children: vec![
                MenuLink::new("r101_payment", "Payment Report", "receipt")
                    .scoped(Module::Reports, SubModule::PaymentReport),
                MenuLink::new("r102_customer_wise", "Customer-Wise Report", "users")
                    .scoped(Module::Reports, SubModule::CustomerWiseReport),
                MenuLink::new("r103_product_wise", "Product-Wise Report", "package")
                    .scoped(Module::Reports, SubModule::ProductWiseReport),
            ],
        }),
        MenuEntry::Link(
            MenuLink::new("live_location", "Location Tracking", "map-pin")
                .scoped(Module::LocationTracking, SubModule::LiveLocation),
        ),
        MenuEntry::Link(
            MenuLink::new("bill_template", "Bill Template", "file-text")
                .scoped(Module::Billing, SubModule::BillTemplate)
                .restricted(),
        ),
        MenuEntry::Link(MenuLink::new("settings", "Settings", "settings").for_roles(ADMIN_ROLES)),
    ]
}
