//! Tab management:
//! - `page`: wraps one tab's content and toggles its visibility
//! - `registry`: the single mapping from tab key to page view
//! - `tab_labels`: the single source of tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
