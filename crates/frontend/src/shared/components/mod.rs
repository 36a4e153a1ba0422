pub mod date_range_picker;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;

pub use date_range_picker::DateRangePicker;
pub use filter_panel::FilterPanel;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
