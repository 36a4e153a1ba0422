pub mod left;
pub mod menu_def;
pub mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;
