mod confirm_modal;
mod filter_panel;
mod pagination_bar;
mod select_with_other;
mod term_table;

pub use confirm_modal::ConfirmModal;
pub use filter_panel::FilterPanel;
pub use pagination_bar::PaginationBar;
pub use select_with_other::SelectWithOther;
pub use term_table::TermTable;
