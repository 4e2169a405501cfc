//! UI Components
//!
//! Each component keeps its own view state and turns input into Actions.

pub mod column_picker;
pub mod grid;
pub mod help_dialog;
pub mod layout;
pub mod page_size_dialog;
pub mod pager;
pub mod quit_dialog;

pub use column_picker::ColumnPickerDialog;
pub use grid::GridComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use page_size_dialog::PageSizeDialog;
pub use pager::PagerComponent;
pub use quit_dialog::QuitDialog;
