//! Model layer - grid state independent of the terminal
//!
//! - `ColumnRegistry` / `VisibilitySet` - which columns exist and which are shown
//! - `order` - reconciliation and drag moves over the column order
//! - `Pagination` - page index, page size and the row window
//! - `DragController` - header drag gestures
//! - `GridState` - owner of all of the above plus the row data
//! - `ModalStack` - dialog overlay management

pub mod column;
pub mod drag;
pub mod grid;
pub mod modal;
pub mod order;
pub mod pagination;
pub mod person;
pub mod visibility;

pub use grid::{GridState, GridView};
