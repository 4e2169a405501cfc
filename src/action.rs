//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies
//! them to `GridState` and the modal stack.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no input arrived
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenColumnPicker,
    OpenPageSizePicker,
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Columns
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip visibility of a column
    ToggleColumn(String),
    FocusNextColumn,
    FocusPrevColumn,

    // ─────────────────────────────────────────────────────────────────────────
    // Drag reorder
    // ─────────────────────────────────────────────────────────────────────────
    /// Pick up a column header
    DragStart(String),
    /// Pointer is over a header (or outside all headers)
    DragOver(Option<String>),
    /// Move the keyboard drag target by one column
    DragStep(isize),
    /// Release the pointer over a header (or outside all headers)
    DragEnd(Option<String>),
    /// Drop on the current keyboard target
    DragDrop,
    DragCancel,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    SetPageSize(usize),
    /// Type into the jump-to-page input
    JumpInput(char),
    JumpBackspace,
    SubmitJump,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenColumnPicker => write!(f, "OpenColumnPicker"),
            Action::OpenPageSizePicker => write!(f, "OpenPageSizePicker"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ToggleColumn(id) => write!(f, "ToggleColumn({})", id),
            Action::FocusNextColumn => write!(f, "FocusNextColumn"),
            Action::FocusPrevColumn => write!(f, "FocusPrevColumn"),
            Action::DragStart(id) => write!(f, "DragStart({})", id),
            Action::DragOver(over) => write!(f, "DragOver({:?})", over),
            Action::DragStep(step) => write!(f, "DragStep({})", step),
            Action::DragEnd(over) => write!(f, "DragEnd({:?})", over),
            Action::DragDrop => write!(f, "DragDrop"),
            Action::DragCancel => write!(f, "DragCancel"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::SetPageSize(size) => write!(f, "SetPageSize({})", size),
            Action::JumpInput(c) => write!(f, "JumpInput('{}')", c),
            Action::JumpBackspace => write!(f, "JumpBackspace"),
            Action::SubmitJump => write!(f, "SubmitJump"),
        }
    }
}
