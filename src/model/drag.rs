//! Drag reorder controller
//!
//! Tracks a header drag from pick-up to drop. Sensors (mouse, keyboard)
//! feed it column ids only; positions never reach the controller, so
//! vertical pointer movement cannot influence the result.

use super::order::move_column;

/// Current phase of a header drag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Column being dragged
        active: String,
        /// Column currently under the pointer / keyboard target
        over: Option<String>,
    },
}

/// Emitted once per gesture when it ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: Option<String>,
    pub over: Option<String>,
}

impl DragEnd {
    /// Apply this drop to `order`. `None` when the drop does not reorder.
    pub fn apply(&self, order: &[String]) -> Option<Vec<String>> {
        let (Some(active), Some(over)) = (&self.active, &self.over) else {
            return None;
        };
        if active == over {
            return None;
        }
        let moved = move_column(order, active, over);
        (moved != order).then_some(moved)
    }
}

/// idle -> dragging -> idle
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Column being dragged, if any
    pub fn active(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { active, .. } => Some(active.as_str()),
            DragState::Idle => None,
        }
    }

    pub fn over(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { over, .. } => over.as_deref(),
            DragState::Idle => None,
        }
    }

    /// Pick up `id`. A drag already in progress is replaced.
    pub fn start(&mut self, id: &str) {
        log::debug!("Drag start: '{}'", id);
        self.state = DragState::Dragging {
            active: id.to_string(),
            over: Some(id.to_string()),
        };
    }

    /// Update the drop target. Ignored while idle.
    pub fn hover(&mut self, target: Option<&str>) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = target.map(String::from);
        }
    }

    /// Finish the gesture, dropping on `over`. `None` while idle.
    pub fn end(&mut self, over: Option<&str>) -> Option<DragEnd> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { active, .. } => {
                log::debug!("Drag end: '{}' over {:?}", active, over);
                Some(DragEnd {
                    active: Some(active),
                    over: over.map(String::from),
                })
            }
            DragState::Idle => None,
        }
    }

    /// Finish the gesture on the last hovered target
    pub fn drop_here(&mut self) -> Option<DragEnd> {
        let over = self.over().map(String::from);
        self.end(over.as_deref())
    }

    /// Abandon the gesture without a drop
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            log::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    /// Order the grid should display while dragging: the result of dropping now
    pub fn preview(&self, order: &[String]) -> Vec<String> {
        match &self.state {
            DragState::Dragging {
                active,
                over: Some(over),
            } => move_column(order, active, over),
            _ => order.to_vec(),
        }
    }
}
