//! Grid state - single owner of column layout, pagination and row data
//!
//! Components read from `GridState` and mutate it only through the
//! command methods here, so visibility and order can never drift apart.

use super::column::{ColumnDescriptor, ColumnRegistry};
use super::drag::{DragController, DragEnd};
use super::order::reconcile;
use super::pagination::Pagination;
use super::person::Person;
use super::visibility::{ToggleOutcome, VisibilitySet};
use std::ops::RangeInclusive;

/// Everything needed to draw one page of the grid
#[derive(Debug)]
pub struct GridView<'a> {
    /// Columns in display order
    pub columns: Vec<&'a ColumnDescriptor>,
    /// Columns in committed order, ignoring any drag preview
    pub committed: Vec<&'a ColumnDescriptor>,
    /// Rows on the current page with their absolute index
    pub rows: Vec<(usize, &'a Person)>,
    pub window: Option<RangeInclusive<usize>>,
    /// Column being dragged, if any
    pub dragging: Option<&'a str>,
}

impl GridView<'_> {
    /// Cell text for every visible row, in column order
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|(index, row)| self.columns.iter().map(|c| c.value(row, *index)).collect())
            .collect()
    }
}

#[derive(Debug)]
pub struct GridState {
    registry: ColumnRegistry,
    rows: Vec<Person>,
    visibility: VisibilitySet,
    order: Vec<String>,
    pagination: Pagination,
    drag: DragController,
    page_size_options: Vec<usize>,
    /// Column with keyboard focus (for keyboard drags)
    focused: Option<String>,
}

impl GridState {
    pub fn new(
        registry: ColumnRegistry,
        rows: Vec<Person>,
        visible: &[String],
        page_size: usize,
        page_size_options: Vec<usize>,
    ) -> Self {
        let visibility = VisibilitySet::new(visible, &registry);
        let order = reconcile(&[], &visibility, &registry);
        let pagination = Pagination::new(page_size, rows.len());
        let focused = order.first().cloned();
        log::info!(
            "Grid ready: {} rows, {} of {} columns visible",
            rows.len(),
            visibility.len(),
            registry.len()
        );
        Self {
            registry,
            rows,
            visibility,
            order,
            pagination,
            drag: DragController::new(),
            page_size_options,
            focused,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Order to display: the drag preview while a drag is in progress
    pub fn display_order(&self) -> Vec<String> {
        self.drag.preview(&self.order)
    }

    /// Project the current page through visibility and order
    pub fn view(&self) -> GridView<'_> {
        let columns = self.descriptors(&self.display_order());
        let committed = self.descriptors(self.order());

        let window = self.pagination.row_window();
        let rows = match &window {
            Some(range) => self.rows[range.clone()]
                .iter()
                .enumerate()
                .map(|(offset, row)| (range.start() + offset, row))
                .collect(),
            None => Vec::new(),
        };

        GridView {
            columns,
            committed,
            rows,
            window,
            dragging: self.drag.active(),
        }
    }

    fn descriptors(&self, ids: &[String]) -> Vec<&ColumnDescriptor> {
        ids.iter().filter_map(|id| self.registry.get(id)).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Column commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Show or hide a column, then reconcile the order
    pub fn toggle_column(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.visibility.toggle(id, &self.registry);
        if outcome == ToggleOutcome::Unknown {
            return outcome;
        }
        self.order = reconcile(&self.order, &self.visibility, &self.registry);
        log::info!("Column '{}' {:?}, order now {:?}", id, outcome, self.order);

        // A drag of a column that just disappeared cannot complete
        if let Some(active) = self.drag.active() {
            if !self.visibility.contains(active) {
                self.drag.cancel();
            }
        }
        if self
            .focused
            .as_deref()
            .is_none_or(|f| !self.visibility.contains(f))
        {
            self.focused = match outcome {
                ToggleOutcome::Shown => Some(id.to_string()),
                _ => self.order.first().cloned(),
            };
        }
        outcome
    }

    pub fn focus_next_column(&mut self) {
        self.focused = self.neighbour(self.focused.as_deref(), 1);
    }

    pub fn focus_prev_column(&mut self) {
        self.focused = self.neighbour(self.focused.as_deref(), -1);
    }

    /// Column `step` places from `id` in the display order, clamped at the ends
    fn neighbour(&self, id: Option<&str>, step: isize) -> Option<String> {
        let order = self.display_order();
        let current = id.and_then(|id| order.iter().position(|o| o == id));
        let index = match current {
            Some(i) => i.saturating_add_signed(step).min(order.len().saturating_sub(1)),
            None => 0,
        };
        order.get(index).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drag commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Pick up a column. Ids not in the order are ignored.
    pub fn drag_start(&mut self, id: &str) -> bool {
        if !self.order.iter().any(|o| o == id) {
            log::debug!("Drag start ignored for '{}'", id);
            return false;
        }
        self.drag.start(id);
        self.focused = Some(id.to_string());
        true
    }

    pub fn drag_over(&mut self, over: Option<&str>) {
        self.drag.hover(over);
    }

    /// Move the keyboard drag target one column left or right
    pub fn drag_over_step(&mut self, step: isize) {
        if !self.drag.is_dragging() {
            return;
        }
        let target = self.drag.over().or(self.drag.active()).map(String::from);
        let index = target
            .and_then(|t| self.order.iter().position(|o| *o == t))
            .map(|i| i.saturating_add_signed(step).min(self.order.len().saturating_sub(1)));
        let over = index.and_then(|i| self.order.get(i)).cloned();
        self.drag.hover(over.as_deref());
    }

    /// Drop on `over` (mouse release). Returns true when the order changed.
    pub fn drag_end(&mut self, over: Option<&str>) -> bool {
        let end = self.drag.end(over);
        self.apply_drag_end(end)
    }

    /// Drop on the current target (keyboard)
    pub fn drag_drop(&mut self) -> bool {
        let end = self.drag.drop_here();
        self.apply_drag_end(end)
    }

    pub fn drag_cancel(&mut self) -> bool {
        self.drag.cancel()
    }

    /// Apply a drag-end event to the order
    pub fn apply_drag_end(&mut self, end: Option<DragEnd>) -> bool {
        let Some(new_order) = end.as_ref().and_then(|e| e.apply(&self.order)) else {
            return false;
        };
        log::info!("Column order {:?} -> {:?}", self.order, new_order);
        self.order = new_order;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev_page()
    }

    pub fn first_page(&mut self) -> bool {
        self.pagination.first_page()
    }

    pub fn last_page(&mut self) -> bool {
        self.pagination.last_page()
    }

    pub fn set_page_size(&mut self, size: usize) -> bool {
        let changed = self.pagination.set_page_size(size);
        if changed {
            log::info!("Page size set to {}", size);
        }
        changed
    }

    pub fn jump_input(&mut self, c: char) -> bool {
        self.pagination.push_jump_char(c)
    }

    pub fn jump_backspace(&mut self) -> bool {
        self.pagination.pop_jump_char()
    }

    pub fn submit_jump(&mut self) -> bool {
        self.pagination.submit_jump()
    }
}
