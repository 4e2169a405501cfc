//! Root application component
//!
//! App owns the `GridState` and the modal stack, routes input to the
//! component that should see it, and applies the resulting Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, ColumnPickerDialog, GridComponent, HelpDialog, PageSizeDialog,
    PagerComponent, QuitDialog,
};
use crate::config::Config;
use crate::model::column::ColumnRegistry;
use crate::model::modal::{Modal, ModalStack};
use crate::model::person::make_data;
use crate::model::GridState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Column layout, pagination and rows
    pub grid_state: GridState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub grid: GridComponent,
    pub pager: PagerComponent,
    pub column_picker: ColumnPickerDialog,
    pub page_size_dialog: PageSizeDialog,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl App {
    /// Build the app from configuration, generating the row data
    pub fn new(config: Config, registry: ColumnRegistry) -> App {
        let rows = match config.seed {
            Some(seed) => make_data(config.row_count, &mut StdRng::seed_from_u64(seed)),
            None => make_data(config.row_count, &mut rand::rng()),
        };
        let grid_state = GridState::new(
            registry,
            rows,
            &config.visible_columns,
            config.page_size,
            config.page_size_options,
        );
        Self::with_state(grid_state)
    }

    pub fn with_state(grid_state: GridState) -> App {
        App {
            grid_state,
            modals: ModalStack::new(),
            should_quit: false,
            grid: GridComponent::new(),
            pager: PagerComponent::new(),
            column_picker: ColumnPickerDialog::new(),
            page_size_dialog: PageSizeDialog::new(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    /// Keep component-local copies of grid state current
    fn sync_components(&mut self) {
        self.grid.sync(
            self.grid_state.focused(),
            self.grid_state.drag().is_dragging(),
        );
        self.column_picker
            .set_columns(self.grid_state.registry(), self.grid_state.visibility());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.sync_components();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if !self.grid_state.drag().is_dragging() {
            let action = match key.code {
                KeyCode::Char('q') => Some(Action::OpenQuitDialog),
                KeyCode::Char('?') => Some(Action::OpenHelp),
                KeyCode::Char('c') => Some(Action::OpenColumnPicker),
                KeyCode::Char('s') => Some(Action::OpenPageSizePicker),
                _ => None,
            };
            if action.is_some() {
                return Ok(action);
            }
        }

        if let Some(action) = self.grid.handle_key_event(key)? {
            return Ok(Some(action));
        }
        if self.grid_state.drag().is_dragging() {
            return Ok(None);
        }
        self.pager.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        if let Some(action) = self.grid.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.pager.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            log::debug!("Action: {}", action);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenColumnPicker => {
                self.column_picker
                    .set_columns(self.grid_state.registry(), self.grid_state.visibility());
                self.modals.push(Modal::ColumnPicker);
            }
            Action::OpenPageSizePicker => {
                self.page_size_dialog.set_options(
                    self.grid_state.page_size_options(),
                    self.grid_state.pagination().page_size(),
                );
                self.modals.push(Modal::PageSize);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Columns
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleColumn(id) => {
                self.grid_state.toggle_column(&id);
            }
            Action::FocusNextColumn => self.grid_state.focus_next_column(),
            Action::FocusPrevColumn => self.grid_state.focus_prev_column(),

            // ─────────────────────────────────────────────────────────────────
            // Drag reorder
            // ─────────────────────────────────────────────────────────────────
            Action::DragStart(id) => {
                self.grid_state.drag_start(&id);
            }
            Action::DragOver(over) => self.grid_state.drag_over(over.as_deref()),
            Action::DragStep(step) => self.grid_state.drag_over_step(step),
            Action::DragEnd(over) => {
                self.grid_state.drag_end(over.as_deref());
            }
            Action::DragDrop => {
                self.grid_state.drag_drop();
            }
            Action::DragCancel => {
                self.grid_state.drag_cancel();
            }

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                self.grid_state.next_page();
            }
            Action::PrevPage => {
                self.grid_state.prev_page();
            }
            Action::FirstPage => {
                self.grid_state.first_page();
            }
            Action::LastPage => {
                self.grid_state.last_page();
            }
            Action::SetPageSize(size) => {
                self.grid_state.set_page_size(size);
                if self.modals.top() == Some(&Modal::PageSize) {
                    self.modals.pop();
                }
            }
            Action::JumpInput(c) => {
                self.grid_state.jump_input(c);
            }
            Action::JumpBackspace => {
                self.grid_state.jump_backspace();
            }
            Action::SubmitJump => {
                self.grid_state.submit_jump();
            }
        }

        self.sync_components();
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.draw_title(frame, layout.title);
        let view = self.grid_state.view();
        self.grid
            .draw_with_view(frame, layout.grid, &view, self.grid_state.focused())?;
        self.pager
            .draw_with_pagination(frame, layout.pager, self.grid_state.pagination())?;
        self.draw_help_bar(frame, layout.help);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ColumnPicker => self.column_picker.handle_key_event(key),
            Modal::PageSize => self.page_size_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::ColumnPicker => self.column_picker.draw(frame, area),
            Modal::PageSize => self.page_size_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let pagination = self.grid_state.pagination();
        let line = Line::from(vec![
            Span::styled(
                " grid-tui ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!(
                    "{}/{} columns",
                    self.grid_state.visibility().len(),
                    self.grid_state.registry().len()
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(
                    "  page {}/{}",
                    pagination.page_index() + 1,
                    pagination.page_count()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str, color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let spans = if self.grid_state.drag().is_dragging() {
            vec![
                key(" h/l ", Color::Cyan),
                Span::raw("Move  "),
                key(" Space ", Color::Green),
                Span::raw("Drop  "),
                key(" Esc ", Color::Yellow),
                Span::raw("Cancel"),
            ]
        } else {
            vec![
                key(" drag header ", Color::Cyan),
                Span::raw("Reorder  "),
                key(" c ", Color::Cyan),
                Span::raw("Columns  "),
                key(" n/p ", Color::Cyan),
                Span::raw("Page  "),
                key(" s ", Color::Cyan),
                Span::raw("Page size  "),
                key(" ? ", Color::Yellow),
                Span::raw("Help  "),
                key(" q ", Color::Red),
                Span::raw("Quit"),
            ]
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        let mut app = App::new(config, ColumnRegistry::default());
        app.init().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let mut action = app.handle_key_event(key).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let mut action = app.handle_mouse_event(event).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
    }

    fn order(app: &App) -> Vec<&str> {
        app.grid_state.order().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_defaults_from_config() {
        let app = test_app();
        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "age", "visits", "status", "progress"]
        );
        assert_eq!(app.grid_state.pagination().page_size(), 5);
        assert_eq!(app.grid_state.pagination().last_page_index(), 10);
    }

    #[test]
    fn test_page_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.grid_state.pagination().page_index(), 2);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.grid_state.pagination().page_index(), 10);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.grid_state.pagination().page_index(), 10);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.grid_state.pagination().page_index(), 0);
    }

    #[test]
    fn test_jump_input_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.grid_state.pagination().page_index(), 8);

        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.grid_state.pagination().jump_input(), "99");
        assert_eq!(app.grid_state.pagination().page_index(), 8);
    }

    #[test]
    fn test_page_size_dialog_resets_page() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.modals.top(), Some(&Modal::PageSize));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.grid_state.pagination().page_size(), 10);
        assert_eq!(app.grid_state.pagination().page_index(), 0);
        assert_eq!(app.grid_state.pagination().jump_input(), "1");
    }

    #[test]
    fn test_column_picker_round_trip() {
        let mut app = test_app();
        let before: Vec<String> = app.grid_state.order().to_vec();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.modals.top(), Some(&Modal::ColumnPicker));
        // idx, firstName, lastName, age, visits
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.grid_state.visibility().contains("visits"));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert_eq!(app.grid_state.order(), before.as_slice());
    }

    #[test]
    fn test_keyboard_reorder() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.grid_state.focused(), Some("age"));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.grid_state.drag().is_dragging());
        // globals are suspended mid-drag
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(!app.grid_state.drag().is_dragging());
        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "visits", "status", "age", "progress"]
        );
    }

    #[test]
    fn test_keyboard_drag_escape_cancels() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);
        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "age", "visits", "status", "progress"]
        );
    }

    #[test]
    fn test_mouse_reorder_after_render() {
        let mut app = test_app();
        render(&mut app);
        let headers = app.grid.headers().to_vec();
        let age = headers.iter().find(|h| h.id == "age").unwrap().area;
        let status = headers.iter().find(|h| h.id == "status").unwrap().area;

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), age.x + 1, age.y);
        assert_eq!(app.grid_state.drag().active(), Some("age"));
        // vertical wander is ignored
        mouse(
            &mut app,
            MouseEventKind::Drag(MouseButton::Left),
            status.x + status.width / 2,
            age.y + 12,
        );
        assert_eq!(app.grid_state.drag().over(), Some("status"));
        mouse(
            &mut app,
            MouseEventKind::Up(MouseButton::Left),
            status.x + status.width / 2,
            age.y + 12,
        );

        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "visits", "status", "age", "progress"]
        );
    }

    #[test]
    fn test_mouse_reorder_with_redraw_between_events() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut redraw = |app: &mut App| {
            terminal
                .draw(|frame| app.draw(frame, frame.area()).unwrap())
                .unwrap();
        };
        redraw(&mut app);

        let area_of = |app: &App, id: &str| {
            app.grid
                .headers()
                .iter()
                .find(|h| h.id == id)
                .unwrap()
                .area
        };
        let age = area_of(&app, "age");
        let status = area_of(&app, "status");
        let status_center = status.x + status.width / 2;

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), age.x + 1, age.y);
        redraw(&mut app);
        for _ in 0..4 {
            mouse(
                &mut app,
                MouseEventKind::Drag(MouseButton::Left),
                status_center,
                age.y,
            );
            redraw(&mut app);
            assert_eq!(app.grid_state.drag().over(), Some("status"));
            // hit areas stay on the committed layout while the preview moves
            assert_eq!(area_of(&app, "status"), status);
        }
        mouse(
            &mut app,
            MouseEventKind::Up(MouseButton::Left),
            status_center,
            age.y,
        );
        redraw(&mut app);

        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "visits", "status", "age", "progress"]
        );
    }

    #[test]
    fn test_mouse_release_outside_headers_cancels() {
        let mut app = test_app();
        render(&mut app);
        let age = app
            .grid
            .headers()
            .iter()
            .find(|h| h.id == "age")
            .unwrap()
            .area;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), age.x, age.y);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 119, age.y);
        assert!(!app.grid_state.drag().is_dragging());
        assert_eq!(
            order(&app),
            vec!["idx", "firstName", "age", "visits", "status", "progress"]
        );
    }

    #[test]
    fn test_render_shows_absolute_index_and_summary() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('G'));
        let terminal = render(&mut app);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Showing 51 to 55 of 55 items"));
        assert!(text.contains("55"));
        assert!(text.contains("First Name"));
        assert!(!text.contains("Last Name"));
    }

    #[test]
    fn test_quit_flow() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }
}
