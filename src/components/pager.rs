//! Pager component - item range, page buttons, jump input and page size

use crate::action::Action;
use crate::component::Component;
use crate::model::pagination::Pagination;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";

/// Footer below the grid
#[derive(Debug, Default)]
pub struct PagerComponent {
    /// Clickable prev button from the last draw
    prev_button: Option<Rect>,
    /// Clickable next button from the last draw
    next_button: Option<Rect>,
}

/// "Showing 1 to 5 of 55 items"
pub fn range_summary(pagination: &Pagination) -> String {
    match pagination.row_window() {
        Some(window) => format!(
            "Showing {} to {} of {} items",
            window.start() + 1,
            window.end() + 1,
            pagination.total_rows()
        ),
        None => "No items".to_string(),
    }
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| x >= a.x && x < a.right() && y >= a.y && y < a.bottom())
}

impl PagerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_with_pagination(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        pagination: &Pagination,
    ) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(60)])
            .split(inner);

        let summary = Paragraph::new(Span::styled(
            range_summary(pagination),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(summary, chunks[0]);

        let enabled = Style::default().fg(Color::White).bg(Color::DarkGray);
        let disabled = Style::default().fg(Color::DarkGray);
        let page = format!(" {} ", pagination.page_index() + 1);
        let controls = Line::from(vec![
            Span::styled(
                PREV_LABEL,
                if pagination.has_prev() { enabled } else { disabled },
            ),
            Span::styled(
                page.clone(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                NEXT_LABEL,
                if pagination.has_next() { enabled } else { disabled },
            ),
            Span::styled(
                format!(" of {}   ", pagination.page_count()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("Go to "),
            Span::styled(
                format!("[{:>4}]", pagination.jump_input()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   Per page "),
            Span::styled(
                format!("[{}]", pagination.page_size()),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        let controls_area = chunks[1];
        frame.render_widget(Paragraph::new(controls), controls_area);

        let prev_width = PREV_LABEL.chars().count() as u16;
        let next_width = NEXT_LABEL.chars().count() as u16;
        let page_width = page.chars().count() as u16;
        self.prev_button = Some(Rect::new(controls_area.x, controls_area.y, prev_width, 1))
            .filter(|_| controls_area.height > 0);
        self.next_button = Some(Rect::new(
            controls_area.x + prev_width + page_width,
            controls_area.y,
            next_width,
            1,
        ))
        .filter(|_| controls_area.height > 0);

        Ok(())
    }
}

impl Component for PagerComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::JumpInput(c)),
            KeyCode::Backspace => Some(Action::JumpBackspace),
            KeyCode::Enter => Some(Action::SubmitJump),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let action = if contains(self.prev_button, mouse.column, mouse.row) {
            Some(Action::PrevPage)
        } else if contains(self.next_button, mouse.column, mouse.row) {
            Some(Action::NextPage)
        } else {
            None
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs pagination state, so we use draw_with_pagination
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_range_summary() {
        let mut pagination = Pagination::new(5, 55);
        assert_eq!(range_summary(&pagination), "Showing 1 to 5 of 55 items");
        pagination.last_page();
        assert_eq!(range_summary(&pagination), "Showing 51 to 55 of 55 items");
        assert_eq!(range_summary(&Pagination::new(5, 0)), "No items");
    }

    #[test]
    fn test_key_bindings() {
        let mut pager = PagerComponent::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            pager.handle_key_event(key(KeyCode::Char('n'))).unwrap(),
            Some(Action::NextPage)
        );
        assert_eq!(
            pager.handle_key_event(key(KeyCode::Char('7'))).unwrap(),
            Some(Action::JumpInput('7'))
        );
        assert_eq!(
            pager.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SubmitJump)
        );
        assert_eq!(pager.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_button_clicks() {
        let mut pager = PagerComponent {
            prev_button: Some(Rect::new(20, 30, 3, 1)),
            next_button: Some(Rect::new(26, 30, 3, 1)),
        };
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            pager.handle_mouse_event(click(21, 30)).unwrap(),
            Some(Action::PrevPage)
        );
        assert_eq!(
            pager.handle_mouse_event(click(28, 30)).unwrap(),
            Some(Action::NextPage)
        );
        assert_eq!(pager.handle_mouse_event(click(24, 30)).unwrap(), None);
        assert_eq!(pager.handle_mouse_event(click(21, 31)).unwrap(), None);
    }
}
