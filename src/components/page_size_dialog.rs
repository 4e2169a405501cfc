//! Rows-per-page selector

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Default)]
pub struct PageSizeDialog {
    pub options: Vec<usize>,
    pub current: usize,
    pub list_state: ListState,
}

impl PageSizeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the options and place the cursor on the active size
    pub fn set_options(&mut self, options: &[usize], current: usize) {
        self.options = options.to_vec();
        self.current = current;
        let index = self.options.iter().position(|&o| o == current).unwrap_or(0);
        self.list_state.select(Some(index));
    }

    pub fn selected_size(&self) -> Option<usize> {
        self.list_state
            .selected()
            .and_then(|i| self.options.get(i))
            .copied()
    }
}

impl Component for PageSizeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter | KeyCode::Char(' ') => self.selected_size().map(Action::SetPageSize),
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.list_state.selected().unwrap_or(0).saturating_sub(1);
                self.list_state.select(Some(index));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.options.len().saturating_sub(1);
                let index = (self.list_state.selected().unwrap_or(0) + 1).min(last);
                self.list_state.select(Some(index));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 28, self.options.len() as u16 + 4);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|&size| {
                let marker = if size == self.current { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(format!("{} per page", size)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Page Size ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                    .title_bottom(" Enter select · Esc close "),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, popup_area, &mut self.list_state);

        Ok(())
    }
}
