//! Column picker dialog
//!
//! One checkbox per registry column, in declaration order.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::column::ColumnRegistry;
use crate::model::visibility::VisibilitySet;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// A checkbox row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug)]
pub struct ColumnPickerDialog {
    pub entries: Vec<ColumnEntry>,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for ColumnPickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnPickerDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            entries: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    /// Refresh checkbox states from the grid
    pub fn set_columns(&mut self, registry: &ColumnRegistry, visibility: &VisibilitySet) {
        self.entries = registry
            .columns()
            .iter()
            .map(|c| ColumnEntry {
                id: c.id.to_string(),
                label: c.label.to_string(),
                visible: visibility.contains(c.id),
            })
            .collect();
        if self.selected_index >= self.entries.len() {
            self.selected_index = self.entries.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.entries.get(self.selected_index).map(|e| e.id.as_str())
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for ColumnPickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.selected_id().map(|id| Action::ToggleColumn(id.to_string()))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_height = (self.entries.len() as u16 + 8).max(12);
        let popup_area = centered_popup(area, 44, popup_height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Checkboxes
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let shown = self.entries.iter().filter(|e| e.visible).count();
        let header = Paragraph::new(Line::from(Span::styled(
            format!("{} of {} columns visible", shown, self.entries.len()),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Columns ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let (mark, style) = if entry.visible {
                    ("[x] ", Style::default().fg(Color::White))
                } else {
                    ("[ ] ", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::styled(entry.label.clone(), style),
                    Span::styled(
                        format!("  ({})", entry.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Space ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/c ", Style::default().fg(Color::Yellow)),
            Span::raw("Close"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_set_columns_reflects_visibility() {
        let registry = ColumnRegistry::default();
        let visibility = VisibilitySet::new(["idx", "age"], &registry);
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_columns(&registry, &visibility);

        assert_eq!(dialog.entries.len(), registry.len());
        let checked: Vec<&str> = dialog
            .entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(checked, vec!["idx", "age"]);
    }

    #[test]
    fn test_space_toggles_selected_column() {
        let registry = ColumnRegistry::default();
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_columns(&registry, &VisibilitySet::all(&registry));

        dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ToggleColumn("lastName".to_string()))
        );
    }

    #[test]
    fn test_navigation_clamps() {
        let registry = ColumnRegistry::default();
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_columns(&registry, &VisibilitySet::all(&registry));

        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.selected_id(), Some("idx"));
        for _ in 0..20 {
            dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dialog.selected_id(), Some("progress"));
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }
}
