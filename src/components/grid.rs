//! Grid component - header and body of the current page
//!
//! Draws a `GridView` with ratatui's `Table` and records where each header
//! landed so mouse drags can be resolved to column ids.

use crate::action::Action;
use crate::component::Component;
use crate::model::GridView;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SPACING: u16 = 1;

/// Screen position of a rendered header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderHit {
    pub id: String,
    pub area: Rect,
}

#[derive(Debug, Default)]
pub struct GridComponent {
    /// Header cells from the last draw
    headers: Vec<HeaderHit>,
    /// Focused column at the last draw
    focused: Option<String>,
    /// Whether a drag was in progress at the last draw
    dragging: bool,
}

impl GridComponent {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[HeaderHit] {
        &self.headers
    }

    /// Mirror the grid state this component needs for input handling
    pub fn sync(&mut self, focused: Option<&str>, dragging: bool) {
        self.focused = focused.map(String::from);
        self.dragging = dragging;
    }

    /// Column whose header center is closest to `x`.
    ///
    /// Only the horizontal coordinate is considered. Positions left of the
    /// first header or right of the last one resolve to `None`.
    pub fn column_at_x(&self, x: u16) -> Option<&str> {
        let first = self.headers.first()?;
        let last = self.headers.last()?;
        if x < first.area.x || x >= last.area.right() {
            return None;
        }
        self.headers
            .iter()
            .min_by_key(|h| (h.area.x * 2 + h.area.width).abs_diff(x * 2 + 1))
            .map(|h| h.id.as_str())
    }

    fn header_at(&self, x: u16, y: u16) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| y == h.area.y && x >= h.area.x && x < h.area.right())
            .map(|h| h.id.as_str())
    }

    /// Lay out header cells the way `Table` does for the same widths
    fn header_areas(row: Rect, widths: &[u16]) -> Vec<Rect> {
        Layout::horizontal(widths.iter().map(|w| Constraint::Length(*w)))
            .flex(Flex::Start)
            .spacing(COLUMN_SPACING)
            .split(row)
            .to_vec()
    }

    pub fn draw_with_view(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        view: &GridView<'_>,
        focused: Option<&str>,
    ) -> Result<()> {
        self.sync(focused, view.dragging.is_some());

        let title = if let Some(active) = view.dragging {
            format!(" Grid - moving '{}' ", active)
        } else {
            " Grid ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(if self.dragging {
                Color::Yellow
            } else {
                Color::DarkGray
            }));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if view.columns.is_empty() {
            self.headers.clear();
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No columns visible",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Press c to choose columns",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(message, inner);
            return Ok(());
        }

        // Hit-test against the committed layout; the preview moves under the pointer
        let header_row = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
        let committed_widths: Vec<u16> = view.committed.iter().map(|c| c.width).collect();
        self.headers = view
            .committed
            .iter()
            .zip(Self::header_areas(header_row, &committed_widths))
            .map(|(column, area)| HeaderHit {
                id: column.id.to_string(),
                area,
            })
            .collect();

        let header = Row::new(view.columns.iter().map(|column| {
            let style = header_style(column.id, view.dragging, focused);
            Cell::from(fit(column.label, column.width)).style(style)
        }))
        .bottom_margin(1);

        let rows = view.cells().into_iter().map(|cells| {
            Row::new(cells.into_iter().zip(&view.columns).map(|(text, column)| {
                let style = if view.dragging == Some(column.id) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::DIM)
                } else {
                    Style::default().fg(Color::White)
                };
                Cell::from(fit(&text, column.width)).style(style)
            }))
        });

        let widths: Vec<u16> = view.columns.iter().map(|c| c.width).collect();
        let table = Table::new(rows, widths.iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start);
        frame.render_widget(table, inner);

        if view.window.is_none() && inner.height > 2 {
            let empty_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled("No items", Style::default().fg(Color::DarkGray))),
                empty_area,
            );
        }

        Ok(())
    }
}

fn header_style(id: &str, dragging: Option<&str>, focused: Option<&str>) -> Style {
    let base = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    if dragging == Some(id) {
        base.fg(Color::Black).bg(Color::Yellow)
    } else if dragging.is_none() && focused == Some(id) {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    }
}

/// Truncate `text` to `width` display cells, marking the cut with `…`
fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

impl Component for GridComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = if self.dragging {
            match key.code {
                KeyCode::Char('h') | KeyCode::Left => Some(Action::DragStep(-1)),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::DragStep(1)),
                KeyCode::Char(' ') | KeyCode::Enter => Some(Action::DragDrop),
                KeyCode::Esc => Some(Action::DragCancel),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrevColumn),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNextColumn),
                KeyCode::Char(' ') => self.focused.clone().map(Action::DragStart),
                _ => None,
            }
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .header_at(mouse.column, mouse.row)
                .map(|id| Action::DragStart(id.to_string())),
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => Some(Action::DragOver(
                self.column_at_x(mouse.column).map(String::from),
            )),
            MouseEventKind::Up(MouseButton::Left) if self.dragging => Some(Action::DragEnd(
                self.column_at_x(mouse.column).map(String::from),
            )),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs a grid view, so we use draw_with_view
        Ok(())
    }
}
