//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub title: Rect,
    pub grid: Rect,
    pub pager: Rect,
    pub help: Rect,
}

/// Calculate centered popup area inside `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Title line, grid, pager footer, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        title: chunks[0],
        grid: chunks[1],
        pager: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_within_area() {
        let area = Rect::new(10, 5, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(40, 20, 40, 10));
        assert_eq!(centered_popup(area, 200, 80), area);
    }

    #[test]
    fn test_main_layout_stacks_sections() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.pager.height, 3);
        assert_eq!(layout.help.y, 23);
        assert_eq!(layout.grid.height, 24 - 1 - 3 - 1);
    }
}
