//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (header, body, status bar)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate the body layout (sidebar + main content side by side)
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let sidebar_width = std::cmp::min(area.width / 3, sidebar_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate the dashboard grid: activity, board and agents on the top
    /// row, documents below. Mirrors the product's 3/6/3 column split.
    #[must_use]
    pub fn dashboard_layout(area: Rect) -> Vec<Rect> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(rows[0]);

        vec![top[0], top[1], top[2], rows[1]]
    }

    /// Split the board area into its six equal columns.
    #[must_use]
    pub fn board_columns(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 6); 6])
            .split(area)
            .to_vec()
    }

    /// Calculate the palette overlay area: centered horizontally, anchored
    /// near the top the way launcher palettes sit.
    #[must_use]
    pub fn palette_rect(area: Rect) -> Rect {
        let width = std::cmp::min(area.width.saturating_sub(4), 64);
        let height = std::cmp::min(area.height.saturating_sub(4), 18);
        let top = area.height / 8;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(top), Constraint::Length(height), Constraint::Min(0)])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(width), Constraint::Min(0)])
            .split(rows[1])[1]
    }

    /// Calculate the task inspector area: a drawer docked to the right
    /// edge, full body height.
    #[must_use]
    pub fn detail_rect(area: Rect) -> Rect {
        let width = std::cmp::min(area.width.saturating_mul(2) / 3, 72);
        let x = area.x + area.width.saturating_sub(width);
        Rect::new(x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 60 } else { 50 };
        (help_width, help_height)
    }
}
