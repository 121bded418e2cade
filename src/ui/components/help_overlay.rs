//! Help overlay component.
//!
//! A centered modal listing every keyboard shortcut, scrollable with the
//! arrow keys when the terminal is short.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::TITLE_HELP;
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

const HELP_CONTENT: &str = r"
GLOBAL
------
Ctrl+K      Open or close the command palette
Ctrl+1..5   Jump to Dashboard / Tasks / Agents / Documents / Activity
Ctrl+R      Reload every panel
Ctrl+B      Show or hide the sidebar
Shift+J/K   Next / previous view
?           This listing
Esc         Close the topmost modal, then the sidebar
q, Ctrl+C   Quit

COMMAND PALETTE
---------------
type        Filter commands by title or category
Up/Down     Move the selection (wraps around)
Enter       Run the selected command
Esc         Close without running anything

TASK BOARD
----------
Arrow keys  Move between columns and cards
Enter       Open the selected task
r           Reload the board

TASK INSPECTOR
--------------
Left/Right  Cycle the task status
type        Edit the comment input
Enter       Submit the comment
Esc         Close the inspector

PANELS
------
Up/Down     Scroll
r           Retry / reload the focused panel

Press Esc or ? to close
";

pub struct HelpOverlay {
    pub scroll: usize,
    pub theme: Theme,
}

impl HelpOverlay {
    pub fn new(theme: Theme) -> Self {
        Self { scroll: 0, theme }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Reset the scroll for a fresh open.
    pub fn open(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(HELP_CONTENT.lines().count().saturating_sub(1));
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
        let help_area = LayoutManager::centered_rect(width, height, area);
        f.render_widget(Clear, help_area);

        let visible = help_area.height.saturating_sub(2) as usize;
        let total = HELP_CONTENT.lines().count();
        let max_scroll = total.saturating_sub(visible);
        self.scroll = self.scroll.min(max_scroll);

        let text: String = HELP_CONTENT
            .lines()
            .skip(self.scroll)
            .take(visible)
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(TITLE_HELP)
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(self.theme.accent())),
            )
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, help_area);
    }
}
