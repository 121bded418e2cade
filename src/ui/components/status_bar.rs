//! Status bar component.
//!
//! One line at the bottom: a transient info message while one is fresh,
//! otherwise the key hints. Messages expire on their own; the shell's tick
//! handler asks `expire()` so a lapsed message triggers a redraw.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

use crate::constants::STATUS_MESSAGE_TTL_MS;
use crate::theme::Theme;

const HINTS: &str = "^k palette · ^1-^5 views · ^r reload · ^b sidebar · ? help · q quit";

pub struct StatusBar {
    pub theme: Theme,
    message: Option<(String, Instant)>,
}

impl StatusBar {
    pub fn new(theme: Theme) -> Self {
        Self { theme, message: None }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Show a transient message until its TTL lapses.
    pub fn flash(&mut self, text: impl Into<String>) {
        let deadline = Instant::now() + Duration::from_millis(STATUS_MESSAGE_TTL_MS);
        self.message = Some((text.into(), deadline));
    }

    /// Drop a lapsed message; returns true when one was dropped so the
    /// caller knows to redraw.
    pub fn expire(&mut self) -> bool {
        match &self.message {
            Some((_, deadline)) if Instant::now() >= *deadline => {
                self.message = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match &self.message {
            Some((text, _)) => (text.clone(), Color::Yellow),
            None => (HINTS.to_string(), self.theme.dim()),
        };
        let bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(bar, area);
    }
}
