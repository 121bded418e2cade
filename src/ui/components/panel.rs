//! Shared load-phase machinery for the data panels.
//!
//! Every data panel (activity feed, agent roster, document list, task
//! board) renders one of four mutually exclusive states: a skeleton while
//! loading, an error with a retry hint, an empty message after a
//! successful load with zero records, or the populated list. The phase
//! enum and the non-populated renderers live here so the panels only
//! differ in how they draw their records.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::ERROR_RETRY_HINT;
use crate::icons::IconService;
use crate::theme::Theme;

/// Where a panel's data currently stands.
///
/// `Ready` with an empty vector is a successful load, not a failure;
/// the two render differently and tests hold them apart.
#[derive(Debug, Clone)]
pub enum LoadPhase<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Default for LoadPhase<T> {
    fn default() -> Self {
        LoadPhase::Loading
    }
}

impl<T> LoadPhase<T> {
    /// Enter the phase a fetch result dictates.
    pub fn resolve(&mut self, result: Result<Vec<T>, String>) {
        *self = match result {
            Ok(records) => LoadPhase::Ready(records),
            Err(message) => LoadPhase::Failed(message),
        };
    }

    /// Back to `Loading`, used for both retry and reload.
    pub fn begin_loading(&mut self) {
        *self = LoadPhase::Loading;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadPhase::Failed(_))
    }

    /// The loaded records, if any.
    pub fn records(&self) -> Option<&Vec<T>> {
        match self {
            LoadPhase::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn records_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            LoadPhase::Ready(records) => Some(records),
            _ => None,
        }
    }
}

/// Draw dim placeholder bars while a panel loads.
pub fn render_skeleton(f: &mut Frame, area: Rect, rows: usize, theme: Theme, icons: &IconService) {
    let bar = icons.skeleton().repeat(area.width.saturating_sub(4).max(8) as usize);
    let mut lines = Vec::with_capacity(rows * 2);
    for _ in 0..rows {
        lines.push(Line::from(Span::styled(bar.clone(), Style::default().fg(theme.dim()))));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines), area);
}

/// Draw a failed load: the message plus the retry hint.
pub fn render_error(f: &mut Frame, area: Rect, message: &str, theme: Theme, icons: &IconService) {
    let lines = vec![
        Line::from(vec![
            Span::styled(icons.error(), Style::default().fg(ratatui::style::Color::Red)),
            Span::raw(" "),
            Span::styled(message.to_string(), Style::default().fg(ratatui::style::Color::Red)),
        ]),
        Line::from(Span::styled(ERROR_RETRY_HINT, Style::default().fg(theme.dim()))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Draw the zero-records message of a successfully loaded panel.
pub fn render_empty(f: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let line = Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.dim()).add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(Paragraph::new(line), area);
}
