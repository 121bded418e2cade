//! Document list panel.
//!
//! Each row shows a kind icon, the title, and an author/updated byline.
//! The `updated` field is a display string from the source, never parsed.
//! Kind icon and color mappings are total; unknown kinds use the notes
//! style.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::{EMPTY_DOCUMENTS, SKELETON_ROWS_DOCUMENTS, TITLE_DOCUMENTS};
use crate::data::{DocKind, Document};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::panel::{self, LoadPhase};
use crate::ui::core::actions::{Action, PanelKind};
use crate::ui::core::Component;

/// Badge color for a document kind. Total; unknown uses the notes color.
pub fn kind_color(kind: DocKind) -> Color {
    match kind {
        DocKind::Spec => Color::Cyan,
        DocKind::Api => Color::Green,
        DocKind::Design => Color::Magenta,
        DocKind::Guide => Color::Blue,
        DocKind::Notes | DocKind::Unknown => Color::Yellow,
    }
}

pub struct DocumentPanel {
    pub phase: LoadPhase<Document>,
    pub theme: Theme,
    pub icons: IconService,
    list_state: ListState,
}

impl DocumentPanel {
    pub fn new(theme: Theme, icons: IconService) -> Self {
        Self {
            phase: LoadPhase::Loading,
            theme,
            icons,
            list_state: ListState::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_result(&mut self, result: Result<Vec<Document>, String>) {
        self.phase.resolve(result);
        self.list_state.select(None);
        *self.list_state.offset_mut() = 0;
    }

    fn kind_icon(&self, kind: DocKind) -> &'static str {
        match kind {
            DocKind::Spec => self.icons.doc_spec(),
            DocKind::Api => self.icons.doc_api(),
            DocKind::Design => self.icons.doc_design(),
            DocKind::Guide => self.icons.doc_guide(),
            DocKind::Notes | DocKind::Unknown => self.icons.doc_notes(),
        }
    }

    fn row(&self, doc: &Document) -> ListItem<'static> {
        let color = kind_color(doc.kind);
        let lines = vec![
            Line::from(vec![
                Span::styled(self.kind_icon(doc.kind), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(doc.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(format!("[{}]", doc.kind.label()), Style::default().fg(color)),
            ]),
            Line::from(Span::styled(
                format!("  {} · {}", doc.author, doc.updated),
                Style::default().fg(self.theme.dim()),
            )),
            Line::from(""),
        ];
        ListItem::new(lines)
    }

    fn scroll_down(&mut self) {
        if let Some(records) = self.phase.records() {
            let offset = self.list_state.offset();
            if offset + 1 < records.len() {
                *self.list_state.offset_mut() = offset + 1;
            }
        }
    }

    fn scroll_up(&mut self) {
        let offset = self.list_state.offset();
        *self.list_state.offset_mut() = offset.saturating_sub(1);
    }
}

impl Component for DocumentPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::ReloadPanel(PanelKind::Documents),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_DOCUMENTS)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(self.theme.border()));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        match &self.phase {
            LoadPhase::Loading => {
                panel::render_skeleton(f, inner, SKELETON_ROWS_DOCUMENTS, self.theme, &self.icons);
            }
            LoadPhase::Failed(message) => {
                panel::render_error(f, inner, message, self.theme, &self.icons);
            }
            LoadPhase::Ready(records) if records.is_empty() => {
                panel::render_empty(f, inner, EMPTY_DOCUMENTS, self.theme);
            }
            LoadPhase::Ready(records) => {
                let items: Vec<ListItem> = records.iter().map(|doc| self.row(doc)).collect();
                f.render_stateful_widget(List::new(items), inner, &mut self.list_state);
            }
        }
    }
}
