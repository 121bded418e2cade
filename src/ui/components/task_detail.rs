//! Task inspector modal.
//!
//! A drawer docked to the right edge, bound to one task at a time. While
//! open it owns the keyboard: Left/Right cycle the status (emitting an
//! update for the board to patch), printable keys edit the comment input,
//! Enter submits, Esc closes. The comment thread is seeded afresh every
//! time the inspector binds to a task, so switching tasks resets it; the
//! product this models behaves the same way and the quirk is kept.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::data::{Comment, Task, TaskStatus};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::task_board::priority_color;
use crate::ui::core::actions::Action;
use crate::ui::core::Component;
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

/// The two comments every fresh thread starts with.
pub fn seed_comments(now_ms: i64) -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            author: "Agent Jarvis".to_string(),
            text: "Started working on this task".to_string(),
            timestamp: now_ms - 60 * 60_000,
        },
        Comment {
            id: 2,
            author: "Agent Friday".to_string(),
            text: "Updated the UI components".to_string(),
            timestamp: now_ms - 30 * 60_000,
        },
    ]
}

pub struct TaskDetail {
    /// The task the inspector is bound to; `None` renders nothing.
    pub task: Option<Task>,
    pub comments: Vec<Comment>,
    pub input: String,
    pub theme: Theme,
    pub icons: IconService,
}

impl TaskDetail {
    pub fn new(theme: Theme, icons: IconService) -> Self {
        Self {
            task: None,
            comments: Vec::new(),
            input: String::new(),
            theme,
            icons,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Bind the inspector to a task. The comment thread and the input are
    /// reset every time, including when rebinding to a different task.
    pub fn bind(&mut self, task: Task) {
        self.task = Some(task);
        self.comments = seed_comments(datetime::now_ms());
        self.input.clear();
    }

    /// Drop the binding on close; the thread does not survive it.
    pub fn unbind(&mut self) {
        self.task = None;
        self.comments.clear();
        self.input.clear();
    }

    /// Mirror a status patch when it targets the bound task.
    pub fn apply_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.task.as_mut() {
            if task.id == id {
                task.status = status;
            }
        }
    }

    /// Append the current input as a comment. Input that trims to empty
    /// is rejected and the thread is left unchanged.
    pub fn submit_comment(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let id = self.comments.len() as u32 + 1;
        self.comments.push(Comment {
            id,
            author: "You".to_string(),
            text: self.input.trim().to_string(),
            timestamp: datetime::now_ms(),
        });
        self.input.clear();
        true
    }

    fn cycle_status(&self, forward: bool) -> Action {
        match &self.task {
            Some(task) => {
                let status = if forward { task.status.next() } else { task.status.prev() };
                Action::UpdateTaskStatus {
                    id: task.id.clone(),
                    status,
                }
            }
            None => Action::None,
        }
    }
}

impl Component for TaskDetail {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseTaskDetail,
            KeyCode::Right => self.cycle_status(true),
            KeyCode::Left => self.cycle_status(false),
            KeyCode::Enter => {
                self.submit_comment();
                Action::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL) => {
                self.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(task) = self.task.clone() else {
            return;
        };

        let area = LayoutManager::detail_rect(rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(task.title.clone())
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(self.theme.accent()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // status / priority / assignee / timestamps
                Constraint::Min(3),    // description + thread
                Constraint::Length(1), // comment input
                Constraint::Length(1), // hints
            ])
            .split(inner);

        let assignee = task.assigned_to.clone().unwrap_or_else(|| "Unassigned".to_string());
        let header = vec![
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(self.theme.dim())),
                Span::styled(
                    format!("◂ {} ▸", task.status.label()),
                    Style::default().fg(self.theme.accent()).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Priority: ", Style::default().fg(self.theme.dim())),
                Span::styled(task.priority.label(), Style::default().fg(priority_color(task.priority, self.theme))),
                Span::styled("   Assignee: ", Style::default().fg(self.theme.dim())),
                Span::styled(assignee, Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Created: ", Style::default().fg(self.theme.dim())),
                Span::raw(datetime::format_stamp_ms(task.created_at)),
                Span::styled("   Updated: ", Style::default().fg(self.theme.dim())),
                Span::raw(datetime::format_stamp_ms(task.updated_at)),
            ]),
            Line::from(""),
        ];
        f.render_widget(Paragraph::new(header), parts[0]);

        let mut body = vec![
            Line::from(Span::styled(task.description.clone(), Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled(
                format!("Comments ({})", self.comments.len()),
                Style::default().fg(self.theme.dim()).add_modifier(Modifier::BOLD),
            )),
        ];
        for comment in &self.comments {
            body.push(Line::from(vec![
                Span::styled(comment.author.clone(), Style::default().fg(self.theme.accent())),
                Span::raw("  "),
                Span::styled(
                    datetime::relative_from_ms(comment.timestamp),
                    Style::default().fg(self.theme.dim()),
                ),
            ]));
            body.push(Line::from(Span::raw(format!("  {}", comment.text))));
        }
        f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), parts[1]);

        let input = Line::from(vec![
            Span::styled("Comment: ", Style::default().fg(self.theme.dim())),
            Span::raw(self.input.clone()),
            Span::styled("█", Style::default().fg(self.theme.dim())),
        ]);
        f.render_widget(Paragraph::new(input), parts[2]);

        let hints = Line::from(Span::styled(
            "◂▸ status · Enter comment · Esc close",
            Style::default().fg(self.theme.dim()),
        ));
        f.render_widget(Paragraph::new(hints), parts[3]);
    }
}
