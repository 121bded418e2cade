//! Task board panel.
//!
//! Six fixed columns, one per known task status. Partitioning is a pure
//! function over the loaded list: every task lands in exactly the column
//! matching its status, and a task with an unrecognized status lands in
//! none. Selection moves with the arrow keys (clamped at the edges) and
//! Enter or a click opens the task inspector for the selected card.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::constants::{BOARD_CARD_HEIGHT, EMPTY_COLUMN, SKELETON_ROWS_PER_COLUMN, TITLE_TASK_BOARD};
use crate::data::{Priority, Task, TaskStatus, BOARD_STATUSES};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::panel::{self, LoadPhase};
use crate::ui::core::actions::{Action, PanelKind};
use crate::ui::core::Component;
use crate::ui::layout::LayoutManager;

/// Marker color for a task priority. Total; unknown uses the border color
/// of the current theme, resolved at render time.
pub fn priority_color(priority: Priority, theme: Theme) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
        Priority::Unknown => theme.border(),
    }
}

/// Header color of a board column.
fn column_color(status: TaskStatus, theme: Theme) -> Color {
    match status {
        TaskStatus::InProgress => theme.accent(),
        TaskStatus::Done => Color::Green,
        TaskStatus::Blocked => Color::Red,
        _ => Color::White,
    }
}

/// Partition tasks into the six board columns, in `BOARD_STATUSES` order.
///
/// Tasks keep their relative order within a column. A task whose status
/// is not a board status is dropped, not misfiled.
pub fn partition(tasks: &[Task]) -> Vec<Vec<&Task>> {
    BOARD_STATUSES
        .iter()
        .map(|status| tasks.iter().filter(|t| t.status == *status).collect())
        .collect()
}

pub struct TaskBoard {
    pub phase: LoadPhase<Task>,
    /// Index into `BOARD_STATUSES` of the selected column.
    pub selected_column: usize,
    /// Index of the selected card within its column.
    pub selected_row: usize,
    pub theme: Theme,
    pub icons: IconService,
    /// Column rects from the last render, for mouse hit-testing.
    column_areas: Vec<Rect>,
}

impl TaskBoard {
    pub fn new(theme: Theme, icons: IconService) -> Self {
        Self {
            phase: LoadPhase::Loading,
            selected_column: 0,
            selected_row: 0,
            theme,
            icons,
            column_areas: Vec::new(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_result(&mut self, result: Result<Vec<Task>, String>) {
        self.phase.resolve(result);
        self.clamp_selection();
    }

    /// The id of the selected card, if the selected column has one.
    pub fn selected_task_id(&self) -> Option<String> {
        let tasks = self.phase.records()?;
        let columns = partition(tasks);
        columns
            .get(self.selected_column)?
            .get(self.selected_row)
            .map(|t| t.id.clone())
    }

    /// A clone of a loaded task by id, for binding the inspector.
    pub fn task_by_id(&self, id: &str) -> Option<Task> {
        self.phase.records()?.iter().find(|t| t.id == id).cloned()
    }

    /// Patch a task's status in place, matched by id. The board list is
    /// the owning copy; the inspector mirrors it separately.
    pub fn apply_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(tasks) = self.phase.records_mut() {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.status = status;
            }
        }
        self.clamp_selection();
    }

    fn column_len(&self, column: usize) -> usize {
        match self.phase.records() {
            Some(tasks) => partition(tasks).get(column).map_or(0, |c| c.len()),
            None => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.column_len(self.selected_column);
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    /// Resolve a click to a card and open it. Cards render at a fixed
    /// height with no column scrolling, so the row math is exact.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        for (column, area) in self.column_areas.clone().iter().enumerate() {
            let inner_y = area.y + 1;
            let in_area = mouse.column >= area.x
                && mouse.column < area.x + area.width
                && mouse.row >= inner_y
                && mouse.row < area.y + area.height.saturating_sub(1);
            if !in_area {
                continue;
            }
            let row = ((mouse.row - inner_y) / BOARD_CARD_HEIGHT) as usize;
            if row < self.column_len(column) {
                self.selected_column = column;
                self.selected_row = row;
                if let Some(id) = self.selected_task_id() {
                    return Action::OpenTaskDetail(id);
                }
            }
            return Action::None;
        }
        Action::None
    }

    fn card(&self, task: &Task, width: u16, selected: bool) -> ListItem<'static> {
        let title_style = if selected {
            Style::default().fg(Color::Black).bg(self.theme.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let max = width.saturating_sub(4) as usize;
        let description: String = if task.description.chars().count() > max {
            let truncated: String = task.description.chars().take(max.saturating_sub(1)).collect();
            format!("{}…", truncated)
        } else {
            task.description.clone()
        };
        let priority_icon = match task.priority {
            Priority::High => self.icons.priority_high(),
            Priority::Medium | Priority::Unknown => self.icons.priority_medium(),
            Priority::Low => self.icons.priority_low(),
        };
        let assignee = task.assigned_to.clone().unwrap_or_else(|| "Unassigned".to_string());

        // Exactly BOARD_CARD_HEIGHT lines per card
        ListItem::new(vec![
            Line::from(Span::styled(task.title.clone(), title_style)),
            Line::from(Span::styled(description, Style::default().fg(self.theme.dim()))),
            Line::from(vec![
                Span::styled(priority_icon, Style::default().fg(priority_color(task.priority, self.theme))),
                Span::raw(" "),
                Span::styled(assignee, Style::default().fg(self.theme.dim())),
            ]),
        ])
    }

    fn render_column(&self, f: &mut Frame, area: Rect, status: TaskStatus, tasks: &[&Task]) {
        let color = column_color(status, self.theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("{} {}", status.label(), tasks.len()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(self.theme.border()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.phase.is_loading() {
            panel::render_skeleton(f, inner, SKELETON_ROWS_PER_COLUMN, self.theme, &self.icons);
            return;
        }
        if tasks.is_empty() {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(EMPTY_COLUMN, Style::default().fg(self.theme.dim())))),
                inner,
            );
            return;
        }

        let column_index = BOARD_STATUSES.iter().position(|s| *s == status).unwrap_or(0);
        let items: Vec<ListItem> = tasks
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let selected = column_index == self.selected_column && row == self.selected_row;
                self.card(task, inner.width, selected)
            })
            .collect();
        f.render_widget(List::new(items), inner);
    }
}

impl Component for TaskBoard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::ReloadPanel(PanelKind::Tasks),
            KeyCode::Left | KeyCode::Char('h') => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.clamp_selection();
                }
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < BOARD_STATUSES.len() {
                    self.selected_column += 1;
                    self.clamp_selection();
                }
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_row + 1 < self.column_len(self.selected_column) {
                    self.selected_row += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter => match self.selected_task_id() {
                Some(id) => Action::OpenTaskDetail(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let LoadPhase::Failed(message) = &self.phase {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(TITLE_TASK_BOARD)
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(self.theme.border()));
            let inner = block.inner(rect);
            f.render_widget(block, rect);
            let message = message.clone();
            panel::render_error(f, inner, &message, self.theme, &self.icons);
            self.column_areas.clear();
            return;
        }

        let columns = LayoutManager::board_columns(rect);
        self.column_areas = columns.clone();

        let empty: Vec<Vec<&Task>> = BOARD_STATUSES.iter().map(|_| Vec::new()).collect();
        let partitioned = match self.phase.records() {
            Some(tasks) => partition(tasks),
            None => empty,
        };
        for (i, status) in BOARD_STATUSES.iter().enumerate() {
            self.render_column(f, columns[i], *status, &partitioned[i]);
        }
    }
}
