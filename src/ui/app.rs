//! Application shell.
//!
//! `AppShell` owns every component and all top-level state: the current
//! view, the sidebar/palette/inspector/help flags, the theme, and the
//! background job runner. Keyboard routing is modal-first: the palette,
//! then the help overlay, then the task inspector, then the global
//! shortcuts, then the focused view's panel. While a modal is open the
//! panels underneath receive nothing.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::commands::{self, CommandAction};
use crate::config::Config;
use crate::constants::{APP_TITLE, MAIN_AREA_MIN_WIDTH, STATUS_RELOADING, STATUS_THEME_DARK, STATUS_THEME_LIGHT};
use crate::data::{DataSource, TaskPatch};
use crate::icons::IconService;
use crate::theme::{self, Theme};
use crate::ui::components::{
    ActivityFeed, AgentRoster, CommandPalette, DocumentPanel, HelpOverlay, Sidebar, StatusBar, TaskBoard, TaskDetail,
};
use crate::ui::core::actions::{Action, PanelKind, PanelPayload, View, ALL_PANELS};
use crate::ui::core::{Component, EventType, JobRunner};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

pub struct AppShell {
    // Top-level UI state
    pub view: View,
    pub sidebar_visible: bool,
    pub palette_open: bool,
    pub detail_open: bool,
    pub help_visible: bool,
    pub theme: Theme,
    pub should_quit: bool,

    // Components
    pub sidebar: Sidebar,
    pub palette: CommandPalette,
    pub activity: ActivityFeed,
    pub agents: AgentRoster,
    pub documents: DocumentPanel,
    pub board: TaskBoard,
    pub detail: TaskDetail,
    pub status_bar: StatusBar,
    pub help: HelpOverlay,

    // Data plumbing
    source: Arc<dyn DataSource>,
    jobs: JobRunner,
    action_receiver: mpsc::UnboundedReceiver<Action>,
    load_delay: Duration,
    sidebar_width: u16,

    // Body rect from the last render, for sidebar/board mouse hit-testing
    body_area: Rect,
}

impl AppShell {
    pub fn new(config: &Config, theme: Theme, source: Arc<dyn DataSource>) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        let view = View::from_name(&config.ui.default_view).unwrap_or_default();
        let (jobs, action_receiver) = JobRunner::new();

        Self {
            view,
            sidebar_visible: config.ui.sidebar_visible,
            palette_open: false,
            detail_open: false,
            help_visible: false,
            theme,
            should_quit: false,
            sidebar: Sidebar::new(view, theme),
            palette: CommandPalette::new(theme),
            activity: ActivityFeed::new(theme, icons.clone()),
            agents: AgentRoster::new(theme, icons.clone()),
            documents: DocumentPanel::new(theme, icons.clone()),
            board: TaskBoard::new(theme, icons.clone()),
            detail: TaskDetail::new(theme, icons),
            status_bar: StatusBar::new(theme),
            help: HelpOverlay::new(theme),
            source,
            jobs,
            action_receiver,
            load_delay: Duration::from_millis(config.data.load_delay_ms),
            sidebar_width: config.ui.sidebar_width,
            body_area: Rect::default(),
        }
    }

    /// Kick off the initial load of every panel.
    pub fn init(&mut self) {
        for kind in ALL_PANELS {
            self.jobs.spawn_panel_load(Arc::clone(&self.source), kind, self.load_delay);
        }
    }

    /// Feed one event from the pump through routing and state updates.
    /// Returns true when the screen needs redrawing.
    pub fn handle_event(&mut self, event: EventType) -> bool {
        match event {
            EventType::Key(key) => {
                self.handle_key(key);
                true
            }
            EventType::Mouse(mouse) => {
                self.handle_mouse(mouse);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.on_tick(),
            EventType::Other => false,
        }
    }

    /// Route a key press and apply whatever action falls out.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.route_key(key);
        self.apply(action);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Modals own the keyboard while open, palette first
        if self.palette_open {
            // Ctrl+K toggles from inside the palette too
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('k') {
                return Action::TogglePalette;
            }
            return self.palette.handle_key_events(key);
        }
        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::ShowHelp(false),
                KeyCode::Up => Action::HelpScrollUp,
                KeyCode::Down => Action::HelpScrollDown,
                _ => Action::None,
            };
        }
        if self.detail_open {
            return self.detail.handle_key_events(key);
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('k') => return Action::TogglePalette,
                KeyCode::Char('r') => return Action::ReloadAll,
                KeyCode::Char('b') => return Action::ToggleSidebar,
                KeyCode::Char('c') => return Action::Quit,
                KeyCode::Char(c) => {
                    if let Some(view) = c.to_digit(10).and_then(View::from_digit) {
                        return Action::Navigate(view);
                    }
                }
                _ => {}
            }
        }
        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => return Action::ShowHelp(true),
            KeyCode::Esc => {
                // Nothing modal is open here; Esc falls through to the sidebar
                if self.sidebar_visible {
                    return Action::ToggleSidebar;
                }
                return Action::None;
            }
            KeyCode::Char('J') | KeyCode::Char('K') => return self.sidebar.handle_key_events(key),
            _ => {}
        }

        // Everything else goes to the focused view's panel
        match self.view {
            View::Dashboard | View::Tasks => self.board.handle_key_events(key),
            View::Agents => self.agents.handle_key_events(key),
            View::Documents => self.documents.handle_key_events(key),
            View::Activity => self.activity.handle_key_events(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = if self.palette_open {
            self.palette.handle_mouse(mouse)
        } else if self.help_visible || self.detail_open {
            Action::None
        } else {
            let sidebar_action = self.sidebar.handle_mouse(mouse);
            match sidebar_action {
                Action::None if matches!(self.view, View::Dashboard | View::Tasks) => self.board.handle_mouse(mouse),
                other => other,
            }
        };
        self.apply(action);
    }

    /// Drain finished background work and expire the status message.
    /// Returns true when anything changed.
    fn on_tick(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.action_receiver.try_recv() {
            self.apply(action);
            changed = true;
        }
        self.jobs.sweep_finished();
        if self.status_bar.expire() {
            changed = true;
        }
        changed
    }

    /// Apply one action to the shell. Palette command execution recurses
    /// once with the command's own action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(view) => {
                log::info!("navigate to {}", view.name());
                self.view = view;
                self.sidebar.set_current(view);
            }
            Action::ToggleSidebar => {
                self.sidebar_visible = !self.sidebar_visible;
            }
            Action::TogglePalette => {
                if self.palette_open {
                    self.palette_open = false;
                } else {
                    self.palette.open();
                    self.palette_open = true;
                }
            }
            Action::ClosePalette => {
                self.palette_open = false;
            }
            Action::ExecuteCommand(index) => {
                // The palette always closes after executing
                self.palette_open = false;
                if let Some(command) = commands::REGISTRY.get(index) {
                    log::info!("execute command {}", command.id);
                    self.run_command(command.action);
                }
            }
            Action::OpenTaskDetail(id) => {
                if let Some(task) = self.board.task_by_id(&id) {
                    self.detail.bind(task);
                    self.detail_open = true;
                }
            }
            Action::CloseTaskDetail => {
                // Board selection is untouched, so focus lands back where it was
                self.detail.unbind();
                self.detail_open = false;
            }
            Action::UpdateTaskStatus { id, status } => {
                // Patch both copies in the same pass, then store in the background
                self.board.apply_status(&id, status);
                self.detail.apply_status(&id, status);
                self.jobs
                    .spawn_task_update(Arc::clone(&self.source), id, TaskPatch::status(status));
            }
            Action::ReloadPanel(kind) => {
                self.begin_panel_load(kind);
            }
            Action::ReloadAll => {
                log::info!("reloading all panels");
                for kind in ALL_PANELS {
                    self.begin_panel_load(kind);
                }
                self.status_bar.flash(STATUS_RELOADING);
            }
            Action::PanelLoaded { kind, result } => {
                self.finish_panel_load(kind, result);
            }
            Action::ToggleTheme => {
                self.set_theme(self.theme.toggle());
            }
            Action::ShowHelp(visible) => {
                if visible {
                    self.help.open();
                }
                self.help_visible = visible;
            }
            Action::HelpScrollUp => self.help.scroll_up(),
            Action::HelpScrollDown => self.help.scroll_down(),
            Action::Quit => {
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    fn run_command(&mut self, action: CommandAction) {
        match action {
            CommandAction::Navigate(view) => self.apply(Action::Navigate(view)),
            CommandAction::ReloadAll => self.apply(Action::ReloadAll),
            CommandAction::ToggleTheme => self.apply(Action::ToggleTheme),
            CommandAction::ShowHelp => self.apply(Action::ShowHelp(true)),
            CommandAction::CreateTask => {
                // Capture is not wired to a backend
                log::info!("create task requested");
            }
            CommandAction::Search => {}
        }
    }

    fn begin_panel_load(&mut self, kind: PanelKind) {
        match kind {
            PanelKind::Tasks => self.board.phase.begin_loading(),
            PanelKind::Agents => self.agents.phase.begin_loading(),
            PanelKind::Activity => self.activity.phase.begin_loading(),
            PanelKind::Documents => self.documents.phase.begin_loading(),
        }
        self.jobs.spawn_panel_load(Arc::clone(&self.source), kind, self.load_delay);
    }

    fn finish_panel_load(&mut self, kind: PanelKind, result: Result<PanelPayload, String>) {
        if let Err(message) = &result {
            log::warn!("{:?} panel load failed: {}", kind, message);
        }
        match (kind, result) {
            (PanelKind::Tasks, Ok(PanelPayload::Tasks(records))) => self.board.set_result(Ok(records)),
            (PanelKind::Tasks, Err(message)) => self.board.set_result(Err(message)),
            (PanelKind::Agents, Ok(PanelPayload::Agents(records))) => self.agents.set_result(Ok(records)),
            (PanelKind::Agents, Err(message)) => self.agents.set_result(Err(message)),
            (PanelKind::Activity, Ok(PanelPayload::Activity(records))) => self.activity.set_result(Ok(records)),
            (PanelKind::Activity, Err(message)) => self.activity.set_result(Err(message)),
            (PanelKind::Documents, Ok(PanelPayload::Documents(records))) => self.documents.set_result(Ok(records)),
            (PanelKind::Documents, Err(message)) => self.documents.set_result(Err(message)),
            (kind, Ok(payload)) => {
                log::error!("payload {:?} delivered to {:?} panel", payload, kind);
            }
        }
    }

    fn set_theme(&mut self, next: Theme) {
        self.theme = next;
        self.sidebar.set_theme(next);
        self.palette.set_theme(next);
        self.activity.set_theme(next);
        self.agents.set_theme(next);
        self.documents.set_theme(next);
        self.board.set_theme(next);
        self.detail.set_theme(next);
        self.status_bar.set_theme(next);
        self.help.set_theme(next);
        self.status_bar.flash(match next {
            Theme::Dark => STATUS_THEME_DARK,
            Theme::Light => STATUS_THEME_LIGHT,
        });
        if let Err(e) = theme::store(next) {
            log::warn!("failed to persist theme: {}", e);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let left = Line::from(vec![
            Span::styled(APP_TITLE, Style::default().fg(self.theme.accent()).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(self.view.label(), Style::default().fg(Color::White)),
        ]);
        f.render_widget(Paragraph::new(left), area);

        let right = Paragraph::new(datetime::header_date())
            .alignment(Alignment::Right)
            .style(Style::default().fg(self.theme.dim()));
        f.render_widget(right, area);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let main = LayoutManager::main_layout(area);
        self.render_header(f, main[0]);
        self.body_area = main[1];

        let content = if self.sidebar_visible && main[1].width > self.sidebar_width + MAIN_AREA_MIN_WIDTH {
            let body = LayoutManager::body_layout(main[1], self.sidebar_width);
            self.sidebar.render(f, body[0]);
            body[1]
        } else {
            main[1]
        };

        match self.view {
            View::Dashboard => {
                let grid = LayoutManager::dashboard_layout(content);
                self.activity.render(f, grid[0]);
                self.board.render(f, grid[1]);
                self.agents.render(f, grid[2]);
                self.documents.render(f, grid[3]);
            }
            View::Tasks => self.board.render(f, content),
            View::Agents => self.agents.render(f, content),
            View::Documents => self.documents.render(f, content),
            View::Activity => self.activity.render(f, content),
        }

        self.status_bar.render(f, main[2]);

        // Overlays, bottom to top
        if self.detail_open {
            self.detail.render(f, self.body_area);
        }
        if self.palette_open {
            self.palette.render(f, area);
        }
        if self.help_visible {
            self.help.render(f);
        }
    }
}
