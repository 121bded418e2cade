use crate::data::records::{Activity, Agent, Document, Task, TaskStatus};

/// The five top-level views reachable from the sidebar, the palette, and
/// the Ctrl+digit shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Agents,
    Documents,
    Activity,
}

/// Every view in sidebar order.
pub const ALL_VIEWS: [View; 5] = [View::Dashboard, View::Tasks, View::Agents, View::Documents, View::Activity];

impl View {
    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tasks => "Tasks",
            View::Agents => "Agents",
            View::Documents => "Documents",
            View::Activity => "Activity",
        }
    }

    /// Config-file name of the view.
    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Tasks => "tasks",
            View::Agents => "agents",
            View::Documents => "documents",
            View::Activity => "activity",
        }
    }

    /// Resolve a config-file name, e.g. `ui.default_view`.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_VIEWS.iter().copied().find(|v| v.name() == name)
    }

    /// Resolve a Ctrl+digit shortcut: 1 is the dashboard, 5 the feed.
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            1 => Some(View::Dashboard),
            2 => Some(View::Tasks),
            3 => Some(View::Agents),
            4 => Some(View::Documents),
            5 => Some(View::Activity),
            _ => None,
        }
    }
}

/// Which data panel a background load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Tasks,
    Agents,
    Activity,
    Documents,
}

/// Every panel, in reload order.
pub const ALL_PANELS: [PanelKind; 4] = [PanelKind::Tasks, PanelKind::Agents, PanelKind::Activity, PanelKind::Documents];

/// Records delivered by a finished panel load.
#[derive(Debug, Clone)]
pub enum PanelPayload {
    Tasks(Vec<Task>),
    Agents(Vec<Agent>),
    Activity(Vec<Activity>),
    Documents(Vec<Document>),
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(View),
    ToggleSidebar,

    // Palette
    TogglePalette,
    ClosePalette,
    /// Run the command at this registry index, then close the palette.
    ExecuteCommand(usize),

    // Board and task inspector
    OpenTaskDetail(String),
    CloseTaskDetail,
    UpdateTaskStatus {
        id: String,
        status: TaskStatus,
    },

    // Panel loads
    ReloadPanel(PanelKind),
    ReloadAll,
    PanelLoaded {
        kind: PanelKind,
        result: Result<PanelPayload, String>,
    },

    // Settings
    ToggleTheme,

    // UI operations
    ShowHelp(bool),
    HelpScrollUp,
    HelpScrollDown,

    // App control
    Quit,
    None,
}
