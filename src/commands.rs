//! Static command registry for the command palette.
//!
//! The registry is built once and never mutated. Commands are declared
//! grouped by category, and the palette preserves that declaration order
//! when it renders category headers, so the order here is load-bearing.

use once_cell::sync::Lazy;

use crate::ui::core::actions::View;

/// Grouping bucket a command renders under in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Navigation,
    Actions,
    Settings,
}

impl CommandCategory {
    /// Header text in the palette; also matched against the search query.
    pub fn label(self) -> &'static str {
        match self {
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Actions => "Actions",
            CommandCategory::Settings => "Settings",
        }
    }
}

/// What executing a command does. The shell maps these onto its own
/// action enum; the palette never dispatches anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(View),
    /// Logged only; task capture is not wired to a backend.
    CreateTask,
    ReloadAll,
    /// Declared for surface completeness, does nothing yet.
    Search,
    ToggleTheme,
    ShowHelp,
}

/// One palette entry.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub shortcut: Option<&'static str>,
    pub category: CommandCategory,
    pub action: CommandAction,
}

/// Every command the palette can offer, grouped by category in
/// declaration order.
pub static REGISTRY: Lazy<Vec<Command>> = Lazy::new(|| {
    vec![
        Command {
            id: "nav-dashboard",
            title: "Go to Dashboard",
            icon: "◧",
            shortcut: Some("^1"),
            category: CommandCategory::Navigation,
            action: CommandAction::Navigate(View::Dashboard),
        },
        Command {
            id: "nav-tasks",
            title: "Go to Task Board",
            icon: "☰",
            shortcut: Some("^2"),
            category: CommandCategory::Navigation,
            action: CommandAction::Navigate(View::Tasks),
        },
        Command {
            id: "nav-agents",
            title: "Go to Agents",
            icon: "●",
            shortcut: Some("^3"),
            category: CommandCategory::Navigation,
            action: CommandAction::Navigate(View::Agents),
        },
        Command {
            id: "nav-documents",
            title: "Go to Documents",
            icon: "▤",
            shortcut: Some("^4"),
            category: CommandCategory::Navigation,
            action: CommandAction::Navigate(View::Documents),
        },
        Command {
            id: "nav-activity",
            title: "Go to Activity",
            icon: "•",
            shortcut: Some("^5"),
            category: CommandCategory::Navigation,
            action: CommandAction::Navigate(View::Activity),
        },
        Command {
            id: "action-create-task",
            title: "Create Task",
            icon: "+",
            shortcut: None,
            category: CommandCategory::Actions,
            action: CommandAction::CreateTask,
        },
        Command {
            id: "action-refresh",
            title: "Refresh Feed",
            icon: "↻",
            shortcut: Some("^r"),
            category: CommandCategory::Actions,
            action: CommandAction::ReloadAll,
        },
        Command {
            id: "action-search",
            title: "Search Everything",
            icon: "⌕",
            shortcut: None,
            category: CommandCategory::Actions,
            action: CommandAction::Search,
        },
        Command {
            id: "settings-theme",
            title: "Toggle Theme",
            icon: "◑",
            shortcut: None,
            category: CommandCategory::Settings,
            action: CommandAction::ToggleTheme,
        },
        Command {
            id: "settings-shortcuts",
            title: "Keyboard Shortcuts",
            icon: "?",
            shortcut: Some("?"),
            category: CommandCategory::Settings,
            action: CommandAction::ShowHelp,
        },
    ]
});

/// Whether a command survives the given search query.
///
/// A command matches when its title or its category label contains the
/// query, case-insensitively. An empty query matches everything.
pub fn matches(command: &Command, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    command.title.to_lowercase().contains(&query) || command.category.label().to_lowercase().contains(&query)
}

/// Indices into [`REGISTRY`] of every command matching the query, in
/// declaration order. The palette keeps indices instead of clones so the
/// selection survives refiltering cheaply.
pub fn matching_indices(query: &str) -> Vec<usize> {
    REGISTRY
        .iter()
        .enumerate()
        .filter(|(_, command)| matches(command, query))
        .map(|(i, _)| i)
        .collect()
}
