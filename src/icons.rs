//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Unicode
    }
}

/// Agent status dots
#[derive(Debug, Clone)]
pub struct AgentStatusIcons {
    pub active: &'static str,
    pub idle: &'static str,
    pub blocked: &'static str,
}

/// Document kind markers
#[derive(Debug, Clone)]
pub struct DocumentIcons {
    pub spec: &'static str,
    pub api: &'static str,
    pub design: &'static str,
    pub notes: &'static str,
    pub guide: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub activity: &'static str,
    pub unassigned: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub skeleton: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub agent_status: AgentStatusIcons,
    pub document: DocumentIcons,
    pub priority: PriorityIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            agent_status: AgentStatusIcons {
                active: "🟢",
                idle: "🟡",
                blocked: "🔴",
            },
            document: DocumentIcons {
                spec: "📋",
                api: "🔌",
                design: "🎨",
                notes: "📝",
                guide: "📚",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🟢",
            },
            ui: UiIcons {
                activity: "⚡",
                unassigned: "👤",
                error: "❌",
                info: "💡",
                skeleton: "░",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            agent_status: AgentStatusIcons {
                active: "●",
                idle: "◌",
                blocked: "✖",
            },
            document: DocumentIcons {
                spec: "▤",
                api: "⚙",
                design: "✎",
                notes: "≡",
                guide: "➤",
            },
            priority: PriorityIcons {
                high: "▲",
                medium: "■",
                low: "▽",
            },
            ui: UiIcons {
                activity: "•",
                unassigned: "◦",
                error: "✗",
                info: "ⓘ",
                skeleton: "░",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            agent_status: AgentStatusIcons {
                active: "+",
                idle: "~",
                blocked: "x",
            },
            document: DocumentIcons {
                spec: "S",
                api: "A",
                design: "D",
                notes: "N",
                guide: "G",
            },
            priority: PriorityIcons {
                high: "!!",
                medium: "!",
                low: "-",
            },
            ui: UiIcons {
                activity: "*",
                unassigned: "o",
                error: "X",
                info: "i",
                skeleton: "=",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn agent_active(&self) -> &'static str {
        self.icons().agent_status.active
    }

    #[must_use]
    pub fn agent_idle(&self) -> &'static str {
        self.icons().agent_status.idle
    }

    #[must_use]
    pub fn agent_blocked(&self) -> &'static str {
        self.icons().agent_status.blocked
    }

    #[must_use]
    pub fn doc_spec(&self) -> &'static str {
        self.icons().document.spec
    }

    #[must_use]
    pub fn doc_api(&self) -> &'static str {
        self.icons().document.api
    }

    #[must_use]
    pub fn doc_design(&self) -> &'static str {
        self.icons().document.design
    }

    #[must_use]
    pub fn doc_notes(&self) -> &'static str {
        self.icons().document.notes
    }

    #[must_use]
    pub fn doc_guide(&self) -> &'static str {
        self.icons().document.guide
    }

    #[must_use]
    pub fn priority_high(&self) -> &'static str {
        self.icons().priority.high
    }

    #[must_use]
    pub fn priority_medium(&self) -> &'static str {
        self.icons().priority.medium
    }

    #[must_use]
    pub fn priority_low(&self) -> &'static str {
        self.icons().priority.low
    }

    #[must_use]
    pub fn activity(&self) -> &'static str {
        self.icons().ui.activity
    }

    #[must_use]
    pub fn unassigned(&self) -> &'static str {
        self.icons().ui.unassigned
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn skeleton(&self) -> &'static str {
        self.icons().ui.skeleton
    }
}
