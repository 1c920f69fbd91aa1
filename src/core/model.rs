// TabDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no panels,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Tab identity
// =============================================================================

/// Identifier of an open tab.
///
/// `TabId::NONE` (the zero id) is reserved for messages that are not scoped
/// to any tab ("other sources"); real tabs always carry a non-zero id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct TabId(pub u64);

impl TabId {
    /// The reserved "no tab" id.
    pub const NONE: TabId = TabId(0);

    /// True for ids that refer to an actual tab.
    pub fn is_tab(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Diagnostic messages
// =============================================================================

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageLevel {
    Error,
    Warning,
    #[default]
    Info,
}

impl MessageLevel {
    /// Short label for compact display (badge column).
    pub fn short_label(&self) -> &'static str {
        match self {
            MessageLevel::Error => "ERR",
            MessageLevel::Warning => "WARN",
            MessageLevel::Info => "INFO",
        }
    }
}

/// Subsystem a diagnostic message originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageCategory {
    Network,
    Security,
    Css,
    JavaScript,
    #[default]
    Other,
}

impl MessageCategory {
    /// All variants in display order (toggle-button row order).
    pub fn all() -> &'static [MessageCategory] {
        &[
            MessageCategory::Network,
            MessageCategory::Security,
            MessageCategory::Css,
            MessageCategory::JavaScript,
            MessageCategory::Other,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::Network => "Network",
            MessageCategory::Security => "Security",
            MessageCategory::Css => "CSS",
            MessageCategory::JavaScript => "JS",
            MessageCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single diagnostic event.
///
/// Immutable once appended to the log; removed only by a user-initiated
/// clear-all. Producers fill every field except `id`, which the log assigns
/// on append (insertion order).
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Monotonically increasing id assigned by the log; insertion order.
    pub id: u64,

    /// Severity level.
    pub level: MessageLevel,

    /// Originating subsystem.
    pub category: MessageCategory,

    /// When the event occurred, UTC.
    pub timestamp: DateTime<Utc>,

    /// Source location text (a URL, file, or component name).
    pub source: String,

    /// Line number within the source, when one applies.
    pub line: Option<u32>,

    /// Tab the event belongs to; `TabId::NONE` for global/background events.
    pub tab: TabId,

    /// Optional longer description shown as an expandable detail row.
    pub note: Option<String>,
}

impl Message {
    /// The "source:line" text messages are matched and displayed by.
    /// Messages without a line number display the bare source.
    pub fn source_location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{line}", self.source),
            None => self.source.clone(),
        }
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// One open tab as the strip sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Stable identity, never reused within a session.
    pub id: TabId,

    /// Title text shown on the tab handle and in the preview popup.
    pub title: String,

    /// Pinned tabs keep the minimum width, show a lock glyph instead of a
    /// close button, and never participate in free drag-reordering.
    pub pinned: bool,
}

// =============================================================================
// Dock edge
// =============================================================================

/// Window edge the tab strip is docked to.
///
/// Top/Bottom strips lay tabs out along x (horizontal); Left/Right along y.
/// The preview popup opens on the side opposite the dock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DockEdge {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl DockEdge {
    /// True when the strip's primary axis is x.
    pub fn is_horizontal(self) -> bool {
        matches!(self, DockEdge::Top | DockEdge::Bottom)
    }

    /// Parse a config/CLI value. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "top" => Some(DockEdge::Top),
            "bottom" => Some(DockEdge::Bottom),
            "left" => Some(DockEdge::Left),
            "right" => Some(DockEdge::Right),
            _ => None,
        }
    }
}
