// TabDeck - app/state.rs
//
// Application state: the tab strip, the console log and filter, the
// settings store, and the cached console row list.
// Owned by the eframe::App implementation.

use crate::app::console::MessageLog;
use crate::app::settings::SettingsStore;
use crate::app::tabs::TabStrip;
use crate::core::filter::FilterState;
use crate::core::model::TabId;
use std::collections::HashSet;

/// One row of the console view: a message line, or the indented note line
/// below an expanded message. Indices point into the log's message slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleRow {
    Message(usize),
    Note(usize),
}

/// An in-progress tab drag on the strip.
#[derive(Debug, Clone, Copy)]
pub struct TabDrag {
    /// Index of the dragged tab at drag start.
    pub from: usize,

    /// Pointer has left the strip (plus margin); release detaches.
    pub detaching: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Authoritative tab sequence.
    pub strip: TabStrip,

    /// Diagnostic message store.
    pub log: MessageLog,

    /// Console filter configuration.
    pub filter: FilterState,

    /// Runtime-changeable UI options plus subscriber dispatch.
    pub settings: SettingsStore,

    /// Whether the console panel is open.
    pub console_visible: bool,

    /// Ids of messages whose note row is expanded.
    pub expanded: HashSet<u64>,

    /// In-progress tab drag, if any.
    pub drag: Option<TabDrag>,

    /// Status bar text.
    pub status_message: String,

    /// Cached console rows in display order; rebuilt lazily.
    rows: Vec<ConsoleRow>,
    rows_dirty: bool,
    /// Active tab the cache was built against (CurrentTabOnly scope).
    rows_active: TabId,
}

impl AppState {
    pub fn new(settings: SettingsStore, log: MessageLog) -> Self {
        Self {
            strip: TabStrip::new(),
            log,
            filter: FilterState::default(),
            settings,
            console_visible: false,
            expanded: HashSet::new(),
            drag: None,
            status_message: "Ready.".to_string(),
            rows: Vec::new(),
            rows_dirty: true,
            rows_active: TabId::NONE,
        }
    }

    // -----------------------------------------------------------------------
    // Console row cache
    // -----------------------------------------------------------------------

    /// Invalidate the cached row list (new message, filter edit, clear,
    /// expansion change, or a relevant settings change).
    pub fn mark_console_dirty(&mut self) {
        self.rows_dirty = true;
    }

    /// Current console rows, rebuilding when the cache is stale or the
    /// active tab changed since the last build.
    pub fn console_rows(&mut self) -> &[ConsoleRow] {
        let active = self.strip.active_tab_id();
        if self.rows_dirty || active != self.rows_active {
            self.rows.clear();
            for idx in
                crate::core::filter::visible_rows(self.log.messages(), &self.filter, active)
            {
                self.rows.push(ConsoleRow::Message(idx));
                let message = &self.log.messages()[idx];
                if message.note.is_some() && self.expanded.contains(&message.id) {
                    self.rows.push(ConsoleRow::Note(idx));
                }
            }
            self.rows_dirty = false;
            self.rows_active = active;
        }
        &self.rows
    }

    /// Number of messages (not note rows) currently visible.
    pub fn visible_message_count(&mut self) -> usize {
        self.console_rows()
            .iter()
            .filter(|r| matches!(r, ConsoleRow::Message(_)))
            .count()
    }

    // -----------------------------------------------------------------------
    // Console operations
    // -----------------------------------------------------------------------

    /// Append a message from the feed.
    pub fn push_message(&mut self, message: crate::core::model::Message) {
        self.log.push(message);
        self.rows_dirty = true;
    }

    /// User-initiated clear-all.
    pub fn clear_console(&mut self) {
        self.log.clear();
        self.expanded.clear();
        self.rows_dirty = true;
    }

    /// Toggle the note row under the message with `id`.
    pub fn toggle_expanded(&mut self, id: u64) {
        if !self.expanded.insert(id) {
            self.expanded.remove(&id);
        }
        self.rows_dirty = true;
    }

    /// Expand the note row of every message that has one.
    pub fn expand_all(&mut self) {
        for message in self.log.messages() {
            if message.note.is_some() {
                self.expanded.insert(message.id);
            }
        }
        self.rows_dirty = true;
    }

    /// Collapse every note row.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.rows_dirty = true;
    }
}
