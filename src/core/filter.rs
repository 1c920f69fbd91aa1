// TabDeck - core/filter.rs
//
// Console filter engine: visibility decisions and display ordering.
// All active criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Message, MessageCategory, TabId};
use std::collections::HashSet;

/// Which tabs' messages the console shows. Exclusive choice; the independent
/// `other_sources` flag on `FilterState` gates tab-unscoped messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageScope {
    #[default]
    AllTabs,
    CurrentTabOnly,
}

/// Complete console filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Substring text search against "source:line" or the note
    /// (case-insensitive). Empty = no text filter.
    pub text: String,

    /// Categories to include. A message is visible only if its category is
    /// in this set; an empty set hides everything.
    pub categories: HashSet<MessageCategory>,

    /// Tab scope for tab-scoped messages.
    pub scope: MessageScope,

    /// Whether tab-unscoped messages (no tab id) are shown.
    pub other_sources: bool,
}

impl Default for FilterState {
    /// All categories enabled, all tabs, other sources shown.
    fn default() -> Self {
        Self {
            text: String::new(),
            categories: MessageCategory::all().iter().copied().collect(),
            scope: MessageScope::AllTabs,
            other_sources: true,
        }
    }
}

impl FilterState {
    /// Toggle a single category on or off.
    pub fn set_category(&mut self, category: MessageCategory, enabled: bool) {
        if enabled {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }
}

/// Visibility decision for one message.
///
/// Total pure function: depends only on its arguments, never on prior calls.
/// A message is visible iff the text clause, the category clause, and the
/// scope clause all pass.
pub fn evaluate(message: &Message, filter: &FilterState, active_tab: TabId) -> bool {
    // Text: empty matches everything; otherwise case-insensitive substring
    // against the source location or the note.
    if !filter.text.is_empty() {
        let needle = filter.text.to_lowercase();
        let in_source = message.source_location().to_lowercase().contains(&needle);
        let in_note = message
            .note
            .as_ref()
            .is_some_and(|n| n.to_lowercase().contains(&needle));
        if !in_source && !in_note {
            return false;
        }
    }

    // Category: empty set hides everything.
    if !filter.categories.contains(&message.category) {
        return false;
    }

    // Scope: tab-scoped messages follow the scope choice; unscoped messages
    // are gated solely by other_sources. A stale tab id simply never equals
    // the active tab (silent exclusion under CurrentTabOnly).
    if message.tab.is_tab() {
        match filter.scope {
            MessageScope::AllTabs => true,
            MessageScope::CurrentTabOnly => message.tab == active_tab,
        }
    } else {
        filter.other_sources
    }
}

/// Indices of visible messages in display order.
///
/// Display order is timestamp descending; equal timestamps preserve
/// insertion order (stable sort). Returns indices into `messages` so the
/// caller can virtual-scroll without copying.
pub fn visible_rows(messages: &[Message], filter: &FilterState, active_tab: TabId) -> Vec<usize> {
    let mut rows: Vec<usize> = messages
        .iter()
        .enumerate()
        .filter(|(_, m)| evaluate(m, filter, active_tab))
        .map(|(idx, _)| idx)
        .collect();

    rows.sort_by(|&a, &b| messages[b].timestamp.cmp(&messages[a].timestamp));
    rows
}
