// TabDeck - app/tabs.rs
//
// Authoritative tab sequence. Owns ordering, the pinned/unpinned partition,
// and active-tab selection; receives resolved drop indices plus close and
// detach requests from the strip panel.
//
// Invariant: pinned tabs form a contiguous prefix of the sequence. Every
// mutating operation below preserves it.

use crate::core::model::{Tab, TabId};

/// The tab-management collaborator.
#[derive(Debug)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    /// Index of the active tab; None only when the strip is empty.
    active: Option<usize>,
    next_id: u64,
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Identifier of the active tab; `TabId::NONE` when the strip is empty.
    /// This is the active-tab lookup used by the console's CurrentTabOnly
    /// scope.
    pub fn active_tab_id(&self) -> TabId {
        self.active
            .and_then(|i| self.tabs.get(i))
            .map(|t| t.id)
            .unwrap_or(TabId::NONE)
    }

    /// Number of pinned tabs (the length of the pinned prefix).
    pub fn pinned_count(&self) -> usize {
        self.tabs.iter().take_while(|t| t.pinned).count()
    }

    /// Per-tab pinned flags in sequence order, for layout.
    pub fn pinned_flags(&self) -> Vec<bool> {
        self.tabs.iter().map(|t| t.pinned).collect()
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Append a new unpinned tab and activate it. Returns its id.
    pub fn add_tab(&mut self, title: impl Into<String>) -> TabId {
        let id = self.allocate_id();
        self.tabs.push(Tab {
            id,
            title: title.into(),
            pinned: false,
        });
        self.active = Some(self.tabs.len() - 1);
        tracing::debug!(tab = %id, "Tab opened");
        id
    }

    /// Duplicate the tab at `index`; the copy is unpinned and inserted just
    /// after the source (pushed past the pinned prefix when the source is
    /// pinned). Returns the new id.
    pub fn clone_tab(&mut self, index: usize) -> Option<TabId> {
        let title = self.tabs.get(index)?.title.clone();
        let id = self.allocate_id();
        let tab = Tab {
            id,
            title,
            pinned: false,
        };
        let at = (index + 1).max(self.pinned_count());
        self.tabs.insert(at, tab);
        self.active = Some(at);
        Some(id)
    }

    /// Re-insert a previously detached (or restored) tab at `index`, clamped
    /// to keep the pinned prefix contiguous. Activates it.
    pub fn insert_tab(&mut self, index: usize, tab: Tab) {
        let at = if tab.pinned {
            index.min(self.pinned_count())
        } else {
            index.clamp(self.pinned_count(), self.tabs.len())
        };
        self.tabs.insert(at, tab);
        self.active = Some(at);
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Close the tab at `index`. Pinned tabs refuse to close. When the
    /// active tab closes, selection falls back to the previous tab.
    pub fn close_tab(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.get(index)?.pinned {
            return None;
        }
        let tab = self.tabs.remove(index);
        self.fix_active_after_removal(index);
        tracing::debug!(tab = %tab.id, "Tab closed");
        Some(tab)
    }

    /// Close every unpinned tab except the one at `keep`.
    /// Returns how many tabs were closed.
    pub fn close_other_tabs(&mut self, keep: usize) -> usize {
        let keep_id = match self.tabs.get(keep) {
            Some(t) => t.id,
            None => return 0,
        };
        let before = self.tabs.len();
        self.tabs.retain(|t| t.pinned || t.id == keep_id);
        let closed = before - self.tabs.len();
        if closed > 0 {
            self.active = self.tabs.iter().position(|t| t.id == keep_id);
        }
        closed
    }

    /// Remove the tab at `index` and hand it back to the caller (to rehome
    /// in another window). Refused while it is the only tab.
    pub fn detach_tab(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);
        self.fix_active_after_removal(index);
        tracing::debug!(tab = %tab.id, "Tab detached");
        Some(tab)
    }

    // -----------------------------------------------------------------------
    // Reordering & pinning
    // -----------------------------------------------------------------------

    /// Move the tab at `from` to the insertion point `drop_index` (as
    /// resolved from the pointer position). A drop at `from` or `from + 1`
    /// is the tab's own slot and is a no-op; a rightward move lands at
    /// `drop_index - 1` because removal shifts the sequence. Pinned tabs do
    /// not move, and unpinned tabs never land inside the pinned prefix.
    ///
    /// Returns the tab's new index when a move happened.
    pub fn move_tab(&mut self, from: usize, drop_index: usize) -> Option<usize> {
        if from >= self.tabs.len() || self.tabs[from].pinned {
            return None;
        }
        let drop_index = drop_index.clamp(self.pinned_count(), self.tabs.len());
        if drop_index == from || drop_index == from + 1 {
            return None;
        }

        let active_id = self.active_tab_id();
        let tab = self.tabs.remove(from);
        let to = if drop_index > from {
            drop_index - 1
        } else {
            drop_index
        };
        self.tabs.insert(to, tab);
        self.active = self.tabs.iter().position(|t| t.id == active_id);
        Some(to)
    }

    /// Pin or unpin the tab at `index`, relocating it to the pinned/unpinned
    /// boundary so the prefix stays contiguous. Returns the tab's new index.
    pub fn set_pinned(&mut self, index: usize, pinned: bool) -> Option<usize> {
        let tab = self.tabs.get(index)?;
        if tab.pinned == pinned {
            return Some(index);
        }

        let active_id = self.active_tab_id();
        let mut tab = self.tabs.remove(index);
        tab.pinned = pinned;
        // A newly pinned tab joins the end of the prefix; a newly unpinned
        // tab becomes the first free tab.
        let to = self.pinned_count();
        self.tabs.insert(to, tab);
        self.active = self.tabs.iter().position(|t| t.id == active_id);
        Some(to)
    }

    // -----------------------------------------------------------------------
    // Activation
    // -----------------------------------------------------------------------

    pub fn activate(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = Some(index);
        }
    }

    /// Step the active tab left (-1) or right (+1), clamped at the ends.
    /// Used by wheel switching over the strip.
    pub fn activate_adjacent(&mut self, direction: i32) {
        let Some(active) = self.active else { return };
        let next = active.saturating_add_signed(direction as isize);
        if next < self.tabs.len() {
            self.active = Some(next);
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn allocate_id(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Select-previous behaviour after removing the tab at `removed`.
    fn fix_active_after_removal(&mut self, removed: usize) {
        if self.tabs.is_empty() {
            self.active = None;
            return;
        }
        self.active = Some(match self.active {
            Some(a) if a == removed => a.saturating_sub(1).min(self.tabs.len() - 1),
            Some(a) if a > removed => a - 1,
            Some(a) => a.min(self.tabs.len() - 1),
            None => 0,
        });
    }

    #[cfg(test)]
    fn assert_pinned_prefix(&self) {
        let boundary = self.pinned_count();
        assert!(
            self.tabs[boundary..].iter().all(|t| !t.pinned),
            "pinned tabs must form a contiguous prefix: {:?}",
            self.tabs
        );
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
