// TabDeck - app/session.rs
//
// Session persistence: save and restore the open tabs, the active tab, and
// the dock edge between application restarts.
//
// Design principles:
// - Session is saved atomically (write temp, rename to final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (a corrupt or incompatible session
//   just starts the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Console messages are NOT persisted; the log is session-scoped.

use crate::app::tabs::TabStrip;
use crate::core::model::DockEdge;
use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version — must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Open tabs as `(title, pinned)` in sequence order.
    #[serde(default)]
    pub tabs: Vec<(String, bool)>,

    /// Index of the active tab within `tabs`.
    #[serde(default)]
    pub active: Option<usize>,

    /// Strip dock edge.
    #[serde(default)]
    pub edge: DockEdge,
}

impl SessionData {
    /// Snapshot the current strip state.
    pub fn capture(strip: &TabStrip, edge: DockEdge) -> Self {
        Self {
            version: SESSION_VERSION,
            tabs: strip
                .tabs()
                .iter()
                .map(|t| (t.title.clone(), t.pinned))
                .collect(),
            active: strip.active_index(),
            edge,
        }
    }

    /// Rebuild a strip from the snapshot. Fresh ids are allocated; pinned
    /// flags are restored through the strip's own operations so the pinned
    /// prefix invariant is re-established even from a hand-edited file.
    pub fn restore(&self) -> TabStrip {
        let mut strip = TabStrip::new();
        // Ids are handed out sequentially, so the tab saved at position
        // `index` gets id `index + 1`; pinning below locates tabs by id
        // because each set_pinned call reorders the sequence.
        let ids: Vec<_> = self
            .tabs
            .iter()
            .map(|(title, _)| strip.add_tab(title.clone()))
            .collect();
        for (index, (_, pinned)) in self.tabs.iter().enumerate() {
            if *pinned {
                if let Some(pos) = strip.tabs().iter().position(|t| t.id == ids[index]) {
                    strip.set_pinned(pos, true);
                }
            }
        }
        if let Some(active) = self.active {
            strip.activate(active.min(self.tabs.len().saturating_sub(1)));
        }
        strip
    }
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp, rename).
///
/// Creates parent directories as needed. The caller logs and ignores
/// failures; a missed save only costs the next launch its restore.
pub fn save(data: &SessionData, path: &Path) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| SessionError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, json).map_err(|e| SessionError::Io {
        path: temp.clone(),
        source: e,
    })?;
    std::fs::rename(&temp, path).map_err(|e| SessionError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load a session from `path`.
///
/// Returns None — never an error — when the file is missing, unreadable,
/// unparseable, or from a different schema version.
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path).ok()?;
    let data: SessionData = match serde_json::from_str(&content) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable session");
            return None;
        }
    };
    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Discarding session from a different version"
        );
        return None;
    }
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_and_restore_round_trip() {
        let mut strip = TabStrip::new();
        strip.add_tab("Home");
        strip.add_tab("Docs");
        strip.add_tab("News");
        strip.set_pinned(0, true);
        strip.activate(2);

        let data = SessionData::capture(&strip, DockEdge::Left);
        let restored = data.restore();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.tabs()[0].title, "Home");
        assert!(restored.tabs()[0].pinned);
        assert_eq!(restored.active_index(), Some(2));
        assert_eq!(data.edge, DockEdge::Left);
    }

    #[test]
    fn restore_reestablishes_pinned_prefix() {
        // A hand-edited session with pinned flags scattered mid-list.
        let data = SessionData {
            version: SESSION_VERSION,
            tabs: vec![
                ("a".to_string(), false),
                ("b".to_string(), true),
                ("c".to_string(), false),
                ("d".to_string(), true),
            ],
            active: Some(0),
            edge: DockEdge::Top,
        };
        let strip = data.restore();
        let boundary = strip.pinned_count();
        assert_eq!(boundary, 2);
        assert!(strip.tabs()[boundary..].iter().all(|t| !t.pinned));
    }

    #[test]
    fn restore_clamps_out_of_range_active() {
        let data = SessionData {
            version: SESSION_VERSION,
            tabs: vec![("a".to_string(), false)],
            active: Some(9),
            edge: DockEdge::Top,
        };
        assert_eq!(data.restore().active_index(), Some(0));
    }
}
