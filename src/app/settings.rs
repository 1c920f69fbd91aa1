// TabDeck - app/settings.rs
//
// Runtime-changeable UI options, owned explicitly rather than as
// process-wide statics. Components that need to react to a change
// subscribe once and drain their channel each frame; setters dispatch
// to all subscribers synchronously, in subscription order, and only
// when the value actually changed.

use crate::core::model::DockEdge;
use crate::util::constants;
use std::sync::mpsc;

/// Immutable snapshot of every strip/console option.
#[derive(Debug, Clone, PartialEq)]
pub struct UiOptions {
    /// Whether hover previews are shown at all.
    pub previews_enabled: bool,

    /// Hover-to-show delay for previews, in milliseconds.
    pub preview_delay_ms: u64,

    /// Taller tabs with a thumbnail placeholder area.
    pub thumbnails_enabled: bool,

    /// Close buttons on tab handles.
    pub close_button_enabled: bool,

    /// Scrolling over the strip switches the active tab.
    pub wheel_switches_tabs: bool,

    /// Window edge the strip docks to.
    pub edge: DockEdge,

    /// Minimum tab width (and pinned-tab width).
    pub min_tab_width: f32,

    /// Maximum tab width.
    pub max_tab_width: f32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            previews_enabled: true,
            preview_delay_ms: constants::DEFAULT_PREVIEW_DELAY_MS,
            thumbnails_enabled: false,
            close_button_enabled: true,
            wheel_switches_tabs: true,
            edge: DockEdge::Top,
            min_tab_width: constants::DEFAULT_MIN_TAB_WIDTH,
            max_tab_width: constants::DEFAULT_MAX_TAB_WIDTH,
        }
    }
}

impl UiOptions {
    /// Current strip height, following the thumbnail toggle.
    pub fn strip_height(&self) -> f32 {
        if self.thumbnails_enabled {
            constants::THUMBNAIL_TAB_HEIGHT
        } else {
            constants::DEFAULT_TAB_HEIGHT
        }
    }
}

/// One changed option, delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingChange {
    PreviewsEnabled(bool),
    PreviewDelayMs(u64),
    ThumbnailsEnabled(bool),
    CloseButtonEnabled(bool),
    WheelSwitchesTabs(bool),
    Edge(DockEdge),
    TabWidthBounds { min: f32, max: f32 },
}

/// Owns the option snapshot and the subscriber list.
#[derive(Debug)]
pub struct SettingsStore {
    options: UiOptions,
    subscribers: Vec<mpsc::Sender<SettingChange>>,
}

impl SettingsStore {
    pub fn new(options: UiOptions) -> Self {
        Self {
            options,
            subscribers: Vec::new(),
        }
    }

    pub fn options(&self) -> &UiOptions {
        &self.options
    }

    /// Register a component; the returned receiver sees every subsequent
    /// change, delivered in the order subscriptions were made.
    pub fn subscribe(&mut self) -> mpsc::Receiver<SettingChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_previews_enabled(&mut self, value: bool) {
        if self.options.previews_enabled != value {
            self.options.previews_enabled = value;
            self.notify(SettingChange::PreviewsEnabled(value));
        }
    }

    pub fn set_preview_delay_ms(&mut self, value: u64) {
        let value = value.clamp(
            constants::MIN_PREVIEW_DELAY_MS,
            constants::MAX_PREVIEW_DELAY_MS,
        );
        if self.options.preview_delay_ms != value {
            self.options.preview_delay_ms = value;
            self.notify(SettingChange::PreviewDelayMs(value));
        }
    }

    pub fn set_thumbnails_enabled(&mut self, value: bool) {
        if self.options.thumbnails_enabled != value {
            self.options.thumbnails_enabled = value;
            self.notify(SettingChange::ThumbnailsEnabled(value));
        }
    }

    pub fn set_close_button_enabled(&mut self, value: bool) {
        if self.options.close_button_enabled != value {
            self.options.close_button_enabled = value;
            self.notify(SettingChange::CloseButtonEnabled(value));
        }
    }

    pub fn set_wheel_switches_tabs(&mut self, value: bool) {
        if self.options.wheel_switches_tabs != value {
            self.options.wheel_switches_tabs = value;
            self.notify(SettingChange::WheelSwitchesTabs(value));
        }
    }

    pub fn set_edge(&mut self, value: DockEdge) {
        if self.options.edge != value {
            self.options.edge = value;
            self.notify(SettingChange::Edge(value));
        }
    }

    pub fn set_tab_width_bounds(&mut self, min: f32, max: f32) {
        let min = min.clamp(
            constants::MIN_TAB_WIDTH_LIMIT,
            constants::MAX_TAB_WIDTH_LIMIT,
        );
        let max = max.clamp(min, constants::MAX_TAB_WIDTH_LIMIT);
        if self.options.min_tab_width != min || self.options.max_tab_width != max {
            self.options.min_tab_width = min;
            self.options.max_tab_width = max;
            self.notify(SettingChange::TabWidthBounds { min, max });
        }
    }

    /// Deliver synchronously, in subscription order. Subscribers whose
    /// receiver was dropped are pruned.
    fn notify(&mut self, change: SettingChange) {
        tracing::debug!(?change, "Setting changed");
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
