// TabDeck - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Config validation in platform::config checks user values against the
// MIN/MAX pairs defined here.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TabDeck";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TabDeck";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Console limits
// =============================================================================

/// Hard upper bound on the number of diagnostic messages held in the log.
///
/// Once the cap is reached further messages are counted and dropped with a
/// logged warning so a chatty producer cannot grow the log without bound.
pub const MAX_CONSOLE_MESSAGES: usize = 10_000;

/// Minimum user-configurable message cap.
pub const MIN_MAX_CONSOLE_MESSAGES: usize = 100;

/// Maximum user-configurable message cap (same as the absolute hard limit).
pub const ABSOLUTE_MAX_CONSOLE_MESSAGES: usize = MAX_CONSOLE_MESSAGES;

/// Maximum number of feed messages drained by the UI loop per frame.
/// Remaining messages stay queued and are processed on subsequent frames,
/// preventing a burst from stalling the render loop.
pub const MAX_FEED_MESSAGES_PER_FRAME: usize = 500;

/// How often the idle UI schedules a repaint to poll the message feed (ms).
pub const FEED_POLL_INTERVAL_MS: u64 = 500;

// =============================================================================
// Tab strip sizing
// =============================================================================

/// Default minimum tab width in points (also the width of a pinned tab).
pub const DEFAULT_MIN_TAB_WIDTH: f32 = 40.0;

/// Default maximum tab width in points.
pub const DEFAULT_MAX_TAB_WIDTH: f32 = 250.0;

/// Default tab height in points for a horizontal strip without thumbnails.
pub const DEFAULT_TAB_HEIGHT: f32 = 28.0;

/// Tab height in points when thumbnails are enabled.
pub const THUMBNAIL_TAB_HEIGHT: f32 = 96.0;

/// Bounds for user-configurable tab widths.
pub const MIN_TAB_WIDTH_LIMIT: f32 = 16.0;
pub const MAX_TAB_WIDTH_LIMIT: f32 = 600.0;

/// Close button square size within a tab, in points.
pub const TAB_CLOSE_BUTTON_SIZE: f32 = 14.0;

/// A tab narrower than this hides its close button unless it is active.
pub const TAB_CLOSE_BUTTON_MIN_WIDTH: f32 = 70.0;

/// Width of the new-tab button appended after the last tab.
pub const NEW_TAB_BUTTON_WIDTH: f32 = 28.0;

/// Width of the strip panel when docked to the left or right edge.
pub const VERTICAL_STRIP_WIDTH: f32 = 160.0;

/// Width of the painted drop indicator line, in points.
pub const DROP_INDICATOR_WIDTH: f32 = 2.0;

/// Dragging the pointer this far outside the strip rectangle turns the
/// reorder gesture into a detach request.
pub const DETACH_DRAG_MARGIN: f32 = 10.0;

// =============================================================================
// Preview popup
// =============================================================================

/// Delay in milliseconds before a hover shows the preview popup.
pub const DEFAULT_PREVIEW_DELAY_MS: u64 = 250;

/// Minimum user-configurable preview delay (0 = show immediately).
pub const MIN_PREVIEW_DELAY_MS: u64 = 0;

/// Maximum user-configurable preview delay.
pub const MAX_PREVIEW_DELAY_MS: u64 = 5_000;

/// Preview popup width in points.
pub const PREVIEW_WIDTH: f32 = 200.0;

/// Height of the preview title area in points.
pub const PREVIEW_TITLE_HEIGHT: f32 = 40.0;

/// Height of the thumbnail placeholder area in points.
pub const PREVIEW_THUMBNAIL_HEIGHT: f32 = 110.0;

// =============================================================================
// Console panel
// =============================================================================

/// Height of one console row in points.
pub const CONSOLE_ROW_HEIGHT: f32 = 20.0;

/// Default height of the console panel in points.
pub const DEFAULT_CONSOLE_HEIGHT: f32 = 180.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration & session
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
