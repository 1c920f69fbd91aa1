// TabDeck - platform/config.rs
//
// Platform path resolution and config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::DockEdge;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for TabDeck data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/tabdeck/).
    pub config_dir: PathBuf,

    /// Data directory for the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility — a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[console]` section.
    pub console: ConsoleSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Strip dock edge: "top", "bottom", "left", "right".
    pub dock_edge: Option<String>,
    /// Minimum tab width in points.
    pub min_tab_width: Option<f32>,
    /// Maximum tab width in points.
    pub max_tab_width: Option<f32>,
    /// Hover-to-preview delay in milliseconds.
    pub preview_delay_ms: Option<u64>,
    /// Whether hover previews are enabled.
    pub previews: Option<bool>,
    /// Whether tab thumbnails are enabled.
    pub thumbnails: Option<bool>,
    /// Whether tab close buttons are shown.
    pub close_buttons: Option<bool>,
    /// Whether scrolling over the strip switches tabs.
    pub wheel_switching: Option<bool>,
}

/// `[console]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleSection {
    /// Maximum messages held in the log.
    pub max_messages: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time. Invalid
/// values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Strip dock edge.
    pub dock_edge: DockEdge,
    /// Minimum tab width.
    pub min_tab_width: f32,
    /// Maximum tab width.
    pub max_tab_width: f32,
    /// Preview delay in milliseconds.
    pub preview_delay_ms: u64,
    /// Hover previews enabled.
    pub previews: bool,
    /// Tab thumbnails enabled.
    pub thumbnails: bool,
    /// Tab close buttons shown.
    pub close_buttons: bool,
    /// Wheel tab switching enabled.
    pub wheel_switching: bool,
    /// Console message cap.
    pub max_messages: usize,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            dock_edge: DockEdge::Top,
            min_tab_width: constants::DEFAULT_MIN_TAB_WIDTH,
            max_tab_width: constants::DEFAULT_MAX_TAB_WIDTH,
            preview_delay_ms: constants::DEFAULT_PREVIEW_DELAY_MS,
            previews: true,
            thumbnails: false,
            close_buttons: true,
            wheel_switching: true,
            max_messages: constants::MAX_CONSOLE_MESSAGES,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file returns defaults with no warnings (first run);
/// an unparseable file returns defaults with a warning — the application
/// still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating warnings.
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(invalid_value("[ui] theme", other, "dark or light", "dark"));
            }
        }
    }

    // -- UI: dock_edge --
    if let Some(ref edge) = raw.ui.dock_edge {
        match DockEdge::parse(edge) {
            Some(parsed) => config.dock_edge = parsed,
            None => {
                warnings.push(invalid_value(
                    "[ui] dock_edge",
                    edge,
                    "top, bottom, left, or right",
                    "top",
                ));
            }
        }
    }

    // -- UI: tab width bounds --
    if let Some(width) = raw.ui.min_tab_width {
        if (constants::MIN_TAB_WIDTH_LIMIT..=constants::MAX_TAB_WIDTH_LIMIT).contains(&width) {
            config.min_tab_width = width;
        } else {
            warnings.push(invalid_value(
                "[ui] min_tab_width",
                width,
                format!(
                    "{}-{}",
                    constants::MIN_TAB_WIDTH_LIMIT,
                    constants::MAX_TAB_WIDTH_LIMIT
                ),
                constants::DEFAULT_MIN_TAB_WIDTH,
            ));
        }
    }
    if let Some(width) = raw.ui.max_tab_width {
        if (config.min_tab_width..=constants::MAX_TAB_WIDTH_LIMIT).contains(&width) {
            config.max_tab_width = width;
        } else {
            warnings.push(invalid_value(
                "[ui] max_tab_width",
                width,
                format!(
                    "{}-{}",
                    config.min_tab_width,
                    constants::MAX_TAB_WIDTH_LIMIT
                ),
                constants::DEFAULT_MAX_TAB_WIDTH,
            ));
        }
    }

    // -- UI: preview delay --
    if let Some(delay) = raw.ui.preview_delay_ms {
        if (constants::MIN_PREVIEW_DELAY_MS..=constants::MAX_PREVIEW_DELAY_MS).contains(&delay) {
            config.preview_delay_ms = delay;
        } else {
            warnings.push(invalid_value(
                "[ui] preview_delay_ms",
                delay,
                format!(
                    "{}-{}",
                    constants::MIN_PREVIEW_DELAY_MS,
                    constants::MAX_PREVIEW_DELAY_MS
                ),
                constants::DEFAULT_PREVIEW_DELAY_MS,
            ));
        }
    }

    // -- UI: boolean toggles --
    if let Some(v) = raw.ui.previews {
        config.previews = v;
    }
    if let Some(v) = raw.ui.thumbnails {
        config.thumbnails = v;
    }
    if let Some(v) = raw.ui.close_buttons {
        config.close_buttons = v;
    }
    if let Some(v) = raw.ui.wheel_switching {
        config.wheel_switching = v;
    }

    // -- Console: max_messages --
    if let Some(max) = raw.console.max_messages {
        if (constants::MIN_MAX_CONSOLE_MESSAGES..=constants::ABSOLUTE_MAX_CONSOLE_MESSAGES)
            .contains(&max)
        {
            config.max_messages = max;
        } else {
            warnings.push(invalid_value(
                "[console] max_messages",
                max,
                format!(
                    "{}-{}",
                    constants::MIN_MAX_CONSOLE_MESSAGES,
                    constants::ABSOLUTE_MAX_CONSOLE_MESSAGES
                ),
                constants::MAX_CONSOLE_MESSAGES,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(invalid_value(
                "[logging] level",
                level,
                "error, warn, info, debug, or trace",
                "info",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Build the warning line for a rejected config value, with the default
/// that will be used instead.
fn invalid_value(
    field: &str,
    value: impl std::fmt::Display,
    expected: impl std::fmt::Display,
    default: impl std::fmt::Display,
) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };
    format!("{err}. Using default ({default}).")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.dock_edge, DockEdge::Top);
        assert!(config.dark_mode);
    }

    #[test]
    fn valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            r#"
[ui]
theme = "light"
dock_edge = "left"
min_tab_width = 50.0
preview_delay_ms = 500
thumbnails = true

[console]
max_messages = 2000
"#,
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.dock_edge, DockEdge::Left);
        assert_eq!(config.min_tab_width, 50.0);
        assert_eq!(config.preview_delay_ms, 500);
        assert!(config.thumbnails);
        assert_eq!(config.max_messages, 2000);
    }

    #[test]
    fn out_of_range_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            r#"
[ui]
dock_edge = "diagonal"
preview_delay_ms = 99999

[console]
max_messages = 1
"#,
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 3);
        assert_eq!(config.dock_edge, DockEdge::Top);
        assert_eq!(config.preview_delay_ms, constants::DEFAULT_PREVIEW_DELAY_MS);
        assert_eq!(config.max_messages, constants::MAX_CONSOLE_MESSAGES);
    }

    #[test]
    fn unparseable_config_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "not [valid").unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.max_messages, constants::MAX_CONSOLE_MESSAGES);
    }
}
