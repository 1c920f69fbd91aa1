// TabDeck - util/error.rs
//
// Typed errors with context-preserving chains. The widget cores are total
// functions with no failure modes; errors here belong to the ambient stack
// (configuration loading and session persistence), and both surfaces are
// non-fatal: config problems degrade to defaults with a warning, session
// problems cost at most the next launch's restore.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Surfaced as warnings: the application always starts, falling back to
/// defaults for whatever failed to load or validate.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range or not a recognised choice.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config {field} = \"{value}\" is not valid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to session persistence.
#[derive(Debug)]
pub enum SessionError {
    /// I/O error reading or writing the session file.
    Io { path: PathBuf, source: io::Error },

    /// JSON serialisation or deserialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Session I/O error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "Session JSON error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_errors_preserve_sources() {
        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/config.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("config.toml"));

        let err = ConfigError::ValueOutOfRange {
            field: "[ui] preview_delay_ms".to_string(),
            value: "99999".to_string(),
            expected: "0-5000".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("0-5000"));
    }

    #[test]
    fn session_errors_preserve_sources() {
        let err = SessionError::Io {
            path: PathBuf::from("/tmp/session.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("session.json"));
    }
}
