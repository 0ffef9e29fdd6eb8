use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use scribe_engine::{BackendSettings, ClipboardSettings, SessionSettings};
use serde::Deserialize;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "scribe.ron";

/// On-disk shape of `scribe.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
struct PersistedConfig {
    base_url: String,
    extract_path: String,
    outline_path: String,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    clipboard_program: Option<String>,
    clipboard_args: Option<Vec<String>>,
    outline_confirmation_ms: u64,
    copy_confirmation_ms: u64,
    log_destination: LogDestination,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        let backend = BackendSettings::default();
        let session = SessionSettings::default();
        Self {
            base_url: backend.base_url,
            extract_path: backend.extract_path,
            outline_path: backend.outline_path,
            connect_timeout_ms: None,
            request_timeout_ms: None,
            clipboard_program: None,
            clipboard_args: None,
            outline_confirmation_ms: session.outline_confirmation.as_millis() as u64,
            copy_confirmation_ms: session.copy_confirmation.as_millis() as u64,
            log_destination: LogDestination::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct AppConfig {
    pub backend: BackendSettings,
    pub clipboard: ClipboardSettings,
    pub session: SessionSettings,
    pub log_destination: LogDestination,
}

impl From<PersistedConfig> for AppConfig {
    fn from(persisted: PersistedConfig) -> Self {
        let mut clipboard = ClipboardSettings::default();
        if let Some(program) = persisted.clipboard_program {
            clipboard.program = program;
            clipboard.args = Vec::new();
        }
        if let Some(args) = persisted.clipboard_args {
            clipboard.args = args;
        }

        Self {
            backend: BackendSettings {
                base_url: persisted.base_url,
                extract_path: persisted.extract_path,
                outline_path: persisted.outline_path,
                connect_timeout: persisted.connect_timeout_ms.map(Duration::from_millis),
                request_timeout: persisted.request_timeout_ms.map(Duration::from_millis),
            },
            clipboard,
            session: SessionSettings {
                outline_confirmation: Duration::from_millis(persisted.outline_confirmation_ms),
                copy_confirmation: Duration::from_millis(persisted.copy_confirmation_ms),
            },
            log_destination: persisted.log_destination,
        }
    }
}

pub(crate) fn parse_config(content: &str) -> anyhow::Result<AppConfig> {
    let persisted: PersistedConfig =
        ron::from_str(content).context("failed to parse configuration")?;
    Ok(persisted.into())
}

/// Reads the configuration file. `Ok(None)` means there is no file.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    parse_config(&content)
        .with_context(|| format!("invalid configuration in {}", path.display()))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("()").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend.request_timeout, None);
        assert_eq!(config.session.copy_confirmation, Duration::from_secs(2));
    }

    #[test]
    fn fields_map_onto_engine_settings() {
        let config = parse_config(
            r#"(
                base_url: "http://localhost:8000",
                outline_path: "/api/outline",
                request_timeout_ms: Some(1500),
                clipboard_program: Some("wl-copy"),
                outline_confirmation_ms: 500,
                log_destination: Both,
            )"#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.extract_path, "/extract");
        assert_eq!(config.backend.outline_path, "/api/outline");
        assert_eq!(
            config.backend.request_timeout,
            Some(Duration::from_millis(1500))
        );
        assert_eq!(config.clipboard.program, "wl-copy");
        assert!(config.clipboard.args.is_empty());
        assert_eq!(
            config.session.outline_confirmation,
            Duration::from_millis(500)
        );
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(parse_config("(base_url: 42)").is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn broken_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILENAME));
    }
}
