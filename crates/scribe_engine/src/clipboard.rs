use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// External program that receives the text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                program: "pbcopy".to_string(),
                args: Vec::new(),
            }
        } else if cfg!(target_os = "windows") {
            Self {
                program: "clip".to_string(),
                args: Vec::new(),
            }
        } else {
            Self {
                program: "xclip".to_string(),
                args: vec!["-selection".to_string(), "clipboard".to_string()],
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Default)]
pub struct CommandClipboard {
    settings: ClipboardSettings,
}

impl CommandClipboard {
    pub fn new(settings: ClipboardSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let program = &self.settings.program;
        let mut child = Command::new(program)
            .args(&self.settings.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        // stdin must be closed before waiting or the program never exits.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|source| ClipboardError::Write {
                    program: program.clone(),
                    source,
                })?;
        }

        let status = child.wait().await.map_err(|source| ClipboardError::Write {
            program: program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ClipboardError::Exit {
                program: program.clone(),
                status,
            });
        }
        Ok(())
    }
}
