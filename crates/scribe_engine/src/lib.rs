//! Scribe engine: HTTP backends, clipboard access and effect execution.
mod backend;
mod clipboard;
mod session;
mod types;

pub use backend::{BackendSettings, OutlineSource, ReqwestBackend, TranscriptSource};
pub use clipboard::{Clipboard, ClipboardError, ClipboardSettings, CommandClipboard};
pub use session::{ClientContext, Session, SessionSettings};
pub use types::{ExtractionEnvelope, FailureKind, OutlineEnvelope, Reply, RequestError};
