//! Scribe core: pure request-orchestration state machine and view-model helpers.
mod effect;
mod msg;
mod presentation;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use presentation::{PanelVisibility, Presentation, UiState, GENERIC_EXTRACTION_ERROR};
pub use state::{AppState, CopyButtonState, OutlineButtonState, RequestId, RequestOutcome};
pub use update::{update, EMPTY_INPUT_ERROR, GENERIC_OUTLINE_ERROR, NO_TRANSCRIPT_ERROR};
pub use validate::{is_recognized_video_url, validate_input, InputValidity, INVALID_URL_HINT};
pub use view_model::AppViewModel;
