//! The three mutually exclusive panels and the text shown in the result panel.

/// Shown whenever an extraction failure carries no usable message.
pub const GENERIC_EXTRACTION_ERROR: &str =
    "An error occurred while extracting the transcript. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Result,
}

/// Owns [`UiState`] and the displayed text.
///
/// The displayed text survives `Loading` and `Error` so an outline attempt can
/// still read it and a failed one can put it back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Presentation {
    ui: UiState,
    displayed_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub loading: bool,
    pub error: bool,
    pub result: bool,
}

impl Presentation {
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Hides the error and result panels. Any previous error text is dropped.
    pub fn enter_loading(&mut self) {
        self.ui = UiState::Loading;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_EXTRACTION_ERROR.to_string()
        } else {
            message
        };
        self.ui = UiState::Error(message);
    }

    pub fn show_result(&mut self, text: impl Into<String>) {
        self.displayed_text = text.into();
        self.ui = UiState::Result;
    }

    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility {
            loading: self.ui == UiState::Loading,
            error: matches!(self.ui, UiState::Error(_)),
            result: self.ui == UiState::Result,
        }
    }
}

