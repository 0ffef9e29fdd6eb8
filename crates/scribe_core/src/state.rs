use crate::presentation::Presentation;
use crate::validate::{validate_input, InputValidity};
use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// What came back from one backend request, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Well-formed success envelope with its payload.
    Success(String),
    /// Well-formed failure envelope; the message is shown verbatim.
    Rejected(String),
    /// Network error, undecodable body or aborted task. Detail is for logs only.
    TransportFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineButtonState {
    #[default]
    Ready,
    Busy,
    Confirmed,
}

impl OutlineButtonState {
    pub fn label(self) -> &'static str {
        match self {
            OutlineButtonState::Ready => "Generate Outline",
            OutlineButtonState::Busy => "Generating Outline...",
            OutlineButtonState::Confirmed => "Outline Generated!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyButtonState {
    #[default]
    Ready,
    Confirmed,
}

impl CopyButtonState {
    pub fn label(self) -> &'static str {
        match self {
            CopyButtonState::Ready => "Copy",
            CopyButtonState::Confirmed => "Copied!",
        }
    }
}

/// Bookkeeping for one outline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct OutlineTrigger {
    pub(crate) button: OutlineButtonState,
    pub(crate) request_id: Option<RequestId>,
    /// Displayed text captured before the request; put back on failure.
    pub(crate) snapshot: Option<String>,
    /// `Some(true)` once a success was applied, `Some(false)` for a failure.
    pub(crate) resolved: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct CopyTrigger {
    pub(crate) button: CopyButtonState,
    pub(crate) latest: Option<RequestId>,
    /// Copy whose reset timer owns the current confirmation.
    pub(crate) confirmed_by: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    input_validity: InputValidity,
    pub(crate) presentation: Presentation,
    pub(crate) transcript_request: Option<RequestId>,
    pub(crate) ignored_submissions: u32,
    pub(crate) outline: OutlineTrigger,
    pub(crate) copy: CopyTrigger,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let panels = self.presentation.panels();
        AppViewModel {
            input: self.input.clone(),
            input_hint: self.input_validity.hint(),
            panels,
            error_message: match self.presentation.ui() {
                crate::UiState::Error(message) => Some(message.clone()),
                _ => None,
            },
            result_text: panels
                .result
                .then(|| self.presentation.displayed_text().to_string()),
            submit_enabled: self.transcript_request.is_none(),
            ignored_submissions: self.ignored_submissions,
            outline_button: self.outline.button,
            outline_enabled: self.outline.button != OutlineButtonState::Busy,
            copy_button: self.copy.button,
            dirty: self.dirty,
        }
    }

    pub fn ui(&self) -> &crate::UiState {
        self.presentation.ui()
    }

    pub fn displayed_text(&self) -> &str {
        self.presentation.displayed_text()
    }

    pub fn outline_button(&self) -> OutlineButtonState {
        self.outline.button
    }

    pub fn copy_button(&self) -> CopyButtonState {
        self.copy.button
    }

    pub fn input_validity(&self) -> InputValidity {
        self.input_validity
    }

    pub fn transcript_in_flight(&self) -> bool {
        self.transcript_request.is_some()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, raw: String) {
        self.input_validity = validate_input(&raw);
        self.input = raw;
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}
