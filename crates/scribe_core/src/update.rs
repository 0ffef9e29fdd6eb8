use scribe_logging::{scribe_debug, scribe_error, scribe_info, scribe_warn};

use crate::{AppState, CopyButtonState, Effect, Msg, OutlineButtonState, RequestId, RequestOutcome};

pub const EMPTY_INPUT_ERROR: &str = "Please enter a YouTube URL";
pub const NO_TRANSCRIPT_ERROR: &str = "Please extract a transcript first";
pub const GENERIC_OUTLINE_ERROR: &str =
    "An error occurred while generating the outline. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => {
            state.set_input(raw);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::TranscriptResolved {
            request_id,
            outcome,
        } => {
            apply_transcript(&mut state, request_id, outcome);
            Vec::new()
        }
        Msg::OutlineClicked => request_outline(&mut state),
        Msg::OutlineResolved {
            request_id,
            outcome,
        } => {
            apply_outline(&mut state, request_id, outcome);
            Vec::new()
        }
        Msg::OutlineSettled { request_id } => settle_outline(&mut state, request_id),
        Msg::OutlineConfirmationElapsed { request_id } => {
            if state.outline.button == OutlineButtonState::Confirmed
                && state.outline.request_id == Some(request_id)
            {
                state.outline.button = OutlineButtonState::Ready;
                state.outline.request_id = None;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            let request_id = state.allocate_request_id();
            state.copy.latest = Some(request_id);
            vec![Effect::WriteClipboard {
                request_id,
                text: state.displayed_text().to_string(),
            }]
        }
        Msg::CopyResolved { request_id, result } => match result {
            Ok(()) if state.copy.latest == Some(request_id) => {
                state.copy.button = CopyButtonState::Confirmed;
                state.copy.confirmed_by = Some(request_id);
                state.mark_dirty();
                vec![Effect::ScheduleCopyReset { request_id }]
            }
            Ok(()) => Vec::new(),
            Err(detail) => {
                scribe_warn!("Failed to copy text (copy {}): {}", request_id, detail);
                Vec::new()
            }
        },
        Msg::CopyConfirmationElapsed { request_id } => {
            if state.copy.button == CopyButtonState::Confirmed
                && state.copy.confirmed_by == Some(request_id)
            {
                state.copy.button = CopyButtonState::Ready;
                state.copy.confirmed_by = None;
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if let Some(pending) = state.transcript_request {
        scribe_info!(
            "Submission ignored: transcript request {} is still in flight",
            pending
        );
        state.ignored_submissions += 1;
        state.mark_dirty();
        return Vec::new();
    }

    let url = state.input().trim().to_string();
    if url.is_empty() {
        state.presentation.show_error(EMPTY_INPUT_ERROR);
        state.mark_dirty();
        return Vec::new();
    }
    if state.input_validity().hint().is_some() {
        scribe_debug!("Submitting URL that failed the shape check: {}", url);
    }

    state.presentation.enter_loading();
    let request_id = state.allocate_request_id();
    state.transcript_request = Some(request_id);
    state.mark_dirty();
    vec![Effect::RequestTranscript { request_id, url }]
}

fn apply_transcript(state: &mut AppState, request_id: RequestId, outcome: RequestOutcome) {
    if state.transcript_request != Some(request_id) {
        scribe_debug!("Dropping stale transcript response {}", request_id);
        return;
    }
    state.transcript_request = None;

    match outcome {
        RequestOutcome::Success(transcript) => state.presentation.show_result(transcript),
        RequestOutcome::Rejected(message) => state.presentation.show_error(message),
        RequestOutcome::TransportFailed(detail) => {
            scribe_warn!("Transcript request {} failed: {}", request_id, detail);
            state
                .presentation
                .show_error(crate::GENERIC_EXTRACTION_ERROR);
        }
    }
    state.mark_dirty();
}

fn request_outline(state: &mut AppState) -> Vec<Effect> {
    if state.outline.button == OutlineButtonState::Busy {
        scribe_debug!("Outline trigger ignored while busy");
        return Vec::new();
    }

    let text = state.displayed_text().to_string();
    if text.is_empty() {
        state.presentation.show_error(NO_TRANSCRIPT_ERROR);
        state.mark_dirty();
        return Vec::new();
    }

    let request_id = state.allocate_request_id();
    state.outline.button = OutlineButtonState::Busy;
    state.outline.request_id = Some(request_id);
    state.outline.snapshot = Some(text.clone());
    state.outline.resolved = None;
    state.presentation.enter_loading();
    state.mark_dirty();
    vec![Effect::RequestOutline { request_id, text }]
}

fn apply_outline(state: &mut AppState, request_id: RequestId, outcome: RequestOutcome) {
    if state.outline.button != OutlineButtonState::Busy
        || state.outline.request_id != Some(request_id)
        || state.outline.resolved.is_some()
    {
        scribe_debug!("Dropping stale outline response {}", request_id);
        return;
    }

    match outcome {
        RequestOutcome::Success(outline) => {
            state.presentation.show_result(outline);
            state.outline.resolved = Some(true);
        }
        RequestOutcome::Rejected(message) => {
            let message = if message.trim().is_empty() {
                GENERIC_OUTLINE_ERROR.to_string()
            } else {
                message
            };
            restore_snapshot(state, message);
        }
        RequestOutcome::TransportFailed(detail) => {
            scribe_warn!("Outline request {} failed: {}", request_id, detail);
            restore_snapshot(state, GENERIC_OUTLINE_ERROR.to_string());
        }
    }
    state.mark_dirty();
}

/// Puts the pre-outline text back, then reports the failure on top of it.
fn restore_snapshot(state: &mut AppState, message: String) {
    if let Some(original) = state.outline.snapshot.clone() {
        state.presentation.show_result(original);
    }
    state.presentation.show_error(message);
    state.outline.resolved = Some(false);
}

fn settle_outline(state: &mut AppState, request_id: RequestId) -> Vec<Effect> {
    if state.outline.button != OutlineButtonState::Busy
        || state.outline.request_id != Some(request_id)
    {
        scribe_debug!("Ignoring duplicate settle for outline {}", request_id);
        return Vec::new();
    }

    if state.outline.resolved.is_none() {
        scribe_error!(
            "Outline request {} ended without a response; restoring transcript",
            request_id
        );
        restore_snapshot(state, GENERIC_OUTLINE_ERROR.to_string());
    }

    state.outline.snapshot = None;
    state.mark_dirty();
    if state.outline.resolved.take() == Some(true) {
        state.outline.button = OutlineButtonState::Confirmed;
        vec![Effect::ScheduleOutlineReset { request_id }]
    } else {
        state.outline.button = OutlineButtonState::Ready;
        state.outline.request_id = None;
        Vec::new()
    }
}
