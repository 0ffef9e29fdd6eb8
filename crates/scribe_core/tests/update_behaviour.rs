use std::sync::Once;

use pretty_assertions::assert_eq;
use scribe_core::{
    update, AppState, Effect, Msg, RequestOutcome, UiState, EMPTY_INPUT_ERROR,
    GENERIC_EXTRACTION_ERROR,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scribe_logging::initialize_for_tests);
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[test]
fn blank_submission_shows_error_without_request() {
    init_logging();
    for input in ["", "   ", "\t\n"] {
        let (mut next, effects) = submit_url(AppState::new(), input);
        assert!(effects.is_empty());
        assert_eq!(next.ui(), &UiState::Error(EMPTY_INPUT_ERROR.to_string()));
        assert!(!next.transcript_in_flight());
        assert!(next.consume_dirty());
    }
}

#[test]
fn submission_trims_input_and_enters_loading() {
    init_logging();
    let (next, effects) = submit_url(AppState::new(), &format!("  {URL}  "));
    let view = next.view();

    assert!(view.panels.loading);
    assert!(!view.panels.error);
    assert!(!view.panels.result);
    assert!(!view.submit_enabled);
    assert_eq!(
        effects,
        vec![Effect::RequestTranscript {
            request_id: 1,
            url: URL.to_string(),
        }]
    );
}

#[test]
fn successful_extraction_shows_transcript() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (next, effects) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::Success("T".to_string()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(next.ui(), &UiState::Result);
    assert_eq!(next.displayed_text(), "T");
    assert_eq!(view.result_text.as_deref(), Some("T"));
    assert!(!view.panels.loading);
    assert!(!view.panels.error);
    assert!(view.submit_enabled);
}

#[test]
fn rejected_extraction_shows_backend_message() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (next, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::Rejected("E".to_string()),
        },
    );

    assert_eq!(next.ui(), &UiState::Error("E".to_string()));
    assert_eq!(next.view().error_message.as_deref(), Some("E"));
}

#[test]
fn rejection_without_message_uses_fallback() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (next, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::Rejected(String::new()),
        },
    );

    assert_eq!(
        next.ui(),
        &UiState::Error(GENERIC_EXTRACTION_ERROR.to_string())
    );
}

#[test]
fn transport_failure_hides_detail_behind_generic_message() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (next, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::TransportFailed("connection refused".to_string()),
        },
    );

    assert_eq!(
        next.ui(),
        &UiState::Error(GENERIC_EXTRACTION_ERROR.to_string())
    );
    assert!(!next.transcript_in_flight());
}

#[test]
fn second_submission_ignored_while_in_flight() {
    init_logging();
    let (mut state, _) = submit_url(AppState::new(), URL);
    state.consume_dirty();
    let before = state.view();

    let (mut next, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(next.consume_dirty());
    let view = next.view();
    assert_eq!(view.ignored_submissions, before.ignored_submissions + 1);
    assert!(!view.submit_enabled);
    assert_eq!(view.panels, before.panels);

    // Once the first request resolves, submitting works again.
    let (next, _) = update(
        next,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::Success("T".to_string()),
        },
    );
    let (_, effects) = update(next, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::RequestTranscript {
            request_id: 2,
            url: URL.to_string(),
        }]
    );
}

#[test]
fn stale_transcript_response_is_dropped() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (next, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 99,
            outcome: RequestOutcome::Success("late".to_string()),
        },
    );

    assert_eq!(next.ui(), &UiState::Loading);
    assert!(next.transcript_in_flight());
    assert_eq!(next.displayed_text(), "");
}

#[test]
fn failed_extraction_keeps_previous_displayed_text() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), URL);
    let (state, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 1,
            outcome: RequestOutcome::Success("first".to_string()),
        },
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (next, _) = update(
        state,
        Msg::TranscriptResolved {
            request_id: 2,
            outcome: RequestOutcome::Rejected("nope".to_string()),
        },
    );

    assert_eq!(next.ui(), &UiState::Error("nope".to_string()));
    assert_eq!(next.displayed_text(), "first");
    assert_eq!(next.view().result_text, None);
}
