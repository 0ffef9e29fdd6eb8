use crate::{RequestId, RequestOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for extraction.
    SubmitClicked,
    /// Extraction request finished, one way or another.
    TranscriptResolved {
        request_id: RequestId,
        outcome: RequestOutcome,
    },
    /// User clicked the outline trigger.
    OutlineClicked,
    /// Summarization request finished with a usable outcome.
    OutlineResolved {
        request_id: RequestId,
        outcome: RequestOutcome,
    },
    /// Final step of an outline invocation. Always delivered, even when the
    /// request task panicked before `OutlineResolved` could be sent.
    OutlineSettled { request_id: RequestId },
    /// The outline confirmation label has been visible long enough.
    OutlineConfirmationElapsed { request_id: RequestId },
    /// User clicked the copy trigger.
    CopyClicked,
    /// Clipboard write finished; the error string is diagnostic only.
    CopyResolved {
        request_id: RequestId,
        result: Result<(), String>,
    },
    /// The copy confirmation label has been visible long enough.
    CopyConfirmationElapsed { request_id: RequestId },
}
