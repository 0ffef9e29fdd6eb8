use crate::RequestId;

/// Side effects requested by [`crate::update`]. Each one is executed by the
/// session outside the pure core and answered with one or more [`crate::Msg`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestTranscript { request_id: RequestId, url: String },
    RequestOutline { request_id: RequestId, text: String },
    WriteClipboard { request_id: RequestId, text: String },
    ScheduleOutlineReset { request_id: RequestId },
    ScheduleCopyReset { request_id: RequestId },
}
