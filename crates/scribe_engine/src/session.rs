use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use scribe_core::{update, AppState, AppViewModel, Effect, Msg, RequestOutcome};
use scribe_logging::{scribe_error, scribe_info};
use tokio::sync::mpsc;

use crate::{
    BackendSettings, Clipboard, ClipboardSettings, CommandClipboard, OutlineSource, Reply,
    ReqwestBackend, RequestError, TranscriptSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// How long the outline trigger shows its confirmation label.
    pub outline_confirmation: Duration,
    /// How long the copy trigger shows its confirmation label.
    pub copy_confirmation: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            outline_confirmation: Duration::from_secs(2),
            copy_confirmation: Duration::from_secs(2),
        }
    }
}

/// Everything the orchestrators talk to, built once at startup.
pub struct ClientContext {
    pub transcripts: Arc<dyn TranscriptSource>,
    pub outlines: Arc<dyn OutlineSource>,
    pub clipboard: Arc<dyn Clipboard>,
    pub settings: SessionSettings,
}

impl ClientContext {
    /// Wires the HTTP backend and the command clipboard.
    pub fn from_settings(
        backend: BackendSettings,
        clipboard: ClipboardSettings,
        settings: SessionSettings,
    ) -> Result<Self, RequestError> {
        let backend = Arc::new(ReqwestBackend::new(backend)?);
        Ok(Self {
            transcripts: backend.clone(),
            outlines: backend,
            clipboard: Arc::new(CommandClipboard::new(clipboard)),
            settings,
        })
    }
}

/// Single owner of [`AppState`].
///
/// Messages are applied one at a time. Effects run as tokio tasks and report
/// back through a channel; their replies are only applied by
/// [`Session::process_next`], so state is never touched concurrently.
/// Must be used from within a tokio runtime.
pub struct Session {
    context: Arc<ClientContext>,
    state: AppState,
    completion_tx: mpsc::UnboundedSender<Vec<Msg>>,
    completion_rx: mpsc::UnboundedReceiver<Vec<Msg>>,
    pending: usize,
}

impl Session {
    pub fn new(context: ClientContext) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            context: Arc::new(context),
            state: AppState::new(),
            completion_tx,
            completion_rx,
            pending: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Number of effect tasks that have not reported back yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Applies a message and starts the effects it produces.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.spawn_effect(effect);
        }
    }

    /// Waits for the next effect task to finish and applies what it reported.
    ///
    /// Returns `false` immediately when nothing is pending. Cancel safe.
    pub async fn process_next(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        let Some(msgs) = self.completion_rx.recv().await else {
            return false;
        };
        self.pending -= 1;
        for msg in msgs {
            self.dispatch(msg);
        }
        true
    }

    /// Drives every outstanding task, including confirmation timers, to completion.
    pub async fn run_until_idle(&mut self) {
        while self.process_next().await {}
    }

    fn spawn_effect(&mut self, effect: Effect) {
        self.pending += 1;
        let context = self.context.clone();
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let msgs = run_effect(&context, effect).await;
            let _ = completion_tx.send(msgs);
        });
    }
}

/// Executes one effect. Every path returns the messages that close it out,
/// panics included.
async fn run_effect(context: &ClientContext, effect: Effect) -> Vec<Msg> {
    match effect {
        Effect::RequestTranscript { request_id, url } => {
            scribe_info!("Requesting transcript {} for {}", request_id, url);
            let outcome = match catch_panic(context.transcripts.extract(&url)).await {
                Some(result) => to_outcome(result),
                None => {
                    scribe_error!("Transcript request {} panicked", request_id);
                    RequestOutcome::TransportFailed("request task panicked".to_string())
                }
            };
            vec![Msg::TranscriptResolved {
                request_id,
                outcome,
            }]
        }
        Effect::RequestOutline { request_id, text } => {
            scribe_info!(
                "Requesting outline {} for {} chars",
                request_id,
                text.chars().count()
            );
            let mut msgs = Vec::with_capacity(2);
            match catch_panic(context.outlines.outline(&text)).await {
                Some(result) => msgs.push(Msg::OutlineResolved {
                    request_id,
                    outcome: to_outcome(result),
                }),
                None => scribe_error!("Outline request {} panicked", request_id),
            }
            msgs.push(Msg::OutlineSettled { request_id });
            msgs
        }
        Effect::WriteClipboard { request_id, text } => {
            let result = match catch_panic(context.clipboard.write_text(&text)).await {
                Some(result) => result.map_err(|err| err.to_string()),
                None => Err("clipboard task panicked".to_string()),
            };
            vec![Msg::CopyResolved { request_id, result }]
        }
        Effect::ScheduleOutlineReset { request_id } => {
            tokio::time::sleep(context.settings.outline_confirmation).await;
            vec![Msg::OutlineConfirmationElapsed { request_id }]
        }
        Effect::ScheduleCopyReset { request_id } => {
            tokio::time::sleep(context.settings.copy_confirmation).await;
            vec![Msg::CopyConfirmationElapsed { request_id }]
        }
    }
}

async fn catch_panic<F: Future>(future: F) -> Option<F::Output> {
    AssertUnwindSafe(future).catch_unwind().await.ok()
}

fn to_outcome(result: Result<Reply, RequestError>) -> RequestOutcome {
    match result {
        Ok(Reply::Payload(text)) => RequestOutcome::Success(text),
        Ok(Reply::Rejected(message)) => RequestOutcome::Rejected(message),
        Err(err) => RequestOutcome::TransportFailed(err.to_string()),
    }
}
