use crate::markup;
use crate::state::ViewState;
use crate::surface::{StatTiles, Surface};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;
use triagedesk_client::MessageApi;
use triagedesk_types::MessageStatus;

/// Refresh cadence of the background poll (staleness up to one interval
/// is accepted by design)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Grace period between a successful submit and the list refetch, so the
/// backend can finish enrichment before the list is re-read
pub const SUBMIT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Responder label attached when an operator assigns a message
pub const ASSIGNED_RESPONDER: &str = "Responder Team";

/// Which modal an outside click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Detail,
    Submit,
}

/// Modal state machine. The two modals are mutually exclusive; closing
/// one never implicitly opens the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Closed,
    DetailOpen { id: u64 },
    SubmitOpen { busy: bool },
}

/// User-interface events, delivered by whatever hosts the display surface.
///
/// Clicks inside a modal's content area produce no event at all; only a
/// click on the backdrop arrives as `OutsideClick`.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Both filter controls re-read on any change
    FiltersChanged { location: String, status: String },
    CardClicked { id: u64 },
    AssignClicked,
    ResolveClicked,
    SubmitOpened,
    SubmitRequested { text: String },
    DetailDismissed,
    SubmitDismissed,
    OutsideClick { modal: ModalKind },
}

/// Wires the API client, the view state, and the renderer together.
///
/// Single-task and event-driven: network calls are the only suspension
/// points, and every fetch result funnels through
/// [`ViewState::replace_messages`] (last write wins, no sequencing token).
pub struct Controller<A: MessageApi, S: Surface> {
    api: A,
    surface: S,
    state: ViewState,
    modal: Modal,
    poll_interval: Duration,
    submit_close_delay: Duration,
    pending_submit_close: Option<Instant>,
}

impl<A: MessageApi, S: Surface> Controller<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            state: ViewState::new(),
            modal: Modal::Closed,
            poll_interval: DEFAULT_POLL_INTERVAL,
            submit_close_delay: SUBMIT_CLOSE_DELAY,
            pending_submit_close: None,
        }
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn submit_close_delay(mut self, delay: Duration) -> Self {
        self.submit_close_delay = delay;
        self
    }

    /// Start with these filters instead of the unfiltered default, so the
    /// initial refresh already queries the narrowed list
    pub fn filters(mut self, location: impl Into<String>, status: impl Into<String>) -> Self {
        self.state.set_filters(location, status);
        self
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch messages and statistics, then re-render.
    ///
    /// A failed fetch is reported and the previously rendered cards stay
    /// up; the render loop never crashes on a bad poll.
    pub async fn refresh(&mut self) {
        match self.api.list_messages(self.state.filter()).await {
            Ok(messages) => {
                self.state.replace_messages(messages);
                self.surface
                    .set_cards(&markup::render_card_list(self.state.messages()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "message refresh failed");
                self.surface
                    .show_error(&format!("Failed to load messages: {}", e));
            }
        }

        match self.api.fetch_statistics().await {
            Ok(stats) => self.surface.set_statistics(&StatTiles::from(&stats)),
            Err(e) => tracing::warn!(error = %e, "statistics refresh failed"),
        }
    }

    pub async fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::FiltersChanged { location, status } => {
                self.state.set_filters(location, status);
                // Immediate refetch; the next timer tick is not waited on
                self.refresh().await;
            }
            UiEvent::CardClicked { id } => self.open_detail(id),
            UiEvent::AssignClicked => {
                self.apply_status(MessageStatus::Assigned, Some(ASSIGNED_RESPONDER))
                    .await;
            }
            UiEvent::ResolveClicked => {
                self.apply_status(MessageStatus::Resolved, None).await;
            }
            UiEvent::SubmitOpened => {
                // Modals are mutually exclusive; opening one dismisses
                // the other
                if matches!(self.modal, Modal::DetailOpen { .. }) {
                    self.surface.close_detail();
                }
                self.modal = Modal::SubmitOpen { busy: false };
                self.surface.open_submit();
            }
            UiEvent::SubmitRequested { text } => self.submit(text).await,
            UiEvent::DetailDismissed | UiEvent::OutsideClick { modal: ModalKind::Detail } => {
                if matches!(self.modal, Modal::DetailOpen { .. }) {
                    self.modal = Modal::Closed;
                    self.surface.close_detail();
                }
            }
            UiEvent::SubmitDismissed | UiEvent::OutsideClick { modal: ModalKind::Submit } => {
                if matches!(self.modal, Modal::SubmitOpen { .. }) {
                    self.modal = Modal::Closed;
                    self.pending_submit_close = None;
                    self.surface.close_submit();
                }
            }
        }
    }

    fn open_detail(&mut self, id: u64) {
        // A card click while the submit modal is up dismisses it, along
        // with any deferred close still scheduled for it
        if matches!(self.modal, Modal::SubmitOpen { .. }) {
            self.pending_submit_close = None;
            self.surface.close_submit();
        }
        // Lookup against the current snapshot only; a racing refresh may
        // have evicted the id, which renders as an explicit missing state
        let detail = match self.state.find_by_id(id) {
            Some(msg) => {
                let media_src = msg
                    .media
                    .as_ref()
                    .map(|m| self.api.media_url(&m.media_id));
                markup::render_detail(msg, media_src.as_deref())
            }
            None => {
                tracing::debug!(id, "detail requested for evicted message");
                markup::render_detail_missing(id)
            }
        };
        self.modal = Modal::DetailOpen { id };
        self.surface.open_detail(&detail);
    }

    async fn apply_status(&mut self, status: MessageStatus, assigned_to: Option<&str>) {
        let Modal::DetailOpen { id } = self.modal else {
            return;
        };

        match self.api.update_status(id, status, assigned_to).await {
            Ok(()) => {
                // The modal may have been dismissed while the call was in
                // flight; a late result must not reopen or re-close it
                if self.modal != (Modal::DetailOpen { id }) {
                    return;
                }
                self.modal = Modal::Closed;
                self.surface.close_detail();
                self.surface.show_notice("Status updated successfully");
                // Displayed state must reflect a confirmed server state,
                // so refetch instead of patching the local copy
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "status update failed");
                // Keep the modal open with the prior message data intact
                self.surface
                    .show_error(&format!("Failed to update status: {}", e));
            }
        }
    }

    async fn submit(&mut self, text: String) {
        let Modal::SubmitOpen { busy } = self.modal else {
            return;
        };
        if busy {
            return;
        }

        let text = text.trim();
        if text.is_empty() {
            self.surface
                .set_submit_result(Err("Please enter a message"));
            return;
        }

        // Disable resubmission while the call is in flight
        self.modal = Modal::SubmitOpen { busy: true };

        match self.api.submit_message(text).await {
            Ok(()) => {
                if !matches!(self.modal, Modal::SubmitOpen { .. }) {
                    // Dismissed while in flight; drop the late result
                    return;
                }
                self.surface
                    .set_submit_result(Ok("Message processed successfully"));
                // Close and refetch after the grace period; the loop stays
                // responsive in the meantime
                self.pending_submit_close = Some(Instant::now() + self.submit_close_delay);
            }
            Err(e) => {
                if !matches!(self.modal, Modal::SubmitOpen { .. }) {
                    return;
                }
                tracing::warn!(error = %e, "message submission failed");
                // Leave the modal open and the input intact for correction
                self.modal = Modal::SubmitOpen { busy: false };
                self.surface.set_submit_result(Err(&e.to_string()));
            }
        }
    }

    async fn finish_submit_close(&mut self) {
        self.pending_submit_close = None;
        if matches!(self.modal, Modal::SubmitOpen { .. }) {
            self.modal = Modal::Closed;
            self.surface.close_submit();
            self.refresh().await;
        }
    }

    /// Run the dashboard loop: an initial refresh, then the periodic poll
    /// interleaved with UI events.
    ///
    /// Returns when the event channel closes, so the poll timer lives
    /// exactly as long as the caller keeps a sender; dropping this future
    /// cancels everything.
    pub async fn run(mut self, mut events: UnboundedReceiver<UiEvent>) -> anyhow::Result<()> {
        self.refresh().await;

        let mut poll = tokio::time::interval_at(
            Instant::now() + self.poll_interval,
            self.poll_interval,
        );
        poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = poll.tick() => {
                    self.refresh().await;
                }
                _ = maybe_sleep(self.pending_submit_close),
                    if self.pending_submit_close.is_some() =>
                {
                    self.finish_submit_close().await;
                }
                event = events.recv() => {
                    match event {
                        Some(event) => self.handle_event(event).await,
                        None => return Ok(()),
                    }
                }
            }
        }
    }
}

async fn maybe_sleep(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
