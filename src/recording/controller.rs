use super::session::{Outcome, RecordingSession, RecordingSnapshot};
use super::state::{RecordingError, RecordingEvent, Transition};
use super::view::{RecordingSurface, RecordingView};
use crate::config::RecordingConfig;
use crate::format::{format_clock, format_date, format_time_of_day};
use anyhow::{Context, Result};
use chrono::Local;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

enum Command {
    Apply {
        event: RecordingEvent,
        reply: oneshot::Sender<Result<RecordingSnapshot, RecordingError>>,
    },
    Snapshot {
        reply: oneshot::Sender<RecordingSnapshot>,
    },
}

/// Drives a [`RecordingSession`] against a live camera panel.
///
/// The controller runs as one task that owns the session and the surface.
/// User events, recording ticks and wall-clock refreshes are handled one at
/// a time from that task.
pub struct RecordingController<S: RecordingSurface> {
    session: RecordingSession,
    surface: S,
    clock: Interval,
}

impl<S: RecordingSurface> RecordingController<S> {
    /// Render the idle panel and the wall clock, then start handling events.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach(surface: S, config: &RecordingConfig) -> RecordingHandle {
        let period = config.clock_refresh();
        let mut clock = interval_at(Instant::now() + period, period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut controller = Self {
            session: RecordingSession::new(config.tick_interval()),
            surface,
            clock,
        };
        controller.refresh_clock();
        controller.sync_view();

        let (tx, rx) = mpsc::channel(32);
        let task = tokio::spawn(controller.run(rx));

        RecordingHandle { tx, task }
    }

    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        debug!("Recording controller started");

        loop {
            tokio::select! {
                cmd = rx.recv() => match cmd {
                    Some(cmd) => self.handle(cmd),
                    None => break,
                },
                _ = self.session.next_tick() => self.on_tick(),
                _ = self.clock.tick() => self.refresh_clock(),
            }
        }

        debug!("Recording controller stopped");
    }

    fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Apply { event, reply } => {
                let result = self.apply(event);
                // Caller may have gone away; the transition stands either way
                let _ = reply.send(result);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.session.snapshot());
            }
        }
    }

    fn apply(&mut self, event: RecordingEvent) -> Result<RecordingSnapshot, RecordingError> {
        let outcome = self.session.apply(event).inspect_err(|e| {
            debug!("Ignoring recording event: {}", e);
        })?;

        self.report(&outcome);
        if outcome.transition != Transition::Checkpoint {
            self.sync_view();
        }

        Ok(self.session.snapshot())
    }

    fn report(&self, outcome: &Outcome) {
        let duration = format_clock(outcome.elapsed_secs);
        let session = outcome.session_id.as_deref().unwrap_or("-");

        match outcome.transition {
            Transition::Started => {
                info!("[Recording] Started session {}", session);
            }
            Transition::Paused | Transition::Resumed => {
                info!("[Recording] State changed to: {}", outcome.state);
            }
            Transition::Checkpoint => {
                info!("[Recording] Saved checkpoint. Duration at save: {}", duration);
            }
            Transition::Finished => {
                info!(
                    "[Recording] Finished and saved session {}. Total duration: {}",
                    session, duration
                );
            }
        }
    }

    fn on_tick(&mut self) {
        let elapsed = self.session.tick();
        self.surface.set_elapsed(&format_clock(elapsed));
    }

    fn refresh_clock(&mut self) {
        let now = Local::now();
        let time = format!("Time: {}", format_time_of_day(&now));
        self.surface.set_wall_clock(&format_date(&now), &time);
    }

    fn sync_view(&mut self) {
        let view = RecordingView::for_state(self.session.state());
        self.surface.render(&view);
    }
}

/// Handle to an attached [`RecordingController`]
pub struct RecordingHandle {
    tx: mpsc::Sender<Command>,
    task: JoinHandle<()>,
}

impl RecordingHandle {
    pub async fn start(&self) -> Result<RecordingSnapshot> {
        self.send(RecordingEvent::Start).await
    }

    pub async fn pause_resume(&self) -> Result<RecordingSnapshot> {
        self.send(RecordingEvent::PauseResume).await
    }

    pub async fn save(&self) -> Result<RecordingSnapshot> {
        self.send(RecordingEvent::Save).await
    }

    pub async fn finish(&self) -> Result<RecordingSnapshot> {
        self.send(RecordingEvent::Finish).await
    }

    /// Apply an event. A rejected event fails with a [`RecordingError`] and
    /// leaves the session unchanged.
    pub async fn send(&self, event: RecordingEvent) -> Result<RecordingSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Apply { event, reply })
            .await
            .context("Recording controller is not running")?;

        let snapshot = rx.await.context("Recording controller dropped the request")??;
        Ok(snapshot)
    }

    pub async fn snapshot(&self) -> Result<RecordingSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .context("Recording controller is not running")?;

        rx.await.context("Recording controller dropped the request")
    }

    /// Stop handling events and wait for the controller task to finish
    pub async fn detach(self) -> Result<()> {
        drop(self.tx);
        self.task.await.context("Recording controller task panicked")
    }
}
