#![deny(missing_docs)]
//! Execution coordinator for sortvis.
//!
//! A [`Coordinator`] owns a [`Registry`] and a [`NotificationSink`] and
//! drives at most one run at a time:
//!
//! ```text
//! Idle ──start──▶ Running ──▶ Completed | Cancelled | Failed ──▶ Idle
//! ```
//!
//! Each run executes on its own tokio task, so the caller of
//! [`Coordinator::start`] returns as soon as the run is accepted. Steps are
//! forwarded one at a time, in production order, and every run ends with
//! exactly one terminal notification. A panic inside a producer is caught
//! at the task boundary and reported as an `error` notification; the
//! coordinator stays usable.

mod channel;
mod config;

pub use channel::ChannelSink;
pub use config::CoordinatorConfig;

use sortvis_algorithms::Registry;
use sortvis_core::{
    Algorithm, AlgorithmInfo, CoordError, InputError, Notification, NotificationSink, Steps,
    coerce_input,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::Instrument;

/// Whether a run is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// No active run; a start request will be accepted.
    Idle,
    /// A run is active.
    Running {
        /// Display name of the running algorithm.
        algorithm: String,
    },
}

impl RunState {
    /// Whether a run is active.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The step sequence ran out naturally.
    Completed {
        /// Steps forwarded.
        steps: usize,
    },
    /// A stop request ended the run early.
    Cancelled {
        /// Steps forwarded before the stop was observed.
        steps: usize,
    },
    /// The producer faulted or the subscriber went away.
    Failed {
        /// Client-facing message, as sent in the `error` notification.
        message: String,
    },
}

/// Answer to a stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopAck {
    /// The active run was asked to stop.
    Requested {
        /// Display name of the algorithm being stopped.
        algorithm: String,
    },
    /// Nothing was running; nothing was done.
    Idle,
}

/// What the watch channel holds. The running algorithm travels with the
/// state so a stop always reaches the run it was acknowledged for.
#[derive(Clone)]
enum Slot {
    Idle,
    Running(Arc<Algorithm>),
}

impl Slot {
    fn public(&self) -> RunState {
        match self {
            Self::Idle => RunState::Idle,
            Self::Running(algorithm) => RunState::Running {
                algorithm: algorithm.display_name().to_owned(),
            },
        }
    }
}

/// Handle to an accepted run.
#[derive(Debug)]
pub struct RunHandle {
    algorithm: String,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    /// Display name of the algorithm this run executes.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Wait for the run to end. The terminal notification has been sent by
    /// the time this resolves.
    pub async fn outcome(self) -> RunOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => RunOutcome::Failed {
                message: describe_join_error(err),
            },
        }
    }
}

/// Drives one algorithm at a time and reports to a single sink.
pub struct Coordinator {
    registry: Arc<Registry>,
    sink: Arc<dyn NotificationSink>,
    config: CoordinatorConfig,
    state: Arc<watch::Sender<Slot>>,
}

impl Coordinator {
    /// Create an idle coordinator.
    pub fn new(
        registry: Registry,
        sink: Arc<dyn NotificationSink>,
        config: CoordinatorConfig,
    ) -> Self {
        let (state, _) = watch::channel(Slot::Idle);
        Self {
            registry: Arc::new(registry),
            sink,
            config,
            state: Arc::new(state),
        }
    }

    /// The catalog this coordinator dispatches to.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configuration in effect.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Discovery listing.
    pub fn list_algorithms(&self) -> Vec<AlgorithmInfo> {
        self.registry.list()
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state.borrow().public()
    }

    /// Start a run of `name` over `input`.
    ///
    /// On success the run is already executing on its own task. Every
    /// failure except [`CoordError::Busy`] is also reported to the sink as
    /// an `error` notification. A busy rejection is not, because the sink
    /// belongs to the run that is already streaming.
    pub async fn start(
        &self,
        name: &str,
        input: &serde_json::Value,
    ) -> Result<RunHandle, CoordError> {
        match self.prepare(name, input) {
            Ok((algorithm, steps)) => Ok(self.spawn(&algorithm, steps)),
            Err(err @ CoordError::Busy(_)) => {
                tracing::warn!(requested = name, error = %err, "sortvis.run.rejected");
                Err(err)
            }
            Err(err) => {
                tracing::warn!(requested = name, error = %err, "sortvis.run.invalid");
                self.report(Notification::error(err.notification_message()))
                    .await;
                Err(err)
            }
        }
    }

    /// Ask the active run to stop at its next step boundary.
    ///
    /// With no active run this does nothing and returns [`StopAck::Idle`];
    /// no notification is sent.
    pub fn stop(&self) -> StopAck {
        // Held across `stop` so a start cannot publish and clear in between.
        let slot = self.state.borrow();
        match &*slot {
            Slot::Running(algorithm) => {
                algorithm.stop();
                let name = algorithm.display_name().to_owned();
                tracing::info!(algorithm = %name, "sortvis.run.stop_requested");
                StopAck::Requested { algorithm: name }
            }
            Slot::Idle => {
                tracing::debug!("sortvis.run.stop_ignored");
                StopAck::Idle
            }
        }
    }

    /// Resolve once no run is active.
    pub async fn wait_idle(&self) {
        let mut rx = self.state.subscribe();
        if let Err(err) = rx.wait_for(|slot| matches!(slot, Slot::Idle)).await {
            tracing::debug!(error = %err, "sortvis.run.state_closed");
        }
    }

    fn prepare(
        &self,
        name: &str,
        input: &serde_json::Value,
    ) -> Result<(Arc<Algorithm>, Steps), CoordError> {
        if let Slot::Running(algorithm) = &*self.state.borrow() {
            return Err(CoordError::Busy(algorithm.display_name().to_owned()));
        }
        if name.trim().is_empty() {
            return Err(InputError::MissingName.into());
        }
        let values = coerce_input(input)?;
        let algorithm = self
            .registry
            .get(name)
            .ok_or_else(|| CoordError::UnknownAlgorithm(name.to_owned()))?;

        let steps = self.claim(&algorithm, &values)?;
        Ok((algorithm, steps))
    }

    /// Move Idle → Running in one critical section: the stop flag is
    /// cleared and the algorithm marked current before any `stop` can see
    /// the new state.
    fn claim(&self, algorithm: &Arc<Algorithm>, values: &[i64]) -> Result<Steps, CoordError> {
        let options = self.config.run_options();
        let mut claimed = Err(CoordError::RuntimeFailure("run was not claimed".into()));
        self.state.send_if_modified(|slot| match slot {
            Slot::Running(active) => {
                claimed = Err(CoordError::Busy(active.display_name().to_owned()));
                false
            }
            Slot::Idle => match algorithm.run(values, &options) {
                Ok(steps) => {
                    self.registry.set_current(algorithm.key());
                    *slot = Slot::Running(Arc::clone(algorithm));
                    claimed = Ok(steps);
                    true
                }
                Err(err) => {
                    claimed = Err(err.into());
                    false
                }
            },
        });
        claimed
    }

    fn spawn(&self, algorithm: &Algorithm, steps: Steps) -> RunHandle {
        let name = algorithm.display_name().to_owned();
        tracing::info!(algorithm = %name, "sortvis.run.start");
        let span = tracing::info_span!("sortvis.run", algorithm = %name);
        let task = tokio::spawn(
            supervise(
                steps,
                Arc::clone(&self.sink),
                Arc::clone(&self.state),
                self.config.step_delay,
            )
            .instrument(span),
        );
        RunHandle {
            algorithm: name,
            task,
        }
    }

    async fn report(&self, notification: Notification) {
        if let Err(err) = self.sink.send(notification).await {
            tracing::warn!(error = %err, "sortvis.sink.send_failed");
        }
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("state", &self.state())
            .field("config", &self.config)
            .finish()
    }
}

/// Run the driver on its own task so a producer panic surfaces as a
/// `JoinError` here, then emit the terminal notification and go Idle.
async fn supervise(
    steps: Steps,
    sink: Arc<dyn NotificationSink>,
    state: Arc<watch::Sender<Slot>>,
    delay: Option<Duration>,
) -> RunOutcome {
    let driver = tokio::spawn(drive(steps, Arc::clone(&sink), delay).in_current_span());
    let outcome = match driver.await {
        Ok(outcome) => outcome,
        Err(err) => RunOutcome::Failed {
            message: describe_join_error(err),
        },
    };

    let terminal = match &outcome {
        RunOutcome::Completed { steps } => {
            tracing::info!(steps, "sortvis.run.complete");
            Notification::complete()
        }
        RunOutcome::Cancelled { steps } => {
            tracing::info!(steps, "sortvis.run.stopped");
            Notification::stopped()
        }
        RunOutcome::Failed { message } => {
            tracing::error!(message = %message, "sortvis.run.failed");
            Notification::error(message.clone())
        }
    };
    if let Err(err) = sink.send(terminal).await {
        tracing::warn!(error = %err, "sortvis.sink.send_failed");
    }
    state.send_replace(Slot::Idle);
    outcome
}

async fn drive(
    mut steps: Steps,
    sink: Arc<dyn NotificationSink>,
    delay: Option<Duration>,
) -> RunOutcome {
    while let Some(step) = steps.next() {
        tracing::debug!(step_index = steps.emitted(), changed = step.changed, "sortvis.run.step");
        if let Err(err) = sink.send(Notification::step(step)).await {
            tracing::warn!(error = %err, "sortvis.sink.send_failed");
            return RunOutcome::Failed {
                message: CoordError::RuntimeFailure(err.to_string()).notification_message(),
            };
        }
        match delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }
    }
    if steps.was_cancelled() {
        RunOutcome::Cancelled {
            steps: steps.emitted(),
        }
    } else {
        RunOutcome::Completed {
            steps: steps.emitted(),
        }
    }
}

fn describe_join_error(err: JoinError) -> String {
    let detail = if err.is_panic() {
        let payload = err.into_panic();
        payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "step producer panicked".to_owned())
    } else {
        err.to_string()
    };
    CoordError::RuntimeFailure(detail).notification_message()
}
