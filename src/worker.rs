// Background work: the two timers and the command executor.
// Every runtime round trip runs in its own task and reports back exactly one event.

use crate::app::{Command, Event};
use crate::dispatcher;
use crate::docker_repo::ContainerRuntime;
use crate::{poller, sampler, tailer};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};

/// Timer periods. The animation timer never triggers a runtime call.
pub struct TimerConfig {
    pub data_interval_ms: u64,
    pub animation_interval_ms: u64,
}

/// Spawns the data and animation timers. Both first fire one period from
/// now; the initial fetch comes from the model. Exits when the receiver is gone.
pub fn spawn_timers(
    tx: mpsc::UnboundedSender<Event>,
    config: TimerConfig,
) -> tokio::task::JoinHandle<()> {
    let data_period = Duration::from_millis(config.data_interval_ms);
    let animation_period = Duration::from_millis(config.animation_interval_ms);
    tokio::spawn(async move {
        let mut data_tick = interval_at(Instant::now() + data_period, data_period);
        data_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut animation_tick = interval_at(Instant::now() + animation_period, animation_period);
        animation_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let event = tokio::select! {
                _ = data_tick.tick() => Event::DataTick,
                _ = animation_tick.tick() => Event::AnimationTick,
            };
            if tx.send(event).is_err() {
                break;
            }
        }
        tracing::debug!("timers shutting down");
    })
}

/// Runs model commands against the runtime as detached tasks.
#[derive(Clone)]
pub struct Executor {
    runtime: Arc<dyn ContainerRuntime>,
    tx: mpsc::UnboundedSender<Event>,
    tail_lines: usize,
}

impl Executor {
    pub fn new(
        runtime: Arc<dyn ContainerRuntime>,
        tx: mpsc::UnboundedSender<Event>,
        tail_lines: usize,
    ) -> Self {
        Self {
            runtime,
            tx,
            tail_lines,
        }
    }

    /// Spawn the work for `command`. `Quit` and `ExecShell` need the terminal
    /// and belong to the event loop.
    pub fn execute(&self, command: Command) {
        let runtime = self.runtime.clone();
        let tx = self.tx.clone();
        match command {
            Command::FetchInventory { generation } => {
                tokio::spawn(async move {
                    let result = poller::fetch_inventory(runtime.as_ref()).await;
                    if let Err(e) = &result {
                        tracing::warn!(error = %e, operation = "list_containers", generation, "inventory poll failed");
                    }
                    send(&tx, Event::Inventory { generation, result });
                });
            }
            Command::SampleStats {
                generation,
                targets,
            } => {
                tokio::spawn(async move {
                    let samples = sampler::sample_batch(runtime.as_ref(), &targets).await;
                    tracing::debug!(
                        operation = "sample_stats",
                        generation,
                        requested = targets.len(),
                        sampled = samples.len(),
                        "stats batch finished"
                    );
                    send(
                        &tx,
                        Event::Samples {
                            generation,
                            samples,
                        },
                    );
                });
            }
            Command::FetchLogs {
                generation,
                container_id,
            } => {
                let max_lines = self.tail_lines;
                tokio::spawn(async move {
                    let result =
                        tailer::fetch_snapshot(runtime.as_ref(), &container_id, max_lines).await;
                    if let Err(e) = &result {
                        tracing::warn!(error = %e, operation = "fetch_logs", container = %container_id, "log fetch failed");
                    }
                    send(
                        &tx,
                        Event::Logs {
                            generation,
                            container_id,
                            result,
                        },
                    );
                });
            }
            Command::Lifecycle {
                action,
                container_id,
                container_name,
            } => {
                tokio::spawn(async move {
                    let result = dispatcher::dispatch(runtime.as_ref(), action, &container_id).await;
                    send(
                        &tx,
                        Event::ActionCompleted {
                            action,
                            container_name,
                            result,
                        },
                    );
                });
            }
            Command::OpenUrl { url } => {
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, operation = "open_url", url = %url, "failed to open browser");
                    }
                });
            }
            Command::Quit | Command::ExecShell { .. } => {
                tracing::debug!(?command, "command belongs to the event loop");
            }
        }
    }
}

fn send(tx: &mpsc::UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        tracing::debug!("event loop gone, dropping completion");
    }
}
