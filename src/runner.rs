// Event loop: draw, wait for one event, feed it to the model, run its commands.

use crate::app::{Command, Event, Model};
use crate::config::AppConfig;
use crate::docker_repo::ContainerRuntime;
use crate::terminal::{self, Tui};
use crate::ui::{self, Theme};
use crate::worker::{self, Executor, TimerConfig};
use crossterm::event::{Event as TermEvent, EventStream, KeyEventKind};
use futures_util::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run(
    tui: &mut Tui,
    runtime: Arc<dyn ContainerRuntime>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let size = tui.size()?;
    let theme = Theme::from_config(&config.alerts);
    let mut model = Model::new(size.width, size.height, config.status.display_ticks);
    let executor = Executor::new(runtime, tx.clone(), config.logs.tail_lines);
    let timer_config = || TimerConfig {
        data_interval_ms: config.refresh.data_interval_ms,
        animation_interval_ms: config.refresh.animation_interval_ms,
    };
    let mut timers = worker::spawn_timers(tx.clone(), timer_config());
    let mut input = EventStream::new();
    let mut pending = model.init();

    'event_loop: loop {
        for command in pending.drain(..) {
            match command {
                Command::Quit => break 'event_loop,
                Command::ExecShell {
                    container_id,
                    container_name,
                } => {
                    // The child owns the terminal until it exits: no input
                    // reader, no timers piling up ticks.
                    timers.abort();
                    drop(input);
                    let result = exec_shell(tui, &container_id).await;
                    terminal::resume(tui)?;
                    input = EventStream::new();
                    timers = worker::spawn_timers(tx.clone(), timer_config());
                    let _ = tx.send(Event::ShellExited {
                        container_name,
                        result,
                    });
                }
                other => executor.execute(other),
            }
        }

        tui.draw(|f| ui::render(f, model.state(), &theme))?;

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            term = input.next() => match term {
                Some(Ok(TermEvent::Key(key))) if key.kind != KeyEventKind::Release => Event::Key(key),
                Some(Ok(TermEvent::Resize(width, height))) => Event::Resize { width, height },
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::warn!(error = %e, operation = "read_input", "terminal input error");
                    continue;
                }
                None => break,
            },
        };
        pending = model.update(event);
    }

    timers.abort();
    tracing::info!("dashboard closed");
    Ok(())
}

async fn exec_shell(tui: &mut Tui, container_id: &str) -> Result<(), String> {
    terminal::suspend(tui);
    tracing::info!(container = %container_id, operation = "exec_shell", "opening shell");
    let status = tokio::process::Command::new("docker")
        .args(["exec", "-it", container_id, "/bin/sh"])
        .status()
        .await;
    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("shell exited with {}", s)),
        Err(e) => {
            tracing::warn!(error = %e, operation = "exec_shell", "failed to spawn docker exec");
            Err(e.to_string())
        }
    }
}
