// Events consumed by the model and commands it schedules.

use crate::dispatcher::Action;
use crate::error::RuntimeError;
use crate::models::{ContainerSnapshot, ResourceSample};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Everything that can change the dashboard state. Each asynchronous
/// command reports back with exactly one of the completion variants.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize {
        width: u16,
        height: u16,
    },
    /// Slow timer: inventory poll and stats batch.
    DataTick,
    /// Fast timer: advances the marquee only.
    AnimationTick,
    Inventory {
        generation: u64,
        result: Result<Vec<ContainerSnapshot>, RuntimeError>,
    },
    Samples {
        generation: u64,
        samples: HashMap<String, ResourceSample>,
    },
    Logs {
        generation: u64,
        container_id: String,
        result: Result<Vec<String>, RuntimeError>,
    },
    ActionCompleted {
        action: Action,
        container_name: String,
        result: Result<(), RuntimeError>,
    },
    ShellExited {
        container_name: String,
        result: Result<(), String>,
    },
}

/// Side effects requested by the model; executed outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchInventory {
        generation: u64,
    },
    SampleStats {
        generation: u64,
        /// Full ids of the containers that were up.
        targets: Vec<String>,
    },
    FetchLogs {
        generation: u64,
        container_id: String,
    },
    Lifecycle {
        action: Action,
        container_id: String,
        container_name: String,
    },
    ExecShell {
        container_id: String,
        container_name: String,
    },
    OpenUrl {
        url: String,
    },
    Quit,
}
