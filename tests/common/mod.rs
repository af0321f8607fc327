// Shared test helpers: container fixtures and an in-memory runtime

#![allow(dead_code)]

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dockprism::app::{Event, Model};
use dockprism::docker_repo::ContainerRuntime;
use dockprism::error::RuntimeError;
use dockprism::models::*;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn snapshot(name: &str, state: LifecycleState) -> ContainerSnapshot {
    ContainerSnapshot {
        id: format!("{:0<12}", name).chars().take(12).collect(),
        full_id: format!("{}-full-id", name),
        display_name: name.to_string(),
        image: format!("{}:latest", name),
        status_text: match state {
            LifecycleState::Running => "Up 2 hours".to_string(),
            LifecycleState::Exited => "Exited (0) 3 days ago".to_string(),
            _ => "Created".to_string(),
        },
        lifecycle_state: state,
        port_mappings: vec![],
    }
}

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A model that has applied one successful inventory.
pub fn loaded_model(containers: Vec<ContainerSnapshot>, width: u16, height: u16) -> Model {
    let mut model = Model::new(width, height, 3);
    model.init();
    model.update(Event::Inventory {
        generation: 1,
        result: Ok(containers),
    });
    model
}

/// The three-container fixture: two running, one exited.
pub fn mixed_fleet() -> Vec<ContainerSnapshot> {
    vec![
        snapshot("web", LifecycleState::Running),
        snapshot("batch", LifecycleState::Exited),
        snapshot("api", LifecycleState::Running),
    ]
}

pub fn raw_container(id: &str, name: &str, state: &str, status: &str) -> RawContainer {
    RawContainer {
        full_id: id.to_string(),
        names: vec![format!("/{}", name)],
        image: "nginx:1.27".to_string(),
        status_text: status.to_string(),
        lifecycle_state: LifecycleState::from_docker(state),
        ports: vec![],
    }
}

pub fn raw_stats(cpu: (u64, u64), prev: (u64, u64), online: Option<u32>) -> RawStats {
    RawStats {
        current: CpuCounters {
            cpu_usage: cpu.0,
            system_cpu_usage: cpu.1,
            online_cpus: online,
        },
        previous: CpuCounters {
            cpu_usage: prev.0,
            system_cpu_usage: prev.1,
            online_cpus: online,
        },
        mem_usage: 256 * 1024 * 1024,
        mem_limit: 1024 * 1024 * 1024,
        interfaces: vec![
            InterfaceCounters {
                rx_bytes: 1000,
                tx_bytes: 10,
            },
            InterfaceCounters {
                rx_bytes: 500,
                tx_bytes: 5,
            },
        ],
    }
}

/// In-memory runtime. Lifecycle calls are recorded; anything not configured
/// answers NotFound.
#[derive(Default)]
pub struct FakeRuntime {
    pub containers: Vec<RawContainer>,
    pub stats: HashMap<String, RawStats>,
    pub logs: HashMap<String, Vec<Vec<u8>>>,
    pub list_error: Option<RuntimeError>,
    pub action_error: Option<RuntimeError>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeRuntime {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, action: &str, id: &str) -> Result<(), RuntimeError> {
        self.calls.lock().unwrap().push(format!("{} {}", action, id));
        match &self.action_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<RawContainer>, RuntimeError> {
        match &self.list_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.containers.clone()),
        }
    }

    async fn sample_stats(&self, id: &str) -> Result<RawStats, RuntimeError> {
        self.stats
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound(id.to_string()))
    }

    async fn fetch_logs(&self, id: &str, max_lines: usize) -> Result<Vec<Vec<u8>>, RuntimeError> {
        let lines = self
            .logs
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound(id.to_string()))?;
        let skip = lines.len().saturating_sub(max_lines);
        Ok(lines.into_iter().skip(skip).collect())
    }

    async fn start(&self, id: &str) -> Result<(), RuntimeError> {
        self.record("start", id)
    }

    async fn stop(&self, id: &str) -> Result<(), RuntimeError> {
        self.record("stop", id)
    }

    async fn restart(&self, id: &str) -> Result<(), RuntimeError> {
        self.record("restart", id)
    }

    async fn remove(&self, id: &str) -> Result<(), RuntimeError> {
        self.record("remove", id)
    }
}
