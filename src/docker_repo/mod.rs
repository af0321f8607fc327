// Container-runtime collaborator: the trait the dashboard consumes and its bollard implementation

mod logs;
mod stats;

use crate::error::RuntimeError;
use crate::models::{LifecycleState, RawContainer, RawPort, RawStats};
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{
    ListContainersOptions, LogsOptions, RemoveContainerOptions, RestartContainerOptions,
    StartContainerOptions, StatsOptions, StopContainerOptions,
};
use futures_util::StreamExt;
use tracing::instrument;

/// Everything the dashboard asks of the container runtime.
/// Every call is a single round trip; nothing is streamed.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// All containers, running and stopped.
    async fn list_containers(&self) -> Result<Vec<RawContainer>, RuntimeError>;
    /// One-shot stats reading (current and previous counters).
    async fn sample_stats(&self, id: &str) -> Result<RawStats, RuntimeError>;
    /// Last `max_lines` combined stdout/stderr lines, possibly carrying the 8-byte frame header.
    async fn fetch_logs(&self, id: &str, max_lines: usize) -> Result<Vec<Vec<u8>>, RuntimeError>;
    async fn start(&self, id: &str) -> Result<(), RuntimeError>;
    async fn stop(&self, id: &str) -> Result<(), RuntimeError>;
    async fn restart(&self, id: &str) -> Result<(), RuntimeError>;
    async fn remove(&self, id: &str) -> Result<(), RuntimeError>;
}

pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    /// Connect using DOCKER_HOST when set, the local socket otherwise.
    pub fn connect() -> anyhow::Result<Self> {
        let docker = Docker::connect_with_local_defaults()?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRepo {
    #[instrument(skip(self), fields(repo = "docker", operation = "list_containers"))]
    async fn list_containers(&self) -> Result<Vec<RawContainer>, RuntimeError> {
        let options = ListContainersOptions {
            all: true,
            ..Default::default()
        };
        let containers = self.docker.list_containers(Some(options)).await?;

        Ok(containers
            .into_iter()
            .map(|c| RawContainer {
                full_id: c.id.unwrap_or_default(),
                names: c.names.unwrap_or_default(),
                image: c.image.unwrap_or_default(),
                status_text: c.status.unwrap_or_default(),
                lifecycle_state: c
                    .state
                    .as_ref()
                    .map(|s| LifecycleState::from_docker(&s.to_string()))
                    .unwrap_or_default(),
                ports: c
                    .ports
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| RawPort {
                        ip: p.ip,
                        private_port: p.private_port,
                        public_port: p.public_port,
                        protocol: p.typ.as_ref().map(|t| t.to_string()).unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect())
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "sample_stats"))]
    async fn sample_stats(&self, id: &str) -> Result<RawStats, RuntimeError> {
        let options = StatsOptions {
            stream: false,
            ..Default::default()
        };
        let mut stream = self.docker.stats(id, Some(options));
        match stream.next().await {
            Some(Ok(s)) => stats::raw_stats(&s)
                .ok_or_else(|| RuntimeError::Decode(format!("stats for {} without cpu_stats", id))),
            Some(Err(e)) => Err(e.into()),
            None => Err(RuntimeError::Decode(format!("empty stats response for {}", id))),
        }
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "fetch_logs"))]
    async fn fetch_logs(&self, id: &str, max_lines: usize) -> Result<Vec<Vec<u8>>, RuntimeError> {
        let options = LogsOptions {
            stdout: true,
            stderr: true,
            tail: max_lines.to_string(),
            ..Default::default()
        };
        let mut stream = self.docker.logs(id, Some(options));
        let mut assembler = logs::LineAssembler::default();
        while let Some(frame) = stream.next().await {
            assembler.push(&frame?);
        }
        let mut lines = assembler.finish();
        if lines.len() > max_lines {
            lines.drain(..lines.len() - max_lines);
        }
        Ok(lines)
    }

    async fn start(&self, id: &str) -> Result<(), RuntimeError> {
        self.docker.start_container(id, None::<StartContainerOptions>).await?;
        Ok(())
    }

    async fn stop(&self, id: &str) -> Result<(), RuntimeError> {
        self.docker.stop_container(id, None::<StopContainerOptions>).await?;
        Ok(())
    }

    async fn restart(&self, id: &str) -> Result<(), RuntimeError> {
        self.docker.restart_container(id, None::<RestartContainerOptions>).await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), RuntimeError> {
        let options = RemoveContainerOptions {
            force: true,
            ..Default::default()
        };
        self.docker.remove_container(id, Some(options)).await?;
        Ok(())
    }
}
