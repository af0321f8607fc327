// Action dispatcher: lifecycle commands against the runtime.

use crate::docker_repo::ContainerRuntime;
use crate::error::RuntimeError;
use crate::models::LifecycleState;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    Restart,
    Remove,
}

impl Action {
    /// Whether the command makes sense for a container in `state`.
    pub fn permitted(self, state: LifecycleState) -> bool {
        match self {
            Action::Stop => state.is_running(),
            Action::Start => !state.is_running(),
            Action::Restart | Action::Remove => true,
        }
    }

    /// Progressive form for the pending status line ("Stopping web...").
    pub fn progressive(self) -> &'static str {
        match self {
            Action::Start => "Starting",
            Action::Stop => "Stopping",
            Action::Restart => "Restarting",
            Action::Remove => "Removing",
        }
    }

    pub fn past(self) -> &'static str {
        match self {
            Action::Start => "Started",
            Action::Stop => "Stopped",
            Action::Restart => "Restarted",
            Action::Remove => "Removed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::Remove => "remove",
        };
        f.write_str(s)
    }
}

/// Run one command; no automatic retry.
pub async fn dispatch(
    runtime: &dyn ContainerRuntime,
    action: Action,
    container_id: &str,
) -> Result<(), RuntimeError> {
    tracing::info!(action = %action, container = %container_id, "dispatching lifecycle command");
    let result = match action {
        Action::Start => runtime.start(container_id).await,
        Action::Stop => runtime.stop(container_id).await,
        Action::Restart => runtime.restart(container_id).await,
        Action::Remove => runtime.remove(container_id).await,
    };
    if let Err(e) = &result {
        tracing::warn!(
            error = %e,
            action = %action,
            container = %container_id,
            "lifecycle command failed"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_requires_running() {
        assert!(Action::Stop.permitted(LifecycleState::Running));
        assert!(!Action::Stop.permitted(LifecycleState::Exited));
    }

    #[test]
    fn start_requires_not_running() {
        assert!(Action::Start.permitted(LifecycleState::Exited));
        assert!(Action::Start.permitted(LifecycleState::Created));
        assert!(!Action::Start.permitted(LifecycleState::Running));
    }

    #[test]
    fn restart_is_unconditional() {
        assert!(Action::Restart.permitted(LifecycleState::Running));
        assert!(Action::Restart.permitted(LifecycleState::Paused));
        assert!(Action::Restart.permitted(LifecycleState::Other));
    }
}
