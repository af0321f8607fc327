// Docker container models

use std::fmt;

/// Docker container lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    Running,
    Exited,
    Created,
    Restarting,
    Paused,
    #[default]
    Other,
}

impl LifecycleState {
    /// Parse from Docker API state string (e.g. "running", "exited").
    pub fn from_docker(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "running" => LifecycleState::Running,
            "exited" => LifecycleState::Exited,
            "created" => LifecycleState::Created,
            "restarting" => LifecycleState::Restarting,
            "paused" => LifecycleState::Paused,
            _ => LifecycleState::Other,
        }
    }

    pub fn is_running(self) -> bool {
        self == LifecycleState::Running
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Running => "running",
            LifecycleState::Exited => "exited",
            LifecycleState::Created => "created",
            LifecycleState::Restarting => "restarting",
            LifecycleState::Paused => "paused",
            LifecycleState::Other => "other",
        };
        f.write_str(s)
    }
}

/// One published or exposed port as the runtime reports it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPort {
    /// Bind address ("0.0.0.0", "::"); ignored for de-duplication.
    pub ip: Option<String>,
    pub private_port: u16,
    pub public_port: Option<u16>,
    /// Protocol ("tcp", "udp", "sctp").
    pub protocol: String,
}

/// Container entry exactly as listed by the runtime, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawContainer {
    pub full_id: String,
    /// Names as reported, usually with a leading '/'.
    pub names: Vec<String>,
    pub image: String,
    pub status_text: String,
    pub lifecycle_state: LifecycleState,
    pub ports: Vec<RawPort>,
}

/// Normalized container row shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSnapshot {
    /// First 12 characters of the full id, for display.
    pub id: String,
    /// Full id, used for every runtime command.
    pub full_id: String,
    pub display_name: String,
    pub image: String,
    /// Human status from the runtime, e.g. "Up 3 hours".
    pub status_text: String,
    pub lifecycle_state: LifecycleState,
    /// De-duplicated "host->container/proto" or "container/proto" entries, in first-seen order.
    pub port_mappings: Vec<String>,
}

impl ContainerSnapshot {
    /// True when the runtime status reads "Up ..." (case-insensitive); only these are sampled.
    pub fn is_up(&self) -> bool {
        self.status_text
            .trim_start()
            .get(..2)
            .is_some_and(|p| p.eq_ignore_ascii_case("up"))
    }

    /// First published host port, if any ("8080->80/tcp" yields "8080").
    pub fn first_public_port(&self) -> Option<&str> {
        self.port_mappings
            .iter()
            .find_map(|p| p.split_once("->").map(|(host, _)| host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: &str, ports: &[&str]) -> ContainerSnapshot {
        ContainerSnapshot {
            id: "abc".into(),
            full_id: "abc".into(),
            display_name: "web".into(),
            image: "nginx".into(),
            status_text: status.into(),
            lifecycle_state: LifecycleState::Running,
            port_mappings: ports.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn from_docker_is_case_insensitive() {
        assert_eq!(LifecycleState::from_docker("RUNNING"), LifecycleState::Running);
        assert_eq!(LifecycleState::from_docker("created"), LifecycleState::Created);
        assert_eq!(LifecycleState::from_docker("dead"), LifecycleState::Other);
        assert_eq!(LifecycleState::from_docker(""), LifecycleState::Other);
    }

    #[test]
    fn is_up_checks_status_prefix() {
        assert!(snapshot("Up 3 hours", &[]).is_up());
        assert!(snapshot("up 1 second (Paused)", &[]).is_up());
        assert!(!snapshot("Exited (0) 2 days ago", &[]).is_up());
        assert!(!snapshot("", &[]).is_up());
    }

    #[test]
    fn first_public_port_skips_unpublished_entries() {
        let c = snapshot("Up", &["9000/tcp", "8080->80/tcp", "8443->443/tcp"]);
        assert_eq!(c.first_public_port(), Some("8080"));
        assert_eq!(snapshot("Up", &["9000/tcp"]).first_public_port(), None);
    }
}
