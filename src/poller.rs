// Inventory poller: list every container and normalize it for display.

use crate::docker_repo::ContainerRuntime;
use crate::error::RuntimeError;
use crate::models::{ContainerSnapshot, RawContainer, RawPort};
use std::collections::HashSet;

/// Display id length.
pub const SHORT_ID_LEN: usize = 12;

pub fn short_id(full_id: &str) -> String {
    full_id.chars().take(SHORT_ID_LEN).collect()
}

/// Join names with ", ", each without its leading '/'.
pub fn display_name(names: &[String]) -> String {
    names
        .iter()
        .map(|n| n.trim_start_matches('/'))
        .collect::<Vec<_>>()
        .join(", ")
}

/// "host->container/proto", or "container/proto" when nothing is published.
fn format_port(p: &RawPort) -> String {
    match p.public_port {
        Some(public) if public != 0 => {
            format!("{}->{}/{}", public, p.private_port, p.protocol)
        }
        _ => format!("{}/{}", p.private_port, p.protocol),
    }
}

/// De-duplicate by ports and protocol, ignoring the bind address, keeping first-seen order.
pub fn format_ports(ports: &[RawPort]) -> Vec<String> {
    let mut seen = HashSet::new();
    ports
        .iter()
        .map(format_port)
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

pub fn normalize(raw: RawContainer) -> ContainerSnapshot {
    ContainerSnapshot {
        id: short_id(&raw.full_id),
        display_name: display_name(&raw.names),
        port_mappings: format_ports(&raw.ports),
        full_id: raw.full_id,
        image: raw.image,
        status_text: raw.status_text,
        lifecycle_state: raw.lifecycle_state,
    }
}

/// One poll. Failures are returned as-is; the next scheduled tick is the retry.
pub async fn fetch_inventory(
    runtime: &dyn ContainerRuntime,
) -> Result<Vec<ContainerSnapshot>, RuntimeError> {
    let raw = runtime.list_containers().await?;
    Ok(raw.into_iter().map(normalize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifecycleState;

    fn port(ip: &str, private_port: u16, public_port: Option<u16>, protocol: &str) -> RawPort {
        RawPort {
            ip: Some(ip.to_string()),
            private_port,
            public_port,
            protocol: protocol.to_string(),
        }
    }

    #[test]
    fn short_id_truncates_to_twelve() {
        assert_eq!(short_id("0123456789abcdef0123"), "0123456789ab");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn display_name_strips_leading_slash() {
        assert_eq!(display_name(&["/web".to_string()]), "web");
        assert_eq!(
            display_name(&["/web".to_string(), "/alias".to_string()]),
            "web, alias"
        );
        assert_eq!(display_name(&[]), "");
    }

    #[test]
    fn ipv4_and_ipv6_bindings_collapse() {
        let ports = vec![
            port("0.0.0.0", 80, Some(8080), "tcp"),
            port("::", 80, Some(8080), "tcp"),
            port("", 443, None, "tcp"),
            port("0.0.0.0", 53, Some(5353), "udp"),
        ];
        assert_eq!(
            format_ports(&ports),
            vec!["8080->80/tcp", "443/tcp", "5353->53/udp"]
        );
    }

    #[test]
    fn same_port_different_protocol_is_kept() {
        let ports = vec![port("", 53, None, "tcp"), port("", 53, None, "udp")];
        assert_eq!(format_ports(&ports), vec!["53/tcp", "53/udp"]);
    }

    #[test]
    fn normalize_keeps_full_id_for_commands() {
        let raw = RawContainer {
            full_id: "f".repeat(64),
            names: vec!["/db".into()],
            image: "postgres:16".into(),
            status_text: "Up 2 minutes".into(),
            lifecycle_state: LifecycleState::Running,
            ports: vec![port("0.0.0.0", 5432, Some(5432), "tcp")],
        };
        let c = normalize(raw);
        assert_eq!(c.id.len(), 12);
        assert_eq!(c.full_id.len(), 64);
        assert_eq!(c.display_name, "db");
        assert_eq!(c.port_mappings, vec!["5432->5432/tcp"]);
        assert_eq!(c.lifecycle_state, LifecycleState::Running);
    }
}
