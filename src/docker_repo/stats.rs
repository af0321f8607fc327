// Convert a raw Docker stats API response into RawStats.

use crate::models::{CpuCounters, InterfaceCounters, RawStats};
use bollard::models::{ContainerCpuStats, ContainerStatsResponse};

fn counters(stats: &ContainerCpuStats) -> CpuCounters {
    CpuCounters {
        cpu_usage: stats
            .cpu_usage
            .as_ref()
            .and_then(|u| u.total_usage)
            .unwrap_or(0),
        system_cpu_usage: stats.system_cpu_usage.unwrap_or(0),
        online_cpus: stats.online_cpus.map(|n| n as u32),
    }
}

/// Extract the counter pair, memory and per-interface network totals.
/// Returns None when the current CPU reading is missing altogether.
pub(crate) fn raw_stats(s: &ContainerStatsResponse) -> Option<RawStats> {
    let current = counters(s.cpu_stats.as_ref()?);
    // A first reading comes without precpu; zeroed counters make the deltas fail the > 0 check.
    let previous = s.precpu_stats.as_ref().map(counters).unwrap_or_default();

    let mem_usage = s.memory_stats.as_ref().and_then(|m| m.usage).unwrap_or(0);
    let mem_limit = s.memory_stats.as_ref().and_then(|m| m.limit).unwrap_or(0);

    let mut interfaces: Vec<(&String, InterfaceCounters)> = s
        .networks
        .as_ref()
        .map(|n| {
            n.iter()
                .map(|(name, v)| {
                    (
                        name,
                        InterfaceCounters {
                            rx_bytes: v.rx_bytes.unwrap_or(0),
                            tx_bytes: v.tx_bytes.unwrap_or(0),
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    interfaces.sort_by(|a, b| a.0.cmp(b.0));

    Some(RawStats {
        current,
        previous,
        mem_usage,
        mem_limit,
        interfaces: interfaces.into_iter().map(|(_, c)| c).collect(),
    })
}
