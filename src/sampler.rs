// Resource sampler: derive CPU%, memory and network totals from one-shot stats.

use crate::docker_repo::ContainerRuntime;
use crate::models::{ContainerSnapshot, RawStats, ResourceSample};
use futures_util::future::join_all;
use std::collections::HashMap;

/// (cpu delta / system delta) * online CPUs * 100, only when both deltas are strictly positive.
pub fn cpu_percent(raw: &RawStats) -> f64 {
    let cpu_delta = raw.current.cpu_usage as i128 - raw.previous.cpu_usage as i128;
    let system_delta =
        raw.current.system_cpu_usage as i128 - raw.previous.system_cpu_usage as i128;
    let online = match raw.current.online_cpus {
        Some(n) if n > 0 => n as f64,
        _ => 1.0,
    };
    if cpu_delta > 0 && system_delta > 0 {
        (cpu_delta as f64 / system_delta as f64) * online * 100.0
    } else {
        0.0
    }
}

pub fn compute_sample(raw: &RawStats) -> ResourceSample {
    let (net_rx_bytes, net_tx_bytes) = raw
        .interfaces
        .iter()
        .fold((0u64, 0u64), |(rx, tx), i| {
            (rx.saturating_add(i.rx_bytes), tx.saturating_add(i.tx_bytes))
        });
    ResourceSample {
        cpu_percent: cpu_percent(raw),
        mem_usage_bytes: raw.mem_usage,
        mem_limit_bytes: raw.mem_limit,
        net_rx_bytes,
        net_tx_bytes,
    }
}

/// Full ids of the containers worth sampling: only those whose status reads "Up ...".
pub fn sample_targets(containers: &[ContainerSnapshot]) -> Vec<String> {
    containers
        .iter()
        .filter(|c| c.is_up())
        .map(|c| c.full_id.clone())
        .collect()
}

/// Sample every target concurrently. A failed container is left out of the map;
/// the batch itself never fails.
pub async fn sample_batch(
    runtime: &dyn ContainerRuntime,
    targets: &[String],
) -> HashMap<String, ResourceSample> {
    let results = join_all(targets.iter().map(|id| async move {
        match runtime.sample_stats(id).await {
            Ok(raw) => Some((id.clone(), compute_sample(&raw))),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    container = %id,
                    operation = "sample_stats",
                    "stats sample dropped"
                );
                None
            }
        }
    }))
    .await;
    results.into_iter().flatten().collect()
}
