// Resource counters and the derived per-container sample

/// CPU counters from one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuCounters {
    pub cpu_usage: u64,
    pub system_cpu_usage: u64,
    /// Omitted by some runtimes; treated as 1.
    pub online_cpus: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceCounters {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Raw one-shot stats: the current reading plus the previous one the runtime kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawStats {
    pub current: CpuCounters,
    pub previous: CpuCounters,
    pub mem_usage: u64,
    pub mem_limit: u64,
    pub interfaces: Vec<InterfaceCounters>,
}

/// Derived metrics for one running container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceSample {
    pub cpu_percent: f64,
    pub mem_usage_bytes: u64,
    pub mem_limit_bytes: u64,
    pub net_rx_bytes: u64,
    pub net_tx_bytes: u64,
}

impl ResourceSample {
    /// Memory usage as a share of the limit; 0 when no limit is reported.
    pub fn mem_percent(&self) -> f64 {
        if self.mem_limit_bytes == 0 {
            return 0.0;
        }
        self.mem_usage_bytes as f64 / self.mem_limit_bytes as f64 * 100.0
    }
}
