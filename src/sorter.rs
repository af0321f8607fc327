// Sorter/filter: the visible container list is always a pure function of these inputs.

use crate::models::{ContainerSnapshot, ResourceSample};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Id,
    Name,
    Image,
    #[default]
    State,
    Cpu,
    Mem,
}

impl SortOrder {
    const ALL: [SortOrder; 6] = [
        SortOrder::Id,
        SortOrder::Name,
        SortOrder::Image,
        SortOrder::State,
        SortOrder::Cpu,
        SortOrder::Mem,
    ];

    /// Next order in the cycle; CPU and Mem are only reachable while stats are visible.
    pub fn next(self, stats_visible: bool) -> Self {
        let modulus = if stats_visible { 6 } else { 4 };
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % modulus]
    }

    pub fn needs_stats(self) -> bool {
        matches!(self, SortOrder::Cpu | SortOrder::Mem)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Id => "ID",
            SortOrder::Name => "Name",
            SortOrder::Image => "Image",
            SortOrder::State => "State",
            SortOrder::Cpu => "CPU%",
            SortOrder::Mem => "Mem",
        };
        f.write_str(s)
    }
}

fn sample_of(samples: &HashMap<String, ResourceSample>, c: &ContainerSnapshot) -> ResourceSample {
    samples.get(&c.full_id).copied().unwrap_or_default()
}

fn compare(
    a: &ContainerSnapshot,
    b: &ContainerSnapshot,
    order: SortOrder,
    samples: &HashMap<String, ResourceSample>,
) -> Ordering {
    match order {
        SortOrder::Id => a.id.cmp(&b.id),
        SortOrder::Name => a.display_name.cmp(&b.display_name),
        SortOrder::Image => a.image.cmp(&b.image),
        SortOrder::State => b
            .lifecycle_state
            .is_running()
            .cmp(&a.lifecycle_state.is_running())
            .then_with(|| a.display_name.cmp(&b.display_name)),
        SortOrder::Cpu => sample_of(samples, b)
            .cpu_percent
            .total_cmp(&sample_of(samples, a).cpu_percent),
        SortOrder::Mem => sample_of(samples, b)
            .mem_usage_bytes
            .cmp(&sample_of(samples, a).mem_usage_bytes),
    }
}

/// Drop non-running containers unless `show_all`, then stable-sort by `order`.
pub fn sort_and_filter(
    containers: &[ContainerSnapshot],
    order: SortOrder,
    show_all: bool,
    samples: &HashMap<String, ResourceSample>,
) -> Vec<ContainerSnapshot> {
    let mut visible: Vec<ContainerSnapshot> = containers
        .iter()
        .filter(|c| show_all || c.lifecycle_state.is_running())
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, order, samples));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifecycleState;

    #[test]
    fn cycle_without_stats_skips_cpu_and_mem() {
        let mut order = SortOrder::State;
        let mut seen = vec![];
        for _ in 0..4 {
            order = order.next(false);
            seen.push(order);
        }
        assert_eq!(
            seen,
            vec![SortOrder::Id, SortOrder::Name, SortOrder::Image, SortOrder::State]
        );
    }

    #[test]
    fn cycle_with_stats_visits_all_six() {
        assert_eq!(SortOrder::State.next(true), SortOrder::Cpu);
        assert_eq!(SortOrder::Cpu.next(true), SortOrder::Mem);
        assert_eq!(SortOrder::Mem.next(true), SortOrder::Id);
    }

    fn container(name: &str, image: &str, state: LifecycleState) -> ContainerSnapshot {
        ContainerSnapshot {
            id: format!("{name}-id"),
            full_id: format!("{name}-full"),
            display_name: name.to_string(),
            image: image.to_string(),
            status_text: (if state.is_running() { "Up 1 hour" } else { "Exited (0)" }).to_string(),
            lifecycle_state: state,
            port_mappings: vec![],
        }
    }

    fn names(list: &[ContainerSnapshot]) -> Vec<&str> {
        list.iter().map(|c| c.display_name.as_str()).collect()
    }

    fn fleet() -> Vec<ContainerSnapshot> {
        vec![
            container("cache", "redis", LifecycleState::Running),
            container("web", "nginx", LifecycleState::Running),
            container("batch", "alpine", LifecycleState::Exited),
            container("api", "node", LifecycleState::Running),
        ]
    }

    fn usage(cpu: f64, mem: u64) -> ResourceSample {
        ResourceSample {
            cpu_percent: cpu,
            mem_usage_bytes: mem,
            mem_limit_bytes: 1 << 30,
            ..Default::default()
        }
    }

    #[test]
    fn id_and_image_sort_ascending() {
        let none = HashMap::new();
        let by_id = sort_and_filter(&fleet(), SortOrder::Id, true, &none);
        assert_eq!(names(&by_id), vec!["api", "batch", "cache", "web"]);

        let by_image = sort_and_filter(&fleet(), SortOrder::Image, true, &none);
        assert_eq!(names(&by_image), vec!["batch", "web", "api", "cache"]);
    }

    #[test]
    fn state_puts_running_first_then_by_name() {
        let sorted = sort_and_filter(&fleet(), SortOrder::State, true, &HashMap::new());
        assert_eq!(names(&sorted), vec!["api", "cache", "web", "batch"]);

        let running = sort_and_filter(&fleet(), SortOrder::State, false, &HashMap::new());
        assert_eq!(names(&running), vec!["api", "cache", "web"]);
    }

    #[test]
    fn mem_sorts_descending() {
        let mut samples = HashMap::new();
        samples.insert("cache-full".to_string(), usage(0.0, 300));
        samples.insert("web-full".to_string(), usage(0.0, 900));
        samples.insert("api-full".to_string(), usage(0.0, 100));
        let sorted = sort_and_filter(&fleet(), SortOrder::Mem, false, &samples);
        assert_eq!(names(&sorted), vec!["web", "cache", "api"]);
    }

    #[test]
    fn missing_sample_counts_as_zero() {
        let mut samples = HashMap::new();
        samples.insert("api-full".to_string(), usage(12.5, 64));
        let by_cpu = sort_and_filter(&fleet(), SortOrder::Cpu, false, &samples);
        assert_eq!(names(&by_cpu), vec!["api", "cache", "web"]);

        let by_mem = sort_and_filter(&fleet(), SortOrder::Mem, false, &samples);
        assert_eq!(names(&by_mem), vec!["api", "cache", "web"]);
    }

    #[test]
    fn ties_keep_inventory_order() {
        let fleet = vec![
            container("zeta", "nginx", LifecycleState::Running),
            container("alpha", "nginx", LifecycleState::Running),
            container("mid", "nginx", LifecycleState::Running),
        ];
        let sorted = sort_and_filter(&fleet, SortOrder::Image, false, &HashMap::new());
        assert_eq!(names(&sorted), vec!["zeta", "alpha", "mid"]);
        let sorted = sort_and_filter(&fleet, SortOrder::Cpu, false, &HashMap::new());
        assert_eq!(names(&sorted), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn sorting_its_own_output_changes_nothing() {
        let mut samples = HashMap::new();
        samples.insert("web-full".to_string(), usage(40.0, 900));
        samples.insert("cache-full".to_string(), usage(40.0, 300));
        let orders = [
            SortOrder::Id,
            SortOrder::Name,
            SortOrder::Image,
            SortOrder::State,
            SortOrder::Cpu,
            SortOrder::Mem,
        ];
        for order in orders {
            for show_all in [false, true] {
                let once = sort_and_filter(&fleet(), order, show_all, &samples);
                let twice = sort_and_filter(&once, order, show_all, &samples);
                assert_eq!(once, twice, "{order} show_all={show_all}");
            }
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!(SortOrder::Cpu.to_string(), "CPU%");
        assert_eq!(SortOrder::Id.to_string(), "ID");
    }
}
