// Domain models

mod container;
mod sample;

pub use container::{ContainerSnapshot, LifecycleState, RawContainer, RawPort};
pub use sample::{CpuCounters, InterfaceCounters, RawStats, ResourceSample};
