// Dashboard state: the single value the model owns and the renderer reads.

use crate::error::RuntimeError;
use crate::models::{ContainerSnapshot, ResourceSample};
use crate::sorter::SortOrder;
use crate::ui::layout;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    LogView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientStatus {
    pub text: String,
    /// Data ticks left before the message disappears.
    pub remaining_ticks: u32,
}

/// Pending destructive action, remembered by container id rather than row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub target_id: String,
    pub target_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogState {
    /// Full snapshot; filtering never mutates it.
    pub raw_lines: Vec<String>,
    pub filter_text: String,
    pub filter_editing: bool,
    /// Floor 0 only; the renderer clamps against the filtered count.
    pub scroll_offset: usize,
    pub target_container_id: String,
    pub target_name: String,
    /// True until the snapshot for `generation` arrives.
    pub loading: bool,
    pub generation: u64,
}

impl LogState {
    pub fn shows_filter_bar(&self) -> bool {
        self.filter_editing || !self.filter_text.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub all_containers: Vec<ContainerSnapshot>,
    /// Always `sort_and_filter(all_containers, sort_order, show_all, samples)`.
    pub visible_containers: Vec<ContainerSnapshot>,
    pub cursor: usize,
    pub viewport_offset: usize,
    pub sort_order: SortOrder,
    pub show_all: bool,
    pub stats_visible: bool,
    /// Keyed by full container id; only containers that were up when sampled.
    pub samples: HashMap<String, ResourceSample>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub animation_tick: u64,
    pub transient_status: Option<TransientStatus>,
    pub fatal_error: Option<RuntimeError>,
    pub confirm: Option<Confirm>,
    pub active_view: ActiveView,
    pub log_state: Option<LogState>,
}

impl DashboardState {
    pub fn new(terminal_width: u16, terminal_height: u16) -> Self {
        Self {
            all_containers: Vec::new(),
            visible_containers: Vec::new(),
            cursor: 0,
            viewport_offset: 0,
            sort_order: SortOrder::State,
            show_all: false,
            stats_visible: false,
            samples: HashMap::new(),
            terminal_width,
            terminal_height,
            animation_tick: 0,
            transient_status: None,
            fatal_error: None,
            confirm: None,
            active_view: ActiveView::List,
            log_state: None,
        }
    }

    pub fn selected(&self) -> Option<&ContainerSnapshot> {
        self.visible_containers.get(self.cursor)
    }

    /// Rows available to the container table at the current terminal height.
    pub fn visible_height(&self) -> usize {
        layout::list_body_height(self.terminal_height)
    }

    pub fn running_count(&self) -> usize {
        self.all_containers
            .iter()
            .filter(|c| c.lifecycle_state.is_running())
            .count()
    }
}
