// The model: the one writer of DashboardState. Every transition is a pure
// function of (state, event) returning the commands to execute.

use super::event::{Command, Event};
use super::state::{ActiveView, Confirm, DashboardState, LogState, TransientStatus};
use crate::dispatcher::Action;
use crate::error::RuntimeError;
use crate::models::ContainerSnapshot;
use crate::sampler;
use crate::sorter::{self, SortOrder};
use crate::tailer;
use crate::ui::layout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Request generations for one response kind. A response is applied only
/// when it is newer than the last one applied.
#[derive(Debug, Default)]
struct Generation {
    issued: u64,
    applied: u64,
}

impl Generation {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn is_stale(&self, generation: u64) -> bool {
        generation <= self.applied
    }

    fn mark_applied(&mut self, generation: u64) {
        self.applied = generation;
    }
}

pub struct Model {
    state: DashboardState,
    status_ticks: u32,
    inventory: Generation,
    samples: Generation,
    /// Last log request issued; only the open log view's request is applied.
    log_requests: u64,
    /// Set after the first successful inventory; later failures are not fatal.
    loaded: bool,
}

impl Model {
    pub fn new(terminal_width: u16, terminal_height: u16, status_ticks: u32) -> Self {
        Self {
            state: DashboardState::new(terminal_width, terminal_height),
            status_ticks,
            inventory: Generation::default(),
            samples: Generation::default(),
            log_requests: 0,
            loaded: false,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Commands to run once at startup.
    pub fn init(&mut self) -> Vec<Command> {
        vec![self.fetch_inventory()]
    }

    pub fn update(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Resize { width, height } => {
                self.state.terminal_width = width;
                self.state.terminal_height = height;
                self.clamp_viewport();
                vec![]
            }
            Event::DataTick => self.on_data_tick(),
            Event::AnimationTick => {
                self.state.animation_tick = self.state.animation_tick.wrapping_add(1);
                vec![]
            }
            Event::Inventory { generation, result } => self.on_inventory(generation, result),
            Event::Samples {
                generation,
                samples,
            } => {
                if self.samples.is_stale(generation) {
                    tracing::debug!(generation, "discarding stale stats batch");
                    return vec![];
                }
                self.samples.mark_applied(generation);
                self.state.samples = samples;
                self.resort();
                vec![]
            }
            Event::Logs {
                generation,
                container_id,
                result,
            } => {
                self.on_logs(generation, &container_id, result);
                vec![]
            }
            Event::ActionCompleted {
                action,
                container_name,
                result,
            } => {
                let text = match result {
                    Ok(()) => format!("{} {}.", action.past(), container_name),
                    Err(e) => format!("Error: {} {}: {}", action, container_name, e),
                };
                self.set_status(text);
                vec![self.fetch_inventory()]
            }
            Event::ShellExited {
                container_name,
                result,
            } => {
                if let Err(e) = result {
                    self.set_status(format!("Error: shell in {}: {}", container_name, e));
                }
                vec![self.fetch_inventory()]
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        if self.state.confirm.is_some() {
            return self.on_confirm_key(key);
        }
        if is_ctrl_c(&key) {
            return vec![Command::Quit];
        }
        match self.state.active_view {
            ActiveView::LogView => self.on_log_key(key),
            ActiveView::List if self.state.fatal_error.is_some() => match key.code {
                KeyCode::Char('q') => vec![Command::Quit],
                _ => vec![],
            },
            ActiveView::List => self.on_list_key(key),
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('q') => vec![Command::Quit],
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                vec![]
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                vec![]
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('s') => {
                self.state.sort_order = self.state.sort_order.next(self.state.stats_visible);
                self.resort();
                self.reset_cursor();
                vec![]
            }
            KeyCode::Char('a') => {
                self.state.show_all = !self.state.show_all;
                self.resort();
                self.reset_cursor();
                vec![]
            }
            KeyCode::Char('t') => self.toggle_stats(),
            KeyCode::Char('S') => self.request_lifecycle(Action::Stop),
            KeyCode::Char('u') => self.request_lifecycle(Action::Start),
            KeyCode::Char('R') => self.request_lifecycle(Action::Restart),
            KeyCode::Char('x') => {
                if let Some(c) = self.state.selected() {
                    self.state.confirm = Some(Confirm {
                        target_id: c.full_id.clone(),
                        target_name: c.display_name.clone(),
                    });
                }
                vec![]
            }
            KeyCode::Char('l') => self.enter_log_view(),
            KeyCode::Enter | KeyCode::Char('i') => self.request_shell(),
            KeyCode::Char('o') => self.open_port(),
            _ => vec![],
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match self.state.confirm.take() {
                Some(target) => {
                    self.set_status(format!(
                        "{} {}...",
                        Action::Remove.progressive(),
                        target.target_name
                    ));
                    vec![Command::Lifecycle {
                        action: Action::Remove,
                        container_id: target.target_id,
                        container_name: target.target_name,
                    }]
                }
                None => vec![],
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.confirm = None;
                vec![]
            }
            _ => vec![],
        }
    }

    fn on_log_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let Some(log) = self.state.log_state.as_mut() else {
            self.state.active_view = ActiveView::List;
            return vec![];
        };
        match key.code {
            KeyCode::Up => log.scroll_offset = log.scroll_offset.saturating_sub(1),
            KeyCode::Down => log.scroll_offset = log.scroll_offset.saturating_add(1),
            _ if log.filter_editing => match key.code {
                KeyCode::Enter | KeyCode::Esc => log.filter_editing = false,
                KeyCode::Backspace => {
                    log.filter_text.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    log.filter_text.push(c)
                }
                _ => {}
            },
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.log_state = None;
                self.state.active_view = ActiveView::List;
            }
            KeyCode::Char('/') => log.filter_editing = true,
            KeyCode::Char('k') => log.scroll_offset = log.scroll_offset.saturating_sub(1),
            KeyCode::Char('j') => log.scroll_offset = log.scroll_offset.saturating_add(1),
            _ => {}
        }
        vec![]
    }

    fn on_data_tick(&mut self) -> Vec<Command> {
        if let Some(status) = self.state.transient_status.as_mut() {
            status.remaining_ticks = status.remaining_ticks.saturating_sub(1);
            if status.remaining_ticks == 0 {
                self.state.transient_status = None;
            }
        }
        self.refresh()
    }

    fn on_inventory(
        &mut self,
        generation: u64,
        result: Result<Vec<ContainerSnapshot>, RuntimeError>,
    ) -> Vec<Command> {
        if self.inventory.is_stale(generation) {
            tracing::debug!(generation, "discarding stale inventory");
            return vec![];
        }
        match result {
            Ok(containers) => {
                self.inventory.mark_applied(generation);
                self.loaded = true;
                self.state.fatal_error = None;
                self.state
                    .samples
                    .retain(|id, _| containers.iter().any(|c| c.full_id == *id && c.is_up()));
                self.state.all_containers = containers;
                self.resort();
            }
            Err(e) if !self.loaded => {
                tracing::error!(error = %e, "initial inventory fetch failed");
                self.state.fatal_error = Some(e);
            }
            Err(e) => {
                tracing::warn!(error = %e, "inventory poll failed, keeping last snapshot");
            }
        }
        vec![]
    }

    fn on_logs(
        &mut self,
        generation: u64,
        container_id: &str,
        result: Result<Vec<String>, RuntimeError>,
    ) {
        let height = self.state.terminal_height;
        let current = self
            .state
            .log_state
            .as_mut()
            .filter(|l| l.generation == generation && l.target_container_id == container_id);
        let Some(log) = current else {
            tracing::debug!(generation, container = %container_id, "discarding log snapshot");
            return;
        };
        log.raw_lines = match result {
            Ok(lines) => lines,
            Err(e) => vec![format!("error fetching logs: {}", e)],
        };
        log.loading = false;
        let visible = tailer::filter_lines(&log.raw_lines, &log.filter_text).len();
        log.scroll_offset =
            visible.saturating_sub(layout::log_body_height(height, log.shows_filter_bar()));
    }

    fn refresh(&mut self) -> Vec<Command> {
        let mut commands = vec![self.fetch_inventory()];
        if self.state.stats_visible {
            commands.push(self.sample_stats());
        }
        commands
    }

    fn fetch_inventory(&mut self) -> Command {
        Command::FetchInventory {
            generation: self.inventory.issue(),
        }
    }

    fn sample_stats(&mut self) -> Command {
        Command::SampleStats {
            generation: self.samples.issue(),
            targets: sampler::sample_targets(&self.state.visible_containers),
        }
    }

    fn toggle_stats(&mut self) -> Vec<Command> {
        self.state.stats_visible = !self.state.stats_visible;
        if self.state.stats_visible {
            return vec![self.sample_stats()];
        }
        if self.state.sort_order.needs_stats() {
            self.state.sort_order = SortOrder::State;
            self.resort();
        }
        vec![]
    }

    fn request_lifecycle(&mut self, action: Action) -> Vec<Command> {
        let Some(c) = self.state.selected() else {
            return vec![];
        };
        if !action.permitted(c.lifecycle_state) {
            return vec![];
        }
        let command = Command::Lifecycle {
            action,
            container_id: c.full_id.clone(),
            container_name: c.display_name.clone(),
        };
        let text = format!("{} {}...", action.progressive(), c.display_name);
        self.set_status(text);
        vec![command]
    }

    fn request_shell(&mut self) -> Vec<Command> {
        match self.state.selected() {
            Some(c) if c.lifecycle_state.is_running() => vec![Command::ExecShell {
                container_id: c.full_id.clone(),
                container_name: c.display_name.clone(),
            }],
            _ => vec![],
        }
    }

    fn open_port(&mut self) -> Vec<Command> {
        let Some(c) = self.state.selected() else {
            return vec![];
        };
        match c.first_public_port() {
            Some(port) => {
                let url = format!("http://localhost:{}", port);
                self.set_status(format!("Opening {}", url));
                vec![Command::OpenUrl { url }]
            }
            None => {
                self.set_status("No public port found".to_string());
                vec![]
            }
        }
    }

    fn enter_log_view(&mut self) -> Vec<Command> {
        let Some(c) = self.state.selected() else {
            return vec![];
        };
        let container_id = c.full_id.clone();
        let target_name = c.display_name.clone();
        self.log_requests += 1;
        let generation = self.log_requests;
        self.state.log_state = Some(LogState {
            target_container_id: container_id.clone(),
            target_name,
            loading: true,
            generation,
            ..LogState::default()
        });
        self.state.active_view = ActiveView::LogView;
        vec![Command::FetchLogs {
            generation,
            container_id,
        }]
    }

    fn set_status(&mut self, text: String) {
        self.state.transient_status = Some(TransientStatus {
            text,
            remaining_ticks: self.status_ticks,
        });
    }

    fn resort(&mut self) {
        self.state.visible_containers = sorter::sort_and_filter(
            &self.state.all_containers,
            self.state.sort_order,
            self.state.show_all,
            &self.state.samples,
        );
        let len = self.state.visible_containers.len();
        self.state.cursor = if len == 0 {
            0
        } else {
            self.state.cursor.min(len - 1)
        };
        self.clamp_viewport();
    }

    fn reset_cursor(&mut self) {
        self.state.cursor = 0;
        self.state.viewport_offset = 0;
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.state.visible_containers.len();
        if len == 0 {
            return;
        }
        self.state.cursor = self.state.cursor.saturating_add_signed(delta).min(len - 1);
        self.clamp_viewport();
    }

    /// Restore `viewport_offset <= cursor < viewport_offset + height`, never
    /// scrolling past the last full page.
    fn clamp_viewport(&mut self) {
        let height = self.state.visible_height();
        let len = self.state.visible_containers.len();
        let cursor = self.state.cursor;
        let mut offset = self.state.viewport_offset.min(len.saturating_sub(height));
        if cursor < offset {
            offset = cursor;
        } else if cursor >= offset + height {
            offset = cursor + 1 - height;
        }
        self.state.viewport_offset = offset;
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
