mod event;
mod state;
mod update;

pub use event::{Command, Event};
pub use state::{ActiveView, Confirm, DashboardState, LogState, TransientStatus};
pub use update::Model;
