// Renderer: a pure function from `DashboardState` to a frame.
//
// Nothing here mutates state or blocks. The fatal screen replaces the whole
// frame; otherwise the active view is drawn and the remove confirmation, if
// pending, is overlaid on top of it.

mod confirm;
pub mod layout;
mod list;
mod logs;
pub mod text;
pub mod theme;

pub use theme::Theme;

use crate::app::{ActiveView, DashboardState};
use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &DashboardState, theme: &Theme) {
    let area = frame.area();
    if let Some(err) = &state.fatal_error {
        let lines = vec![
            Line::from(Span::styled(format!("Error: {}", err), theme.error)),
            Line::from(""),
            Line::from(Span::styled(
                "Is the container runtime reachable? q: Quit",
                theme.help,
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    match (state.active_view, &state.log_state) {
        (ActiveView::LogView, Some(log)) => logs::render(frame, area, log, theme),
        _ => {
            list::render(frame, area, state, theme);
            if state.confirm.is_some() {
                confirm::render(frame, area, theme);
            }
        }
    }
}
