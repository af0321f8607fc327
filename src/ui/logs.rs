// Log view: title, filtered and scrolled window, optional filter bar, footer.

use super::layout;
use super::theme::Theme;
use crate::app::LogState;
use crate::tailer;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const FOOTER: &str = "Esc/q: Back • /: Filter • ↑/k↓/j: Scroll";

/// Scroll offset clamped to `[0, max(0, line_count - body_height)]`.
pub fn clamp_scroll(offset: usize, line_count: usize, body_height: usize) -> usize {
    offset.min(line_count.saturating_sub(body_height))
}

pub(super) fn render(frame: &mut Frame, area: Rect, log: &LogState, theme: &Theme) {
    let areas = layout::log_areas(area, log.shows_filter_bar());

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Logs: {}", log.target_name),
            theme.log_title,
        )),
        areas.title,
    );

    let height = usize::from(areas.body.height);
    let body: Vec<Line> = if log.loading {
        vec![Line::from(Span::styled("Loading logs...", theme.help))]
    } else {
        let lines = tailer::filter_lines(&log.raw_lines, &log.filter_text);
        let offset = clamp_scroll(log.scroll_offset, lines.len(), height);
        lines
            .into_iter()
            .skip(offset)
            .take(height)
            .map(Line::raw)
            .collect()
    };
    frame.render_widget(Paragraph::new(body), areas.body);

    if let Some(filter_area) = areas.filter {
        let text = if log.filter_editing {
            format!("Filter: {}█", log.filter_text)
        } else {
            format!("Filter: {}  (/ to edit)", log.filter_text)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, theme.filter)),
            filter_area,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER, theme.help)),
        areas.footer,
    );
}
