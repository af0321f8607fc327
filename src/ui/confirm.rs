// Remove confirmation, drawn centered over the unchanged list frame.

use super::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const PROMPT: &str = "⚠  Remove this container?";
const CHOICES: &str = "[y] Yes    [n] No / Esc";
const POPUP_WIDTH: u16 = 36;
const POPUP_HEIGHT: u16 = 7;

/// Centered rectangle of at most `width` x `height`, shrunk to fit `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

pub(super) fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.confirm_border);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(PROMPT, theme.confirm_text)),
        Line::from(""),
        Line::from(Span::raw(CHOICES)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
