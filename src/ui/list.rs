// Container list view: header, column titles, viewport of rows, footer.

use super::layout::{self, CELL_PADDING, ColumnWidths};
use super::text;
use super::theme::Theme;
use crate::app::DashboardState;
use crate::models::{ContainerSnapshot, ResourceSample};
use crate::version;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "↑/k↓/j: Nav • r: Refresh • s: Sort • a: All/Running • t: Stats • S: Stop • u: Start • R: Restart • x: Remove • l: Logs • i: Shell • o: Open • q: Quit";
const EMPTY: &str = "No containers found.";

pub(super) fn render(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let areas = layout::list_areas(area);
    let widths = layout::column_widths(state.terminal_width, state.stats_visible);

    render_header(frame, areas.header, state, theme);
    frame.render_widget(
        Paragraph::new(column_titles(&widths, state.stats_visible, theme)),
        areas.table_header,
    );
    render_body(frame, areas.body, state, &widths, theme);
    render_footer(frame, areas.footer, state, theme);
}

fn render_header(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show = if state.show_all { "All" } else { "Running" };
    let stats = if state.stats_visible { "ON" } else { "OFF" };
    let left = vec![Line::from(Span::styled(version::title(), theme.title))];
    let right = vec![
        Line::from(Span::styled(
            format!(
                "Running: {} | Total: {}",
                state.running_count(),
                state.all_containers.len()
            ),
            theme.summary,
        )),
        Line::from(Span::styled(
            format!(
                "Sort: {} | Show: {} | Stats: {}",
                state.sort_order, show, stats
            ),
            theme.meta,
        )),
    ];
    let right_width = right.iter().map(Line::width).max().unwrap_or(0) as u16;
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), right_area);
}

fn column_titles(widths: &ColumnWidths, stats_visible: bool, theme: &Theme) -> Line<'static> {
    let mut titles = vec![
        ("ID", widths.id),
        ("Name", widths.name),
        ("Image", widths.image),
        ("Status", widths.status),
    ];
    if stats_visible {
        titles.extend([("CPU%", widths.cpu), ("MEM", widths.mem), ("NET I/O", widths.net)]);
    } else {
        titles.push(("Ports", widths.ports));
    }
    let mut spans = vec![Span::raw(" ".repeat(usize::from(layout::CURSOR_WIDTH)))];
    for (title, width) in titles {
        spans.extend(cell(vec![Span::raw(title)], width, theme.table_header));
    }
    Line::from(spans)
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    widths: &ColumnWidths,
    theme: &Theme,
) {
    let rows = &state.visible_containers;
    if rows.is_empty() {
        frame.render_widget(Paragraph::new(Span::styled(EMPTY, theme.help)), area);
        return;
    }
    let height = usize::from(area.height);
    let start = state.viewport_offset.min(rows.len().saturating_sub(1));
    let end = (start + height).min(rows.len());
    let lines: Vec<Line> = rows[start..end]
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let index = start + i;
            row(
                c,
                state.samples.get(&c.full_id),
                index,
                index == state.cursor,
                state,
                widths,
                theme,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn row<'a>(
    c: &'a ContainerSnapshot,
    sample: Option<&ResourceSample>,
    index: usize,
    selected: bool,
    state: &DashboardState,
    widths: &ColumnWidths,
    theme: &Theme,
) -> Line<'a> {
    let mut base = if selected {
        theme.selected
    } else if index % 2 == 0 {
        theme.zebra
    } else {
        theme.row
    };
    if state.stats_visible
        && let Some(bg) = sample.and_then(|s| theme.mem_alert(s.mem_percent()))
    {
        base = base.bg(bg);
    }
    let tick = state.animation_tick;
    let fit = |s: &str, width: u16| {
        let w = usize::from(width).saturating_sub(CELL_PADDING);
        if selected {
            text::marquee(s, w, tick)
        } else {
            text::truncate(s, w)
        }
    };
    let accent = |style: Style| if selected { base } else { base.patch(style) };

    let status_style = if c.lifecycle_state.is_running() {
        theme.status_up
    } else {
        theme.status_down
    };
    let status = text::truncate(
        &text::minify_status(&c.status_text),
        usize::from(widths.status).saturating_sub(CELL_PADDING),
    );

    let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, base)];
    spans.extend(cell(
        vec![Span::styled(c.id.clone(), accent(theme.id))],
        widths.id,
        base,
    ));
    spans.extend(cell(
        vec![Span::styled(fit(&c.display_name, widths.name), base)],
        widths.name,
        base,
    ));
    spans.extend(cell(
        vec![Span::styled(fit(&c.image, widths.image), accent(theme.image))],
        widths.image,
        base,
    ));
    spans.extend(cell(
        vec![Span::styled(status, base.patch(status_style))],
        widths.status,
        base,
    ));

    if state.stats_visible {
        let (cpu, mem, net) = match sample {
            Some(s) => stats_cells(s, base, theme),
            None => (dash(base), dash(base), dash(base)),
        };
        spans.extend(cell(cpu, widths.cpu, base));
        spans.extend(cell(mem, widths.mem, base));
        spans.extend(cell(net, widths.net, base));
    } else {
        let width = usize::from(widths.ports).saturating_sub(CELL_PADDING);
        let (ports, ellipsis) = if selected {
            (text::rotate_ports(&c.port_mappings, width, tick), false)
        } else {
            text::truncate_ports(&c.port_mappings, width)
        };
        let mut shown = port_spans(&ports, base, theme);
        if ellipsis {
            shown.push(Span::styled("...", base));
        }
        spans.extend(cell(shown, widths.ports, base));
    }
    Line::from(spans)
}

fn dash(base: Style) -> Vec<Span<'static>> {
    vec![Span::styled("-", base)]
}

fn stats_cells(
    s: &ResourceSample,
    base: Style,
    theme: &Theme,
) -> (Vec<Span<'static>>, Vec<Span<'static>>, Vec<Span<'static>>) {
    let mem_pct = s.mem_percent();
    let cpu = vec![
        Span::styled(text::render_bar(s.cpu_percent), base.patch(theme.bar(s.cpu_percent))),
        Span::styled(format!(" {:.1}%", s.cpu_percent), base),
    ];
    let mem = vec![
        Span::styled(text::render_bar(mem_pct), base.patch(theme.bar(mem_pct))),
        Span::styled(
            format!(
                " {}/{}",
                text::format_bytes_short(s.mem_usage_bytes),
                text::format_bytes_short(s.mem_limit_bytes)
            ),
            base,
        ),
    ];
    let net = vec![Span::styled(
        format!(
            "{}↑{}↓",
            text::format_bytes_short(s.net_tx_bytes),
            text::format_bytes_short(s.net_rx_bytes)
        ),
        base,
    )];
    (cpu, mem, net)
}

/// "8080->80/tcp" with the host side and container side coloured apart.
fn port_spans<'a>(ports: &[&'a str], base: Style, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, port) in ports.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(", ", base));
        }
        match port.split_once("->") {
            Some((host, container)) => {
                spans.push(Span::styled(host, base.patch(theme.port_host)));
                spans.push(Span::styled("->", base));
                spans.push(Span::styled(container, base.patch(theme.port_container)));
            }
            None => spans.push(Span::styled(*port, base)),
        }
    }
    spans
}

/// Pad `content` to exactly `width` cells with one leading space, cutting
/// overflow.
fn cell(content: Vec<Span<'_>>, width: u16, base: Style) -> Vec<Span<'_>> {
    let width = usize::from(width);
    let mut out = vec![Span::styled(" ", base)];
    let mut used = 1;
    for span in content {
        let len = span.content.chars().count();
        if used + len > width {
            let room = width.saturating_sub(used);
            let cut: String = span.content.chars().take(room).collect();
            used += cut.chars().count();
            out.push(Span::styled(cut, span.style));
            break;
        }
        used += len;
        out.push(span);
    }
    if used < width {
        out.push(Span::styled(" ".repeat(width - used), base));
    }
    out
}

fn render_footer(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let line = match &state.transient_status {
        Some(status) => Line::from(Span::styled(status.text.clone(), theme.status_message)),
        None => Line::from(Span::styled(HELP, theme.help)),
    };
    frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
}
