// Screen geometry shared by the model (viewport height) and the renderer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header block: two text lines plus the bottom border.
pub const HEADER_HEIGHT: u16 = 3;
pub const TABLE_HEADER_HEIGHT: u16 = 1;
/// Blank spacer plus the help/status line.
pub const FOOTER_HEIGHT: u16 = 2;

/// Title and footer lines, each with a spacer row.
const LOG_CHROME_HEIGHT: u16 = 4;

/// Left padding inside every table cell.
pub const CELL_PADDING: usize = 2;
pub const CURSOR_WIDTH: u16 = 2;
pub const BAR_WIDTH: usize = 8;

/// Rows available to container rows in the list view.
pub fn list_body_height(terminal_height: u16) -> usize {
    let chrome = HEADER_HEIGHT + TABLE_HEADER_HEIGHT + FOOTER_HEIGHT;
    usize::from(terminal_height.saturating_sub(chrome).max(1))
}

/// Rows available to log lines; the filter bar takes one more when shown.
pub fn log_body_height(terminal_height: u16, filter_bar: bool) -> usize {
    let chrome = LOG_CHROME_HEIGHT + u16::from(filter_bar);
    usize::from(terminal_height.saturating_sub(chrome).max(1))
}

pub struct ListAreas {
    pub header: Rect,
    pub table_header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn list_areas(area: Rect) -> ListAreas {
    let [header, table_header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TABLE_HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    ListAreas {
        header,
        table_header,
        body,
        footer,
    }
}

pub struct LogAreas {
    pub title: Rect,
    pub body: Rect,
    pub filter: Option<Rect>,
    pub footer: Rect,
}

pub fn log_areas(area: Rect, filter_bar: bool) -> LogAreas {
    let [title, _, rest, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    if filter_bar {
        let [body, filter] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(rest);
        LogAreas {
            title,
            body,
            filter: Some(filter),
            footer,
        }
    } else {
        LogAreas {
            title,
            body: rest,
            filter: None,
            footer,
        }
    }
}

/// Table column widths in cells. `ports` is 0 while stats are shown and the
/// stats columns are 0 while they are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: u16,
    pub name: u16,
    pub image: u16,
    pub status: u16,
    pub ports: u16,
    pub cpu: u16,
    pub mem: u16,
    pub net: u16,
}

const ID_WIDTH: u16 = 15;
const MIN_NAME_WIDTH: u16 = 15;
const MIN_IMAGE_WIDTH: u16 = 15;
const MIN_PORTS_WIDTH: u16 = 20;

pub fn column_widths(terminal_width: u16, stats_visible: bool) -> ColumnWidths {
    let available = terminal_width.saturating_sub(10).max(40);
    if stats_visible {
        let (status, cpu, mem, net) = (12, 20, 24, 20);
        let rest = available
            .saturating_sub(ID_WIDTH + status + cpu + mem + net)
            .max(20);
        let name = rest / 2;
        ColumnWidths {
            id: ID_WIDTH,
            name,
            image: rest - name,
            status,
            ports: 0,
            cpu,
            mem,
            net,
        }
    } else {
        let status = 20;
        let rest = available.saturating_sub(ID_WIDTH + status);
        let name = rest * 35 / 100;
        let image = rest * 35 / 100;
        let ports = rest - name - image;
        ColumnWidths {
            id: ID_WIDTH,
            name: name.max(MIN_NAME_WIDTH),
            image: image.max(MIN_IMAGE_WIDTH),
            status,
            ports: ports.max(MIN_PORTS_WIDTH),
            cpu: 0,
            mem: 0,
            net: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_body_height_never_below_one() {
        assert_eq!(list_body_height(24), 18);
        assert_eq!(list_body_height(6), 1);
        assert_eq!(list_body_height(0), 1);
    }

    #[test]
    fn log_body_height_accounts_for_filter_bar() {
        assert_eq!(log_body_height(24, false), 20);
        assert_eq!(log_body_height(24, true), 19);
        assert_eq!(log_body_height(3, true), 1);
    }

    #[test]
    fn stats_layout_hides_ports_and_splits_rest() {
        let w = column_widths(200, true);
        assert_eq!(w.ports, 0);
        // 190 - 91 = 99
        assert_eq!(w.name, 49);
        assert_eq!(w.image, 50);
        assert_eq!((w.cpu, w.mem, w.net), (20, 24, 20));
    }

    #[test]
    fn narrow_terminal_enforces_minimums() {
        let w = column_widths(30, false);
        assert_eq!(w.name, MIN_NAME_WIDTH);
        assert_eq!(w.image, MIN_IMAGE_WIDTH);
        assert_eq!(w.ports, MIN_PORTS_WIDTH);

        let s = column_widths(30, true);
        assert_eq!(s.name + s.image, 20);
    }

    #[test]
    fn standard_layout_proportions() {
        let w = column_widths(110, false);
        // available 100, rest 65
        assert_eq!(w.name, 22);
        assert_eq!(w.image, 22);
        assert_eq!(w.ports, 21);
    }

    #[test]
    fn list_areas_match_body_height() {
        let areas = list_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(usize::from(areas.body.height), list_body_height(24));
        assert_eq!(areas.footer.y, 22);
    }

    #[test]
    fn log_areas_match_body_height() {
        let a = log_areas(Rect::new(0, 0, 80, 24), true);
        assert_eq!(usize::from(a.body.height), log_body_height(24, true));
        assert!(a.filter.is_some());
        let b = log_areas(Rect::new(0, 0, 80, 24), false);
        assert_eq!(usize::from(b.body.height), log_body_height(24, false));
    }
}
