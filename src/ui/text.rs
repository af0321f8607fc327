// Plain-text cell formatting. Widths are counted in chars.

use super::layout::BAR_WIDTH;

const MARQUEE_GAP: usize = 5;
/// Animation ticks per marquee step.
const MARQUEE_TICKS_PER_STEP: u64 = 2;
/// Animation ticks before the port list rotates by one entry.
const PORT_TICKS_PER_STEP: u64 = 10;
const ELLIPSIS: &str = "...";
const PORT_SEPARATOR: &str = ", ";

/// Rotating window over `text` followed by a gap; unchanged when it fits.
pub fn marquee(text: &str, width: usize, tick: u64) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    let mut full = chars;
    full.extend(std::iter::repeat_n(' ', MARQUEE_GAP));
    let offset = ((tick / MARQUEE_TICKS_PER_STEP) % full.len() as u64) as usize;
    full[offset..]
        .iter()
        .chain(full[..offset].iter())
        .take(width)
        .collect()
}

pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max > ELLIPSIS.len() {
        let mut s: String = text.chars().take(max - ELLIPSIS.len()).collect();
        s.push_str(ELLIPSIS);
        s
    } else {
        text.chars().take(max).collect()
    }
}

fn joined_len(ports: &[&str]) -> usize {
    let chars: usize = ports.iter().map(|p| p.chars().count()).sum();
    chars + PORT_SEPARATOR.len() * ports.len().saturating_sub(1)
}

/// Whole entries starting at an offset that advances with `tick`. The first
/// entry is always kept even when it alone overflows.
pub fn rotate_ports(ports: &[String], width: usize, tick: u64) -> Vec<&str> {
    if ports.is_empty() {
        return vec![];
    }
    let offset = ((tick / PORT_TICKS_PER_STEP) % ports.len() as u64) as usize;
    let mut shown: Vec<&str> = Vec::new();
    for p in ports[offset..].iter().chain(ports[..offset].iter()) {
        let mut candidate = shown.clone();
        candidate.push(p);
        if !shown.is_empty() && joined_len(&candidate) > width {
            break;
        }
        shown = candidate;
    }
    shown
}

/// Leading entries that fit alongside a trailing ellipsis. The flag says
/// whether an ellipsis follows.
pub fn truncate_ports(ports: &[String], width: usize) -> (Vec<&str>, bool) {
    let all: Vec<&str> = ports.iter().map(String::as_str).collect();
    if joined_len(&all) <= width {
        return (all, false);
    }
    let mut shown: Vec<&str> = Vec::new();
    for p in all {
        let sep = if shown.is_empty() { 0 } else { PORT_SEPARATOR.len() };
        if joined_len(&shown) + sep + p.chars().count() + ELLIPSIS.len() > width {
            return (shown, true);
        }
        shown.push(p);
    }
    (shown, false)
}

/// 1024-based compact size: "512B", "1.4M", "14M".
pub fn format_bytes_short(bytes: u64) -> String {
    const UNIT: f64 = 1024.0;
    const SUFFIXES: [char; 5] = ['K', 'M', 'G', 'T', 'P'];
    let b = bytes as f64;
    if b < UNIT {
        return format!("{}B", bytes);
    }
    let mut value = b / UNIT;
    let mut exp = 0;
    while value >= UNIT && exp < SUFFIXES.len() - 1 {
        value /= UNIT;
        exp += 1;
    }
    if value >= 10.0 {
        format!("{:.0}{}", value, SUFFIXES[exp])
    } else {
        format!("{:.1}{}", value, SUFFIXES[exp])
    }
}

const STATUS_ABBREVIATIONS: &[(&str, &str)] = &[
    (" seconds", "s"),
    (" second", "s"),
    (" minutes", "m"),
    (" minute", "m"),
    (" hours", "h"),
    (" hour", "h"),
    (" days", "d"),
    (" day", "d"),
    (" weeks", "w"),
    (" week", "w"),
    (" months", "mo"),
    (" month", "mo"),
    (" ago", ""),
    ("Exited", "Exit"),
    ("Created", "New"),
    ("Restarting", "Restart"),
];

/// "Up 3 hours" -> "Up 3h", "Exited (0) 2 days ago" -> "Exit (0) 2d".
pub fn minify_status(status: &str) -> String {
    STATUS_ABBREVIATIONS
        .iter()
        .fold(status.to_string(), |s, (from, to)| s.replace(from, to))
}

/// "[■■■□□□□□]" with the filled share of `percent`, clamped to 0..=100.
pub fn render_bar(percent: f64) -> String {
    let pct = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    let filled = ((pct / 100.0) * BAR_WIDTH as f64) as usize;
    format!(
        "[{}{}]",
        "■".repeat(filled),
        "□".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn marquee_leaves_short_text_alone() {
        assert_eq!(marquee("web", 10, 99), "web");
    }

    #[test]
    fn marquee_advances_every_two_ticks() {
        assert_eq!(marquee("abcdefgh", 4, 0), "abcd");
        assert_eq!(marquee("abcdefgh", 4, 1), "abcd");
        assert_eq!(marquee("abcdefgh", 4, 2), "bcde");
        // wraps through the gap: len 8 + 5 = 13 steps
        assert_eq!(marquee("abcdefgh", 4, 2 * 13), "abcd");
        assert_eq!(marquee("abcdefgh", 4, 2 * 6), "gh  ");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("postgres-primary", 10), "postgre...");
        assert_eq!(truncate("postgres", 10), "postgres");
        assert_eq!(truncate("postgres", 3), "pos");
    }

    #[test]
    fn rotate_ports_cycles_whole_entries() {
        let p = ports(&["80/tcp", "443/tcp", "8080->80/tcp"]);
        assert_eq!(rotate_ports(&p, 20, 0), vec!["80/tcp", "443/tcp"]);
        assert_eq!(rotate_ports(&p, 20, 10), vec!["443/tcp"]);
        assert_eq!(rotate_ports(&p, 40, 20), vec!["8080->80/tcp", "80/tcp", "443/tcp"]);
        assert!(rotate_ports(&[], 20, 0).is_empty());
    }

    #[test]
    fn rotate_ports_keeps_oversized_first_entry() {
        let p = ports(&["0123456789012345->80/tcp"]);
        assert_eq!(rotate_ports(&p, 5, 0).len(), 1);
    }

    #[test]
    fn truncate_ports_reserves_room_for_ellipsis() {
        let p = ports(&["80/tcp", "443/tcp", "8080/tcp"]);
        assert_eq!(truncate_ports(&p, 30), (vec!["80/tcp", "443/tcp", "8080/tcp"], false));
        assert_eq!(truncate_ports(&p, 18), (vec!["80/tcp", "443/tcp"], true));
        assert_eq!(truncate_ports(&p, 8), (vec![], true));
    }

    #[test]
    fn compact_bytes() {
        assert_eq!(format_bytes_short(512), "512B");
        assert_eq!(format_bytes_short(1_500_000), "1.4M");
        assert_eq!(format_bytes_short(15_000_000), "14M");
        assert_eq!(format_bytes_short(2048), "2.0K");
        assert_eq!(format_bytes_short(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn minify_common_statuses() {
        assert_eq!(minify_status("Up 3 hours"), "Up 3h");
        assert_eq!(minify_status("Exited (0) 2 days ago"), "Exit (0) 2d");
        assert_eq!(minify_status("Up 45 seconds"), "Up 45s");
        assert_eq!(minify_status("Created"), "New");
        assert_eq!(minify_status("Up 2 months (healthy)"), "Up 2mo (healthy)");
    }

    #[test]
    fn bar_fill_and_clamp() {
        assert_eq!(render_bar(0.0), "[□□□□□□□□]");
        assert_eq!(render_bar(50.0), "[■■■■□□□□]");
        assert_eq!(render_bar(250.0), "[■■■■■■■■]");
        assert_eq!(render_bar(-3.0), "[□□□□□□□□]");
    }
}
