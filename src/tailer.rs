// Log tailer: bounded snapshot of a container's output plus the live substring filter.

use crate::docker_repo::ContainerRuntime;
use crate::error::RuntimeError;

/// Size of the multiplexing header in front of each frame.
pub const MUX_HEADER_LEN: usize = 8;

/// Line shown when a container produced no output.
pub const NO_LOGS: &str = "(no logs)";

/// Drop the first 8 bytes of lines longer than 8 bytes; shorter lines pass through.
pub fn strip_mux_header(line: &[u8]) -> &[u8] {
    if line.len() > MUX_HEADER_LEN {
        &line[MUX_HEADER_LEN..]
    } else {
        line
    }
}

/// Turn raw lines into display lines, substituting the sentinel for an empty result.
pub fn decode_lines(raw: Vec<Vec<u8>>) -> Vec<String> {
    if raw.is_empty() {
        return vec![NO_LOGS.to_string()];
    }
    raw.iter()
        .map(|l| String::from_utf8_lossy(strip_mux_header(l)).into_owned())
        .collect()
}

pub async fn fetch_snapshot(
    runtime: &dyn ContainerRuntime,
    container_id: &str,
    max_lines: usize,
) -> Result<Vec<String>, RuntimeError> {
    let raw = runtime.fetch_logs(container_id, max_lines).await?;
    Ok(decode_lines(raw))
}

/// Case-insensitive substring filter over the full buffer. An empty filter keeps everything.
pub fn filter_lines<'a>(lines: &'a [String], filter: &str) -> Vec<&'a str> {
    if filter.is_empty() {
        return lines.iter().map(String::as_str).collect();
    }
    let needle = filter.to_lowercase();
    lines
        .iter()
        .filter(|l| l.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(strip_mux_header(b"12345678"), b"12345678");
        assert_eq!(strip_mux_header(b"abc"), b"abc");
        assert_eq!(strip_mux_header(b""), b"");
    }

    #[test]
    fn long_lines_lose_exactly_eight_bytes() {
        assert_eq!(strip_mux_header(b"123456789"), b"9");
        let mut framed = vec![1, 0, 0, 0, 0, 0, 0, 6];
        framed.extend_from_slice(b"hello!");
        assert_eq!(strip_mux_header(&framed), b"hello!");
    }

    #[test]
    fn empty_snapshot_becomes_sentinel() {
        assert_eq!(decode_lines(vec![]), vec![NO_LOGS.to_string()]);
    }

    #[test]
    fn decode_tolerates_invalid_utf8() {
        let mut framed = vec![1, 0, 0, 0, 0, 0, 0, 0xff];
        framed.extend_from_slice(&[b'o', b'k', 0xff]);
        let lines = decode_lines(vec![framed]);
        assert_eq!(lines, vec!["ok\u{fffd}".to_string()]);
    }

    #[test]
    fn filter_is_case_insensitive_and_non_destructive() {
        let lines: Vec<String> = ["GET /health 200", "error: boom", "ERROR again", "done"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(filter_lines(&lines, "Error"), vec!["error: boom", "ERROR again"]);
        assert_eq!(filter_lines(&lines, "").len(), 4);
        assert!(filter_lines(&lines, "nothing").is_empty());
        assert_eq!(lines.len(), 4);
    }
}
