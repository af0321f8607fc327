// Rebuild raw log lines from demultiplexed bollard frames.
//
// Docker multiplexes stdout/stderr frames behind an 8-byte header
// ([stream, 0, 0, 0, len_be32]). bollard strips it; the tailer expects the
// wire form, so the header is put back on every multiplexed line. TTY
// (console) output never carried one.
//
// Frames are HTTP chunks, not lines: a line may span several frames, so the
// unterminated tail of each stream is carried until its newline arrives.

use bollard::container::LogOutput;
use std::collections::BTreeMap;

const STREAM_STDIN: u8 = 0;
const STREAM_STDOUT: u8 = 1;
const STREAM_STDERR: u8 = 2;

fn frame_header(stream: u8, len: usize) -> [u8; 8] {
    let len = u32::try_from(len).unwrap_or(u32::MAX).to_be_bytes();
    [stream, 0, 0, 0, len[0], len[1], len[2], len[3]]
}

/// Joins frames into whole lines, one pending buffer per stream.
#[derive(Debug, Default)]
pub(crate) struct LineAssembler {
    /// Keyed by stream id; `None` is console output.
    pending: BTreeMap<Option<u8>, Vec<u8>>,
    lines: Vec<Vec<u8>>,
}

impl LineAssembler {
    pub(crate) fn push(&mut self, frame: &LogOutput) {
        let (stream, message) = match frame {
            LogOutput::StdIn { message } => (Some(STREAM_STDIN), message),
            LogOutput::StdOut { message } => (Some(STREAM_STDOUT), message),
            LogOutput::StdErr { message } => (Some(STREAM_STDERR), message),
            LogOutput::Console { message } => (None, message),
        };
        let buffer = self.pending.entry(stream).or_default();
        buffer.extend_from_slice(message);
        while let Some(newline) = buffer.iter().position(|b| *b == b'\n') {
            let rest = buffer.split_off(newline + 1);
            let mut line = std::mem::replace(buffer, rest);
            line.pop();
            self.lines.push(encode(stream, line));
        }
    }

    /// Complete lines in arrival order, then any unterminated tails.
    pub(crate) fn finish(mut self) -> Vec<Vec<u8>> {
        for (stream, tail) in std::mem::take(&mut self.pending) {
            if !tail.is_empty() {
                self.lines.push(encode(stream, tail));
            }
        }
        self.lines
    }
}

fn encode(stream: Option<u8>, mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    match stream {
        Some(stream) => {
            let mut framed = frame_header(stream, line.len()).to_vec();
            framed.append(&mut line);
            framed
        }
        None => line,
    }
}
