//! Per-file scanning under a line budget

use crate::scanner::error::{ScanError, ScanResult};
use crate::scanner::options::ScanOptions;
use crate::scanner::parser::parse_line;
use crate::spdx::Tag;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Longest line, in bytes including its terminator, that is inspected.
/// Hitting this limit ends the file.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Scan one file and return its tags in line order
///
/// Reading stops once more than `options.lines` lines were processed (see
/// [`ScanOptions::line_budget_exceeded`]), or at end of file.
pub fn scan_file(path: &Path, options: &ScanOptions) -> ScanResult<Vec<Tag>> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let tags = scan_reader(BufReader::new(file), options).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("{}: {} tag(s)", path.display(), tags.len());
    Ok(tags)
}

/// Scan any buffered reader line by line
///
/// Lines end at `\n` with an optional `\r` before it. Invalid UTF-8 is
/// decoded lossily so binary content never aborts a scan. A line longer
/// than [`MAX_LINE_BYTES`] is not parsed and nothing after it is read.
pub fn scan_reader<R: BufRead>(mut reader: R, options: &ScanOptions) -> std::io::Result<Vec<Tag>> {
    let mut tags = Vec::new();
    let mut buf = Vec::new();
    let mut lines_read: u64 = 0;

    loop {
        buf.clear();
        let read = reader
            .by_ref()
            .take(MAX_LINE_BYTES as u64)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        if read == MAX_LINE_BYTES && !buf.ends_with(b"\n") {
            log::debug!(
                "line {} exceeds {} bytes, ending file",
                lines_read + 1,
                MAX_LINE_BYTES
            );
            break;
        }

        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        if let Some(tag) = parse_line(&line) {
            log::trace!("line {}: {}", lines_read + 1, tag);
            tags.push(tag);
        }

        lines_read += 1;
        if options.line_budget_exceeded(lines_read) {
            break;
        }
    }

    Ok(tags)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
