//! Line-start offset table maintenance.
//!
//! A table always begins with `0`. Every `'\n'` adds the offset of the byte
//! that follows it, except a `'\n'` that is the last byte of the content:
//! an end-of-file newline never opens a trailing empty line.

use memchr::memchr_iter;

/// Build the line-start table for `content` from scratch.
pub fn build_line_starts(content: &[u8]) -> Vec<usize> {
    let mut line_starts = vec![0];
    push_line_starts(&mut line_starts, content, 0);
    line_starts
}

/// Repair `line_starts` after a single-byte edit at absolute position `pos`.
///
/// Bytes before `pos` are unchanged by the edit, so every entry below `pos`
/// is still valid. The newline at `pos - 1` is rescanned as well: whether it
/// opens a line depends on whether anything now follows it.
pub(crate) fn repair_from(line_starts: &mut Vec<usize>, content: &[u8], pos: usize) {
    let keep = line_starts.partition_point(|&start| start < pos).max(1);
    line_starts.truncate(keep);
    push_line_starts(line_starts, content, pos.saturating_sub(1));
}

fn push_line_starts(line_starts: &mut Vec<usize>, content: &[u8], from: usize) {
    let len = content.len();
    if from >= len {
        return;
    }
    line_starts.extend(
        memchr_iter(b'\n', &content[from..])
            .map(|i| from + i + 1)
            .filter(|&start| start < len),
    );
}
