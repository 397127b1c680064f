//! Byte ranges and line/column conversion.
//!
//! Every range produced by this crate is a half-open byte range `[start, end)`
//! over the UTF-8 source text. Hosts that speak line/column use [`LineIndex`]
//! to convert.

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line/column pair. `col` counts UTF-8 bytes from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps byte offsets to line/column positions and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line. Always starts with `0`.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Build the index for `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(to_size(offset + 1));
            }
        }
        Self {
            line_starts,
            len: to_size(text.len()),
        }
    }

    /// Number of lines in the text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert an offset to a line/column. Offsets past the end clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol::new(line as u32, col.into())
    }

    /// Convert a line/column back to an offset. Returns `None` for a line past the end.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let offset = start + TextSize::from(line_col.col);
        Some(offset.min(self.len))
    }

    /// Convert a range to a pair of line/columns.
    pub fn range(&self, range: TextRange) -> (LineCol, LineCol) {
        (self.line_col(range.start()), self.line_col(range.end()))
    }
}

/// Convert a `usize` byte offset into a [`TextSize`], saturating at `u32::MAX`.
pub(crate) fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}
