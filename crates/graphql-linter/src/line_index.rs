/// Byte offset to line number conversion using a pre-built index.
///
/// Built once per schema file so that every AST node location can be
/// mapped back to a 1-based line with a binary search.
///
/// # Example
///
/// ```
/// use graphql_linter::LineIndex;
///
/// let index = LineIndex::new("type Query {\n  id: ID\n}");
/// assert_eq!(index.line_of_offset(0), 1);
/// assert_eq!(index.line_of_offset(15), 2);
/// assert_eq!(index.line_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line.
    /// Index 0 is always 0 (start of file).
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build a line index from source text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut offset = 0;

        for ch in text.chars() {
            offset += ch.len_utf8();
            if ch == '\n' {
                line_starts.push(offset);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based line number
    ///
    /// Offsets past the end of the text map to the last line.
    #[must_use]
    pub fn line_of_offset(&self, offset: usize) -> usize {
        let line = match self.line_starts.binary_search(&offset) {
            // Exact match: offset is at the start of a line
            Ok(line) => line,
            // Not found: offset is somewhere within a line
            Err(line) => line.saturating_sub(1),
        };

        line + 1
    }

    /// Get the number of lines in the indexed text
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset of the start of a 1-based line
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index))
            .copied()
    }
}
