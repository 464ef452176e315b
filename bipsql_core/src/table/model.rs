/// One parsed line of the result set.
pub type Row = Vec<String>;

/// A query result: row 0 is the header, everything after it is data.
///
/// Each successful query produces a fresh `Table`; results are never merged
/// or appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Parses delimited response text.
    ///
    /// Lines are split on `\n` (a trailing `\r` per line is stripped, so
    /// `\r\n` input works) and a single trailing blank line is discarded.
    /// Cells are split on the literal comma with no quoting or escaping:
    /// a comma inside a field is indistinguishable from a separator, and
    /// rows keep whatever length they came with. Ragged or comma-laden
    /// input therefore parses without error into a distorted table.
    pub fn parse(text: &str) -> Table {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        let rows = lines
            .into_iter()
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        Table { rows }
    }

    /// Every row, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, when the table has any rows at all.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The data rows below the header.
    pub fn body(&self) -> &[Row] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Total number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
