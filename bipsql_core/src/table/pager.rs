use log::debug;

use super::model::{Row, Table};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Page cursor over one [`Table`].
///
/// The cursor is a plain value: it is created for a table, handed around
/// explicitly, and thrown away with the table when the next query lands.
/// `max_page` divides the *total* row count (header included) by the page
/// size, so a table whose row count is an exact multiple of the page size
/// ends on a valid but empty final page. Likewise the first row of every
/// visible slice is rendered as the header row, which on pages past the
/// first puts a data row in the header position (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
    total_rows: usize,
}

impl Paginator {
    /// Cursor over `total_rows` rows at the fixed [`PAGE_SIZE`].
    pub fn new(total_rows: usize) -> Self {
        Self::with_page_size(total_rows, PAGE_SIZE)
    }

    /// Cursor with an explicit page size. Test hook; `page_size` must be
    /// non-zero.
    pub fn with_page_size(total_rows: usize, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            page_index: 0,
            page_size,
            total_rows,
        }
    }

    /// Cursor sized for `table`.
    pub fn for_table(table: &Table) -> Self {
        Self::new(table.row_count())
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Highest reachable page index.
    pub fn max_page(&self) -> usize {
        self.total_rows / self.page_size
    }

    /// The rows visible on the current page.
    pub fn view<'a>(&self, table: &'a Table) -> &'a [Row] {
        let rows = table.rows();
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }

    /// Advances one page, stopping at the last.
    pub fn next(&mut self) {
        self.page_index = (self.page_index + 1).min(self.max_page());
        debug!("Cursor on page {}/{}", self.page_index, self.max_page());
    }

    /// Goes back one page, stopping at the first.
    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
        debug!("Cursor on page {}/{}", self.page_index, self.max_page());
    }

    /// Puts the cursor back on the first page.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }
}
