use log::info;

use crate::report::{ReportClient, ReportError};
use crate::storage::Connection;
use crate::table::{Paginator, Row, Table};

/// Owns the single live result set.
///
/// A session holds at most one `Table` with its cursor. Running a query
/// replaces both unconditionally: the previous result and its page position
/// are gone the moment the new response parses, and the cursor starts back
/// on page 0.
pub struct QuerySession {
    client: ReportClient,
    result: Option<(Table, Paginator)>,
}

impl QuerySession {
    pub fn new(client: ReportClient) -> Self {
        Self {
            client,
            result: None,
        }
    }

    /// Submits `sql` over `conn`, parses the response, and installs it as
    /// the current result.
    pub async fn run_query(&mut self, conn: &Connection, sql: &str) -> Result<(), ReportError> {
        let text = self.client.execute(conn, sql).await?;
        let table = Table::parse(&text);
        info!(
            "Query against '{}' returned {} row(s)",
            conn.name,
            table.row_count()
        );
        self.install(table);
        Ok(())
    }

    /// Replaces the live result set; the cursor always restarts at page 0.
    pub fn install(&mut self, table: Table) {
        let pager = Paginator::for_table(&table);
        self.result = Some((table, pager));
    }

    pub fn table(&self) -> Option<&Table> {
        self.result.as_ref().map(|(table, _)| table)
    }

    pub fn pager(&self) -> Option<&Paginator> {
        self.result.as_ref().map(|(_, pager)| pager)
    }

    /// The rows visible on the current page, if a result is live.
    pub fn current_page(&self) -> Option<&[Row]> {
        self.result.as_ref().map(|(table, pager)| pager.view(table))
    }

    pub fn next_page(&mut self) {
        if let Some((_, pager)) = &mut self.result {
            pager.next();
        }
    }

    pub fn prev_page(&mut self) {
        if let Some((_, pager)) = &mut self.result {
            pager.prev();
        }
    }
}
