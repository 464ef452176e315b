use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;

use crate::storage::Connection;

use super::errors::ReportError;
use super::transport::{HttpTransport, ReportTransport};

/// Submits SQL statements to a reporting endpoint.
///
/// `execute` trims and checks the statement, Base64-encodes it, and sends it
/// through the configured [`ReportTransport`]. Credentials are read from the
/// passed [`Connection`] for the duration of the call only; nothing is
/// cached between submissions.
pub struct ReportClient {
    transport: Box<dyn ReportTransport + Send + Sync>,
}

impl ReportClient {
    /// A client talking real HTTP.
    pub fn new() -> Self {
        Self::with_transport(Box::new(HttpTransport::new()))
    }

    /// A client on top of an arbitrary transport (fakes in tests).
    pub fn with_transport(transport: Box<dyn ReportTransport + Send + Sync>) -> Self {
        Self { transport }
    }

    /// Runs `sql` against `conn` and returns the response body as text.
    pub async fn execute(&self, conn: &Connection, sql: &str) -> Result<String, ReportError> {
        let statement = validate_sql(sql)?;
        // The endpoint takes the statement Base64-encoded over its UTF-8
        // bytes. That is the wire format, not a protection.
        let payload = STANDARD.encode(statement.as_bytes());
        debug!("Submitting {} byte(s) of SQL to '{}'", statement.len(), conn.name);
        self.transport.submit(conn, &payload).await
    }
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts only statements whose first keyword is `SELECT`, in any case.
/// Nothing beyond the leading keyword is inspected.
pub fn validate_sql(sql: &str) -> Result<&str, ReportError> {
    let trimmed = sql.trim();
    if trimmed.to_uppercase().starts_with("SELECT") {
        Ok(trimmed)
    } else {
        Err(ReportError::Validation(
            "statement must start with SELECT".to_string(),
        ))
    }
}
