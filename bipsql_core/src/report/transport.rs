use async_trait::async_trait;
use log::{debug, info};

use crate::storage::Connection;

use super::errors::ReportError;

/// A trait representing the wire leg of a report submission.
///
/// [`ReportClient`](super::client::ReportClient) validates and encodes the
/// statement, then hands the encoded payload here. Tests substitute an
/// in-process fake for this trait instead of opening a socket.
#[async_trait]
pub trait ReportTransport {
    /// Submits the already-encoded statement and returns the raw response
    /// body as text.
    async fn submit(&self, conn: &Connection, encoded_sql: &str) -> Result<String, ReportError>;
}

/// HTTP transport: one POST per submission, Basic auth, JSON body.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportTransport for HttpTransport {
    async fn submit(&self, conn: &Connection, encoded_sql: &str) -> Result<String, ReportError> {
        info!("POST {} as user {}", conn.url, conn.username);
        let response = self
            .client
            .post(&conn.url)
            .basic_auth(&conn.username, Some(&conn.password))
            .json(&serde_json::json!({ "sql": encoded_sql }))
            .send()
            .await?
            .error_for_status()?;

        // The body is buffered whole; the endpoint reports errors through
        // the status line, so whatever arrives here is treated as CSV text
        // no matter what content type it declares.
        let body = response.text().await?;
        debug!("Response body: {} byte(s)", body.len());
        Ok(body)
    }
}
