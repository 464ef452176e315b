//! A deterministic **in‑process stand‑in** for any type that implements
//! `bipsql_core::report::transport::ReportTransport`.
//!
//! *  **From the test's perspective**
//!    * Decide up front what the endpoint answers with
//!      (`FakeTransport::replying` / `FakeTransport::failing`).
//!    * Inspect everything the client sent out via the shared history handle.
//!
//! *  **Why this exists**: It lets integration tests exercise the *real*
//!    validation/encoding/paging machinery without opening an HTTP
//!    connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bipsql_core::report::{ReportError, ReportTransport};
use bipsql_core::storage::Connection;

/// One recorded submission: where it went, as whom, and the encoded payload.
#[derive(Debug, Clone)]
pub struct Submission {
    pub url: String,
    pub username: String,
    pub password: String,
    pub encoded_sql: String,
}

pub type History = Arc<Mutex<Vec<Submission>>>;

pub struct FakeTransport {
    /// Canned answer; `Err` simulates a transport failure.
    response: Result<String, String>,
    history: History,
}

impl FakeTransport {
    /// A fake whose every submission succeeds with `body`.
    ///
    /// Returns the fake plus the shared history handle for assertions.
    pub fn replying(body: &str) -> (Self, History) {
        Self::new(Ok(body.to_string()))
    }

    /// A fake whose every submission fails with `message`.
    pub fn failing(message: &str) -> (Self, History) {
        Self::new(Err(message.to_string()))
    }

    fn new(response: Result<String, String>) -> (Self, History) {
        let history: History = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                response,
                history: Arc::clone(&history),
            },
            history,
        )
    }
}

#[async_trait]
impl ReportTransport for FakeTransport {
    async fn submit(&self, conn: &Connection, encoded_sql: &str) -> Result<String, ReportError> {
        self.history.lock().unwrap().push(Submission {
            url: conn.url.clone(),
            username: conn.username.clone(),
            password: conn.password.clone(),
            encoded_sql: encoded_sql.to_string(),
        });
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(ReportError::Network(message.clone())),
        }
    }
}
