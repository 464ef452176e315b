pub mod client;
pub mod errors;
pub mod transport;

pub use client::ReportClient;
pub use errors::ReportError;
pub use transport::{HttpTransport, ReportTransport};
