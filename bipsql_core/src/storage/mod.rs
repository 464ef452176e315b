pub mod connection;
pub mod store;

pub use connection::{Connection, ConnectionPatch};
pub use store::{ConnectionStore, StoreError};
