use std::fmt::{self, Display};
use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde_json::Error as SerdeError;

use super::connection::{Connection, ConnectionPatch};

/// A central error enum for connection-store errors.
#[derive(Debug)]
pub enum StoreError {
    /// A connection with this name already exists.
    DuplicateName(String),
    /// No connection with this name is stored.
    NotFound(String),
    /// The connection file could not be read or written.
    Storage(io::Error),
}

/// Convert from std::io::Error.
impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> StoreError {
        StoreError::Storage(err)
    }
}

/// Convert from serde_json::Error.
/// Without this, `map_err(StoreError::from)` won't work when (de)serializing
/// the connection file.
impl From<SerdeError> for StoreError {
    fn from(err: SerdeError) -> Self {
        StoreError::Storage(err.into())
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateName(name) => {
                write!(f, "a connection named '{}' already exists", name)
            }
            StoreError::NotFound(name) => write!(f, "no connection named '{}'", name),
            StoreError::Storage(e) => write!(f, "connection file error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistent set of named [`Connection`]s, kept in insertion order.
///
/// The whole set lives in one JSON array file. Every effective mutation
/// rewrites that file before it returns; the in-memory set is only updated
/// once the write succeeded, so a failed write leaves both sides on the
/// previous state.
#[derive(Debug)]
pub struct ConnectionStore {
    path: PathBuf,
    connections: Vec<Connection>,
}

impl ConnectionStore {
    /// Opens the store at `~/.config/bipsql/connections.json` on Linux,
    /// `%APPDATA%\bipsql\connections.json` on Windows, etc.
    pub fn open_default() -> Result<Self, StoreError> {
        let proj = ProjectDirs::from("", "", "bipsql")
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to locate config dir"))?;
        let dir = proj.config_dir();
        fs::create_dir_all(dir)?;
        Self::open(dir.join("connections.json"))
    }

    /// Opens the store backed by an explicit file path, loading it when the
    /// file exists. A missing file is a valid, empty store.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let connections = match fs::File::open(&path) {
            Ok(file) => serde_json::from_reader(file)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        info!(
            "Loaded {} connection(s) from {:?}",
            connections.len(),
            path
        );
        Ok(Self { path, connections })
    }

    /// All stored connections, in insertion order.
    pub fn list(&self) -> &[Connection] {
        &self.connections
    }

    pub fn get(&self, name: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.name == name)
    }

    /// Adds a new connection and persists the set.
    pub fn add(&mut self, conn: Connection) -> Result<(), StoreError> {
        if self.get(&conn.name).is_some() {
            return Err(StoreError::DuplicateName(conn.name));
        }
        let mut staged = self.connections.clone();
        staged.push(conn);
        self.commit(staged)
    }

    /// Applies `patch` to the connection called `name` and persists the set.
    ///
    /// Renaming onto another stored connection fails with `DuplicateName`.
    pub fn update(&mut self, name: &str, patch: ConnectionPatch) -> Result<(), StoreError> {
        let index = self
            .connections
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        if let Some(new_name) = &patch.name {
            if new_name != name && self.get(new_name).is_some() {
                return Err(StoreError::DuplicateName(new_name.clone()));
            }
        }
        let mut staged = self.connections.clone();
        patch.apply(&mut staged[index]);
        self.commit(staged)
    }

    /// Deletes the connection called `name`. Deleting an absent name is a
    /// no-op; nothing is rewritten.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        if self.get(name).is_none() {
            warn!("Delete of unknown connection '{}' ignored", name);
            return Ok(());
        }
        let staged: Vec<Connection> = self
            .connections
            .iter()
            .filter(|c| c.name != name)
            .cloned()
            .collect();
        self.commit(staged)
    }

    /// Writes `staged` to disk, then swaps it in. The write goes to a
    /// sibling temp file first and is renamed into place.
    fn commit(&mut self, staged: Vec<Connection>) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("json.tmp");
        let file = fs::File::create(&tmp)?;
        serde_json::to_writer_pretty(file, &staged)?;
        fs::rename(&tmp, &self.path)?;
        self.connections = staged;
        info!(
            "Persisted {} connection(s) to {:?}",
            self.connections.len(),
            self.path
        );
        Ok(())
    }
}
