use serde::{Deserialize, Serialize};

/// A user-named reporting endpoint plus the credentials for it.
///
/// Serialized as a plain JSON object, so the connection file looks like:
/// `[{ "name":"prod", "url":"https://r.example.com/run", "username":"me", "password":"s3cret" }]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Partial update applied to a stored [`Connection`].
///
/// `None` fields are left untouched; `name` renames the entry.
#[derive(Debug, Clone, Default)]
pub struct ConnectionPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConnectionPatch {
    pub(crate) fn apply(self, conn: &mut Connection) {
        if let Some(name) = self.name {
            conn.name = name;
        }
        if let Some(url) = self.url {
            conn.url = url;
        }
        if let Some(username) = self.username {
            conn.username = username;
        }
        if let Some(password) = self.password {
            conn.password = password;
        }
    }
}
