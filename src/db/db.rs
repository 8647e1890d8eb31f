use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use rusqlite::Connection;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a fresh connection to the configured database file.
    ///
    /// Fails with a store-level error when no database is configured; the
    /// error surfaces on every operation rather than at startup.
    pub fn new(config: &Config) -> Result<Db> {
        let path = config
            .database
            .as_ref()
            .ok_or_else(|| msg_error_anyhow!(Message::DatabaseNotConfigured))?;
        msg_debug!(format!("abrindo conexão com {}", path.display()));
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }
}
