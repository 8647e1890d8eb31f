use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_PROGRESSOS: &str = "CREATE TABLE IF NOT EXISTS lm_progressos (
    id_progresso TEXT NOT NULL PRIMARY KEY,
    id_usuario TEXT NOT NULL,
    id_modulo TEXT NOT NULL,
    data_conclusao TEXT NOT NULL
)";
const INSERT_PROGRESSO: &str = "INSERT INTO lm_progressos (id_progresso, id_usuario, id_modulo, data_conclusao)
    VALUES (?1, ?2, ?3, ?4)";
const SELECT_PROGRESSOS: &str = "SELECT id_progresso, id_usuario, id_modulo, data_conclusao
    FROM lm_progressos ORDER BY data_conclusao";
const UPDATE_PROGRESSO: &str = "UPDATE lm_progressos
    SET id_usuario = ?2, id_modulo = ?3, data_conclusao = ?4
    WHERE id_progresso = ?1";
const DELETE_PROGRESSO: &str = "DELETE FROM lm_progressos WHERE id_progresso = ?1";

/// A completion record linking a learner to a finished module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progresso {
    pub id_progresso: String,
    pub id_usuario: String,
    pub id_modulo: String,
    pub data_conclusao: String,
}

pub struct Progressos {
    conn: Connection,
}

impl Progressos {
    pub fn new(config: &Config) -> Result<Progressos> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_PROGRESSOS, [])?;

        Ok(Progressos { conn: db.conn })
    }

    pub fn create(&mut self, progresso: &Progresso) -> Result<()> {
        self.conn.execute(
            INSERT_PROGRESSO,
            params![
                progresso.id_progresso,
                progresso.id_usuario,
                progresso.id_modulo,
                progresso.data_conclusao
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Progresso>> {
        let mut stmt = self.conn.prepare(SELECT_PROGRESSOS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Progresso {
                id_progresso: row.get(0)?,
                id_usuario: row.get(1)?,
                id_modulo: row.get(2)?,
                data_conclusao: row.get(3)?,
            })
        })?;
        let mut progressos = Vec::new();
        for progresso in rows {
            progressos.push(progresso?);
        }

        Ok(progressos)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_progresso: &str, novo: &Progresso) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_PROGRESSO,
            params![id_progresso, novo.id_usuario, novo.id_modulo, novo.data_conclusao],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_progresso: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_PROGRESSO, params![id_progresso])?;

        Ok(affected > 0)
    }
}
