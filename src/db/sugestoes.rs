use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_SUGESTOES: &str = "CREATE TABLE IF NOT EXISTS lm_sugestoes (
    id_sugestao TEXT NOT NULL PRIMARY KEY,
    id_usuario TEXT NOT NULL,
    id_trilha TEXT NOT NULL,
    data_sugestao TEXT NOT NULL
)";
const INSERT_SUGESTAO: &str = "INSERT INTO lm_sugestoes (id_sugestao, id_usuario, id_trilha, data_sugestao)
    VALUES (?1, ?2, ?3, ?4)";
const SELECT_SUGESTOES: &str = "SELECT id_sugestao, id_usuario, id_trilha, data_sugestao
    FROM lm_sugestoes ORDER BY data_sugestao";
const UPDATE_SUGESTAO: &str = "UPDATE lm_sugestoes
    SET id_usuario = ?2, id_trilha = ?3, data_sugestao = ?4
    WHERE id_sugestao = ?1";
const DELETE_SUGESTAO: &str = "DELETE FROM lm_sugestoes WHERE id_sugestao = ?1";

/// A track recommendation issued to a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sugestao {
    pub id_sugestao: String,
    pub id_usuario: String,
    pub id_trilha: String,
    pub data_sugestao: String,
}

pub struct Sugestoes {
    conn: Connection,
}

impl Sugestoes {
    pub fn new(config: &Config) -> Result<Sugestoes> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_SUGESTOES, [])?;

        Ok(Sugestoes { conn: db.conn })
    }

    pub fn create(&mut self, sugestao: &Sugestao) -> Result<()> {
        self.conn.execute(
            INSERT_SUGESTAO,
            params![
                sugestao.id_sugestao,
                sugestao.id_usuario,
                sugestao.id_trilha,
                sugestao.data_sugestao
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Sugestao>> {
        let mut stmt = self.conn.prepare(SELECT_SUGESTOES)?;
        let rows = stmt.query_map([], |row| {
            Ok(Sugestao {
                id_sugestao: row.get(0)?,
                id_usuario: row.get(1)?,
                id_trilha: row.get(2)?,
                data_sugestao: row.get(3)?,
            })
        })?;
        let mut sugestoes = Vec::new();
        for sugestao in rows {
            sugestoes.push(sugestao?);
        }

        Ok(sugestoes)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_sugestao: &str, nova: &Sugestao) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_SUGESTAO,
            params![id_sugestao, nova.id_usuario, nova.id_trilha, nova.data_sugestao],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_sugestao: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_SUGESTAO, params![id_sugestao])?;

        Ok(affected > 0)
    }
}
