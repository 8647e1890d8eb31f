use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_PREVISOES: &str = "CREATE TABLE IF NOT EXISTS lm_previsoes (
    id_previsao TEXT NOT NULL PRIMARY KEY,
    id_usuario TEXT NOT NULL,
    taxa_sucesso REAL NOT NULL,
    categoria TEXT NOT NULL,
    data_previsao TEXT NOT NULL
)";
const INSERT_PREVISAO: &str = "INSERT INTO lm_previsoes (id_previsao, id_usuario, taxa_sucesso, categoria, data_previsao)
    VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PREVISOES: &str = "SELECT id_previsao, id_usuario, taxa_sucesso, categoria, data_previsao
    FROM lm_previsoes ORDER BY data_previsao";
const UPDATE_PREVISAO: &str = "UPDATE lm_previsoes
    SET id_usuario = ?2, taxa_sucesso = ?3, categoria = ?4, data_previsao = ?5
    WHERE id_previsao = ?1";
const DELETE_PREVISAO: &str = "DELETE FROM lm_previsoes WHERE id_previsao = ?1";

/// A success-rate forecast for a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Previsao {
    pub id_previsao: String,
    pub id_usuario: String,
    pub taxa_sucesso: f64,
    pub categoria: String,
    pub data_previsao: String,
}

pub struct Previsoes {
    conn: Connection,
}

impl Previsoes {
    pub fn new(config: &Config) -> Result<Previsoes> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_PREVISOES, [])?;

        Ok(Previsoes { conn: db.conn })
    }

    pub fn create(&mut self, previsao: &Previsao) -> Result<()> {
        self.conn.execute(
            INSERT_PREVISAO,
            params![
                previsao.id_previsao,
                previsao.id_usuario,
                previsao.taxa_sucesso,
                previsao.categoria,
                previsao.data_previsao
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Previsao>> {
        let mut stmt = self.conn.prepare(SELECT_PREVISOES)?;
        let rows = stmt.query_map([], |row| {
            Ok(Previsao {
                id_previsao: row.get(0)?,
                id_usuario: row.get(1)?,
                taxa_sucesso: row.get(2)?,
                categoria: row.get(3)?,
                data_previsao: row.get(4)?,
            })
        })?;
        let mut previsoes = Vec::new();
        for previsao in rows {
            previsoes.push(previsao?);
        }

        Ok(previsoes)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_previsao: &str, nova: &Previsao) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_PREVISAO,
            params![
                id_previsao,
                nova.id_usuario,
                nova.taxa_sucesso,
                nova.categoria,
                nova.data_previsao
            ],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_previsao: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_PREVISAO, params![id_previsao])?;

        Ok(affected > 0)
    }
}
