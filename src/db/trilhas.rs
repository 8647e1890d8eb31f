use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_TRILHAS: &str = "CREATE TABLE IF NOT EXISTS lm_trilhas (
    id_trilha TEXT NOT NULL PRIMARY KEY,
    titulo TEXT NOT NULL,
    descricao TEXT NOT NULL,
    area_foco TEXT NOT NULL,
    xp_trilha INTEGER NOT NULL,
    data_criacao TEXT NOT NULL
)";
const INSERT_TRILHA: &str = "INSERT INTO lm_trilhas (id_trilha, titulo, descricao, area_foco, xp_trilha, data_criacao)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TRILHAS: &str = "SELECT id_trilha, titulo, descricao, area_foco, xp_trilha, data_criacao
    FROM lm_trilhas ORDER BY titulo";
const UPDATE_TRILHA: &str = "UPDATE lm_trilhas
    SET titulo = ?2, descricao = ?3, area_foco = ?4, xp_trilha = ?5, data_criacao = ?6
    WHERE id_trilha = ?1";
const DELETE_TRILHA: &str = "DELETE FROM lm_trilhas WHERE id_trilha = ?1";

/// A learning track record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trilha {
    pub id_trilha: String,
    pub titulo: String,
    pub descricao: String,
    pub area_foco: String,
    pub xp_trilha: i64,
    pub data_criacao: String,
}

pub struct Trilhas {
    conn: Connection,
}

impl Trilhas {
    pub fn new(config: &Config) -> Result<Trilhas> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_TRILHAS, [])?;

        Ok(Trilhas { conn: db.conn })
    }

    pub fn create(&mut self, trilha: &Trilha) -> Result<()> {
        self.conn.execute(
            INSERT_TRILHA,
            params![
                trilha.id_trilha,
                trilha.titulo,
                trilha.descricao,
                trilha.area_foco,
                trilha.xp_trilha,
                trilha.data_criacao
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Trilha>> {
        let mut stmt = self.conn.prepare(SELECT_TRILHAS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Trilha {
                id_trilha: row.get(0)?,
                titulo: row.get(1)?,
                descricao: row.get(2)?,
                area_foco: row.get(3)?,
                xp_trilha: row.get(4)?,
                data_criacao: row.get(5)?,
            })
        })?;
        let mut trilhas = Vec::new();
        for trilha in rows {
            trilhas.push(trilha?);
        }

        Ok(trilhas)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_trilha: &str, nova: &Trilha) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_TRILHA,
            params![
                id_trilha,
                nova.titulo,
                nova.descricao,
                nova.area_foco,
                nova.xp_trilha,
                nova.data_criacao
            ],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_trilha: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TRILHA, params![id_trilha])?;

        Ok(affected > 0)
    }
}
