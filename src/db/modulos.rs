use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_MODULOS: &str = "CREATE TABLE IF NOT EXISTS lm_modulos (
    id_modulo TEXT NOT NULL PRIMARY KEY,
    id_trilha TEXT NOT NULL,
    titulo TEXT NOT NULL,
    descricao TEXT NOT NULL,
    tipo TEXT NOT NULL,
    conteudo TEXT NOT NULL,
    xp_recompensa INTEGER NOT NULL,
    ordem INTEGER NOT NULL,
    adaptacao_necessaria TEXT NOT NULL
)";
const INSERT_MODULO: &str = "INSERT INTO lm_modulos (id_modulo, id_trilha, titulo, descricao, tipo, conteudo, xp_recompensa, ordem, adaptacao_necessaria)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_MODULOS: &str = "SELECT id_modulo, id_trilha, titulo, descricao, tipo, conteudo, xp_recompensa, ordem, adaptacao_necessaria
    FROM lm_modulos ORDER BY ordem";
const UPDATE_MODULO: &str = "UPDATE lm_modulos
    SET id_trilha = ?2, titulo = ?3, descricao = ?4, tipo = ?5, conteudo = ?6, xp_recompensa = ?7, ordem = ?8, adaptacao_necessaria = ?9
    WHERE id_modulo = ?1";
const DELETE_MODULO: &str = "DELETE FROM lm_modulos WHERE id_modulo = ?1";

/// A learning module record; references its track by `id_trilha`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modulo {
    pub id_modulo: String,
    pub id_trilha: String,
    pub titulo: String,
    pub descricao: String,
    pub tipo: String,
    pub conteudo: String,
    pub xp_recompensa: i64,
    pub ordem: i64,
    pub adaptacao_necessaria: String,
}

pub struct Modulos {
    conn: Connection,
}

impl Modulos {
    pub fn new(config: &Config) -> Result<Modulos> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_MODULOS, [])?;

        Ok(Modulos { conn: db.conn })
    }

    pub fn create(&mut self, modulo: &Modulo) -> Result<()> {
        self.conn.execute(
            INSERT_MODULO,
            params![
                modulo.id_modulo,
                modulo.id_trilha,
                modulo.titulo,
                modulo.descricao,
                modulo.tipo,
                modulo.conteudo,
                modulo.xp_recompensa,
                modulo.ordem,
                modulo.adaptacao_necessaria
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Modulo>> {
        let mut stmt = self.conn.prepare(SELECT_MODULOS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Modulo {
                id_modulo: row.get(0)?,
                id_trilha: row.get(1)?,
                titulo: row.get(2)?,
                descricao: row.get(3)?,
                tipo: row.get(4)?,
                conteudo: row.get(5)?,
                xp_recompensa: row.get(6)?,
                ordem: row.get(7)?,
                adaptacao_necessaria: row.get(8)?,
            })
        })?;
        let mut modulos = Vec::new();
        for modulo in rows {
            modulos.push(modulo?);
        }

        Ok(modulos)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_modulo: &str, novo: &Modulo) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_MODULO,
            params![
                id_modulo,
                novo.id_trilha,
                novo.titulo,
                novo.descricao,
                novo.tipo,
                novo.conteudo,
                novo.xp_recompensa,
                novo.ordem,
                novo.adaptacao_necessaria
            ],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_modulo: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_MODULO, params![id_modulo])?;

        Ok(affected > 0)
    }
}
