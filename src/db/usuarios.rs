use super::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_USUARIOS: &str = "CREATE TABLE IF NOT EXISTS lm_usuarios (
    id_usuario TEXT NOT NULL PRIMARY KEY,
    nome TEXT NOT NULL,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    senha TEXT NOT NULL,
    area TEXT NOT NULL,
    acessibilidade TEXT NOT NULL,
    modulos_concluidos INTEGER NOT NULL,
    xp_total INTEGER NOT NULL,
    data_cadastro TEXT NOT NULL
)";
const INSERT_USUARIO: &str = "INSERT INTO lm_usuarios (id_usuario, nome, username, email, senha, area, acessibilidade, modulos_concluidos, xp_total, data_cadastro)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_USUARIOS: &str = "SELECT id_usuario, nome, username, email, senha, area, acessibilidade, modulos_concluidos, xp_total, data_cadastro
    FROM lm_usuarios ORDER BY nome";
const UPDATE_USUARIO: &str = "UPDATE lm_usuarios
    SET nome = ?2, username = ?3, email = ?4, senha = ?5, area = ?6, acessibilidade = ?7, modulos_concluidos = ?8, xp_total = ?9, data_cadastro = ?10
    WHERE id_usuario = ?1";
const DELETE_USUARIO: &str = "DELETE FROM lm_usuarios WHERE id_usuario = ?1";

/// A learner record. Dates travel as ISO-8601 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: String,
    pub nome: String,
    pub username: String,
    pub email: String,
    pub senha: String,
    pub area: String,
    pub acessibilidade: String,
    pub modulos_concluidos: i64,
    pub xp_total: i64,
    pub data_cadastro: String,
}

pub struct Usuarios {
    conn: Connection,
}

impl Usuarios {
    pub fn new(config: &Config) -> Result<Usuarios> {
        let db = Db::new(config)?;
        db.conn.execute(SCHEMA_USUARIOS, [])?;

        Ok(Usuarios { conn: db.conn })
    }

    pub fn create(&mut self, usuario: &Usuario) -> Result<()> {
        self.conn.execute(
            INSERT_USUARIO,
            params![
                usuario.id_usuario,
                usuario.nome,
                usuario.username,
                usuario.email,
                usuario.senha,
                usuario.area,
                usuario.acessibilidade,
                usuario.modulos_concluidos,
                usuario.xp_total,
                usuario.data_cadastro
            ],
        )?;

        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Usuario>> {
        let mut stmt = self.conn.prepare(SELECT_USUARIOS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Usuario {
                id_usuario: row.get(0)?,
                nome: row.get(1)?,
                username: row.get(2)?,
                email: row.get(3)?,
                senha: row.get(4)?,
                area: row.get(5)?,
                acessibilidade: row.get(6)?,
                modulos_concluidos: row.get(7)?,
                xp_total: row.get(8)?,
                data_cadastro: row.get(9)?,
            })
        })?;
        let mut usuarios = Vec::new();
        for usuario in rows {
            usuarios.push(usuario?);
        }

        Ok(usuarios)
    }

    /// Whole-row replace keyed by id. `false` when no row matched.
    pub fn update(&mut self, id_usuario: &str, novo: &Usuario) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_USUARIO,
            params![
                id_usuario,
                novo.nome,
                novo.username,
                novo.email,
                novo.senha,
                novo.area,
                novo.acessibilidade,
                novo.modulos_concluidos,
                novo.xp_total,
                novo.data_cadastro
            ],
        )?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id_usuario: &str) -> Result<bool> {
        let affected = self.conn.execute(DELETE_USUARIO, params![id_usuario])?;

        Ok(affected > 0)
    }
}
