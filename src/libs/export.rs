//! JSON export of entity collections.
//!
//! Each collection is serialized as a pretty-printed JSON array to an
//! entity-named file in the current working directory. Date fields are
//! exported as stored (the console path already normalized them to
//! ISO-8601 at insert time). Write failures are reported, never retried.

use crate::db::modulos::Modulos;
use crate::db::previsoes::Previsoes;
use crate::db::progressos::Progressos;
use crate::db::sugestoes::Sugestoes;
use crate::db::trilhas::Trilhas;
use crate::db::usuarios::Usuarios;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

pub const FILE_USUARIOS: &str = "usuarios.json";
pub const FILE_TRILHAS: &str = "trilhas.json";
pub const FILE_MODULOS: &str = "modulos.json";
pub const FILE_PROGRESSOS: &str = "progressos.json";
pub const FILE_SUGESTOES: &str = "sugestoes.json";
pub const FILE_PREVISOES: &str = "previsoes.json";

pub fn export_usuarios(config: &Config) -> bool {
    let rows = Usuarios::new(config).and_then(|mut db| db.list());
    export_collection(FILE_USUARIOS, "Usuarios", rows)
}

pub fn export_trilhas(config: &Config) -> bool {
    let rows = Trilhas::new(config).and_then(|mut db| db.list());
    export_collection(FILE_TRILHAS, "Trilhas", rows)
}

pub fn export_modulos(config: &Config) -> bool {
    let rows = Modulos::new(config).and_then(|mut db| db.list());
    export_collection(FILE_MODULOS, "Modulos", rows)
}

pub fn export_progressos(config: &Config) -> bool {
    let rows = Progressos::new(config).and_then(|mut db| db.list());
    export_collection(FILE_PROGRESSOS, "Progressos", rows)
}

pub fn export_sugestoes(config: &Config) -> bool {
    let rows = Sugestoes::new(config).and_then(|mut db| db.list());
    export_collection(FILE_SUGESTOES, "Sugestoes", rows)
}

pub fn export_previsoes(config: &Config) -> bool {
    let rows = Previsoes::new(config).and_then(|mut db| db.list());
    export_collection(FILE_PREVISOES, "Previsoes", rows)
}

/// Exports every collection; `true` only when all of them succeed.
pub fn export_all(config: &Config) -> bool {
    let results = [
        export_usuarios(config),
        export_trilhas(config),
        export_modulos(config),
        export_progressos(config),
        export_sugestoes(config),
        export_previsoes(config),
    ];
    results.iter().all(|ok| *ok)
}

fn export_collection<T: Serialize>(file_name: &str, label: &str, rows: Result<Vec<T>>) -> bool {
    msg_info!(Message::ExportStarted(label.to_string()));

    let rows = match rows {
        Ok(rows) => rows,
        Err(err) => {
            msg_error!(Message::ExportReadFailed(err.to_string()));
            return false;
        }
    };
    // An empty collection is not an error; there is just nothing to write.
    if rows.is_empty() {
        msg_info!(Message::ExportNothingToDo(label.to_string()));
        return true;
    }

    match write_json(file_name, &rows) {
        Ok(()) => {
            msg_success!(Message::ExportCompleted(file_name.to_string()));
            true
        }
        Err(err) => {
            msg_error!(Message::ExportWriteFailed(err.to_string()));
            false
        }
    }
}

fn write_json<T: Serialize>(file_name: &str, rows: &[T]) -> Result<()> {
    let mut file = File::create(file_name)?;
    file.write_all(serde_json::to_string_pretty(rows)?.as_bytes())?;

    Ok(())
}
