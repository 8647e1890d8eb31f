use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportEntity {
    Usuarios,
    Trilhas,
    Modulos,
    Progressos,
    Sugestoes,
    Previsoes,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Coleção a exportar (todas quando omitido)
    #[arg(value_enum)]
    entity: Option<ExportEntity>,
}

/// Exports one or all collections to JSON files in the working directory.
pub fn cmd(args: ExportArgs, config: &Config) -> Result<()> {
    let ok = match args.entity {
        Some(ExportEntity::Usuarios) => export::export_usuarios(config),
        Some(ExportEntity::Trilhas) => export::export_trilhas(config),
        Some(ExportEntity::Modulos) => export::export_modulos(config),
        Some(ExportEntity::Progressos) => export::export_progressos(config),
        Some(ExportEntity::Sugestoes) => export::export_sugestoes(config),
        Some(ExportEntity::Previsoes) => export::export_previsoes(config),
        None => export::export_all(config),
    };

    if !ok {
        msg_bail_anyhow!(Message::ExportFailed);
    }

    Ok(())
}
