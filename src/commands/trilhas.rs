use super::ENTITY_MENU_ITEMS;
use crate::db::trilhas::{Trilha, Trilhas};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_TRILHA_AREA_FOCO, PROMPT_TRILHA_DATA_CRIACAO, PROMPT_TRILHA_DESCRICAO,
    PROMPT_TRILHA_TITULO, PROMPT_TRILHA_XP,
};
use crate::libs::messages::Message;
use crate::libs::validate::{self, FieldValue};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Trilha";
const LABEL_PLURAL: &str = "Trilhas";

pub fn menu(config: &Config) -> Result<()> {
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Menu - {}", LABEL))
            .items(&ENTITY_MENU_ITEMS)
            .default(0)
            .interact()?;

        match selection {
            0 => inserir(config)?,
            1 => listar(config)?,
            2 => atualizar(config)?,
            3 => excluir(config)?,
            4 => {
                export::export_trilhas(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_trilha: &str) -> Result<Trilha> {
    Ok(Trilha {
        id_trilha: id_trilha.to_string(),
        titulo: validate::prompt_string(PROMPT_TRILHA_TITULO, None)?,
        descricao: validate::prompt_string(PROMPT_TRILHA_DESCRICAO, None)?,
        area_foco: validate::prompt_string(PROMPT_TRILHA_AREA_FOCO, None)?,
        xp_trilha: validate::prompt_integer(PROMPT_TRILHA_XP, None)?,
        data_criacao: validate::serialize_datetime(&FieldValue::DateTime(validate::prompt_date(
            PROMPT_TRILHA_DATA_CRIACAO,
        )?))?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_trilha = validate::generate_id();
    let trilha = coletar_campos(&id_trilha)?;

    match Trilhas::new(config).and_then(|mut db| db.create(&trilha)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_trilha)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Trilhas::new(config).and_then(|mut db| db.list()) {
        Ok(trilhas) => {
            if trilhas.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::trilhas(&trilhas)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_trilha = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let nova = coletar_campos(&id_trilha)?;

    match Trilhas::new(config).and_then(|mut db| db.update(&id_trilha, &nova)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_trilha)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_trilha)),
        Err(err) => {
            tracing::error!("erro ao atualizar trilha: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_trilha));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_trilha = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Trilhas::new(config).and_then(|mut db| db.delete(&id_trilha)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_trilha)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_trilha)),
        Err(err) => {
            tracing::error!("erro ao excluir trilha: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_trilha));
        }
    }

    Ok(())
}
