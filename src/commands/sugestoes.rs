use super::ENTITY_MENU_ITEMS;
use crate::db::sugestoes::{Sugestao, Sugestoes};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_SUGESTAO_DATA, PROMPT_SUGESTAO_ID_TRILHA, PROMPT_SUGESTAO_ID_USUARIO,
};
use crate::libs::messages::Message;
use crate::libs::validate::{self, FieldValue};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Sugestao";
const LABEL_PLURAL: &str = "Sugestoes";

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
                export::export_sugestoes(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_sugestao: &str) -> Result<Sugestao> {
    Ok(Sugestao {
        id_sugestao: id_sugestao.to_string(),
        id_usuario: validate::prompt_string(PROMPT_SUGESTAO_ID_USUARIO, None)?,
        id_trilha: validate::prompt_string(PROMPT_SUGESTAO_ID_TRILHA, None)?,
        data_sugestao: validate::serialize_datetime(&FieldValue::DateTime(validate::prompt_date(
            PROMPT_SUGESTAO_DATA,
        )?))?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_sugestao = validate::generate_id();
    let sugestao = coletar_campos(&id_sugestao)?;

    match Sugestoes::new(config).and_then(|mut db| db.create(&sugestao)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_sugestao)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Sugestoes::new(config).and_then(|mut db| db.list()) {
        Ok(sugestoes) => {
            if sugestoes.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::sugestoes(&sugestoes)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_sugestao = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let nova = coletar_campos(&id_sugestao)?;

    match Sugestoes::new(config).and_then(|mut db| db.update(&id_sugestao, &nova)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_sugestao)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_sugestao)),
        Err(err) => {
            tracing::error!("erro ao atualizar sugestao: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_sugestao));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_sugestao = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Sugestoes::new(config).and_then(|mut db| db.delete(&id_sugestao)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_sugestao)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_sugestao)),
        Err(err) => {
            tracing::error!("erro ao excluir sugestao: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_sugestao));
        }
    }

    Ok(())
}
