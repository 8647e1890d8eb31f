use super::ENTITY_MENU_ITEMS;
use crate::db::progressos::{Progresso, Progressos};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_PROGRESSO_DATA_CONCLUSAO, PROMPT_PROGRESSO_ID_MODULO,
    PROMPT_PROGRESSO_ID_USUARIO,
};
use crate::libs::messages::Message;
use crate::libs::validate::{self, FieldValue};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Progresso";
const LABEL_PLURAL: &str = "Progressos";

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
                export::export_progressos(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_progresso: &str) -> Result<Progresso> {
    Ok(Progresso {
        id_progresso: id_progresso.to_string(),
        id_usuario: validate::prompt_string(PROMPT_PROGRESSO_ID_USUARIO, None)?,
        id_modulo: validate::prompt_string(PROMPT_PROGRESSO_ID_MODULO, None)?,
        data_conclusao: validate::serialize_datetime(&FieldValue::DateTime(validate::prompt_date(
            PROMPT_PROGRESSO_DATA_CONCLUSAO,
        )?))?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_progresso = validate::generate_id();
    let progresso = coletar_campos(&id_progresso)?;

    match Progressos::new(config).and_then(|mut db| db.create(&progresso)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_progresso)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Progressos::new(config).and_then(|mut db| db.list()) {
        Ok(progressos) => {
            if progressos.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::progressos(&progressos)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_progresso = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let novo = coletar_campos(&id_progresso)?;

    match Progressos::new(config).and_then(|mut db| db.update(&id_progresso, &novo)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_progresso)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_progresso)),
        Err(err) => {
            tracing::error!("erro ao atualizar progresso: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_progresso));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_progresso = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Progressos::new(config).and_then(|mut db| db.delete(&id_progresso)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_progresso)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_progresso)),
        Err(err) => {
            tracing::error!("erro ao excluir progresso: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_progresso));
        }
    }

    Ok(())
}
