use super::ENTITY_MENU_ITEMS;
use crate::db::previsoes::{Previsao, Previsoes};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_PREVISAO_CATEGORIA, PROMPT_PREVISAO_DATA, PROMPT_PREVISAO_ID_USUARIO,
    PROMPT_PREVISAO_TAXA_SUCESSO,
};
use crate::libs::messages::Message;
use crate::libs::validate::{self, FieldValue};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Previsao";
const LABEL_PLURAL: &str = "Previsoes";

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
                export::export_previsoes(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_previsao: &str) -> Result<Previsao> {
    Ok(Previsao {
        id_previsao: id_previsao.to_string(),
        id_usuario: validate::prompt_string(PROMPT_PREVISAO_ID_USUARIO, None)?,
        taxa_sucesso: validate::prompt_float(PROMPT_PREVISAO_TAXA_SUCESSO, None)?,
        categoria: validate::prompt_string(PROMPT_PREVISAO_CATEGORIA, None)?,
        data_previsao: validate::serialize_datetime(&FieldValue::DateTime(validate::prompt_date(
            PROMPT_PREVISAO_DATA,
        )?))?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_previsao = validate::generate_id();
    let previsao = coletar_campos(&id_previsao)?;

    match Previsoes::new(config).and_then(|mut db| db.create(&previsao)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_previsao)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Previsoes::new(config).and_then(|mut db| db.list()) {
        Ok(previsoes) => {
            if previsoes.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::previsoes(&previsoes)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_previsao = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let nova = coletar_campos(&id_previsao)?;

    match Previsoes::new(config).and_then(|mut db| db.update(&id_previsao, &nova)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_previsao)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_previsao)),
        Err(err) => {
            tracing::error!("erro ao atualizar previsao: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_previsao));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_previsao = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Previsoes::new(config).and_then(|mut db| db.delete(&id_previsao)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_previsao)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_previsao)),
        Err(err) => {
            tracing::error!("erro ao excluir previsao: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_previsao));
        }
    }

    Ok(())
}
