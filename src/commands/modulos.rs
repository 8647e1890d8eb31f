use super::ENTITY_MENU_ITEMS;
use crate::db::modulos::{Modulo, Modulos};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_MODULO_ADAPTACAO, PROMPT_MODULO_CONTEUDO, PROMPT_MODULO_DESCRICAO,
    PROMPT_MODULO_ID_TRILHA, PROMPT_MODULO_ORDEM, PROMPT_MODULO_TIPO, PROMPT_MODULO_TITULO, PROMPT_MODULO_XP_RECOMPENSA,
};
use crate::libs::messages::Message;
use crate::libs::validate;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Modulo";
const LABEL_PLURAL: &str = "Modulos";

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
                export::export_modulos(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_modulo: &str) -> Result<Modulo> {
    Ok(Modulo {
        id_modulo: id_modulo.to_string(),
        id_trilha: validate::prompt_string(PROMPT_MODULO_ID_TRILHA, None)?,
        titulo: validate::prompt_string(PROMPT_MODULO_TITULO, None)?,
        descricao: validate::prompt_string(PROMPT_MODULO_DESCRICAO, None)?,
        tipo: validate::prompt_string(PROMPT_MODULO_TIPO, None)?,
        conteudo: validate::prompt_string(PROMPT_MODULO_CONTEUDO, None)?,
        xp_recompensa: validate::prompt_integer(PROMPT_MODULO_XP_RECOMPENSA, None)?,
        ordem: validate::prompt_integer(PROMPT_MODULO_ORDEM, None)?,
        adaptacao_necessaria: validate::prompt_string(PROMPT_MODULO_ADAPTACAO, None)?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_modulo = validate::generate_id();
    let modulo = coletar_campos(&id_modulo)?;

    match Modulos::new(config).and_then(|mut db| db.create(&modulo)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_modulo)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Modulos::new(config).and_then(|mut db| db.list()) {
        Ok(modulos) => {
            if modulos.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::modulos(&modulos)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_modulo = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let novo = coletar_campos(&id_modulo)?;

    match Modulos::new(config).and_then(|mut db| db.update(&id_modulo, &novo)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_modulo)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_modulo)),
        Err(err) => {
            tracing::error!("erro ao atualizar modulo: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_modulo));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_modulo = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Modulos::new(config).and_then(|mut db| db.delete(&id_modulo)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_modulo)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_modulo)),
        Err(err) => {
            tracing::error!("erro ao excluir modulo: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_modulo));
        }
    }

    Ok(())
}
