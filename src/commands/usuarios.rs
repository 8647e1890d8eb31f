use super::ENTITY_MENU_ITEMS;
use crate::db::usuarios::{Usuario, Usuarios};
use crate::libs::config::Config;
use crate::libs::export;
use crate::libs::messages::prompts::{
    PROMPT_ID_DELETE, PROMPT_ID_UPDATE, PROMPT_USUARIO_ACESSIBILIDADE, PROMPT_USUARIO_AREA, PROMPT_USUARIO_DATA_CADASTRO,
    PROMPT_USUARIO_EMAIL, PROMPT_USUARIO_MODULOS_CONCLUIDOS, PROMPT_USUARIO_NOME, PROMPT_USUARIO_SENHA,
    PROMPT_USUARIO_USERNAME, PROMPT_USUARIO_XP_TOTAL,
};
use crate::libs::messages::Message;
use crate::libs::validate::{self, FieldValue};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const LABEL: &str = "Usuario";
const LABEL_PLURAL: &str = "Usuarios";

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
                export::export_usuarios(config);
            }
            _ => return Ok(()),
        }
    }
}

fn coletar_campos(id_usuario: &str) -> Result<Usuario> {
    Ok(Usuario {
        id_usuario: id_usuario.to_string(),
        nome: validate::prompt_name(PROMPT_USUARIO_NOME)?,
        username: validate::prompt_string(PROMPT_USUARIO_USERNAME, None)?,
        email: validate::prompt_email(PROMPT_USUARIO_EMAIL)?,
        senha: validate::prompt_string(PROMPT_USUARIO_SENHA, None)?,
        area: validate::prompt_string(PROMPT_USUARIO_AREA, Some("SoftSkills"))?,
        acessibilidade: validate::prompt_string(PROMPT_USUARIO_ACESSIBILIDADE, Some("nenhuma"))?,
        modulos_concluidos: validate::prompt_integer(PROMPT_USUARIO_MODULOS_CONCLUIDOS, Some(0))?,
        xp_total: validate::prompt_integer(PROMPT_USUARIO_XP_TOTAL, Some(0))?,
        data_cadastro: validate::serialize_datetime(&FieldValue::DateTime(validate::prompt_date(
            PROMPT_USUARIO_DATA_CADASTRO,
        )?))?,
    })
}

fn inserir(config: &Config) -> Result<()> {
    let id_usuario = validate::generate_id();
    let usuario = coletar_campos(&id_usuario)?;

    match Usuarios::new(config).and_then(|mut db| db.create(&usuario)) {
        Ok(()) => msg_success!(Message::RecordInserted(LABEL.to_string(), id_usuario)),
        Err(err) => msg_error!(Message::RecordInsertFailed(LABEL.to_string(), err.to_string())),
    }

    Ok(())
}

fn listar(config: &Config) -> Result<()> {
    match Usuarios::new(config).and_then(|mut db| db.list()) {
        Ok(usuarios) => {
            if usuarios.is_empty() {
                msg_info!(Message::NoRecordsFound(LABEL_PLURAL.to_string()));
            } else {
                msg_print!(Message::ListHeader(LABEL_PLURAL.to_string()), true);
                View::usuarios(&usuarios)?;
            }
        }
        Err(err) => msg_error!(Message::ListFailed(LABEL_PLURAL.to_string(), err.to_string())),
    }

    Ok(())
}

fn atualizar(config: &Config) -> Result<()> {
    let id_usuario = validate::prompt_string(PROMPT_ID_UPDATE, None)?;
    let novo = coletar_campos(&id_usuario)?;

    match Usuarios::new(config).and_then(|mut db| db.update(&id_usuario, &novo)) {
        Ok(true) => msg_success!(Message::RecordUpdated(LABEL.to_string(), id_usuario)),
        Ok(false) => msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_usuario)),
        Err(err) => {
            tracing::error!("erro ao atualizar usuario: {err}");
            msg_error!(Message::RecordUpdateFailed(LABEL.to_string(), id_usuario));
        }
    }

    Ok(())
}

fn excluir(config: &Config) -> Result<()> {
    let id_usuario = validate::prompt_string(PROMPT_ID_DELETE, None)?;

    match Usuarios::new(config).and_then(|mut db| db.delete(&id_usuario)) {
        Ok(true) => msg_success!(Message::RecordDeleted(LABEL.to_string(), id_usuario)),
        Ok(false) => msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_usuario)),
        Err(err) => {
            tracing::error!("erro ao excluir usuario: {err}");
            msg_error!(Message::RecordDeleteFailed(LABEL.to_string(), id_usuario));
        }
    }

    Ok(())
}
