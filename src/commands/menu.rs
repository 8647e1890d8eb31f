use super::{modulos, previsoes, progressos, sugestoes, trilhas, usuarios};
use crate::libs::config::Config;
use crate::libs::messages::prompts::PROMPT_MAIN_MENU;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const MAIN_MENU_ITEMS: [&str; 7] = [
    "Gerenciar Usuarios",
    "Gerenciar Trilhas",
    "Gerenciar Modulos",
    "Gerenciar Progressos",
    "Gerenciar Sugestoes",
    "Gerenciar Previsoes",
    "Sair",
];

/// Runs the interactive main menu until the user chooses to leave.
pub fn cmd(config: &Config) -> Result<()> {
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT_MAIN_MENU)
            .items(&MAIN_MENU_ITEMS)
            .default(0)
            .interact()?;

        match selection {
            0 => usuarios::menu(config)?,
            1 => trilhas::menu(config)?,
            2 => modulos::menu(config)?,
            3 => progressos::menu(config)?,
            4 => sugestoes::menu(config)?,
            5 => previsoes::menu(config)?,
            _ => {
                msg_print!(Message::Goodbye, true);
                return Ok(());
            }
        }
    }
}
