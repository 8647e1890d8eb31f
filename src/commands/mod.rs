//! Command implementations for the `leme` binary: the interactive console
//! menus, the HTTP API server and the JSON export.

pub mod export;
pub mod menu;
pub mod modulos;
pub mod previsoes;
pub mod progressos;
pub mod serve;
pub mod sugestoes;
pub mod trilhas;
pub mod usuarios;

/// Operations offered by every entity menu, in display order.
pub(crate) const ENTITY_MENU_ITEMS: [&str; 6] = [
    "Inserir um novo registro",
    "Listar todos os registros",
    "Atualizar os dados de um registro",
    "Excluir um registro",
    "Exportar para JSON",
    "Voltar ao menu principal",
];
