//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Messages are phrased
//! around "registro de <entidade>" so one variant serves every entity
//! regardless of grammatical gender.

use super::types::Message;
use crate::libs::config::ENV_DATABASE;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CRUD MESSAGES ===
            Message::RecordInserted(label, id) => format!("Registro de {} (ID: {}) adicionado com sucesso!", label, id),
            Message::RecordInsertFailed(label, err) => format!("Falha ao adicionar registro de {}: {}", label, err),
            Message::RecordUpdated(label, id) => format!("Os dados do registro de {} com ID {} foram atualizados com sucesso!", label, id),
            Message::RecordUpdateFailed(label, id) => {
                format!("Falha ao atualizar. Nenhum registro de {} com ID {} foi encontrado ou ocorreu um erro.", label, id)
            }
            Message::RecordDeleted(label, id) => format!("Registro de {} com ID {} excluído com sucesso!", label, id),
            Message::RecordDeleteFailed(label, id) => {
                format!("Falha ao excluir. Nenhum registro de {} com ID {} foi encontrado ou ocorreu um erro.", label, id)
            }
            Message::NoRecordsFound(label) => format!("Nenhum registro de {} encontrado.", label),
            Message::ListFailed(label, err) => format!("Erro ao listar {}: {}", label, err),
            Message::ListHeader(label) => format!("--- Lista de {} ---", label),

            // === EXPORT MESSAGES ===
            Message::ExportStarted(label) => format!("Exportando dados de {} para JSON...", label),
            Message::ExportNothingToDo(label) => format!("Nenhum registro de {} cadastrado para exportar.", label),
            Message::ExportReadFailed(err) => format!("Não foi possível obter os dados para exportar: {}", err),
            Message::ExportWriteFailed(err) => format!("Erro ao escrever o arquivo JSON: {}", err),
            Message::ExportCompleted(file) => format!("Dados exportados com sucesso para {}.", file),
            Message::ExportFailed => "Falha ao exportar os dados.".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarted(addr) => format!("API disponível em http://{}", addr),

            // === CONFIGURATION MESSAGES ===
            Message::DatabaseNotConfigured => {
                format!("Banco de dados não configurado. Defina a variável de ambiente {}.", ENV_DATABASE)
            }

            // === MENU MESSAGES ===
            Message::Goodbye => "Encerrando o sistema... até logo!".to_string(),
        };
        write!(f, "{}", text)
    }
}
