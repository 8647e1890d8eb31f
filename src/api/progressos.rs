use super::AppState;
use crate::db::progressos::{Progresso, Progressos};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/progressos", get(list).post(create))
        .route("/progressos/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Progresso>> {
    let progressos = Progressos::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar progressos: {err}");
            Vec::new()
        });
    Json(progressos)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let progresso: Progresso = match serde_json::from_value(body) {
        Ok(progresso) => progresso,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar progresso" })),
            )
                .into_response()
        }
    };

    match Progressos::new(&state.config).and_then(|mut db| db.create(&progresso)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Progresso criado com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar progresso: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar progresso" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /progressos/{id}`.
#[derive(Debug, Deserialize)]
struct ProgressoUpdate {
    novo_id_usuario: String,
    novo_id_modulo: String,
    nova_data_conclusao: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: ProgressoUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar progresso" })),
            )
                .into_response()
        }
    };
    let novo = Progresso {
        id_progresso: id.clone(),
        id_usuario: dados.novo_id_usuario,
        id_modulo: dados.novo_id_modulo,
        data_conclusao: dados.nova_data_conclusao,
    };

    // Zero rows matched and store failure share the same 404.
    match Progressos::new(&state.config).and_then(|mut db| db.update(&id, &novo)) {
        Ok(true) => Json(json!({ "message": "Progresso atualizado com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar progresso {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Progressos::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Progresso deletado com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Progresso não encontrado ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar progresso {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Progresso não encontrado ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Progresso não encontrado ou erro na atualização" })),
    )
        .into_response()
}
