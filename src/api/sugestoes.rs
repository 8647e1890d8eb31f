use super::AppState;
use crate::db::sugestoes::{Sugestao, Sugestoes};
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
        .route("/sugestoes", get(list).post(create))
        .route("/sugestoes/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Sugestao>> {
    let sugestoes = Sugestoes::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar sugestões: {err}");
            Vec::new()
        });
    Json(sugestoes)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let sugestao: Sugestao = match serde_json::from_value(body) {
        Ok(sugestao) => sugestao,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar sugestão" })),
            )
                .into_response()
        }
    };

    match Sugestoes::new(&state.config).and_then(|mut db| db.create(&sugestao)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Sugestão criada com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar sugestão: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar sugestão" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /sugestoes/{id}`.
#[derive(Debug, Deserialize)]
struct SugestaoUpdate {
    novo_id_usuario: String,
    novo_id_trilha: String,
    nova_data_sugestao: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: SugestaoUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar sugestão" })),
            )
                .into_response()
        }
    };
    let nova = Sugestao {
        id_sugestao: id.clone(),
        id_usuario: dados.novo_id_usuario,
        id_trilha: dados.novo_id_trilha,
        data_sugestao: dados.nova_data_sugestao,
    };

    // Zero rows matched and store failure share the same 404.
    match Sugestoes::new(&state.config).and_then(|mut db| db.update(&id, &nova)) {
        Ok(true) => Json(json!({ "message": "Sugestão atualizada com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar sugestão {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Sugestoes::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Sugestão deletada com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Sugestão não encontrada ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar sugestão {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Sugestão não encontrada ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Sugestão não encontrada ou erro na atualização" })),
    )
        .into_response()
}
