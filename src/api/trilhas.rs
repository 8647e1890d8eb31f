use super::AppState;
use crate::db::trilhas::{Trilha, Trilhas};
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
        .route("/trilhas", get(list).post(create))
        .route("/trilhas/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Trilha>> {
    let trilhas = Trilhas::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar trilhas: {err}");
            Vec::new()
        });
    Json(trilhas)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let trilha: Trilha = match serde_json::from_value(body) {
        Ok(trilha) => trilha,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar trilha" })),
            )
                .into_response()
        }
    };

    match Trilhas::new(&state.config).and_then(|mut db| db.create(&trilha)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Trilha criada com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar trilha: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar trilha" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /trilhas/{id}`.
#[derive(Debug, Deserialize)]
struct TrilhaUpdate {
    novo_titulo: String,
    nova_descricao: String,
    nova_area_foco: String,
    nova_xp_trilha: i64,
    nova_data_criacao: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: TrilhaUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar trilha" })),
            )
                .into_response()
        }
    };
    let nova = Trilha {
        id_trilha: id.clone(),
        titulo: dados.novo_titulo,
        descricao: dados.nova_descricao,
        area_foco: dados.nova_area_foco,
        xp_trilha: dados.nova_xp_trilha,
        data_criacao: dados.nova_data_criacao,
    };

    // Zero rows matched and store failure share the same 404.
    match Trilhas::new(&state.config).and_then(|mut db| db.update(&id, &nova)) {
        Ok(true) => Json(json!({ "message": "Trilha atualizada com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar trilha {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Trilhas::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Trilha deletada com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Trilha não encontrada ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar trilha {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Trilha não encontrada ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Trilha não encontrada ou erro na atualização" })),
    )
        .into_response()
}
