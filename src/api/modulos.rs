use super::AppState;
use crate::db::modulos::{Modulo, Modulos};
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
        .route("/modulos", get(list).post(create))
        .route("/modulos/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Modulo>> {
    let modulos = Modulos::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar módulos: {err}");
            Vec::new()
        });
    Json(modulos)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let modulo: Modulo = match serde_json::from_value(body) {
        Ok(modulo) => modulo,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar módulo" })),
            )
                .into_response()
        }
    };

    match Modulos::new(&state.config).and_then(|mut db| db.create(&modulo)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Módulo criado com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar módulo: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar módulo" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /modulos/{id}`.
#[derive(Debug, Deserialize)]
struct ModuloUpdate {
    novo_id_trilha: String,
    novo_titulo: String,
    nova_descricao: String,
    novo_tipo: String,
    novo_conteudo: String,
    nova_xp_recompensa: i64,
    nova_ordem: i64,
    nova_adaptacao_necessaria: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: ModuloUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar módulo" })),
            )
                .into_response()
        }
    };
    let novo = Modulo {
        id_modulo: id.clone(),
        id_trilha: dados.novo_id_trilha,
        titulo: dados.novo_titulo,
        descricao: dados.nova_descricao,
        tipo: dados.novo_tipo,
        conteudo: dados.novo_conteudo,
        xp_recompensa: dados.nova_xp_recompensa,
        ordem: dados.nova_ordem,
        adaptacao_necessaria: dados.nova_adaptacao_necessaria,
    };

    // Zero rows matched and store failure share the same 404.
    match Modulos::new(&state.config).and_then(|mut db| db.update(&id, &novo)) {
        Ok(true) => Json(json!({ "message": "Módulo atualizado com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar módulo {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Modulos::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Módulo deletado com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Módulo não encontrado ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar módulo {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Módulo não encontrado ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Módulo não encontrado ou erro na atualização" })),
    )
        .into_response()
}
