use super::AppState;
use crate::db::previsoes::{Previsao, Previsoes};
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
        .route("/previsoes", get(list).post(create))
        .route("/previsoes/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Previsao>> {
    let previsoes = Previsoes::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar previsões: {err}");
            Vec::new()
        });
    Json(previsoes)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let previsao: Previsao = match serde_json::from_value(body) {
        Ok(previsao) => previsao,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar previsão" })),
            )
                .into_response()
        }
    };

    match Previsoes::new(&state.config).and_then(|mut db| db.create(&previsao)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Previsão criada com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar previsão: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar previsão" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /previsoes/{id}`.
#[derive(Debug, Deserialize)]
struct PrevisaoUpdate {
    novo_id_usuario: String,
    nova_taxa_sucesso: f64,
    nova_categoria: String,
    nova_data_previsao: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: PrevisaoUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar previsão" })),
            )
                .into_response()
        }
    };
    let nova = Previsao {
        id_previsao: id.clone(),
        id_usuario: dados.novo_id_usuario,
        taxa_sucesso: dados.nova_taxa_sucesso,
        categoria: dados.nova_categoria,
        data_previsao: dados.nova_data_previsao,
    };

    // Zero rows matched and store failure share the same 404.
    match Previsoes::new(&state.config).and_then(|mut db| db.update(&id, &nova)) {
        Ok(true) => Json(json!({ "message": "Previsão atualizada com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar previsão {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Previsoes::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Previsão deletada com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Previsão não encontrada ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar previsão {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Previsão não encontrada ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Previsão não encontrada ou erro na atualização" })),
    )
        .into_response()
}
