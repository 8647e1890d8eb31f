use super::AppState;
use crate::db::usuarios::{Usuario, Usuarios};
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
        .route("/usuarios", get(list).post(create))
        .route("/usuarios/:id", put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Usuario>> {
    let usuarios = Usuarios::new(&state.config)
        .and_then(|mut db| db.list())
        .unwrap_or_else(|err| {
            tracing::error!("erro ao listar usuários: {err}");
            Vec::new()
        });
    Json(usuarios)
}

async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let usuario: Usuario = match serde_json::from_value(body) {
        Ok(usuario) => usuario,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para criar usuário" })),
            )
                .into_response()
        }
    };

    match Usuarios::new(&state.config).and_then(|mut db| db.create(&usuario)) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Usuário criado com sucesso" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao criar usuário: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao criar usuário" })),
            )
                .into_response()
        }
    }
}

/// Full replacement field set for `PUT /usuarios/{id}`.
#[derive(Debug, Deserialize)]
struct UsuarioUpdate {
    novo_nome: String,
    novo_username: String,
    novo_email: String,
    nova_senha: String,
    nova_area: String,
    nova_acessibilidade: String,
    novo_modulos_concluidos: i64,
    novo_xp_total: i64,
    nova_data_cadastro: String,
}

async fn update(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let dados: UsuarioUpdate = match serde_json::from_value(body) {
        Ok(dados) => dados,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Dados incompletos para atualizar usuário" })),
            )
                .into_response()
        }
    };
    let novo = Usuario {
        id_usuario: id.clone(),
        nome: dados.novo_nome,
        username: dados.novo_username,
        email: dados.novo_email,
        senha: dados.nova_senha,
        area: dados.nova_area,
        acessibilidade: dados.nova_acessibilidade,
        modulos_concluidos: dados.novo_modulos_concluidos,
        xp_total: dados.novo_xp_total,
        data_cadastro: dados.nova_data_cadastro,
    };

    // Zero rows matched and store failure share the same 404.
    match Usuarios::new(&state.config).and_then(|mut db| db.update(&id, &novo)) {
        Ok(true) => Json(json!({ "message": "Usuário atualizado com sucesso" })).into_response(),
        Ok(false) => not_found_response(),
        Err(err) => {
            tracing::error!("erro ao atualizar usuário {id}: {err}");
            not_found_response()
        }
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match Usuarios::new(&state.config).and_then(|mut db| db.delete(&id)) {
        Ok(true) => Json(json!({ "message": "Usuário deletado com sucesso" })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Usuário não encontrado ou erro ao deletar" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("erro ao deletar usuário {id}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Usuário não encontrado ou erro ao deletar" })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Usuário não encontrado ou erro na atualização" })),
    )
        .into_response()
}
