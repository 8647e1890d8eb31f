#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use leme::api::build_router;
    use leme::libs::config::Config;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn test_router(temp_dir: &TempDir) -> Router {
        build_router(Config {
            database: Some(temp_dir.path().join("leme.db")),
            addr: "127.0.0.1:0".parse().unwrap(),
        })
    }

    async fn send_json(router: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send_empty(router: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn usuario_body(id: &str) -> Value {
        json!({
            "id_usuario": id,
            "nome": "Maria Lima",
            "username": "maria.lima",
            "email": "maria@example.com",
            "senha": "segredo",
            "area": "SoftSkills",
            "acessibilidade": "nenhuma",
            "modulos_concluidos": 0,
            "xp_total": 0,
            "data_cadastro": "2026-08-28T10:30:00"
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (status, body) = send_empty(test_router(&temp_dir), Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_usuario_create_then_list() {
        let temp_dir = tempfile::tempdir().unwrap();

        let (status, body) = send_json(test_router(&temp_dir), Method::POST, "/usuarios", usuario_body("u-1")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Usuário criado com sucesso");

        let (status, body) = send_empty(test_router(&temp_dir), Method::GET, "/usuarios").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id_usuario"], "u-1");
    }

    #[tokio::test]
    async fn test_usuario_create_missing_field_is_bad_request() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut body = usuario_body("u-1");
        body.as_object_mut().unwrap().remove("email");
        let (status, body) = send_json(test_router(&temp_dir), Method::POST, "/usuarios", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Dados incompletos para criar usuário");

        // Nothing was inserted.
        let (_, body) = send_empty(test_router(&temp_dir), Method::GET, "/usuarios").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_usuario_update() {
        let temp_dir = tempfile::tempdir().unwrap();
        send_json(test_router(&temp_dir), Method::POST, "/usuarios", usuario_body("u-1")).await;

        let update = json!({
            "novo_nome": "Maria Souza",
            "novo_username": "maria.souza",
            "novo_email": "maria.souza@example.com",
            "nova_senha": "outro",
            "nova_area": "HardSkills",
            "nova_acessibilidade": "libras",
            "novo_modulos_concluidos": 3,
            "novo_xp_total": 150,
            "nova_data_cadastro": "2026-08-28T10:30:00"
        });
        let (status, body) = send_json(test_router(&temp_dir), Method::PUT, "/usuarios/u-1", update).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Usuário atualizado com sucesso");

        let (_, body) = send_empty(test_router(&temp_dir), Method::GET, "/usuarios").await;
        assert_eq!(body.as_array().unwrap()[0]["nome"], "Maria Souza");
        assert_eq!(body.as_array().unwrap()[0]["xp_total"], 150);
    }

    #[tokio::test]
    async fn test_usuario_update_missing_field_is_bad_request() {
        let temp_dir = tempfile::tempdir().unwrap();
        send_json(test_router(&temp_dir), Method::POST, "/usuarios", usuario_body("u-1")).await;

        let (status, body) = send_json(
            test_router(&temp_dir),
            Method::PUT,
            "/usuarios/u-1",
            json!({ "novo_nome": "Maria Souza" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Dados incompletos para atualizar usuário");
    }

    #[tokio::test]
    async fn test_usuario_update_absent_id_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();

        let update = json!({
            "novo_nome": "Maria",
            "novo_username": "maria",
            "novo_email": "maria@example.com",
            "nova_senha": "segredo",
            "nova_area": "SoftSkills",
            "nova_acessibilidade": "nenhuma",
            "novo_modulos_concluidos": 0,
            "novo_xp_total": 0,
            "nova_data_cadastro": "2026-08-28T10:30:00"
        });
        let (status, body) = send_json(test_router(&temp_dir), Method::PUT, "/usuarios/nope", update).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Usuário não encontrado ou erro na atualização");
    }

    #[tokio::test]
    async fn test_usuario_delete_then_delete_again() {
        let temp_dir = tempfile::tempdir().unwrap();
        send_json(test_router(&temp_dir), Method::POST, "/usuarios", usuario_body("u-1")).await;

        let (status, body) = send_empty(test_router(&temp_dir), Method::DELETE, "/usuarios/u-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Usuário deletado com sucesso");

        let (status, body) = send_empty(test_router(&temp_dir), Method::DELETE, "/usuarios/u-1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Usuário não encontrado ou erro ao deletar");
    }

    #[tokio::test]
    async fn test_modulo_create_missing_xp_is_bad_request() {
        let temp_dir = tempfile::tempdir().unwrap();

        let body = json!({
            "id_modulo": "m-1",
            "id_trilha": "t-1",
            "titulo": "Introdução",
            "descricao": "Primeiro módulo",
            "tipo": "video",
            "conteudo": "https://example.com/aula",
            "ordem": 1,
            "adaptacao_necessaria": "nenhuma"
        });
        let (status, body) = send_json(test_router(&temp_dir), Method::POST, "/modulos", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Dados incompletos para criar módulo");

        let (_, body) = send_empty(test_router(&temp_dir), Method::GET, "/modulos").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trilha_create_then_delete() {
        let temp_dir = tempfile::tempdir().unwrap();

        let trilha = json!({
            "id_trilha": "t-1",
            "titulo": "Comunicação",
            "descricao": "Trilha de comunicação",
            "area_foco": "SoftSkills",
            "xp_trilha": 500,
            "data_criacao": "2026-08-28T10:30:00"
        });
        let (status, _) = send_json(test_router(&temp_dir), Method::POST, "/trilhas", trilha).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send_empty(test_router(&temp_dir), Method::DELETE, "/trilhas/t-1").await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send_empty(test_router(&temp_dir), Method::GET, "/trilhas").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_previsao_roundtrip_keeps_float() {
        let temp_dir = tempfile::tempdir().unwrap();

        let previsao = json!({
            "id_previsao": "pr-1",
            "id_usuario": "u-1",
            "taxa_sucesso": 0.85,
            "categoria": "alta",
            "data_previsao": "2026-08-28T13:00:00"
        });
        let (status, _) = send_json(test_router(&temp_dir), Method::POST, "/previsoes", previsao).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send_empty(test_router(&temp_dir), Method::GET, "/previsoes").await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows[0]["taxa_sucesso"], 0.85);
    }

    #[tokio::test]
    async fn test_list_with_unconfigured_database_is_empty_ok() {
        let router = build_router(Config {
            database: None,
            addr: "127.0.0.1:0".parse().unwrap(),
        });

        let (status, body) = send_empty(router, Method::GET, "/usuarios").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_unconfigured_database_is_not_found() {
        let router = build_router(Config {
            database: None,
            addr: "127.0.0.1:0".parse().unwrap(),
        });

        let (status, _) = send_empty(router, Method::DELETE, "/usuarios/u-1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
