#[cfg(test)]
mod tests {
    use leme::db::modulos::{Modulo, Modulos};
    use leme::db::previsoes::{Previsao, Previsoes};
    use leme::db::progressos::{Progresso, Progressos};
    use leme::db::sugestoes::{Sugestao, Sugestoes};
    use leme::db::trilhas::{Trilha, Trilhas};
    use leme::db::usuarios::{Usuario, Usuarios};
    use leme::libs::config::Config;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            database: Some(temp_dir.path().join("leme.db")),
            addr: "127.0.0.1:0".parse().unwrap(),
        }
    }

    fn sample_usuario(id: &str, nome: &str) -> Usuario {
        Usuario {
            id_usuario: id.to_string(),
            nome: nome.to_string(),
            username: "maria.lima".to_string(),
            email: "maria@example.com".to_string(),
            senha: "segredo".to_string(),
            area: "SoftSkills".to_string(),
            acessibilidade: "nenhuma".to_string(),
            modulos_concluidos: 0,
            xp_total: 0,
            data_cadastro: "2026-08-28T10:30:00".to_string(),
        }
    }

    #[test]
    fn test_usuario_create_and_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let mut usuarios = Usuarios::new(&config).unwrap();
        usuarios.create(&sample_usuario("u-1", "Maria")).unwrap();

        let rows = Usuarios::new(&config).unwrap().list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id_usuario, "u-1");
        assert_eq!(rows[0].email, "maria@example.com");
    }

    #[test]
    fn test_usuario_list_is_ordered_by_nome() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let mut usuarios = Usuarios::new(&config).unwrap();
        usuarios.create(&sample_usuario("u-2", "Zilda")).unwrap();
        usuarios.create(&sample_usuario("u-1", "Ana")).unwrap();

        let rows = usuarios.list().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].nome, "Ana");
        assert_eq!(rows[1].nome, "Zilda");
    }

    #[test]
    fn test_usuario_update_replaces_row() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let mut usuarios = Usuarios::new(&config).unwrap();
        usuarios.create(&sample_usuario("u-1", "Maria")).unwrap();

        let mut novo = sample_usuario("u-1", "Maria Lima");
        novo.xp_total = 150;
        assert!(usuarios.update("u-1", &novo).unwrap());

        let rows = usuarios.list().unwrap();
        assert_eq!(rows[0].nome, "Maria Lima");
        assert_eq!(rows[0].xp_total, 150);
    }

    #[test]
    fn test_usuario_update_absent_id_is_false() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let mut usuarios = Usuarios::new(&config).unwrap();
        let novo = sample_usuario("nope", "Maria");
        assert!(!usuarios.update("nope", &novo).unwrap());
    }

    #[test]
    fn test_usuario_delete() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let mut usuarios = Usuarios::new(&config).unwrap();
        usuarios.create(&sample_usuario("u-1", "Maria")).unwrap();

        assert!(usuarios.delete("u-1").unwrap());
        assert!(usuarios.list().unwrap().is_empty());
        // Second delete finds nothing.
        assert!(!usuarios.delete("u-1").unwrap());
    }

    #[test]
    fn test_trilha_crud_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let trilha = Trilha {
            id_trilha: "t-1".to_string(),
            titulo: "Comunicação".to_string(),
            descricao: "Trilha de comunicação".to_string(),
            area_foco: "SoftSkills".to_string(),
            xp_trilha: 500,
            data_criacao: "2026-08-28T10:30:00".to_string(),
        };

        let mut trilhas = Trilhas::new(&config).unwrap();
        trilhas.create(&trilha).unwrap();

        let rows = trilhas.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].titulo, "Comunicação");
        assert_eq!(rows[0].xp_trilha, 500);

        assert!(trilhas.delete("t-1").unwrap());
        assert!(trilhas.list().unwrap().is_empty());
    }

    #[test]
    fn test_modulo_list_is_ordered_by_ordem() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let modulo = |id: &str, ordem: i64| Modulo {
            id_modulo: id.to_string(),
            id_trilha: "t-1".to_string(),
            titulo: format!("Modulo {ordem}"),
            descricao: "Introdução".to_string(),
            tipo: "video".to_string(),
            conteudo: "https://example.com/aula".to_string(),
            xp_recompensa: 50,
            ordem,
            adaptacao_necessaria: "nenhuma".to_string(),
        };

        let mut modulos = Modulos::new(&config).unwrap();
        modulos.create(&modulo("m-2", 2)).unwrap();
        modulos.create(&modulo("m-1", 1)).unwrap();

        let rows = modulos.list().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id_modulo, "m-1");
        assert_eq!(rows[1].id_modulo, "m-2");
    }

    #[test]
    fn test_progresso_crud_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let progresso = Progresso {
            id_progresso: "p-1".to_string(),
            id_usuario: "u-1".to_string(),
            id_modulo: "m-1".to_string(),
            data_conclusao: "2026-08-28T11:00:00".to_string(),
        };

        let mut progressos = Progressos::new(&config).unwrap();
        progressos.create(&progresso).unwrap();

        let rows = progressos.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id_modulo, "m-1");

        let novo = Progresso {
            id_modulo: "m-2".to_string(),
            ..progresso
        };
        assert!(progressos.update("p-1", &novo).unwrap());
        assert_eq!(progressos.list().unwrap()[0].id_modulo, "m-2");
    }

    #[test]
    fn test_sugestao_crud_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let sugestao = Sugestao {
            id_sugestao: "s-1".to_string(),
            id_usuario: "u-1".to_string(),
            id_trilha: "t-1".to_string(),
            data_sugestao: "2026-08-28T12:00:00".to_string(),
        };

        let mut sugestoes = Sugestoes::new(&config).unwrap();
        sugestoes.create(&sugestao).unwrap();
        assert_eq!(sugestoes.list().unwrap().len(), 1);
        assert!(sugestoes.delete("s-1").unwrap());
        assert!(!sugestoes.delete("s-1").unwrap());
    }

    #[test]
    fn test_previsao_keeps_float_precision() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(&temp_dir);

        let previsao = Previsao {
            id_previsao: "pr-1".to_string(),
            id_usuario: "u-1".to_string(),
            taxa_sucesso: 0.85,
            categoria: "alta".to_string(),
            data_previsao: "2026-08-28T13:00:00".to_string(),
        };

        let mut previsoes = Previsoes::new(&config).unwrap();
        previsoes.create(&previsao).unwrap();

        let rows = previsoes.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].taxa_sucesso, 0.85);
        assert_eq!(rows[0].categoria, "alta");
    }

    #[test]
    fn test_unconfigured_database_fails_per_operation() {
        let config = Config {
            database: None,
            addr: "127.0.0.1:0".parse().unwrap(),
        };

        assert!(Usuarios::new(&config).is_err());
        assert!(Trilhas::new(&config).is_err());
        assert!(Previsoes::new(&config).is_err());
    }
}
