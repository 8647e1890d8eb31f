#[cfg(test)]
mod tests {
    use leme::db::usuarios::{Usuario, Usuarios};
    use leme::libs::config::Config;
    use leme::libs::export;

    // Exports land in the working directory, so everything that touches the
    // cwd lives in this single test.
    #[test]
    fn test_export_writes_json_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: Some(temp_dir.path().join("leme.db")),
            addr: "127.0.0.1:0".parse().unwrap(),
        };
        std::env::set_current_dir(temp_dir.path()).unwrap();

        // Empty collection: success, but no file is written.
        assert!(export::export_usuarios(&config));
        assert!(!temp_dir.path().join(export::FILE_USUARIOS).exists());

        let mut usuarios = Usuarios::new(&config).unwrap();
        usuarios
            .create(&Usuario {
                id_usuario: "u-1".to_string(),
                nome: "Maria Lima".to_string(),
                username: "maria.lima".to_string(),
                email: "maria@example.com".to_string(),
                senha: "segredo".to_string(),
                area: "SoftSkills".to_string(),
                acessibilidade: "nenhuma".to_string(),
                modulos_concluidos: 0,
                xp_total: 0,
                data_cadastro: "2026-08-28T10:30:00".to_string(),
            })
            .unwrap();

        assert!(export::export_usuarios(&config));
        let content = std::fs::read_to_string(temp_dir.path().join(export::FILE_USUARIOS)).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["nome"], "Maria Lima");
        assert_eq!(rows[0]["data_cadastro"], "2026-08-28T10:30:00");

        // Unconfigured database fails the export.
        let sem_banco = Config {
            database: None,
            addr: "127.0.0.1:0".parse().unwrap(),
        };
        assert!(!export::export_usuarios(&sem_banco));
    }
}
