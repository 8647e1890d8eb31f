//! Terminal table rendering for console listings.

use crate::db::modulos::Modulo;
use crate::db::previsoes::Previsao;
use crate::db::progressos::Progresso;
use crate::db::sugestoes::Sugestao;
use crate::db::trilhas::Trilha;
use crate::db::usuarios::Usuario;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Passwords are rendered masked, never in clear text.
    pub fn usuarios(usuarios: &[Usuario]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID", "NOME", "USERNAME", "EMAIL", "SENHA", "AREA", "ACESSIBILIDADE", "MODULOS", "XP", "CADASTRO"
        ]);
        for usuario in usuarios {
            table.add_row(row![
                usuario.id_usuario,
                usuario.nome,
                usuario.username,
                usuario.email,
                "*".repeat(usuario.senha.chars().count()),
                usuario.area,
                usuario.acessibilidade,
                usuario.modulos_concluidos,
                usuario.xp_total,
                usuario.data_cadastro
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn trilhas(trilhas: &[Trilha]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITULO", "DESCRICAO", "AREA FOCO", "XP", "CRIACAO"]);
        for trilha in trilhas {
            table.add_row(row![
                trilha.id_trilha,
                trilha.titulo,
                trilha.descricao,
                trilha.area_foco,
                trilha.xp_trilha,
                trilha.data_criacao
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn modulos(modulos: &[Modulo]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID", "ID TRILHA", "TITULO", "DESCRICAO", "TIPO", "CONTEUDO", "XP", "ORDEM", "ADAPTACAO"
        ]);
        for modulo in modulos {
            table.add_row(row![
                modulo.id_modulo,
                modulo.id_trilha,
                modulo.titulo,
                modulo.descricao,
                modulo.tipo,
                modulo.conteudo,
                modulo.xp_recompensa,
                modulo.ordem,
                modulo.adaptacao_necessaria
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn progressos(progressos: &[Progresso]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "ID USUARIO", "ID MODULO", "CONCLUSAO"]);
        for progresso in progressos {
            table.add_row(row![
                progresso.id_progresso,
                progresso.id_usuario,
                progresso.id_modulo,
                progresso.data_conclusao
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sugestoes(sugestoes: &[Sugestao]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "ID USUARIO", "ID TRILHA", "DATA"]);
        for sugestao in sugestoes {
            table.add_row(row![
                sugestao.id_sugestao,
                sugestao.id_usuario,
                sugestao.id_trilha,
                sugestao.data_sugestao
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn previsoes(previsoes: &[Previsao]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "ID USUARIO", "TAXA SUCESSO", "CATEGORIA", "DATA"]);
        for previsao in previsoes {
            table.add_row(row![
                previsao.id_previsao,
                previsao.id_usuario,
                previsao.taxa_sucesso,
                previsao.categoria,
                previsao.data_previsao
            ]);
        }
        table.printstd();

        Ok(())
    }
}
