// Menu prompts
pub const PROMPT_MAIN_MENU: &str = "Sistema de Gerenciamento de Aprendizagem";
pub const PROMPT_ID_UPDATE: &str = "Digite o Id do registro que deseja atualizar";
pub const PROMPT_ID_DELETE: &str = "Digite o Id do registro que deseja excluir";

// Usuario prompts
pub const PROMPT_USUARIO_NOME: &str = "Digite o nome do usuario";
pub const PROMPT_USUARIO_USERNAME: &str = "Digite o username do usuario";
pub const PROMPT_USUARIO_EMAIL: &str = "Digite o email do usuario";
pub const PROMPT_USUARIO_SENHA: &str = "Digite a senha do usuario";
pub const PROMPT_USUARIO_AREA: &str = "Digite a area do usuario (padrão: SoftSkills)";
pub const PROMPT_USUARIO_ACESSIBILIDADE: &str = "Digite a acessibilidade do usuario (padrão: nenhuma)";
pub const PROMPT_USUARIO_MODULOS_CONCLUIDOS: &str = "Digite o número de módulos concluídos (padrão: 0)";
pub const PROMPT_USUARIO_XP_TOTAL: &str = "Digite o xp_total do usuario (padrão: 0)";
pub const PROMPT_USUARIO_DATA_CADASTRO: &str = "Digite a data de cadastro do usuario (DD/MM/AAAA HH:MM)";

// Trilha prompts
pub const PROMPT_TRILHA_TITULO: &str = "Digite o titulo da trilha";
pub const PROMPT_TRILHA_DESCRICAO: &str = "Digite a descricao da trilha";
pub const PROMPT_TRILHA_AREA_FOCO: &str = "Digite a area_foco da trilha";
pub const PROMPT_TRILHA_XP: &str = "Digite a xp_trilha da trilha";
pub const PROMPT_TRILHA_DATA_CRIACAO: &str = "Digite a data de criação da trilha (DD/MM/AAAA HH:MM)";

// Modulo prompts
pub const PROMPT_MODULO_ID_TRILHA: &str = "Digite o id_trilha do modulo";
pub const PROMPT_MODULO_TITULO: &str = "Digite o titulo do modulo";
pub const PROMPT_MODULO_DESCRICAO: &str = "Digite a descricao do modulo";
pub const PROMPT_MODULO_TIPO: &str = "Digite o tipo do modulo";
pub const PROMPT_MODULO_CONTEUDO: &str = "Digite o conteudo do modulo";
pub const PROMPT_MODULO_XP_RECOMPENSA: &str = "Digite a xp_recompensa do modulo";
pub const PROMPT_MODULO_ORDEM: &str = "Digite a ordem do modulo";
pub const PROMPT_MODULO_ADAPTACAO: &str = "Digite a adaptacao_necessaria do modulo";

// Progresso prompts
pub const PROMPT_PROGRESSO_ID_USUARIO: &str = "Digite o id_usuario do progresso";
pub const PROMPT_PROGRESSO_ID_MODULO: &str = "Digite o id_modulo do progresso";
pub const PROMPT_PROGRESSO_DATA_CONCLUSAO: &str = "Digite a data de conclusão do progresso (DD/MM/AAAA HH:MM)";

// Sugestao prompts
pub const PROMPT_SUGESTAO_ID_USUARIO: &str = "Digite o id_usuario da sugestão";
pub const PROMPT_SUGESTAO_ID_TRILHA: &str = "Digite o id_trilha da sugestão";
pub const PROMPT_SUGESTAO_DATA: &str = "Digite a data da sugestão (DD/MM/AAAA HH:MM)";

// Previsao prompts
pub const PROMPT_PREVISAO_ID_USUARIO: &str = "Digite o id_usuario da previsão";
pub const PROMPT_PREVISAO_TAXA_SUCESSO: &str = "Digite a taxa_sucesso da previsão";
pub const PROMPT_PREVISAO_CATEGORIA: &str = "Digite a categoria da previsão";
pub const PROMPT_PREVISAO_DATA: &str = "Digite a data da previsão (DD/MM/AAAA HH:MM)";
