//! Database layer.
//!
//! One module per entity over SQLite, kasl-style: SQL text lives in module
//! constants, each entity handle wraps its own [`rusqlite::Connection`] and
//! bootstraps its table on construction. Handles are created fresh per
//! operation call site, so every operation runs one statement on one
//! short-lived connection with autocommit. No pooling, no cross-call
//! transactions, no retry.
//!
//! Referential integrity between entities is not enforced here; reference
//! columns (`id_usuario`, `id_trilha`, `id_modulo`) are plain text.

pub mod db;
pub mod modulos;
pub mod previsoes;
pub mod progressos;
pub mod sugestoes;
pub mod trilhas;
pub mod usuarios;
