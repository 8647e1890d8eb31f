//! Shared infrastructure: configuration, validation, messaging, rendering
//! and export.

pub mod config;
pub mod export;
pub mod messages;
pub mod validate;
pub mod view;
