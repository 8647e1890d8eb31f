//! # Leme - Learning Management Record Keeper
//!
//! A command-line and HTTP utility for keeping the records of a small
//! learning platform: learners, learning tracks and their modules, plus
//! the completion, recommendation and forecast entries derived from them.
//!
//! ## Features
//!
//! - **Interactive Console**: Menu-driven insert, list, update and delete
//!   for every collection, with field-by-field validated input
//! - **HTTP JSON API**: The same collections served over REST-style routes
//! - **Data Export**: Dump any collection (or all of them) to JSON files
//! - **SQLite Storage**: One table per collection, created on first use
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leme::libs::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     leme::commands::menu::cmd(&config)
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
