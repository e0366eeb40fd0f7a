//! `viewsmith-api`
//!
//! **Responsibility:** the generation service the browser shell talks to.
//!
//! This crate provides:
//! - Bearer-token authentication of generation requests
//! - Prompt → model → fenced-code-block → stored artifact pipeline
//! - Serving of per-user artifacts back to the shell

pub mod app;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod store;

pub use app::{AppState, build_app};
pub use config::Config;
pub use store::ComponentStore;
