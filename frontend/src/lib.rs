//! Client-side data access for Conduit articles.
//!
//! Pages depend on [`api::ArticlesApi`]. Until the article endpoints are
//! wired up, [`api::ArticleStore`] serves them from process memory.

pub mod api;
pub mod config;
pub mod models;

pub use api::{ApiResult, ArticleStore, ArticlesApi};
pub use config::StoreConfig;
