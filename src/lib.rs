//! # RankWise Client
//!
//! Client SDK for the RankWise SEO content platform. All business logic —
//! article generation, keyword metrics, SEO scoring, authentication,
//! persistence — lives in the remote HTTP API; this crate is the client
//! side: session and token handling, a typed gateway client with uniform
//! error mapping, list view-models for the library and research screens,
//! and markdown editor helpers.
//!
//! ## Architecture
//! - `config`: environment-driven client settings
//! - `auth`: token store, decode-only JWT claims, session gate
//! - `api`: wire models and the one-method-per-endpoint gateway client
//! - `viewmodel`: filter/sort projections over fetched collections
//! - `editor`: selection-based markdown helpers
//! - `error`: the uniform [`ClientError`] surface
//!
//! ## Quick start
//! ```no_run
//! use std::sync::Arc;
//! use rankwise::api::client::ApiClient;
//! use rankwise::auth::session::SessionGate;
//! use rankwise::auth::store::MemoryTokenStore;
//! use rankwise::config::Config;
//!
//! # async fn run() -> rankwise::Result<()> {
//! let config = Config::from_env()?;
//! let store = Arc::new(MemoryTokenStore::new());
//! let api = ApiClient::new(&config, store.clone())?;
//! let gate = SessionGate::new(store);
//!
//! let tokens = api.login("user@example.com", "hunter2").await?;
//! gate.persist_session(&tokens.access_token, &tokens.refresh_token);
//! assert!(gate.is_authenticated());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod viewmodel;

pub use error::{ClientError, Result};
