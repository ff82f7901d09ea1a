//! # API Module
//!
//! The typed gateway to the remote RankWise API: request/response models and
//! the one-method-per-endpoint client. Everything the product does besides
//! session handling and local list shaping goes through here.

pub mod client;
pub mod models;
