//! # Authentication Module
//!
//! Client-side session handling: token persistence, decode-only JWT claims,
//! and the session gate that answers "is the current caller authenticated".
//! The server is the actual authority on token validity; this module only
//! inspects what it already holds.

pub mod jwt;
pub mod session;
pub mod store;
