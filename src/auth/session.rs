//! Session Gate
//!
//! Composes the token store and claims decoding to answer the only two
//! questions screens ask: "is the caller authenticated" and "who are they".
//! Per tab/process the session is a two-state machine: Anonymous →
//! (persist_session) → Authenticated → (expiry elapses or clear_session) →
//! Anonymous. All transitions are synchronous except the optional refresh.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::auth::jwt;
use crate::auth::store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};
use crate::error::{ClientError, Result};

/// Client-side authentication state, backed by an injectable token store.
#[derive(Clone)]
pub struct SessionGate {
    tokens: Arc<dyn TokenStore>,
}

impl SessionGate {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// True iff an access token is stored, decodes, and its expiry is
    /// strictly in the future. A malformed token is "not authenticated",
    /// never an error.
    pub fn is_authenticated(&self) -> bool {
        match self.tokens.get(ACCESS_TOKEN_KEY) {
            Some(token) => match jwt::decode_claims(&token) {
                Ok(claims) => claims.exp > Utc::now().timestamp(),
                Err(_) => false,
            },
            None => false,
        }
    }

    /// The email claim of the stored access token, or `None` when no token
    /// is stored or it does not decode. Never errors.
    pub fn current_identity(&self) -> Option<String> {
        let token = self.tokens.get(ACCESS_TOKEN_KEY)?;
        jwt::decode_claims(&token).ok().map(|claims| claims.email)
    }

    /// Overwrite both stored tokens unconditionally.
    pub fn persist_session(&self, access_token: &str, refresh_token: &str) {
        self.tokens.set(ACCESS_TOKEN_KEY, access_token);
        self.tokens.set(REFRESH_TOKEN_KEY, refresh_token);
        info!("session persisted");
    }

    /// Remove both stored tokens unconditionally. Idempotent.
    pub fn clear_session(&self) {
        self.tokens.remove(ACCESS_TOKEN_KEY);
        self.tokens.remove(REFRESH_TOKEN_KEY);
        info!("session cleared");
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Fails immediately, without any network call, when no refresh token is
    /// stored. On success the new access token is persisted and the refresh
    /// token is kept; on any failure the stored state is left untouched.
    /// No retry — the caller decides whether to send the user to login.
    pub async fn renew_access_token(&self, api: &ApiClient) -> Result<()> {
        let refresh_token = self
            .tokens
            .get(REFRESH_TOKEN_KEY)
            .ok_or_else(|| ClientError::Session("no refresh token stored".to_string()))?;

        let renewed = api.refresh_token(&refresh_token).await?;
        self.tokens.set(ACCESS_TOKEN_KEY, &renewed.access_token);
        debug!("access token renewed");
        Ok(())
    }
}
