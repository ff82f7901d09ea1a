//! API Gateway Client
//!
//! One method per remote endpoint. Every method builds a single HTTP
//! request, awaits a single response, and maps it onto [`crate::error::ClientError`]
//! uniformly:
//!
//! - transport failure → `Network`, no retry, no backoff;
//! - non-2xx → `Api` with a message parsed from the JSON error body, or a
//!   per-endpoint fallback when the body is unparseable;
//! - 2xx → the typed body.
//!
//! Authenticated calls read the access token from the [`TokenStore`] at call
//! time, never caching it, so a token refreshed mid-session is picked up on
//! the next call without extra plumbing. A missing token fails locally as
//! `Session` before any I/O.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::auth::store::{ACCESS_TOKEN_KEY, TokenStore};
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::api::models::{
    Acknowledgement, Article, ArticleDraft, Credentials, GenerateRequest, KeywordReport,
    RenewedToken, ResetPasswordRequest, SeoAnalysis, SeoAnalyzeRequest, SessionTokens,
    VerifyEmailRequest,
};

/// HTTP client for the RankWise API.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            tokens,
        })
    }

    // --- Auth endpoints ----------------------------------------------------

    /// `POST /auth/register` — create an account; a verification code is
    /// emailed to the address.
    pub async fn register(&self, email: &str, password: &str) -> Result<Acknowledgement> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("auth/register", &body, "Registration failed. Please try again.")
            .await
    }

    /// `POST /auth/login` — exchange credentials for both session tokens.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionTokens> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("auth/login", &body, "Invalid email or password")
            .await
    }

    /// `POST /auth/verify` — confirm the emailed verification code.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<Acknowledgement> {
        let body = VerifyEmailRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        self.post_json("auth/verify", &body, "Email verification failed. Please try again.")
            .await
    }

    /// `POST /auth/resend-code` — ask for a fresh verification code.
    pub async fn resend_code(&self, email: &str) -> Result<Acknowledgement> {
        let body = serde_json::json!({ "email": email });
        self.post_json(
            "auth/resend-code",
            &body,
            "Could not resend the verification code. Please try again.",
        )
        .await
    }

    /// `POST /auth/password-reset-request` — email a reset code.
    pub async fn request_password_reset(&self, email: &str) -> Result<Acknowledgement> {
        let body = serde_json::json!({ "email": email });
        self.post_json(
            "auth/password-reset-request",
            &body,
            "Password reset request failed. Please try again.",
        )
        .await
    }

    /// `POST /auth/reset-password` — set a new password using a reset code.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<Acknowledgement> {
        let body = ResetPasswordRequest {
            email: email.to_string(),
            code: code.to_string(),
            new_password: new_password.to_string(),
        };
        self.post_json("auth/reset-password", &body, "Password reset failed. Please try again.")
            .await
    }

    /// `POST /auth/refresh` — exchange a refresh token for a new access
    /// token. Callers normally go through
    /// [`crate::auth::session::SessionGate::renew_access_token`].
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RenewedToken> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        self.post_json("auth/refresh", &body, "Session refresh failed")
            .await
    }

    // --- Keyword research --------------------------------------------------

    /// `GET /keywords/suggest?q=<query>` — unauthenticated suggestion lookup.
    pub async fn keyword_suggestions(&self, query: &str) -> Result<KeywordReport> {
        if query.trim().is_empty() {
            return Err(ClientError::Validation("query must not be empty".to_string()));
        }
        let mut url = self.endpoint("keywords/suggest")?;
        url.query_pairs_mut().append_pair("q", query);
        debug!("GET {url}");
        self.execute(
            self.http.get(url),
            "Failed to fetch keyword suggestions. Please try again.",
        )
        .await
    }

    // --- Article generation and library ------------------------------------

    /// `POST /generate/article` — generate a draft for a keyword.
    pub async fn generate_article(&self, request: &GenerateRequest) -> Result<ArticleDraft> {
        if request.keyword.trim().is_empty() {
            return Err(ClientError::Validation("keyword must not be empty".to_string()));
        }
        self.post_json_auth("generate/article", request, "Failed to generate article")
            .await
    }

    /// `POST /articles/` — save a draft; the server assigns the id.
    pub async fn save_article(&self, draft: &ArticleDraft) -> Result<Article> {
        self.post_json_auth("articles/", draft, "Failed to save article")
            .await
    }

    /// `GET /articles/` — the caller's full article library.
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let url = self.endpoint("articles/")?;
        debug!("GET {url}");
        self.execute(
            self.http.get(url).bearer_auth(self.bearer_token()?),
            "Failed to fetch articles",
        )
        .await
    }

    /// `PUT /articles/{id}` — replace all mutable fields of an article.
    pub async fn update_article(&self, id: &str, draft: &ArticleDraft) -> Result<Article> {
        let url = self.endpoint(&format!("articles/{id}"))?;
        debug!("PUT {url}");
        self.execute(
            self.http.put(url).bearer_auth(self.bearer_token()?).json(draft),
            "Failed to update article",
        )
        .await
    }

    /// `DELETE /articles/{id}` — delete by id; the server answers 204.
    pub async fn delete_article(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("articles/{id}"))?;
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(url)
            .bearer_auth(self.bearer_token()?)
            .send()
            .await
            .map_err(|e| {
                warn!("network failure deleting article: {e}");
                ClientError::Network(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body, "Failed to delete article"),
        })
    }

    // --- SEO analysis -------------------------------------------------------

    /// `POST /seo/analyze` — full analysis of title, meta description,
    /// content, and keyword usage.
    pub async fn seo_analyze(&self, request: &SeoAnalyzeRequest) -> Result<SeoAnalysis> {
        let all_present = !request.title.trim().is_empty()
            && !request.meta_description.trim().is_empty()
            && !request.content.trim().is_empty()
            && !request.keyword.trim().is_empty();
        if !all_present {
            return Err(ClientError::Validation(
                "All fields are required for accurate SEO analysis".to_string(),
            ));
        }
        self.post_json_auth("seo/analyze", request, "Failed to analyze SEO")
            .await
    }

    // --- Request plumbing ---------------------------------------------------

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {path}: {e}")))
    }

    /// Read the access token at call time. Not cached.
    fn bearer_token(&self) -> Result<String> {
        self.tokens
            .get(ACCESS_TOKEN_KEY)
            .ok_or_else(|| ClientError::Session("not logged in".to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");
        self.execute(self.http.post(url).json(body), fallback).await
    }

    async fn post_json_auth<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");
        self.execute(
            self.http.post(url).bearer_auth(self.bearer_token()?).json(body),
            fallback,
        )
        .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            warn!("network failure: {e}");
            ClientError::Network(e)
        })?;
        read_json(response, fallback).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(ClientError::Network)?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(ClientError::Decode);
    }
    if status == StatusCode::UNAUTHORIZED {
        debug!("server rejected credentials or token");
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body, fallback),
    })
}

/// Error bodies come in a few shapes (`error`, `message`, FastAPI-style
/// `detail`); take the first human-readable string found.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    detail: Option<Value>,
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            parsed.error.or(parsed.message).or(match parsed.detail {
                Some(Value::String(s)) => Some(s),
                _ => None,
            })
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryTokenStore;
    use crate::api::models::{ArticleLength, ArticleTone};

    fn offline_client(store: Arc<MemoryTokenStore>) -> ApiClient {
        let mut config = Config::from_env().unwrap();
        // Unroutable: any attempted request surfaces as Network.
        config.api_url = Url::parse("http://127.0.0.1:1/").unwrap();
        ApiClient::new(&config, store).unwrap()
    }

    #[test]
    fn error_message_prefers_structured_fields() {
        assert_eq!(
            error_message(r#"{"error": "Email already registered"}"#, "fallback"),
            "Email already registered"
        );
        assert_eq!(
            error_message(r#"{"message": "Too many requests"}"#, "fallback"),
            "Too many requests"
        );
        assert_eq!(
            error_message(r#"{"detail": "Invalid code"}"#, "fallback"),
            "Invalid code"
        );
    }

    #[test]
    fn error_message_falls_back_on_garbage() {
        assert_eq!(error_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(error_message("", "fallback"), "fallback");
        // A structured detail list is not a displayable message.
        assert_eq!(
            error_message(r#"{"detail": [{"loc": ["body"]}]}"#, "fallback"),
            "fallback"
        );
        assert_eq!(error_message(r#"{"error": "  "}"#, "fallback"), "fallback");
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_any_request() {
        let client = offline_client(Arc::new(MemoryTokenStore::new()));
        let err = client.keyword_suggestions("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn authenticated_call_without_token_fails_locally() {
        let client = offline_client(Arc::new(MemoryTokenStore::new()));
        let request = GenerateRequest {
            keyword: "rust seo".to_string(),
            length: ArticleLength::Medium,
            tone: ArticleTone::Professional,
        };
        let err = client.generate_article(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::Session(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn seo_analyze_requires_every_field() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(ACCESS_TOKEN_KEY, "token");
        let client = offline_client(store);
        let request = SeoAnalyzeRequest {
            title: "Title".to_string(),
            meta_description: String::new(),
            content: "Body".to_string(),
            keyword: "kw".to_string(),
        };
        let err = client.seo_analyze(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    }
}
