//! API Models
//!
//! Wire shapes for every RankWise endpoint. All of these are owned by the
//! server and only mirrored transiently in client state; the client never
//! assigns an id or mutates an entity outside an explicit update call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested article length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    Medium,
    Long,
}

impl fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArticleLength::Short => "short",
            ArticleLength::Medium => "medium",
            ArticleLength::Long => "long",
        };
        f.write_str(s)
    }
}

/// Requested article tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleTone {
    Professional,
    Casual,
    Informative,
    Persuasive,
}

impl fmt::Display for ArticleTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArticleTone::Professional => "professional",
            ArticleTone::Casual => "casual",
            ArticleTone::Informative => "informative",
            ArticleTone::Persuasive => "persuasive",
        };
        f.write_str(s)
    }
}

/// A saved article as returned by the articles endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned, unique.
    pub id: String,
    pub keyword: String,
    pub length: ArticleLength,
    pub tone: ArticleTone,
    /// Body text.
    pub article: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// The mutable fields of an article: the body of save and update requests,
/// and also the shape the generator returns before anything is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub keyword: String,
    pub length: ArticleLength,
    pub tone: ArticleTone,
    pub article: String,
}

/// Generation parameters sent to the article generator.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub keyword: String,
    pub length: ArticleLength,
    pub tone: ArticleTone,
}

/// One keyword suggestion row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub suggestion: String,
    /// Monthly searches, never negative.
    pub search_volume: u64,
    /// Ranking competitiveness in [0, 100].
    pub keyword_difficulty: u32,
}

/// Envelope the suggestion endpoint always returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub query: String,
    pub suggestions: Vec<KeywordSuggestion>,
}

/// Input to the SEO analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct SeoAnalyzeRequest {
    pub title: String,
    pub meta_description: String,
    pub content: String,
    pub keyword: String,
}

/// Score plus findings shared by the title and meta description analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub score: u32,
    pub keyword_density: f64,
    pub word_count: u64,
    pub readability_score: f64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub score: u32,
    pub keyword_in_title: bool,
    pub keyword_in_meta: bool,
    pub keyword_in_content: bool,
    pub keyword_frequency: u64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Full SEO analysis: a composite score and four named sub-analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub overall_score: u32,
    pub title_analysis: SectionAnalysis,
    pub meta_description_analysis: SectionAnalysis,
    pub content_analysis: ContentAnalysis,
    pub keyword_analysis: KeywordAnalysis,
}

// --- Auth payloads ---------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Both session tokens, returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// A renewed access token from the refresh endpoint; the refresh token
/// itself is unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct RenewedToken {
    pub access_token: String,
}

/// Informational acknowledgement from auth endpoints such as register and
/// password-reset-request.
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_tone_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArticleLength::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&ArticleTone::Persuasive).unwrap(),
            "\"persuasive\""
        );
        let tone: ArticleTone = serde_json::from_str("\"casual\"").unwrap();
        assert_eq!(tone, ArticleTone::Casual);
    }

    #[test]
    fn article_deserializes_from_server_shape() {
        let raw = r#"{
            "id": "66f0c2a1",
            "keyword": "rust seo",
            "length": "short",
            "tone": "informative",
            "article": "Body text.",
            "user_id": "u-1",
            "created_at": "2025-06-01T12:00:00Z"
        }"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.length, ArticleLength::Short);
        assert_eq!(article.created_at.timestamp(), 1748779200);
    }

    #[test]
    fn seo_analysis_deserializes_full_shape() {
        let raw = r#"{
            "overall_score": 72,
            "title_analysis": {"score": 80, "issues": [], "suggestions": ["Add the year"]},
            "meta_description_analysis": {"score": 65, "issues": ["Too short"], "suggestions": []},
            "content_analysis": {
                "score": 70, "keyword_density": 1.4, "word_count": 850,
                "readability_score": 61.2, "issues": [], "suggestions": []
            },
            "keyword_analysis": {
                "score": 75, "keyword_in_title": true, "keyword_in_meta": false,
                "keyword_in_content": true, "keyword_frequency": 12,
                "issues": [], "suggestions": []
            }
        }"#;
        let analysis: SeoAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.overall_score, 72);
        assert!(analysis.keyword_analysis.keyword_in_title);
        assert!(!analysis.keyword_analysis.keyword_in_meta);
        assert_eq!(analysis.content_analysis.word_count, 850);
    }
}
