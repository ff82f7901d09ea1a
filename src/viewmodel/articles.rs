//! Article library view-model: free-text search, length filter, and sort
//! order over the fetched article collection.

use crate::api::models::{Article, ArticleLength};

/// Length filter choices offered by the library screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthFilter {
    #[default]
    All,
    Only(ArticleLength),
}

impl LengthFilter {
    fn matches(&self, length: ArticleLength) -> bool {
        match self {
            LengthFilter::All => true,
            LengthFilter::Only(wanted) => *wanted == length,
        }
    }
}

/// Sort orders offered by the library screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    /// Creation time, most recent first.
    #[default]
    Newest,
    /// Creation time, oldest first.
    Oldest,
    /// Keyword, lexicographic ascending.
    Keyword,
}

/// The user-chosen projection parameters. `apply` recomputes the full
/// derived list; there is no incremental update.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    /// Case-insensitive substring matched against keyword and body.
    /// An empty string matches everything.
    pub search: String,
    pub length: LengthFilter,
    pub sort: ArticleSort,
}

impl ArticleQuery {
    pub fn apply(&self, articles: &[Article]) -> Vec<Article> {
        let needle = self.search.to_lowercase();
        let mut shown: Vec<Article> = articles
            .iter()
            .filter(|article| {
                let matches_search = needle.is_empty()
                    || article.keyword.to_lowercase().contains(&needle)
                    || article.article.to_lowercase().contains(&needle);
                matches_search && self.length.matches(article.length)
            })
            .cloned()
            .collect();

        // sort_by is stable; ties keep their fetched order.
        match self.sort {
            ArticleSort::Newest => shown.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ArticleSort::Oldest => shown.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ArticleSort::Keyword => shown.sort_by(|a, b| a.keyword.cmp(&b.keyword)),
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ArticleTone;
    use chrono::{TimeZone, Utc};

    fn article(id: &str, keyword: &str, body: &str, length: ArticleLength, ts: i64) -> Article {
        Article {
            id: id.to_string(),
            keyword: keyword.to_string(),
            length,
            tone: ArticleTone::Informative,
            article: body.to_string(),
            user_id: "u-1".to_string(),
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    fn library() -> Vec<Article> {
        vec![
            article("a", "coffee grinders", "Burr vs blade.", ArticleLength::Short, 100),
            article("b", "espresso machines", "Pressure profiles.", ArticleLength::Long, 300),
            article("c", "pour over", "About coffee ratios.", ArticleLength::Medium, 200),
        ]
    }

    #[test]
    fn empty_query_returns_everything_sorted_newest_first() {
        let shown = ArticleQuery::default().apply(&library());
        let ids: Vec<&str> = shown.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn oldest_reverses_the_order() {
        let query = ArticleQuery {
            sort: ArticleSort::Oldest,
            ..Default::default()
        };
        let ids: Vec<String> = query.apply(&library()).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn keyword_sort_is_lexicographic_ascending() {
        let query = ArticleQuery {
            sort: ArticleSort::Keyword,
            ..Default::default()
        };
        let keywords: Vec<String> = query
            .apply(&library())
            .into_iter()
            .map(|a| a.keyword)
            .collect();
        assert_eq!(keywords, ["coffee grinders", "espresso machines", "pour over"]);
    }

    #[test]
    fn search_matches_keyword_or_body_case_insensitively() {
        let query = ArticleQuery {
            search: "COFFEE".to_string(),
            ..Default::default()
        };
        // "coffee grinders" by keyword, "pour over" by body text.
        let ids: Vec<String> = query.apply(&library()).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn length_filter_composes_with_search() {
        let query = ArticleQuery {
            search: "coffee".to_string(),
            length: LengthFilter::Only(ArticleLength::Short),
            ..Default::default()
        };
        let ids: Vec<String> = query.apply(&library()).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let query = ArticleQuery {
            search: "submarine".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&library()).is_empty());
    }
}
