//! Keyword research view-model: difficulty filtering, sort orders, and the
//! display helpers the research screen uses for badges and volume figures.

use crate::api::models::KeywordSuggestion;

/// Difficulty bands as presented to the user. Boundaries follow the
/// product's convention: easy ≤ 30, medium 31–60, hard > 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

impl DifficultyBand {
    pub fn of(difficulty: u32) -> Self {
        if difficulty <= 30 {
            DifficultyBand::Easy
        } else if difficulty <= 60 {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Hard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyBand::Easy => "Easy",
            DifficultyBand::Medium => "Medium",
            DifficultyBand::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(DifficultyBand),
}

impl DifficultyFilter {
    fn matches(&self, difficulty: u32) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(band) => DifficultyBand::of(difficulty) == *band,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionSort {
    /// Search volume, highest first.
    #[default]
    Volume,
    /// Keyword difficulty, easiest first.
    Difficulty,
    /// Suggestion text, ascending.
    Alphabetical,
}

/// Filter-then-sort projection over one query's suggestions, fully
/// recomputed per call like [`crate::viewmodel::articles::ArticleQuery`].
#[derive(Debug, Clone, Default)]
pub struct SuggestionQuery {
    pub difficulty: DifficultyFilter,
    pub sort: SuggestionSort,
}

impl SuggestionQuery {
    pub fn apply(&self, suggestions: &[KeywordSuggestion]) -> Vec<KeywordSuggestion> {
        let mut shown: Vec<KeywordSuggestion> = suggestions
            .iter()
            .filter(|s| self.difficulty.matches(s.keyword_difficulty))
            .cloned()
            .collect();

        match self.sort {
            SuggestionSort::Volume => {
                shown.sort_by(|a, b| b.search_volume.cmp(&a.search_volume))
            }
            SuggestionSort::Difficulty => {
                shown.sort_by(|a, b| a.keyword_difficulty.cmp(&b.keyword_difficulty))
            }
            SuggestionSort::Alphabetical => {
                shown.sort_by(|a, b| a.suggestion.cmp(&b.suggestion))
            }
        }
        shown
    }
}

/// Compact volume figure: 2_400_000 → "2.4M", 12_300 → "12.3K", 640 → "640".
pub fn format_volume(volume: u64) -> String {
    if volume >= 1_000_000 {
        format!("{:.1}M", volume as f64 / 1_000_000.0)
    } else if volume >= 1_000 {
        format!("{:.1}K", volume as f64 / 1_000.0)
    } else {
        volume.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(text: &str, volume: u64, difficulty: u32) -> KeywordSuggestion {
        KeywordSuggestion {
            suggestion: text.to_string(),
            search_volume: volume,
            keyword_difficulty: difficulty,
        }
    }

    fn report() -> Vec<KeywordSuggestion> {
        vec![
            suggestion("best running shoes", 74_000, 30),
            suggestion("running shoes for flat feet", 9_900, 31),
            suggestion("trail running shoes", 33_000, 60),
            suggestion("running shoes", 450_000, 78),
        ]
    }

    #[test]
    fn easy_filter_boundary_is_inclusive_at_30() {
        let query = SuggestionQuery {
            difficulty: DifficultyFilter::Only(DifficultyBand::Easy),
            ..Default::default()
        };
        let shown = query.apply(&report());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].keyword_difficulty, 30);
    }

    #[test]
    fn medium_filter_covers_31_to_60() {
        let query = SuggestionQuery {
            difficulty: DifficultyFilter::Only(DifficultyBand::Medium),
            ..Default::default()
        };
        let difficulties: Vec<u32> = query
            .apply(&report())
            .into_iter()
            .map(|s| s.keyword_difficulty)
            .collect();
        assert_eq!(difficulties, [60, 31]);
    }

    #[test]
    fn default_sort_is_volume_descending() {
        let volumes: Vec<u64> = SuggestionQuery::default()
            .apply(&report())
            .into_iter()
            .map(|s| s.search_volume)
            .collect();
        assert_eq!(volumes, [450_000, 74_000, 33_000, 9_900]);
    }

    #[test]
    fn difficulty_sort_is_ascending() {
        let query = SuggestionQuery {
            sort: SuggestionSort::Difficulty,
            ..Default::default()
        };
        let difficulties: Vec<u32> = query
            .apply(&report())
            .into_iter()
            .map(|s| s.keyword_difficulty)
            .collect();
        assert_eq!(difficulties, [30, 31, 60, 78]);
    }

    #[test]
    fn alphabetical_sort_orders_by_text() {
        let query = SuggestionQuery {
            sort: SuggestionSort::Alphabetical,
            ..Default::default()
        };
        let first = &query.apply(&report())[0];
        assert_eq!(first.suggestion, "best running shoes");
    }

    #[test]
    fn bands_split_at_30_and_60() {
        assert_eq!(DifficultyBand::of(0), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::of(30), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::of(31), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::of(60), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::of(61), DifficultyBand::Hard);
    }

    #[test]
    fn volume_formatting_bands() {
        assert_eq!(format_volume(2_400_000), "2.4M");
        assert_eq!(format_volume(12_300), "12.3K");
        assert_eq!(format_volume(1_000), "1.0K");
        assert_eq!(format_volume(640), "640");
        assert_eq!(format_volume(0), "0");
    }
}
