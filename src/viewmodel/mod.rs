//! # View-Model Module
//!
//! Purely functional projections of fetched collections: filter then sort,
//! fully recomputed on every input change. The source collections are small
//! (one user's articles, one query's suggestions), so no incremental update
//! machinery is warranted.

pub mod articles;
pub mod keywords;

/// Display band for a server-computed SEO score, mirroring the product's
/// traffic-light presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_split_at_80_and_60() {
        assert_eq!(ScoreBand::of(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(0), ScoreBand::Poor);
    }
}
