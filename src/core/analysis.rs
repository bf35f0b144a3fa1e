use std::collections::HashMap;

use crate::core::{
    CatCard,
    NO_TAGS_SENTINEL,
};

/// Only this many of the most frequent tags make the summary.
pub const TOP_TAG_LIMIT: usize = 10;

/// Derived view of a finished round. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSummary {
    pub liked_count: usize,
    pub round_len: usize,
    /// Liked cards that carry at least one real (non-sentinel) tag.
    pub tagged_count: usize,
    /// (tag, occurrences) pairs, most frequent first. Ties keep the order the
    /// tags were first encountered in.
    pub top_tags: Vec<(String, u32)>,
}

impl TagSummary {
    /// Fraction of the round the user liked. A zero-length round rates 0.
    pub fn match_rate(&self) -> f32 {
        if self.round_len == 0 {
            0.0
        } else {
            self.liked_count as f32 / self.round_len as f32
        }
    }

    pub fn skipped(&self) -> usize {
        self.round_len.saturating_sub(self.liked_count)
    }
}

/// Tallies tag frequency over the liked cards, case-insensitively, skipping
/// the "no tags" sentinel. Pure and deterministic.
pub fn summarize(liked: &[CatCard], round_len: usize) -> TagSummary {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for card in liked {
        for tag in &card.tags {
            let tag = tag.to_lowercase();
            if tag == NO_TAGS_SENTINEL {
                continue;
            }
            match index.get(&tag) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.clone(), counts.len());
                    counts.push((tag, 1));
                }
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-encountered order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_TAG_LIMIT);

    TagSummary {
        liked_count: liked.len(),
        round_len,
        tagged_count: liked.iter().filter(|c| c.has_real_tags()).count(),
        top_tags: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(tags: &[&str]) -> CatCard {
        CatCard {
            id: "t".to_string(),
            image_url: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn counts_tags_and_skips_the_sentinel() {
        let liked = vec![card(&["cute", "funny"]), card(&["cute"]), card(&["no tags"])];
        let summary = summarize(&liked, 5);

        assert_eq!(
            summary.top_tags,
            vec![("cute".to_string(), 2), ("funny".to_string(), 1)]
        );
        assert_eq!(summary.liked_count, 3);
    }

    #[test]
    fn tags_are_normalized_case_insensitively() {
        let liked = vec![card(&["Cute"]), card(&["CUTE", "Sleepy"])];
        let summary = summarize(&liked, 2);

        assert_eq!(
            summary.top_tags,
            vec![("cute".to_string(), 2), ("sleepy".to_string(), 1)]
        );
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let liked = vec![card(&["orange", "tabby"]), card(&["tabby", "orange"])];
        let summary = summarize(&liked, 2);

        assert_eq!(
            summary.top_tags,
            vec![("orange".to_string(), 2), ("tabby".to_string(), 2)]
        );
    }

    #[test]
    fn result_is_capped_at_the_tag_limit() {
        let tags: Vec<String> = (0..15).map(|i| format!("tag{i:02}")).collect();
        let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let summary = summarize(&[card(&refs)], 1);

        assert_eq!(summary.top_tags.len(), TOP_TAG_LIMIT);
        assert_eq!(summary.top_tags[0].0, "tag00");
    }

    #[test]
    fn empty_round_has_no_tags_and_zero_rate() {
        let summary = summarize(&[], 0);

        assert!(summary.top_tags.is_empty());
        assert_eq!(summary.match_rate(), 0.0);
    }

    #[test]
    fn quick_stats_count_skips_and_tagged_cards() {
        let liked = vec![card(&["cute"]), card(&["no tags"]), card(&["cute", "fluffy"])];
        let summary = summarize(&liked, 5);

        assert_eq!(summary.liked_count, 3);
        assert_eq!(summary.skipped(), 2);
        // Only the sentinel-substituted card is untagged.
        assert_eq!(summary.tagged_count, 2);
    }

    #[test]
    fn empty_round_has_zero_stats() {
        let summary = summarize(&[], 0);
        assert_eq!(summary.skipped(), 0);
        assert_eq!(summary.tagged_count, 0);
    }

    #[test]
    fn match_rate_reflects_liked_share() {
        let liked = vec![card(&["a"]), card(&["b"]), card(&["c"])];
        let summary = summarize(&liked, 5);

        assert!((summary.match_rate() - 0.6).abs() < f32::EPSILON);
    }
}
