use serde::Deserialize;

/// Placeholder tag for cats the source returns without any tags. Substituted
/// at conversion time so every card carries a non-empty tag list, and filtered
/// back out by the preference analysis.
pub const NO_TAGS_SENTINEL: &str = "no tags";

/// Raw record as returned by the Cataas batch endpoint. Older API versions
/// used `_id` instead of `id`, and `tags` may be missing entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct CatRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One swipeable card. Immutable once built from its record.
#[derive(Debug, Clone, PartialEq)]
pub struct CatCard {
    pub id: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl CatCard {
    pub fn from_record(record: CatRecord, base_url: &str) -> Self {
        let tags = if record.tags.iter().any(|t| !t.trim().is_empty()) {
            record.tags
        } else {
            vec![NO_TAGS_SENTINEL.to_string()]
        };

        CatCard {
            image_url: format!("{}/cat/{}", base_url, record.id),
            id: record.id,
            tags,
        }
    }

    pub fn has_real_tags(&self) -> bool {
        self.tags.iter().any(|t| t != NO_TAGS_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_tags_keeps_them() {
        let record = CatRecord {
            id: "abc123".to_string(),
            tags: vec!["cute".to_string(), "orange".to_string()],
        };
        let card = CatCard::from_record(record, "https://cataas.com");

        assert_eq!(card.image_url, "https://cataas.com/cat/abc123");
        assert_eq!(card.tags, vec!["cute", "orange"]);
        assert!(card.has_real_tags());
    }

    #[test]
    fn missing_tags_get_the_sentinel() {
        let record = CatRecord { id: "x".to_string(), tags: Vec::new() };
        let card = CatCard::from_record(record, "https://cataas.com");

        assert_eq!(card.tags, vec![NO_TAGS_SENTINEL]);
        assert!(!card.has_real_tags());
    }

    #[test]
    fn whitespace_only_tags_count_as_missing() {
        let record = CatRecord { id: "x".to_string(), tags: vec!["  ".to_string()] };
        let card = CatCard::from_record(record, "https://cataas.com");

        assert_eq!(card.tags, vec![NO_TAGS_SENTINEL]);
    }
}
