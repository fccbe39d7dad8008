//! Keyword matching on resource identifiers

use super::model::Resource;

/// Keywords used when none are given on the command line
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "mansion", "luxury", "villa", "premium", "high", "elite", "whatsapp",
];

/// Case-insensitive substring filter over `public_id`.
///
/// Matching is by substring, not whole word: `highway` matches `high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Build a filter. Keywords are lower-cased and deduplicated, first
    /// occurrence wins; empty keywords are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !keyword.is_empty() && !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }
        Self { keywords: unique }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, public_id: &str) -> bool {
        let id = public_id.to_lowercase();
        self.keywords.iter().any(|k| id.contains(k.as_str()))
    }

    /// Matching resources, in input order
    pub fn filter(&self, resources: &[Resource]) -> Vec<Resource> {
        resources
            .iter()
            .filter(|r| self.matches(r.public_id()))
            .cloned()
            .collect()
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_identifiers() {
        let resources: Vec<Resource> = ["villa-1", "HOUSE-2", "Luxury_Retreat"]
            .iter()
            .map(|id| Resource::new(id))
            .collect();

        let matched = KeywordFilter::default().filter(&resources);

        assert_eq!(matched, vec![resources[0].clone(), resources[2].clone()]);
    }

    #[test]
    fn test_partial_word_collision() {
        assert!(KeywordFilter::default().matches("photos/highway-at-night"));
    }

    #[test]
    fn test_case_variants_collapse() {
        let filter = KeywordFilter::new(["whatsapp", "WhatsApp", "WHATSAPP", ""]);
        assert_eq!(filter.keywords(), ["whatsapp".to_string()]);
        assert!(filter.matches("WhatsApp Image 2024-05-01"));
    }

    #[test]
    fn test_default_keywords_are_unique() {
        assert_eq!(KeywordFilter::default().keywords().len(), DEFAULT_KEYWORDS.len());
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = KeywordFilter::new(Vec::<String>::new());
        assert!(!filter.matches("mansion"));
    }
}
