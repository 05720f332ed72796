use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-selected include/exclude rules.
///
/// Keyword fields hold pipe-delimited OR lists ("refund|chargeback"),
/// matched case-insensitively as substrings of the ticket subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub exclude_categories: BTreeSet<String>,
    #[serde(default)]
    pub exclude_keyword_terms: String,
    #[serde(default)]
    pub include_categories: BTreeSet<String>,
    #[serde(default)]
    pub include_keyword_terms: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.exclude_categories.is_empty()
            && self.include_categories.is_empty()
            && keyword_terms(&self.exclude_keyword_terms).is_empty()
            && keyword_terms(&self.include_keyword_terms).is_empty()
    }

    pub fn exclude_category(mut self, category: &str) -> Self {
        self.exclude_categories.insert(category.to_string());
        self
    }

    pub fn include_category(mut self, category: &str) -> Self {
        self.include_categories.insert(category.to_string());
        self
    }

    pub fn exclude_keywords(mut self, terms: &str) -> Self {
        self.exclude_keyword_terms = terms.to_string();
        self
    }

    pub fn include_keywords(mut self, terms: &str) -> Self {
        self.include_keyword_terms = terms.to_string();
        self
    }
}

/// Split a pipe-delimited keyword list into trimmed, lower-cased terms.
pub fn keyword_terms(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
