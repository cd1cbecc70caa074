//! Keyword-based event categorization.

use crate::config::CategoryRule;
use crate::models::Category;

/// Assigns a [`Category`] from the event's title and description.
///
/// Rules are tried in order and the first one with a keyword contained in the
/// lower-cased text wins; nothing matching yields [`Category::Other`].
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    pub fn new(rules: &[CategoryRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CategoryRule {
                category: rule.category,
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn categorize(&self, title: &str, description: Option<&str>) -> Category {
        let text = format!("{} {}", title, description.unwrap_or("")).to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(&crate::config::default_category_rules())
    }
}
