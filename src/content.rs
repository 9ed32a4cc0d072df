use serde::Deserialize;
use std::fmt;

const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub navigation: Vec<NavEntry>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub summary: String,
    pub href: String,
    pub category: CardCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Article,
    Category,
    Award,
}

impl CardCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Category => "category",
            Self::Award => "award",
        }
    }
}

#[derive(Debug)]
pub enum ContentError {
    Malformed(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "site content is malformed: {err}"),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
        }
    }
}

impl SiteContent {
    /// Parses the content document bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(ContentError::Malformed)
    }

    pub fn cards_in(&self, category: CardCategory) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::load().expect("bundled content should parse");

        assert!(!content.navigation.is_empty());
        assert!(content
            .navigation
            .iter()
            .all(|entry| entry.href.starts_with('/')));
    }

    #[test]
    fn cards_in_keeps_document_order() {
        let content = SiteContent::parse(
            r#"{
                "cards": [
                    { "title": "a", "summary": "", "href": "/a", "category": "article" },
                    { "title": "b", "summary": "", "href": "/b", "category": "award" },
                    { "title": "c", "summary": "", "href": "/c", "category": "article" }
                ]
            }"#,
        )
        .expect("valid content");

        let titles: Vec<&str> = content
            .cards_in(CardCategory::Article)
            .map(|card| card.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(content.navigation.is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = SiteContent::parse(
            r#"{ "cards": [ { "title": "x", "summary": "", "href": "/x", "category": "podcast" } ] }"#,
        );

        let err = result.expect_err("unknown category should fail");
        assert!(err.to_string().starts_with("site content is malformed"));
    }
}
