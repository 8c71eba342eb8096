use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One full-resolution hemisphere image, in gallery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HemisphereEntry {
    pub title: String,
    pub img_url: String,
}

/// Everything a single scrape produced.
///
/// Field names are the document keys the store and the index template read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub news_title: Option<String>,
    pub news_paragraph: Option<String>,
    pub featured_image: Option<String>,
    pub facts: Option<String>,
    pub hemisphere: Vec<HemisphereEntry>,
    pub last_modified: DateTime<Utc>,
}

impl ScrapeResult {
    /// Compares every field except `last_modified`.
    pub fn same_content(&self, other: &ScrapeResult) -> bool {
        self.news_title == other.news_title
            && self.news_paragraph == other.news_paragraph
            && self.featured_image == other.featured_image
            && self.facts == other.facts
            && self.hemisphere == other.hemisphere
    }
}
