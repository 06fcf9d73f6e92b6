use serde::{Deserialize, Serialize};

/// One browsable catalog entry (film or show).
///
/// Field names follow the catalog JSON format (`logoImage`, `youtube`, ...).
/// Every field except `id`, `title` and `youtube` may be omitted and defaults
/// to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Thumbnail shown in carousels.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub logo_image: Option<String>,
    /// Video id of the trailer/feature on the embed host.
    #[serde(rename = "youtube")]
    pub video: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Title {
    /// Subtitle, treating an empty string the same as a missing one.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Logo image reference, treating an empty string as missing.
    pub fn logo_image(&self) -> Option<&str> {
        self.logo_image.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A category label plus the titles filed under it, in catalog order.
///
/// Rows produced by [`group_by_category`](super::group_by_category) are never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    /// Display label: the first-seen trimmed spelling of the category.
    pub category: String,
    pub titles: Vec<Title>,
}

impl CategoryRow {
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Title> {
        self.titles.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 7,
            "title": "Nightfall",
            "subtitle": "Part One",
            "image": "/img/nightfall.jpg",
            "banner": "/img/nightfall-banner.jpg",
            "logoImage": "/img/nightfall-logo.png",
            "youtube": "dQw4w9WgXcQ",
            "description": "A city without sunrise.",
            "year": "2021",
            "rating": "16+",
            "categories": ["Drama", "Thriller"]
        }"#;

        let title: Title = serde_json::from_str(json).unwrap();
        assert_eq!(title.id, 7);
        assert_eq!(title.subtitle(), Some("Part One"));
        assert_eq!(title.logo_image(), Some("/img/nightfall-logo.png"));
        assert_eq!(title.video, "dQw4w9WgXcQ");
        assert_eq!(title.categories, vec!["Drama", "Thriller"]);
    }

    #[test]
    fn test_deserialize_minimal_record_defaults() {
        let json = r#"{"id": 1, "title": "Bare", "youtube": "abc"}"#;
        let title: Title = serde_json::from_str(json).unwrap();
        assert!(title.subtitle().is_none());
        assert!(title.logo_image().is_none());
        assert!(title.categories.is_empty());
        assert_eq!(title.rating, "");
    }

    #[test]
    fn test_empty_subtitle_is_absent() {
        let json = r#"{"id": 1, "title": "Bare", "youtube": "abc", "subtitle": "  ", "logoImage": ""}"#;
        let title: Title = serde_json::from_str(json).unwrap();
        assert!(title.subtitle().is_none());
        assert!(title.logo_image().is_none());
    }

    #[test]
    fn test_missing_video_is_rejected() {
        let json = r#"{"id": 1, "title": "No video"}"#;
        assert!(serde_json::from_str::<Title>(json).is_err());
    }
}
