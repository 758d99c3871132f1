//! Video Models

use serde::{Deserialize, Serialize};

/// Stored video record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Create/update request body (id is assigned by the store)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoInput {
    pub title: String,
    pub url: String,
}

/// `?id=` query parameter: first occurrence wins, absent means `""`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VideoIdQuery {
    pub id: String,
}

impl VideoIdQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_wire_shape() {
        let video = Video {
            id: "video1".to_string(),
            title: "A".to_string(),
            url: "u".to_string(),
        };
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "video1", "title": "A", "url": "u"})
        );
    }

    #[test]
    fn test_input_ignores_client_supplied_id() {
        let input: VideoInput =
            serde_json::from_str(r#"{"id":"video99","title":"A"}"#).unwrap();
        assert_eq!(input.title, "A");
        assert_eq!(input.url, "");
    }

    #[test]
    fn test_id_query_takes_first_value() {
        let pairs = vec![
            ("other".to_string(), "z".to_string()),
            ("id".to_string(), "video1".to_string()),
            ("id".to_string(), "x".to_string()),
        ];
        assert_eq!(VideoIdQuery::from_pairs(pairs).id, "video1");
    }

    #[test]
    fn test_id_query_missing_is_empty() {
        assert_eq!(VideoIdQuery::from_pairs(Vec::new()), VideoIdQuery::default());
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        let result = serde_json::from_str::<VideoInput>(r#"{"title":42}"#);
        assert!(result.is_err());
    }
}
