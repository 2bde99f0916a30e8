use super::DecodeError;
use crate::domain::Category;
use serde::{Deserialize, Serialize};

/// Persisted settings record.
///
/// Current format is `{"category":"work"}`; older data stored
/// `{"working":true}` and is still accepted on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing)]
    pub working: Option<bool>,
}

impl Settings {
    pub fn for_mode(mode: Category) -> Self {
        Self {
            category: Some(mode),
            working: None,
        }
    }

    /// Resolve the stored mode, preferring the explicit category field
    pub fn mode(&self) -> Option<Category> {
        self.category.or(match self.working {
            Some(true) => Some(Category::Work),
            Some(false) => Some(Category::Travel),
            None => None,
        })
    }
}

/// Serialize the active mode
pub fn encode_mode(mode: Category) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Settings::for_mode(mode))
}

/// Parse the active mode from stored settings
pub fn decode_mode(raw: &str) -> Result<Category, DecodeError> {
    let settings: Settings = serde_json::from_str(raw)?;
    settings.mode().ok_or(DecodeError::MissingCategory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode() {
        let raw = encode_mode(Category::Travel).unwrap();
        assert!(raw.contains("\"travel\""));
        assert_eq!(decode_mode(&raw).unwrap(), Category::Travel);
    }

    #[test]
    fn test_decode_legacy_working_flag() {
        assert_eq!(decode_mode("{\"working\":true}").unwrap(), Category::Work);
        assert_eq!(decode_mode("{\"working\":false}").unwrap(), Category::Travel);
    }

    #[test]
    fn test_category_wins_over_legacy_flag() {
        let raw = "{\"category\":\"travel\",\"working\":true}";
        assert_eq!(decode_mode(raw).unwrap(), Category::Travel);
    }

    #[test]
    fn test_decode_empty_object_fails() {
        assert!(matches!(decode_mode("{}"), Err(DecodeError::MissingCategory)));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(decode_mode("not json"), Err(DecodeError::Json(_))));
        assert!(matches!(
            decode_mode("{\"category\":\"beach\"}"),
            Err(DecodeError::Json(_))
        ));
    }
}
