use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::Rectangle;

/// Characters the engine is restricted to by default.
pub const DIGITS: &str = "0123456789";

/// Engine-wide recognition settings, fixed when the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub language: String,
    /// Restricts recognition to these characters when set.
    pub char_whitelist: Option<String>,
    /// Tesseract page segmentation mode; the engine default when unset.
    pub page_segmentation: Option<u8>,
}

impl OcrConfig {
    pub fn digits_only() -> Self {
        Self {
            language: "eng".to_string(),
            char_whitelist: Some(DIGITS.to_string()),
            page_segmentation: None,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::digits_only()
    }
}

/// An encoded raster image plus the region to read from it.
#[derive(Debug, Clone, Copy)]
pub struct OcrRequest<'a> {
    pub image: &'a [u8],
    /// `None` reads the whole image.
    pub rectangle: Option<Rectangle>,
}

impl<'a> OcrRequest<'a> {
    pub fn new(image: &'a [u8], rectangle: Option<Rectangle>) -> Self {
        Self { image, rectangle }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrOutput {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("engine error: {0}")]
    EngineError(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, request: &OcrRequest<'_>) -> Result<OcrOutput, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_digits_only() {
        let config = OcrConfig::default();
        assert_eq!(config.language, "eng");
        assert_eq!(config.char_whitelist.as_deref(), Some("0123456789"));
        assert_eq!(config.page_segmentation, None);
    }

    #[test]
    fn test_config_fills_missing_fields() {
        let config: OcrConfig = serde_json::from_str(r#"{"page_segmentation": 7}"#).unwrap();
        assert_eq!(config.page_segmentation, Some(7));
        assert_eq!(config.char_whitelist.as_deref(), Some(DIGITS));
    }
}
