use std::io::Cursor;
use std::path::PathBuf;

use async_trait::async_trait;
use image::ImageFormat;

use crate::engine::{OcrConfig, OcrEngine, OcrError, OcrOutput, OcrRequest};
use crate::region::Rectangle;

use super::process;

/// Runs the `tesseract` executable on the requested region of an image.
pub struct TesseractEngine {
    binary: PathBuf,
    config: OcrConfig,
}

impl TesseractEngine {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            config,
        }
    }

    /// Uses a specific tesseract executable instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

/// Decodes `data`, cuts out `rectangle` (clamped to the image) and re-encodes it as PNG.
///
/// Returns `None` when the rectangle lies entirely outside the image: there is nothing
/// to read there.
pub(crate) fn crop_to_png(
    data: &[u8],
    rectangle: Option<Rectangle>,
) -> Result<Option<Vec<u8>>, OcrError> {
    let image =
        image::load_from_memory(data).map_err(|e| OcrError::InvalidInput(e.to_string()))?;

    let cropped = match rectangle {
        Some(rect) => match rect.clamp_to(image.width(), image.height()) {
            Some(clamped) => {
                image.crop_imm(clamped.left, clamped.top, clamped.width, clamped.height)
            }
            None => return Ok(None),
        },
        None => image,
    };

    let mut png = Vec::new();
    cropped
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| OcrError::EngineError(e.to_string()))?;
    Ok(Some(png))
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, request: &OcrRequest<'_>) -> Result<OcrOutput, OcrError> {
        let data = request.image.to_vec();
        let rectangle = request.rectangle;
        let png = tokio::task::spawn_blocking(move || crop_to_png(&data, rectangle))
            .await
            .map_err(|e| OcrError::EngineError(e.to_string()))??;

        let Some(png) = png else {
            log::debug!("region {:?} outside the image, nothing to read", rectangle);
            return Ok(OcrOutput::default());
        };

        log::debug!("running tesseract on {} byte crop", png.len());
        let text = process::run(&self.binary, &self.config, png).await?;
        Ok(OcrOutput { text })
    }
}
