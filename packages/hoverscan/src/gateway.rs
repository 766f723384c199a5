//! Adapter between the hover pipeline and an [`OcrEngine`].
use std::sync::Arc;

use hoverscan_ocr::{OcrEngine, OcrRequest};

use crate::error::HoverError;
use crate::geometry::CropRectangle;
use crate::source_image::SourceImage;

pub struct OcrGateway {
    engine: Arc<dyn OcrEngine>,
    image: Arc<SourceImage>,
}

impl OcrGateway {
    pub fn new(engine: Arc<dyn OcrEngine>, image: Arc<SourceImage>) -> Self {
        Self { engine, image }
    }

    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    /// Reads the text inside `region` of the source image.
    ///
    /// Fails with [`HoverError::ImageNotReady`] without touching the engine when the
    /// image has not loaded yet.
    pub async fn recognize(&self, region: CropRectangle) -> Result<String, HoverError> {
        let loaded = self.image.loaded().ok_or(HoverError::ImageNotReady)?;
        let request = OcrRequest::new(&loaded.data, Some(region.to_pixels()));
        let output = self.engine.recognize(&request).await?;
        Ok(output.text)
    }
}
