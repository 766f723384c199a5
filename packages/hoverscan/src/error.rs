use hoverscan_ocr::OcrError;
use thiserror::Error;

/// Failures inside the hover pipeline.
///
/// None of these reach the user during a session: the pipeline logs them and waits for
/// the next pointer event.
#[derive(Debug, Error)]
pub enum HoverError {
    #[error("source image has not finished loading")]
    ImageNotReady,
    #[error("source image was already loaded")]
    AlreadyLoaded,
    #[error("failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("ocr failed: {0}")]
    Ocr(#[from] OcrError),
}
