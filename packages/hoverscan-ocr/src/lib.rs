pub mod engine;
pub mod region;
pub mod tesseract;

pub use engine::{OcrConfig, OcrEngine, OcrError, OcrOutput, OcrRequest, DIGITS};
pub use region::Rectangle;
pub use tesseract::TesseractEngine;
