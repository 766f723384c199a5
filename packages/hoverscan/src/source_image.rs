//! Lazily available source image.
//!
//! The encoded image arrives some time after the session starts. Until then
//! [`SourceImage::loaded`] returns `None` and recognition is skipped.
use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use image::ImageReader;
use serde::{Deserialize, Serialize};

use crate::error::HoverError;

/// Encoded image bytes plus their decoded dimensions.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub natural_width: u32,
    pub natural_height: u32,
    pub data: Arc<[u8]>,
}

impl LoadedImage {
    /// Probes the dimensions of an encoded image without decoding its pixels.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, HoverError> {
        let (natural_width, natural_height) = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .into_dimensions()?;
        Ok(Self {
            natural_width,
            natural_height,
            data: data.into(),
        })
    }
}

/// Rendered size of the image, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Write-once slot for the encoded source image.
#[derive(Debug, Default)]
pub struct SourceImage {
    loaded: OnceLock<LoadedImage>,
}

impl SourceImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.get()
    }

    /// Stores the image. A second call fails and leaves the first image in place.
    pub fn set_loaded(&self, image: LoadedImage) -> Result<(), HoverError> {
        self.loaded.set(image).map_err(|_| HoverError::AlreadyLoaded)
    }

    pub fn load_from_bytes(&self, data: Vec<u8>) -> Result<(), HoverError> {
        self.set_loaded(LoadedImage::from_bytes(data)?)
    }

    pub async fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read source image {}", path.display()))?;
        let image = LoadedImage::from_bytes(data)
            .with_context(|| format!("Failed to decode source image {}", path.display()))?;
        log::info!(
            "source image {} ready ({}x{})",
            path.display(),
            image.natural_width,
            image.natural_height
        );
        self.set_loaded(image)?;
        Ok(())
    }
}
