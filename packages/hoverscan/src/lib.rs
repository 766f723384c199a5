//! # hoverscan
//!
//! Identify the labeled part under the pointer by reading the numeric code printed
//! beneath it and matching it against a parts catalog.
//!
//! ## Pipeline
//!
//! - **Coordinate mapping**: a square around the pointer, in display pixels, becomes a
//!   crop rectangle in source-image pixels
//! - **Recognition scheduling**: a trailing-edge throttle starts at most one OCR call per
//!   window, always with the latest pointer position
//! - **OCR gateway**: reads the crop through any [`hoverscan_ocr::OcrEngine`]
//! - **Identity change detection**: keeps the first line of the OCR output and only
//!   reports real changes
//! - **Catalog lookup** and **presentation**: popup, list highlight and scroll commands
//!   for the rendering layer
//!
//! ## Quick Start
//!
//! ```ignore
//! use hoverscan::prelude::*;
//! use std::sync::Arc;
//!
//! let image = Arc::new(SourceImage::new());
//! let engine = Arc::new(TesseractEngine::new(OcrConfig::digits_only()));
//! let (session, mut commands) = HoverSession::start(
//!     &HoverConfig::default(),
//!     Catalog::builtin(),
//!     engine,
//!     image.clone(),
//!     DisplaySize::new(640.0, 480.0),
//! );
//!
//! image.load_from_path("parts.png").await?;
//! session.pointer_moved(PointerPosition::new(120.0, 88.0));
//! while let Some(command) = commands.recv().await {
//!     println!("{command:?}");
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod geometry;
pub mod identity;
pub mod presentation;
pub mod scheduler;
pub mod session;
pub mod source_image;

pub use catalog::{Catalog, CatalogEntry};
pub use config::HoverConfig;
pub use error::HoverError;
pub use gateway::OcrGateway;
pub use geometry::{map_to_source_rect, CropRectangle, HeightScaling, ImageMetrics, PointerPosition};
pub use identity::{normalize_identifier, HoverState, IdentityChangeDetector, IdentityChanged};
pub use presentation::{
    HoverPhase, HoverPresentationController, PopupContent, PresentationCommand, ScrollBehavior,
    ScrollBlock,
};
pub use scheduler::RecognitionScheduler;
pub use session::HoverSession;
pub use source_image::{DisplaySize, LoadedImage, SourceImage};

/// Prelude module for convenient imports
///
/// ```ignore
/// use hoverscan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        map_to_source_rect, normalize_identifier, Catalog, CatalogEntry, CropRectangle,
        DisplaySize, HeightScaling, HoverConfig, HoverError, HoverPhase,
        HoverPresentationController, HoverSession, HoverState, IdentityChangeDetector,
        IdentityChanged, ImageMetrics, LoadedImage, OcrGateway, PointerPosition, PopupContent,
        PresentationCommand, RecognitionScheduler, ScrollBehavior, ScrollBlock, SourceImage,
    };
    pub use hoverscan_ocr::{OcrConfig, OcrEngine, OcrError, OcrOutput, OcrRequest, TesseractEngine};
}
