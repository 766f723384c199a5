//! Display-space to source-space coordinate mapping.
//!
//! The source image is usually rendered scaled; the pointer arrives in display pixels
//! while the OCR engine reads source pixels.
use hoverscan_ocr::Rectangle;
use serde::{Deserialize, Serialize};

/// Pointer offset relative to the rendered image's top-left corner, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Region to read, in source-image pixels.
///
/// `left` and `top` are never negative; the rectangle may still run past the right or
/// bottom edge of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRectangle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRectangle {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Rounds to whole pixels for the OCR engine.
    pub fn to_pixels(&self) -> Rectangle {
        Rectangle::new(
            self.left.round().max(0.0) as u32,
            self.top.round().max(0.0) as u32,
            self.width.round().max(0.0) as u32,
            self.height.round().max(0.0) as u32,
        )
    }
}

/// How the crop height is scaled into source space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightScaling {
    /// `natural_height / display_height`.
    #[default]
    Vertical,
    /// `natural_width / display_width`, only correct for matching aspect ratios.
    Horizontal,
}

/// Natural and rendered size of the source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageMetrics {
    pub natural_width: u32,
    pub natural_height: u32,
    pub display_width: f64,
    pub display_height: f64,
}

impl ImageMetrics {
    pub fn scale_x(&self) -> f64 {
        axis_scale(self.natural_width, self.display_width)
    }

    pub fn scale_y(&self) -> f64 {
        axis_scale(self.natural_height, self.display_height)
    }
}

fn axis_scale(natural: u32, display: f64) -> f64 {
    if display > 0.0 {
        natural as f64 / display
    } else {
        1.0
    }
}

/// Maps a `box_size` square centered on `pointer` into source-image space.
pub fn map_to_source_rect(
    pointer: PointerPosition,
    box_size: f64,
    metrics: &ImageMetrics,
    height_scaling: HeightScaling,
) -> CropRectangle {
    let scale_x = metrics.scale_x();
    let scale_y = metrics.scale_y();
    let half = box_size / 2.0;

    let height_scale = match height_scaling {
        HeightScaling::Vertical => scale_y,
        HeightScaling::Horizontal => scale_x,
    };

    CropRectangle {
        left: ((pointer.x - half) * scale_x).max(0.0),
        top: ((pointer.y - half) * scale_y).max(0.0),
        width: box_size * scale_x,
        height: box_size * height_scale,
    }
}
