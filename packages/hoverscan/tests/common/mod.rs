//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};

/// Encodes a black PNG of the given size.
pub fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    png
}

/// Fresh scratch directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hoverscan-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a stand-in tesseract that discards its input and prints `text` the way
/// tesseract does, followed by a newline and a form feed.
#[cfg(unix)]
pub fn fake_tesseract(dir: &Path, text: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("tesseract");
    let body = format!("#!/bin/sh\ncat > /dev/null\nprintf '{}\\n\\f'\n", text);
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
