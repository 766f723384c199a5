mod engine;
mod process;

pub use engine::TesseractEngine;
