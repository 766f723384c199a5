//! Command line arguments backing the `hoverscan` binary.
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "hoverscan",
  about = "Identify catalog parts by reading the code printed under the pointer",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(ClapArgs, Debug)]
pub struct CatalogArgs {
  /// JSON catalog to use instead of the built-in parts list
  #[arg(long, short = 'c')]
  pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// List the catalog entries
  Catalog {
    #[command(flatten)]
    catalog: CatalogArgs,
  },
  /// Resolve an identifier against the catalog
  Lookup {
    /// Recognized identifier (entry id or printed code)
    identifier: String,

    #[command(flatten)]
    catalog: CatalogArgs,
  },
  /// Print the source-space crop rectangle for a pointer position
  Map {
    #[arg(long)]
    x: f64,
    #[arg(long)]
    y: f64,

    /// Natural image width in pixels
    #[arg(long)]
    natural_width: u32,
    /// Natural image height in pixels
    #[arg(long)]
    natural_height: u32,
    /// Rendered image width in pixels
    #[arg(long)]
    display_width: f64,
    /// Rendered image height in pixels
    #[arg(long)]
    display_height: f64,

    #[arg(long, default_value = "40")]
    box_size: f64,

    /// Scale the height with the horizontal ratio (legacy behavior)
    #[arg(long)]
    legacy_height: bool,
  },
  /// Run a hover session, reading "x y" pointer positions from stdin
  Hover {
    /// Source image containing the printed codes
    #[arg(long, short = 'i')]
    image: PathBuf,

    /// Rendered image width; defaults to the natural width
    #[arg(long)]
    display_width: Option<f64>,
    /// Rendered image height; defaults to the natural height
    #[arg(long)]
    display_height: Option<f64>,

    /// JSON session config
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Path to the tesseract executable
    #[arg(long, default_value = "tesseract")]
    tesseract: PathBuf,

    /// Override the box size from the config
    #[arg(long)]
    box_size: Option<f64>,

    /// Override the throttle interval from the config, in milliseconds
    #[arg(long)]
    throttle_ms: Option<u64>,
  },
}
