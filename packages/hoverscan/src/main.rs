mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, CatalogArgs, Commands};
use hoverscan::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Args::parse();

  match run(args.command).await {
    Ok(code) => std::process::exit(code),
    Err(e) => {
      eprintln!("Error: {:#}", e);
      std::process::exit(1);
    }
  }
}

async fn run(command: Commands) -> Result<i32> {
  match command {
    Commands::Version => {
      println!("hoverscan {}", env!("CARGO_PKG_VERSION"));
      Ok(0)
    }
    Commands::Catalog { catalog } => {
      for entry in load_catalog(&catalog)?.entries() {
        println!("{}\t{}\t{}", entry.id, entry.code, entry.display_name);
      }
      Ok(0)
    }
    Commands::Lookup { identifier, catalog } => {
      let catalog = load_catalog(&catalog)?;
      match catalog.lookup(normalize_identifier(&identifier)) {
        Some(entry) => {
          let popup = PopupContent::from(entry);
          println!("{}\n{}", popup.header(), popup.section());
          Ok(0)
        }
        None => {
          println!("no catalog entry matches {:?}", identifier);
          Ok(1)
        }
      }
    }
    Commands::Map {
      x,
      y,
      natural_width,
      natural_height,
      display_width,
      display_height,
      box_size,
      legacy_height,
    } => {
      let metrics = ImageMetrics {
        natural_width,
        natural_height,
        display_width,
        display_height,
      };
      let scaling = if legacy_height {
        HeightScaling::Horizontal
      } else {
        HeightScaling::Vertical
      };
      let rect = map_to_source_rect(PointerPosition::new(x, y), box_size, &metrics, scaling);
      println!("{}", serde_json::to_string(&rect)?);
      Ok(0)
    }
    Commands::Hover {
      image,
      display_width,
      display_height,
      config,
      catalog,
      tesseract,
      box_size,
      throttle_ms,
    } => {
      let mut config = match config {
        Some(path) => HoverConfig::from_path(path)?,
        None => HoverConfig::default(),
      };
      if let Some(box_size) = box_size {
        config.box_size = box_size;
      }
      if let Some(throttle_ms) = throttle_ms {
        config.throttle_ms = throttle_ms;
      }
      let catalog = load_catalog(&catalog)?;
      let display = display_width.zip(display_height).map(|(w, h)| DisplaySize::new(w, h));
      run_hover(config, catalog, image, display, tesseract).await?;
      Ok(0)
    }
  }
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
  match &args.catalog {
    Some(path) => Catalog::from_json_path(path),
    None => Ok(Catalog::builtin()),
  }
}

fn parse_pointer(line: &str) -> Option<PointerPosition> {
  let mut parts = line.split_whitespace();
  let x = parts.next()?.parse().ok()?;
  let y = parts.next()?.parse().ok()?;
  Some(PointerPosition::new(x, y))
}

async fn run_hover(
  config: HoverConfig,
  catalog: Catalog,
  image_path: PathBuf,
  display: Option<DisplaySize>,
  tesseract: PathBuf,
) -> Result<()> {
  let engine = Arc::new(TesseractEngine::new(config.ocr.clone()).with_binary(tesseract));
  let image = Arc::new(SourceImage::new());
  // Until the image is decoded, an unknown display size maps pointer pixels 1:1.
  let initial_display = display.unwrap_or(DisplaySize::new(0.0, 0.0));
  let (session, mut commands) =
    HoverSession::start(&config, catalog, engine, image.clone(), initial_display);
  let session = Arc::new(session);

  let mut loader = {
    let image = image.clone();
    let session = session.clone();
    tokio::spawn(async move { load_image(&image, &image_path, &session, display).await })
  };

  let printer = tokio::spawn(async move {
    while let Some(command) = commands.recv().await {
      match serde_json::to_string(&command) {
        Ok(line) => println!("{}", line),
        Err(e) => log::error!("failed to serialize {:?}: {}", command, e),
      }
    }
  });

  // A failed image load aborts the session right away instead of after stdin closes.
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  let mut image_loaded = false;
  loop {
    tokio::select! {
      loaded = &mut loader, if !image_loaded => {
        loaded.context("image loader task failed to join")??;
        image_loaded = true;
      }
      line = lines.next_line() => {
        let Some(line) = line.context("Failed to read stdin")? else {
          break;
        };
        match parse_pointer(&line) {
          Some(pointer) => session.pointer_moved(pointer),
          None if line.trim().is_empty() => {}
          None => log::warn!("ignoring malformed pointer line {:?}", line),
        }
      }
    }
  }

  if !image_loaded {
    loader.await.context("image loader task failed to join")??;
  }
  let session = Arc::try_unwrap(session)
    .map_err(|_| anyhow::anyhow!("hover session still shared at shutdown"))?;
  session.shutdown().await?;
  printer.await.context("printer task failed to join")?;
  Ok(())
}

async fn load_image(
  image: &SourceImage,
  path: &Path,
  session: &HoverSession,
  display: Option<DisplaySize>,
) -> Result<()> {
  image.load_from_path(path).await?;
  if display.is_none() {
    if let Some(loaded) = image.loaded() {
      session.set_display_size(DisplaySize::new(
        loaded.natural_width as f64,
        loaded.natural_height as f64,
      ));
    }
  }
  Ok(())
}
