//! Wires the pipeline stages together.
//!
//! ```text
//! pointer_moved ─► scheduler ─► recognition stage ─► hover stage ─► commands
//!       │                        (one task per OCR      (detector +
//!       └──── SetCursorVisual ──► commands   call)       controller)
//! ```
//!
//! Stages talk over unbounded channels. OCR calls are not serialized against each
//! other, so results reach the hover stage in completion order and the last one to
//! finish wins.
use std::sync::Arc;

use anyhow::{Context, Result};
use hoverscan_ocr::OcrEngine;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::config::HoverConfig;
use crate::error::HoverError;
use crate::gateway::OcrGateway;
use crate::geometry::{map_to_source_rect, HeightScaling, ImageMetrics, PointerPosition};
use crate::identity::{HoverState, IdentityChangeDetector};
use crate::presentation::{HoverPresentationController, PresentationCommand};
use crate::scheduler::RecognitionScheduler;
use crate::source_image::{DisplaySize, SourceImage};

pub struct HoverSession {
    scheduler: RecognitionScheduler,
    display_tx: watch::Sender<DisplaySize>,
    commands: mpsc::UnboundedSender<PresentationCommand>,
    handles: Vec<JoinHandle<()>>,
}

impl HoverSession {
    /// Spawns the pipeline tasks. Must be called inside a tokio runtime.
    ///
    /// The receiver yields the catalog render and box size first, then every
    /// presentation update for the rest of the session.
    pub fn start(
        config: &HoverConfig,
        catalog: Catalog,
        engine: Arc<dyn OcrEngine>,
        image: Arc<SourceImage>,
        display: DisplaySize,
    ) -> (Self, mpsc::UnboundedReceiver<PresentationCommand>) {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(display);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        let controller = HoverPresentationController::new(Arc::new(catalog));
        for command in controller.initial_commands(config.box_size) {
            let _ = commands_tx.send(command);
        }

        let (scheduler, fired_rx, scheduler_handle) =
            RecognitionScheduler::spawn(config.throttle_interval());

        let recognition = RecognitionStage {
            gateway: Arc::new(OcrGateway::new(engine, image)),
            display: display_rx,
            box_size: config.box_size,
            height_scaling: config.height_scaling,
        };
        let recognition_handle = tokio::spawn(recognition.run(fired_rx, completions_tx));

        let detector = IdentityChangeDetector::new(HoverState::default());
        let hover_handle = tokio::spawn(hover_loop(
            completions_rx,
            detector,
            controller,
            commands_tx.clone(),
        ));

        log::info!(
            "hover session started (box {}px, throttle {}ms)",
            config.box_size,
            config.throttle_ms
        );

        let session = Self {
            scheduler,
            display_tx,
            commands: commands_tx,
            handles: vec![scheduler_handle, recognition_handle, hover_handle],
        };
        (session, commands_rx)
    }

    /// Handles one pointer-move event.
    pub fn pointer_moved(&self, pointer: PointerPosition) {
        let _ = self.commands.send(PresentationCommand::SetCursorVisual {
            x: pointer.x,
            y: pointer.y,
        });
        self.scheduler.schedule(pointer);
    }

    /// Updates the rendered image size used for later recognitions.
    pub fn set_display_size(&self, display: DisplaySize) {
        self.display_tx.send_replace(display);
    }

    /// Stops accepting pointer events and waits for in-flight work to drain.
    pub async fn shutdown(self) -> Result<()> {
        let Self {
            scheduler,
            commands,
            handles,
            ..
        } = self;
        drop(scheduler);
        drop(commands);
        for handle in handles {
            handle.await.context("hover session task failed to join")?;
        }
        log::info!("hover session stopped");
        Ok(())
    }
}

struct RecognitionStage {
    gateway: Arc<OcrGateway>,
    display: watch::Receiver<DisplaySize>,
    box_size: f64,
    height_scaling: HeightScaling,
}

impl RecognitionStage {
    async fn run(
        self,
        mut fired: mpsc::UnboundedReceiver<PointerPosition>,
        completions: mpsc::UnboundedSender<String>,
    ) {
        let mut in_flight = Vec::new();

        while let Some(pointer) = fired.recv().await {
            let Some(loaded) = self.gateway.image().loaded() else {
                log::debug!("{}, skipping recognition", HoverError::ImageNotReady);
                continue;
            };

            let display = *self.display.borrow();
            let metrics = ImageMetrics {
                natural_width: loaded.natural_width,
                natural_height: loaded.natural_height,
                display_width: display.width,
                display_height: display.height,
            };
            let region = map_to_source_rect(pointer, self.box_size, &metrics, self.height_scaling);

            let gateway = Arc::clone(&self.gateway);
            let completions = completions.clone();
            in_flight.retain(|handle: &JoinHandle<()>| !handle.is_finished());
            in_flight.push(tokio::spawn(async move {
                match gateway.recognize(region).await {
                    Ok(text) => {
                        let _ = completions.send(text);
                    }
                    Err(HoverError::ImageNotReady) => {}
                    Err(e) => log::warn!("recognition at {:?} failed: {}", region, e),
                }
            }));
        }

        for handle in in_flight {
            let _ = handle.await;
        }
    }
}

async fn hover_loop(
    mut completions: mpsc::UnboundedReceiver<String>,
    mut detector: IdentityChangeDetector,
    mut controller: HoverPresentationController,
    commands: mpsc::UnboundedSender<PresentationCommand>,
) {
    while let Some(raw) = completions.recv().await {
        let Some(change) = detector.update(&raw) else {
            continue;
        };
        for command in controller.on_identity_changed(&change) {
            if commands.send(command).is_err() {
                return;
            }
        }
    }
}
