// src/render/ticker.rs

//! Periodic redraw task.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::render::painter::Renderer;
use crate::status::StatusTable;

/// Renderer shared between the ticker and the final redraw.
pub type SharedRenderer<W> = Arc<Mutex<Renderer<W>>>;

/// Handle to a running ticker task.
#[derive(Debug)]
pub struct Ticker {
    stop: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

/// Redraw `table` every `interval` until stopped.
///
/// Ticks are lossy: a late tick is skipped rather than replayed, and every
/// tick reads a fresh snapshot, so nothing is lost by skipping.
pub fn spawn_ticker<W>(
    table: Arc<StatusTable>,
    renderer: SharedRenderer<W>,
    interval: Duration,
) -> Ticker
where
    W: Write + Send + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        debug!(?interval, "render ticker started");
        let mut ticks = tokio::time::interval(interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = &mut stop_rx => break,

                _ = ticks.tick() => {
                    let snapshot = table.snapshot();
                    let mut painter = renderer.lock().unwrap_or_else(PoisonError::into_inner);
                    if let Err(e) = painter.draw_snapshot(&snapshot) {
                        warn!(error = %e, "status redraw failed");
                    }
                }
            }
        }

        debug!("render ticker stopped");
    });

    Ticker {
        stop: Some(stop_tx),
        handle,
    }
}

impl Ticker {
    /// Stop the task and wait until it has exited, so no tick can race a
    /// redraw issued afterwards.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            // Err means the task is already gone.
            let _ = stop.send(());
        }

        if let Err(e) = self.handle.await {
            warn!(error = %e, "render ticker task ended abnormally");
        }
    }
}
