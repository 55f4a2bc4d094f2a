//! Background palette computation on a Tokio runtime
//!
//! A [`PaletteWorker`] owns a task that receives [`WorkerRequest`]s over a
//! channel and runs the quantizer on the blocking thread pool. Replies come
//! back on a per-request oneshot channel. [`ColorFinder::dominant_color_async`]
//! waits for the worker at most [`FinderConfig::worker_timeout`] and falls
//! back to computing in place.
//!
//! [`FinderConfig::worker_timeout`]: crate::FinderConfig::worker_timeout

use std::sync::Arc;

use colorfinder_core::Rgb;
use colorfinder_io::{ExtractOptions, RgbaImage};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{FinderError, FinderResult};
use crate::finder::{ColorFinder, palette_from_image};

/// Work item sent to the worker
#[derive(Debug, Clone)]
pub struct WorkerRequest {
    /// Image to sample
    pub image: Arc<RgbaImage>,
    /// Palette size requested from the quantizer
    pub max_colors: usize,
    /// Sampling parameters
    pub options: ExtractOptions,
}

/// Palette in ascending priority order, or the error message
pub type WorkerResponse = Result<Vec<Rgb>, String>;

struct Job {
    request: WorkerRequest,
    reply: oneshot::Sender<WorkerResponse>,
}

/// Handle to a running palette worker
#[derive(Debug)]
pub struct PaletteWorker {
    sender: mpsc::UnboundedSender<Job>,
    handle: JoinHandle<()>,
}

fn process(request: &WorkerRequest) -> WorkerResponse {
    palette_from_image(&request.image, request.max_colors, &request.options)
        .map_err(|e| e.to_string())
}

impl PaletteWorker {
    /// Start a worker on the current Tokio runtime
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Worker`] when called outside a runtime.
    pub fn spawn() -> FinderResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| FinderError::Worker(format!("no Tokio runtime: {e}")))?;
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        let handle = runtime.spawn(async move {
            while let Some(Job { request, reply }) = receiver.recv().await {
                let response = match tokio::task::spawn_blocking(move || process(&request)).await
                {
                    Ok(response) => response,
                    Err(e) => Err(format!("palette task failed: {e}")),
                };
                if reply.send(response).is_err() {
                    log::trace!("palette requester went away before the reply");
                }
            }
            log::debug!("palette worker stopped");
        });
        log::debug!("palette worker started");

        Ok(Self { sender, handle })
    }

    /// Whether the worker still accepts requests
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed() && !self.handle.is_finished()
    }

    /// Compute a palette on the worker
    pub async fn submit(&self, request: WorkerRequest) -> FinderResult<Vec<Rgb>> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Job { request, reply })
            .map_err(|_| FinderError::Worker("worker is not running".to_string()))?;
        response
            .await
            .map_err(|_| FinderError::Worker("worker dropped the request".to_string()))?
            .map_err(FinderError::Worker)
    }

    /// Stop the worker. Requests in flight are abandoned.
    pub fn terminate(self) {
        self.handle.abort();
    }
}

impl ColorFinder {
    /// Create a finder and, when `config.use_worker` is set, start its worker.
    ///
    /// Must be called within a Tokio runtime when the worker is enabled.
    pub fn with_worker(config: crate::FinderConfig) -> FinderResult<Self> {
        let mut finder = Self::new(config)?;
        if finder.config.use_worker {
            finder.worker = Some(PaletteWorker::spawn()?);
        }
        Ok(finder)
    }

    /// Replace the worker with a fresh one
    pub fn update_worker(&mut self) -> FinderResult<()> {
        self.terminate_worker();
        self.worker = Some(PaletteWorker::spawn()?);
        Ok(())
    }

    /// Stop the worker if one is running
    pub fn terminate_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.terminate();
        }
    }

    /// Whether a worker is attached
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Dominant color of `image`, preferring the worker.
    ///
    /// Worker failures and timeouts are logged and the color is computed in
    /// place instead, so the result matches [`ColorFinder::dominant_color`].
    pub async fn dominant_color_async(&self, image: Arc<RgbaImage>) -> FinderResult<Rgb> {
        if let Some(worker) = self.worker.as_ref().filter(|_| self.config.use_worker) {
            let request = WorkerRequest {
                image: Arc::clone(&image),
                max_colors: self.config.max_colors,
                options: self.config.extract_options(),
            };
            match tokio::time::timeout(self.config.worker_timeout, worker.submit(request)).await {
                Ok(Ok(palette)) => match palette.last() {
                    Some(&color) => return Ok(self.finish(color)),
                    None => log::warn!("palette worker returned no colors, computing in place"),
                },
                Ok(Err(e)) => log::warn!("{e}, computing in place"),
                Err(_) => log::warn!(
                    "palette worker timed out after {:?}, computing in place",
                    self.config.worker_timeout
                ),
            }
        }
        self.dominant_color(&image)
    }
}
