use crate::{
    Classifier, ClassifyError, Engine, FrameSlot, FrameThrottle, LatencyWindow, PipelineConfig, RankedResult,
};
use image::Image;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tokio::sync::mpsc;

/// What happened to a submitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Waiting for the worker.
    Queued,
    /// Waiting for the worker; an older waiting frame was dropped for it.
    Replaced,
    /// Dropped because it arrived too soon after the last admitted frame.
    Throttled,
    /// Dropped because the pipeline is shut down.
    Closed,
}

/// Producer handle for a running pipeline. Cheap to clone, never blocks.
#[derive(Clone)]
pub struct FrameSubmitter {
    slot: Arc<FrameSlot<Image>>,
    throttle: Arc<Mutex<FrameThrottle>>,
}

impl FrameSubmitter {
    /// Hand a frame to the worker without waiting for it.
    ///
    /// At most one frame ever waits; a newer frame replaces it.
    pub fn submit(&self, image: Image) -> Submit {
        let admitted = self
            .throttle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .admit(Instant::now());
        if !admitted {
            log::debug!("frame throttled");
            return Submit::Throttled;
        }
        match self.slot.put(image) {
            Ok(None) => Submit::Queued,
            Ok(Some(_)) => {
                log::debug!("pending frame dropped: classifier busy");
                Submit::Replaced
            }
            Err(_) => Submit::Closed,
        }
    }

    /// Stop the pipeline from the producer side, e.g. when the camera stops.
    pub fn close(&self) {
        self.slot.close();
    }
}

/// A classifier running on its own worker thread, fed through a single-slot
/// mailbox.
///
/// Frames are classified one at a time, latest first. Results come back on
/// a bounded channel; the caller decides where to present them.
pub struct Pipeline {
    submitter: FrameSubmitter,
    results: mpsc::Receiver<RankedResult>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("closed", &self.submitter.slot.is_closed())
            .field("worker", &self.worker.is_some())
            .finish()
    }
}

impl Pipeline {
    /// Move `classifier` onto a new worker thread.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::Config` if the result capacity is zero, or
    /// `ClassifyError::ResourceLoad` if the thread cannot be spawned.
    pub fn spawn<E>(classifier: Classifier<E>, config: PipelineConfig) -> Result<Self, ClassifyError>
    where
        E: Engine + Send + 'static,
    {
        if config.result_capacity() == 0 {
            return Err(ClassifyError::Config("result_capacity must be positive".to_string()));
        }

        let slot = Arc::new(FrameSlot::new());
        let (tx, rx) = mpsc::channel(config.result_capacity());
        let latency_window = config.latency_window();

        let worker = {
            let slot = Arc::clone(&slot);
            thread::Builder::new()
                .name("classifier".to_string())
                .spawn(move || run_worker(classifier, slot, tx, latency_window))
                .map_err(|e| ClassifyError::ResourceLoad(format!("failed to spawn worker: {}", e)))?
        };

        Ok(Self {
            submitter: FrameSubmitter {
                slot,
                throttle: Arc::new(Mutex::new(FrameThrottle::new(config.min_frame_interval()))),
            },
            results: rx,
            worker: Some(worker),
        })
    }

    pub fn submit(&self, image: Image) -> Submit {
        self.submitter.submit(image)
    }

    /// A handle for the camera callback thread.
    pub fn submitter(&self) -> FrameSubmitter {
        self.submitter.clone()
    }

    /// Next result. `None` once the pipeline is closed and drained.
    pub async fn recv(&mut self) -> Option<RankedResult> {
        self.results.recv().await
    }

    pub fn try_recv(&mut self) -> Option<RankedResult> {
        self.results.try_recv().ok()
    }

    /// Blocking variant of `recv` for callers outside an async runtime.
    pub fn blocking_recv(&mut self) -> Option<RankedResult> {
        self.results.blocking_recv()
    }

    /// Stop accepting frames. The frame in flight and a waiting frame still
    /// produce results.
    pub fn close(&self) {
        self.submitter.close();
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        self.close();
        // the worker never blocks on the result channel, so this waits for
        // at most the frame in flight and the one behind it
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn run_worker<E: Engine>(
    mut classifier: Classifier<E>,
    slot: Arc<FrameSlot<Image>>,
    tx: mpsc::Sender<RankedResult>,
    latency_window: usize,
) {
    let mut latency = LatencyWindow::new(latency_window);
    while let Some(image) = slot.take() {
        let Some(result) = classifier.process(&image.frame()) else {
            continue;
        };
        if let Some(summary) = latency.record(result.inference_time) {
            log::info!("{}", summary);
        }
        match tx.try_send(result) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                log::debug!("result dropped: consumer too slow");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                // receiver dropped
                break;
            }
        }
    }
    log::debug!("classifier worker stopped");
}
