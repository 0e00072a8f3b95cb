// Swipe stream - runs one detector over a sequence or channel of pose frames

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

use crate::core::swipe_detector::SwipeDetector;
use crate::core::touchless_events::TouchlessEventEmitter;
use crate::models::pose::ActivePose;
use crate::models::swipe::{SwipeConfig, SwipeScore, TouchlessEvent};

// ==============================================================================
// Iterator Adapter
// ==============================================================================

/// Lazily maps pose frames to swipe scores, one score per frame
pub struct SwipeScores<I> {
    detector: SwipeDetector,
    frames: I,
}

impl<I> Iterator for SwipeScores<I>
where
    I: Iterator<Item = Option<ActivePose>>,
{
    type Item = SwipeScore;

    fn next(&mut self) -> Option<SwipeScore> {
        let frame = self.frames.next()?;
        Some(self.detector.process(frame.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl SwipeDetector {
    /// Consume the detector and score every frame of `frames` in order
    pub fn scores<I>(self, frames: I) -> SwipeScores<I::IntoIter>
    where
        I: IntoIterator<Item = Option<ActivePose>>,
    {
        SwipeScores {
            detector: self,
            frames: frames.into_iter(),
        }
    }
}

// ==============================================================================
// Channel Pipeline
// ==============================================================================

/// Result of one processed frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeOutput {
    pub frame: u64,
    pub score: SwipeScore,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TouchlessEvent>,
}

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Swipe stream is not running")]
    NotRunning,

    #[error("Swipe stream closed")]
    Closed,
}

pub type StreamResult<T> = Result<T, StreamError>;

/// A background task owning one [`SwipeDetector`].
///
/// Frames sent through [`SwipeStream::send`] are processed strictly in
/// arrival order and each yields exactly one [`SwipeOutput`].
pub struct SwipeStream {
    frame_tx: Arc<RwLock<Option<mpsc::Sender<Option<ActivePose>>>>>,
    is_running: Arc<RwLock<bool>>,
}

impl SwipeStream {
    /// Spawn the processing task. Must be called from within a tokio runtime.
    pub async fn start(
        config: SwipeConfig,
        emit_events: bool,
        buffer: usize,
    ) -> (Self, mpsc::Receiver<SwipeOutput>) {
        let buffer = buffer.max(1);
        let (frame_tx, frame_rx) = mpsc::channel::<Option<ActivePose>>(buffer);
        let (output_tx, output_rx) = mpsc::channel::<SwipeOutput>(buffer);

        let is_running = Arc::new(RwLock::new(true));
        let detector = SwipeDetector::new(config);
        let emitter = emit_events.then(TouchlessEventEmitter::new);

        let is_running_clone = is_running.clone();
        tokio::spawn(async move {
            Self::process_frames(detector, emitter, frame_rx, output_tx, is_running_clone).await;
        });

        debug!(buffer, emit_events, "Started swipe stream");
        let stream = Self {
            frame_tx: Arc::new(RwLock::new(Some(frame_tx))),
            is_running,
        };
        (stream, output_rx)
    }

    /// Queue the next frame; `None` means no active subject this frame
    pub async fn send(&self, frame: Option<ActivePose>) -> StreamResult<()> {
        let tx = self
            .frame_tx
            .read()
            .await
            .clone()
            .ok_or(StreamError::NotRunning)?;

        tx.send(frame).await.map_err(|_| StreamError::Closed)
    }

    /// Stop accepting frames. Queued frames are still processed before the
    /// output channel closes.
    pub async fn stop(&self) {
        // Dropping the sender lets the task drain and exit
        *self.frame_tx.write().await = None;
    }

    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }

    async fn process_frames(
        mut detector: SwipeDetector,
        mut emitter: Option<TouchlessEventEmitter>,
        mut frame_rx: mpsc::Receiver<Option<ActivePose>>,
        output_tx: mpsc::Sender<SwipeOutput>,
        is_running: Arc<RwLock<bool>>,
    ) {
        let mut frame = 0u64;
        while let Some(pose) = frame_rx.recv().await {
            frame += 1;
            let score = detector.process(pose.as_ref());
            let events = emitter
                .as_mut()
                .map(|emitter| emitter.observe(&score))
                .unwrap_or_default();

            if output_tx.send(SwipeOutput { frame, score, events }).await.is_err() {
                debug!("Swipe output receiver dropped");
                break;
            }
        }

        *is_running.write().await = false;
        debug!(frames = frame, "Swipe stream finished");
    }
}
