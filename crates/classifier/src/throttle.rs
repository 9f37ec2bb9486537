use std::time::{Duration, Instant};

/// Admits at most one frame per `min_interval`.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    min_interval: Option<Duration>,
    last_admitted: Option<Instant>,
}

impl FrameThrottle {
    pub fn new(min_interval: Option<Duration>) -> Self {
        Self {
            min_interval,
            last_admitted: None,
        }
    }

    /// Whether a frame arriving at `now` should be processed.
    pub fn admit(&mut self, now: Instant) -> bool {
        if let (Some(interval), Some(last)) = (self.min_interval, self.last_admitted) {
            if now.saturating_duration_since(last) < interval {
                return false;
            }
        }
        self.last_admitted = Some(now);
        true
    }
}
