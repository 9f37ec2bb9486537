use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inference over {} frames: min {} ms, mean {:.1} ms, max {} ms",
            self.count,
            self.min.as_millis(),
            self.mean.as_secs_f64() * 1000.0,
            self.max.as_millis()
        )
    }
}

/// Collects inference latencies and summarizes every `window` samples.
#[derive(Debug, Clone)]
pub struct LatencyWindow {
    window: usize,
    samples: Vec<Duration>,
}

impl LatencyWindow {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            samples: Vec::with_capacity(window),
        }
    }

    /// Add a sample. Returns a summary and starts over once the window is full.
    pub fn record(&mut self, latency: Duration) -> Option<LatencySummary> {
        if self.window == 0 {
            return None;
        }
        self.samples.push(latency);
        if self.samples.len() < self.window {
            return None;
        }
        let count = self.samples.len();
        let total: Duration = self.samples.iter().sum();
        let summary = LatencySummary {
            count,
            min: self.samples.iter().copied().min().unwrap_or_default(),
            max: self.samples.iter().copied().max().unwrap_or_default(),
            mean: total / count as u32,
        };
        self.samples.clear();
        Some(summary)
    }
}
