use crate::ClassifyError;
use image::ResizeFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Numeric representation of the input tensor the model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Quantized bytes, 0..=255.
    #[default]
    U8,
    /// `byte / 255.0`, 0.0..=1.0.
    F32,
}

/// Configuration for one classifier instance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    input_size: usize,
    representation: Representation,
    filter: ResizeFilter,
    mirror: bool,
    threshold: f32,
    max_results: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            input_size: 224,
            representation: Representation::U8,
            filter: ResizeFilter::Nearest,
            mirror: false,
            threshold: 0.1,
            max_results: 10,
        }
    }
}

impl ClassifierConfig {
    /// Quantized 224x224 byte model, reporting up to 10 labels above 10%.
    pub fn quantized() -> Self {
        Self::default()
    }

    /// Floating point model on mirrored frames, reporting up to 2 labels above 2%.
    pub fn float() -> Self {
        Self {
            representation: Representation::F32,
            filter: ResizeFilter::Triangle,
            mirror: true,
            threshold: 0.02,
            max_results: 2,
            ..Self::default()
        }
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ClassifyError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::ResourceLoad(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.input_size == 0 {
            return Err(ClassifyError::Config("input_size must be positive".to_string()));
        }
        if self.input_size.checked_mul(self.input_size).and_then(|n| n.checked_mul(3)).is_none() {
            return Err(ClassifyError::Config(format!(
                "input_size {} overflows the tensor length",
                self.input_size
            )));
        }
        if self.max_results == 0 {
            return Err(ClassifyError::Config("max_results must be positive".to_string()));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(ClassifyError::Config(format!(
                "threshold must be in [0, 1), got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    // Getters
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn filter(&self) -> ResizeFilter {
        self.filter
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

/// Configuration for the frame pipeline around a classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    min_frame_interval: Option<Duration>,
    result_capacity: usize,
    latency_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_frame_interval: None,
            result_capacity: 4,
            latency_window: 15,
        }
    }
}

impl PipelineConfig {
    /// Skip frames that arrive sooner than `interval` after the last admitted one.
    pub fn with_min_frame_interval(mut self, interval: Duration) -> Self {
        self.min_frame_interval = Some(interval);
        self
    }

    /// Results held for the consumer before new ones are dropped.
    pub fn with_result_capacity(mut self, result_capacity: usize) -> Self {
        self.result_capacity = result_capacity;
        self
    }

    /// Frames per latency summary. Zero disables summaries.
    pub fn with_latency_window(mut self, latency_window: usize) -> Self {
        self.latency_window = latency_window;
        self
    }

    // Getters
    pub fn min_frame_interval(&self) -> Option<Duration> {
        self.min_frame_interval
    }

    pub fn result_capacity(&self) -> usize {
        self.result_capacity
    }

    pub fn latency_window(&self) -> usize {
        self.latency_window
    }
}
