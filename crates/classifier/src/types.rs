use crate::Representation;
use base::Tensor;
use std::fmt;
use std::time::Duration;

/// Model input: HWC `[size, size, 3]`, row-major, R, G, B per pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum InputTensor {
    U8(Tensor<u8>),
    F32(Tensor<f32>),
}

impl InputTensor {
    pub fn shape(&self) -> &[usize] {
        match self {
            InputTensor::U8(t) => &t.shape,
            InputTensor::F32(t) => &t.shape,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InputTensor::U8(t) => t.len(),
            InputTensor::F32(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn representation(&self) -> Representation {
        match self {
            InputTensor::U8(_) => Representation::U8,
            InputTensor::F32(_) => Representation::F32,
        }
    }

    /// Raw input buffer in the native byte order of the representation,
    /// for engines that take an untyped byte buffer.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        match self {
            InputTensor::U8(t) => t.data.clone(),
            InputTensor::F32(t) => t.data.iter().flat_map(|v| v.to_ne_bytes()).collect(),
        }
    }
}

/// Raw per-class output of one inference call, in its declared representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Scores {
    /// Quantized scores; confidence is `byte / 255`.
    U8(Vec<u8>),
    /// Probabilities; anything outside `[0, 1]` is clamped into it.
    F32(Vec<f32>),
}

impl Scores {
    pub fn len(&self) -> usize {
        match self {
            Scores::U8(s) => s.len(),
            Scores::F32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn representation(&self) -> Representation {
        match self {
            Scores::U8(_) => Representation::U8,
            Scores::F32(_) => Representation::F32,
        }
    }

    /// Confidence of class `index`, normalized once according to the
    /// representation. Always in `[0, 1]` unless the raw score is NaN.
    pub fn confidence(&self, index: usize) -> Option<f32> {
        match self {
            Scores::U8(s) => s.get(index).map(|&b| b as f32 / 255.0),
            // NaN passes through clamp unchanged
            Scores::F32(s) => s.get(index).map(|v| v.clamp(0.0, 1.0)),
        }
    }

    /// Every confidence in class order.
    pub fn confidences(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len()).filter_map(|index| self.confidence(index))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Decimal class index.
    pub class_id: String,
    pub label: String,
    pub confidence: f32,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({:.1}%)",
            self.class_id,
            self.label,
            self.confidence * 100.0
        )
    }
}

/// Predictions for one frame, best first, with timings.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub predictions: Vec<Prediction>,
    /// Time spent inside the engine call only.
    pub inference_time: Duration,
    /// Preprocessing, inference and ranking together.
    pub total_time: Duration,
}

impl RankedResult {
    pub fn inference_ms(&self) -> u128 {
        self.inference_time.as_millis()
    }

    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predictions in {} ms:", self.inference_ms())?;
        for prediction in &self.predictions {
            write!(f, "\n{}", prediction)?;
        }
        Ok(())
    }
}
