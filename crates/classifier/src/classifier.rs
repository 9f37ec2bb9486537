use crate::{ClassifierConfig, ClassifyError, Engine, LabelTable, Prediction, Preprocessor, RankedResult, Scores, rank};
use image::Frame;
use std::time::Instant;

/// A long-lived classifier: one engine, one label table, fixed settings.
///
/// Built once and reused for every frame. Nothing but the engine's own
/// state changes between calls.
pub struct Classifier<E> {
    engine: E,
    labels: LabelTable,
    preprocessor: Preprocessor,
    threshold: f32,
    max_results: usize,
}

impl<E: Engine> Classifier<E> {
    pub fn new(engine: E, labels: LabelTable, config: &ClassifierConfig) -> Result<Self, ClassifyError> {
        config.validate()?;
        if labels.is_empty() {
            return Err(ClassifyError::ResourceLoad("label table is empty".to_string()));
        }
        log::info!(
            "classifier ready: {} labels, input {}x{} {:?}, threshold {}, top {}",
            labels.len(),
            config.input_size(),
            config.input_size(),
            config.representation(),
            config.threshold(),
            config.max_results()
        );
        Ok(Self {
            engine,
            labels,
            preprocessor: Preprocessor::from_config(config),
            threshold: config.threshold(),
            max_results: config.max_results(),
        })
    }

    /// Run one frame through preprocessing, inference and ranking.
    ///
    /// `inference_time` brackets the engine call alone.
    pub fn classify(&mut self, frame: &Frame) -> Result<RankedResult, ClassifyError> {
        let start = Instant::now();
        let input = self.preprocessor.run(frame)?;

        let inference_start = Instant::now();
        let scores = self.engine.invoke(&input)?;
        let inference_time = inference_start.elapsed();

        let predictions = self.rank_scores(&scores);
        Ok(RankedResult {
            predictions,
            inference_time,
            total_time: start.elapsed(),
        })
    }

    /// Like `classify`, but a failed frame is logged and yields no result.
    pub fn process(&mut self, frame: &Frame) -> Option<RankedResult> {
        match self.classify(frame) {
            Ok(result) => Some(result),
            Err(error) => {
                log::warn!("skipping {:?} frame of {}: {}", frame.format, frame.size, error);
                None
            }
        }
    }

    pub fn rank_scores(&self, scores: &Scores) -> Vec<Prediction> {
        rank(scores, &self.labels, self.threshold, self.max_results)
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(feature = "onnx")]
impl Classifier<crate::OnnxEngine> {
    /// Load an ONNX model and a newline-separated label file.
    pub fn load(
        model: crate::ModelSource,
        labels_path: impl AsRef<std::path::Path>,
        config: &ClassifierConfig,
        layout: crate::TensorLayout,
    ) -> Result<Self, ClassifyError> {
        let labels = LabelTable::load(labels_path)?;
        let engine = crate::OnnxEngine::load(model, layout)?;
        Self::new(engine, labels, config)
    }
}
