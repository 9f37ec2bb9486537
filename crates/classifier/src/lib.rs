//! Frame-to-prediction pipeline for live camera classification.
//!
//! A camera frame goes through the [`Preprocessor`] into a fixed-size
//! [`InputTensor`], an opaque [`Engine`] turns that into raw [`Scores`], and
//! [`rank`] reduces the scores to a short, confidence-filtered list of
//! [`Prediction`]s. [`Classifier`] ties the three together for one model;
//! [`Pipeline`] runs a classifier on its own thread behind a single-slot
//! mailbox so a slow model never builds up a backlog of frames.

pub mod backends;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod labels;
pub mod latency;
pub mod pipeline;
pub mod preprocess;
pub mod rank;
pub mod slot;
pub mod throttle;
pub mod types;

pub use backends::*;
pub use classifier::Classifier;
pub use config::{ClassifierConfig, PipelineConfig, Representation};
pub use engine::{Engine, ModelSource};
pub use error::ClassifyError;
pub use labels::LabelTable;
pub use latency::{LatencySummary, LatencyWindow};
pub use pipeline::{FrameSubmitter, Pipeline, Submit};
pub use preprocess::Preprocessor;
pub use rank::{UNKNOWN_LABEL, rank};
pub use slot::FrameSlot;
pub use throttle::FrameThrottle;
pub use types::{InputTensor, Prediction, RankedResult, Scores};
