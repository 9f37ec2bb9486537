use std::fmt;

#[derive(Debug)]
pub enum ClassifyError {
    /// Model or label resource missing or unreadable. Fatal to construction.
    ResourceLoad(String),
    /// A frame could not be interpreted. The frame is skipped.
    Decode(String),
    /// The inference engine failed on a frame. The frame is skipped.
    Inference(String),
    Config(String),
}

impl ClassifyError {
    /// Whether the pipeline should skip the current frame and carry on.
    pub fn is_per_frame(&self) -> bool {
        matches!(self, ClassifyError::Decode(_) | ClassifyError::Inference(_))
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::ResourceLoad(msg) => write!(f, "resource load error: {msg}"),
            ClassifyError::Decode(msg) => write!(f, "decode error: {msg}"),
            ClassifyError::Inference(msg) => write!(f, "inference error: {msg}"),
            ClassifyError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {}

impl From<image::ImageError> for ClassifyError {
    fn from(err: image::ImageError) -> Self {
        ClassifyError::Decode(err.to_string())
    }
}

impl From<base::TensorError> for ClassifyError {
    fn from(err: base::TensorError) -> Self {
        ClassifyError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ClassifyError {
    fn from(err: std::io::Error) -> Self {
        ClassifyError::ResourceLoad(err.to_string())
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::Config(err.to_string())
    }
}
