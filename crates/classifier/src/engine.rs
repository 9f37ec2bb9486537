use crate::{ClassifyError, InputTensor, Scores};
use std::path::PathBuf;

/// The inference capability the classifier depends on but never implements.
///
/// `invoke` is synchronous and may take tens of milliseconds. It takes
/// `&mut self`, so a single engine never runs two frames at once.
pub trait Engine {
    fn invoke(&mut self, input: &InputTensor) -> Result<Scores, ClassifyError>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn invoke(&mut self, input: &InputTensor) -> Result<Scores, ClassifyError> {
        (**self).invoke(input)
    }
}

/// Where a model blob comes from. The format is up to the engine.
#[derive(Debug, Clone)]
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl ModelSource {
    pub fn read(self) -> Result<Vec<u8>, ClassifyError> {
        let bytes = match self {
            ModelSource::File(path) => std::fs::read(&path).map_err(|e| {
                ClassifyError::ResourceLoad(format!("failed to read model {}: {}", path.display(), e))
            })?,
            ModelSource::Memory(bytes) => bytes,
        };
        if bytes.is_empty() {
            return Err(ClassifyError::ResourceLoad("model resource is empty".to_string()));
        }
        Ok(bytes)
    }
}
