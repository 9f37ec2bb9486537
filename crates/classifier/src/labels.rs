use crate::ClassifyError;
use std::path::Path;
use std::sync::Arc;

/// Human-readable labels, index-aligned with the model's output classes.
///
/// Immutable once loaded. Clones share the same storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Arc<[String]>,
}

impl LabelTable {
    /// One label per line in ascending class order. No header, no numbering.
    pub fn parse(text: &str) -> Result<Self, ClassifyError> {
        if text.trim().is_empty() {
            return Err(ClassifyError::ResourceLoad("label resource is empty".to_string()));
        }
        Ok(Self {
            labels: text.lines().map(str::to_string).collect(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::ResourceLoad(format!("failed to read labels {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}
