use crate::{ClassifierConfig, ClassifyError, InputTensor, Representation};
use base::{Tensor, Vec2};
use image::{Frame, ResizeFilter};

/// Turns camera frames into fixed-size model input.
///
/// Holds no state besides its settings; every call is independent.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessor {
    input_size: usize,
    representation: Representation,
    filter: ResizeFilter,
    mirror: bool,
}

impl Preprocessor {
    pub fn new(input_size: usize, representation: Representation) -> Self {
        Self {
            input_size,
            representation,
            filter: ResizeFilter::Nearest,
            mirror: false,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.input_size(), config.representation())
            .with_filter(config.filter())
            .with_mirror(config.mirror())
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// `input_size * input_size * 3`, the length of every tensor produced.
    pub fn input_len(&self) -> usize {
        self.input_size * self.input_size * 3
    }

    /// Decode, optionally mirror, and resample `frame` to `[size, size, 3]`.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::Decode` if the frame buffer cannot be interpreted.
    pub fn run(&self, frame: &Frame) -> Result<InputTensor, ClassifyError> {
        let mut rgb = image::to_rgb(frame)?;
        if self.mirror {
            image::flip_horizontal(&mut rgb)?;
        }
        let target = Vec2::new(self.input_size, self.input_size);
        let resized = image::resize_rgb(&rgb, target, self.filter)?;
        let tensor = Tensor::new(vec![self.input_size, self.input_size, 3], resized.data)?;
        Ok(match self.representation {
            Representation::U8 => InputTensor::U8(tensor),
            Representation::F32 => InputTensor::F32(tensor.map(|&v| v as f32 / 255.0)),
        })
    }
}
