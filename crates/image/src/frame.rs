use crate::*;
use base::Vec2;

/// A borrowed camera frame, valid for one preprocessing call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub size: Vec2<usize>,
    pub data: &'a [u8],
    pub format: PixelFormat,
}

impl<'a> Frame<'a> {
    pub fn new(size: Vec2<usize>, data: &'a [u8], format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Check that the buffer can hold a frame of the declared size and format.
    ///
    /// Compressed frames are only checked for being non-empty; the codec
    /// catches everything else.
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.data.is_empty() {
            return Err(ImageError::Decode("empty frame buffer".to_string()));
        }
        if self.format == PixelFormat::Jpeg {
            return Ok(());
        }
        if self.size.x == 0 || self.size.y == 0 {
            return Err(ImageError::Decode(format!(
                "invalid frame size {}",
                self.size
            )));
        }
        if self.format == PixelFormat::Yuyv && self.size.x % 2 != 0 {
            return Err(ImageError::Decode(format!(
                "YUYV frame width must be even, got {}",
                self.size.x
            )));
        }
        let expected = self.format.expected_len(self.size).ok_or_else(|| {
            ImageError::Decode(format!("frame size {} overflows", self.size))
        })?;
        if self.data.len() < expected {
            return Err(ImageError::Decode(format!(
                "{:?} frame of {} needs {} bytes, got {}",
                self.format,
                self.size,
                expected,
                self.data.len()
            )));
        }
        Ok(())
    }
}

/// An owned frame or raster, used to hand frames across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::new(self.size, &self.data, self.format)
    }

    /// Same checks as `Frame::validate`.
    pub fn validate(&self) -> Result<(), ImageError> {
        self.frame().validate()
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }
}

impl From<Frame<'_>> for Image {
    fn from(frame: Frame<'_>) -> Self {
        Image::new(frame.size, frame.data.to_vec(), frame.format)
    }
}
