use crate::*;
use base::Vec2;

// fourcc codes
pub(crate) const FOURCC_RGB8: u32 = u32::from_le_bytes(*b"RGB8");
pub(crate) const FOURCC_BGRA8: u32 = u32::from_le_bytes(*b"BGRA");
pub(crate) const FOURCC_ARGB8: u32 = u32::from_le_bytes(*b"ARGB");
pub(crate) const FOURCC_YUYV: u32 = u32::from_le_bytes(*b"YUYV");
pub(crate) const FOURCC_YU12: u32 = u32::from_le_bytes(*b"YU12");
pub(crate) const FOURCC_NV21: u32 = u32::from_le_bytes(*b"NV21");
pub(crate) const FOURCC_MJPG: u32 = u32::from_le_bytes(*b"MJPG");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed `R, G, B`.
    Rgb8,
    /// Packed `B, G, R, A`, as delivered by macOS capture sessions.
    Bgra8,
    /// Packed `A, R, G, B`.
    Argb8,
    /// YUV 4:2:2 packed as `Y0, U, Y1, V`.
    Yuyv,
    /// YUV 4:2:0 planar: Y plane, then U plane, then V plane.
    Yu12,
    /// YUV 4:2:0 semi-planar: Y plane, then interleaved `V, U` pairs (Android preview).
    Nv21,
    /// Compressed JPEG. Dimensions come from the bitstream.
    Jpeg,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_RGB8 => Ok(PixelFormat::Rgb8),
            FOURCC_BGRA8 => Ok(PixelFormat::Bgra8),
            FOURCC_ARGB8 => Ok(PixelFormat::Argb8),
            FOURCC_YUYV => Ok(PixelFormat::Yuyv),
            FOURCC_YU12 => Ok(PixelFormat::Yu12),
            FOURCC_NV21 => Ok(PixelFormat::Nv21),
            FOURCC_MJPG => Ok(PixelFormat::Jpeg),
            _ => Err(ImageError::Decode(format!(
                "unsupported pixel format: {}",
                fourcc_to_string(fourcc)
            ))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => FOURCC_RGB8,
            PixelFormat::Bgra8 => FOURCC_BGRA8,
            PixelFormat::Argb8 => FOURCC_ARGB8,
            PixelFormat::Yuyv => FOURCC_YUYV,
            PixelFormat::Yu12 => FOURCC_YU12,
            PixelFormat::Nv21 => FOURCC_NV21,
            PixelFormat::Jpeg => FOURCC_MJPG,
        }
    }

    /// Bytes a raw frame of `size` occupies, `None` for compressed formats.
    ///
    /// Chroma planes of the 4:2:0 formats round odd dimensions up.
    pub fn expected_len(&self, size: Vec2<usize>) -> Option<usize> {
        let pixels = size.checked_area()?;
        let chroma = size.x.div_ceil(2).checked_mul(size.y.div_ceil(2))?;
        match self {
            PixelFormat::Rgb8 => pixels.checked_mul(3),
            PixelFormat::Bgra8 | PixelFormat::Argb8 => pixels.checked_mul(4),
            PixelFormat::Yuyv => pixels.checked_mul(2),
            PixelFormat::Yu12 | PixelFormat::Nv21 => pixels.checked_add(chroma.checked_mul(2)?),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Decode(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}
