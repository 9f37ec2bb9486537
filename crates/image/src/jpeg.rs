use crate::*;
use base::Vec2;
use crates_image::ImageEncoder;

pub fn jpeg_to_rgb(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)
        .map_err(|e| ImageError::Decode(format!("failed to decode JPEG: {}", e)))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Decode("JPEG has no pixels".to_string()));
    }
    let size = Vec2::new(width as usize, height as usize);
    Ok(Image::new(size, rgb.into_raw(), PixelFormat::Rgb8))
}

/// Encode an `Rgb8` image as JPEG. Used by tools that record frames.
pub fn rgb_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &image.data,
            image.size.x as u32,
            image.size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}
