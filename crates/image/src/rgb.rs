use crate::*;
use base::Vec2;

pub(crate) fn bgra_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..size.area() * 4].chunks_exact(4) {
        rgb.extend_from_slice(&[chunk[2], chunk[1], chunk[0]]);
    }
    rgb
}

pub(crate) fn argb_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..size.area() * 4].chunks_exact(4) {
        rgb.extend_from_slice(&chunk[1..4]);
    }
    rgb
}

pub(crate) fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..size.area() * 2].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }
    rgb
}

pub(crate) fn yu12_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let (width, height) = (size.x, size.y);
    let y_len = width * height;
    let uv_w = width.div_ceil(2);
    let uv_len = uv_w * height.div_ceil(2);

    let y_plane = &data[..y_len];
    let u_plane = &data[y_len..y_len + uv_len];
    let v_plane = &data[y_len + uv_len..y_len + 2 * uv_len];

    let mut rgb = Vec::with_capacity(y_len * 3);
    for row in 0..height {
        for col in 0..width {
            let uv = (row / 2) * uv_w + col / 2;
            let (r, g, b) = yuv_to_rgb(y_plane[row * width + col], u_plane[uv], v_plane[uv]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }
    rgb
}

pub(crate) fn nv21_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let (width, height) = (size.x, size.y);
    let y_len = width * height;
    let uv_w = width.div_ceil(2);

    let y_plane = &data[..y_len];
    let vu_plane = &data[y_len..];

    let mut rgb = Vec::with_capacity(y_len * 3);
    for row in 0..height {
        for col in 0..width {
            let vu = ((row / 2) * uv_w + col / 2) * 2;
            let (r, g, b) = yuv_to_rgb(y_plane[row * width + col], vu_plane[vu + 1], vu_plane[vu]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }
    rgb
}

/// Decode any supported frame into an `Rgb8` image.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the buffer is empty, shorter than the
/// format requires for the declared size, or not a decodable JPEG.
pub fn to_rgb(frame: &Frame) -> Result<Image, ImageError> {
    frame.validate()?;
    let size = frame.size;
    let data = match frame.format {
        PixelFormat::Rgb8 => frame.data[..size.area() * 3].to_vec(),
        PixelFormat::Bgra8 => bgra_to_rgb(size, frame.data),
        PixelFormat::Argb8 => argb_to_rgb(size, frame.data),
        PixelFormat::Yuyv => yuyv_to_rgb(size, frame.data),
        PixelFormat::Yu12 => yu12_to_rgb(size, frame.data),
        PixelFormat::Nv21 => nv21_to_rgb(size, frame.data),
        PixelFormat::Jpeg => return jpeg_to_rgb(frame.data),
    };
    Ok(Image::new(size, data, PixelFormat::Rgb8))
}

/// Mirror an `Rgb8` image left to right in place.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the image is not `Rgb8` or its buffer
/// does not cover its size.
pub fn flip_horizontal(image: &mut Image) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    image.validate()?;
    let width = image.size.x;
    for row in image.data.chunks_exact_mut(width * 3) {
        for x in 0..width / 2 {
            let mirror = width - 1 - x;
            for c in 0..3 {
                row.swap(x * 3 + c, mirror * 3 + c);
            }
        }
    }
    Ok(())
}
