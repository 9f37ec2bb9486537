use crate::*;
use base::Vec2;
use crates_image::{RgbImage, imageops};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    #[default]
    Nearest,
    /// Bilinear, through `image::imageops`.
    Triangle,
}

/// Resample an `Rgb8` image to exactly `target`, ignoring aspect ratio.
pub fn resize_rgb(image: &Image, target: Vec2<usize>, filter: ResizeFilter) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    image.validate()?;
    if target.x == 0 || target.y == 0 {
        return Err(ImageError::Decode(format!("invalid target size {}", target)));
    }
    if image.size == target {
        return Ok(image.clone());
    }
    let data = match filter {
        ResizeFilter::Nearest => resize_nearest(image.size, &image.data, target),
        ResizeFilter::Triangle => {
            let source = RgbImage::from_raw(image.size.x as u32, image.size.y as u32, image.data.clone())
                .ok_or_else(|| ImageError::Decode(format!("RGB buffer too small for {}", image.size)))?;
            imageops::resize(&source, target.x as u32, target.y as u32, imageops::FilterType::Triangle)
                .into_raw()
        }
    };
    Ok(Image::new(target, data, PixelFormat::Rgb8))
}

fn resize_nearest(size: Vec2<usize>, data: &[u8], target: Vec2<usize>) -> Vec<u8> {
    let mut resized = Vec::with_capacity(target.area() * 3);
    for out_y in 0..target.y {
        let src_y = out_y * size.y / target.y;
        let row = &data[src_y * size.x * 3..(src_y + 1) * size.x * 3];
        for out_x in 0..target.x {
            let src_x = out_x * size.x / target.x;
            resized.extend_from_slice(&row[src_x * 3..src_x * 3 + 3]);
        }
    }
    resized
}
