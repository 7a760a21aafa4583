//! Image composition: stacking strips onto a single canvas.

use image::{DynamicImage, RgbImage, imageops};

use crate::error::{EngineError, Result};

/// Concatenate images vertically (top to bottom) onto an RGB canvas.
///
/// The canvas is as wide as the first image and as tall as all images
/// combined. Every image is pasted left-aligned at its cumulative offset;
/// wider images are clipped and narrower ones leave the canvas black.
/// Alpha is discarded, not blended.
pub fn stack_vertical(images: &[DynamicImage]) -> Result<RgbImage> {
    let first = images
        .first()
        .ok_or_else(|| EngineError::Transform("no images to stack".into()))?;

    let width = first.width();
    let height = images
        .iter()
        .try_fold(0u32, |acc, img| acc.checked_add(img.height()))
        .ok_or_else(|| EngineError::Transform("combined height overflows".into()))?;

    let mut canvas = RgbImage::new(width, height);

    let mut y_offset = 0u32;
    for img in images {
        let rgb = img.to_rgb8();
        imageops::replace(&mut canvas, &rgb, 0, i64::from(y_offset));
        y_offset += img.height();
    }

    Ok(canvas)
}
