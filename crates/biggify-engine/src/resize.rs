//! Lanczos3 resizing for the stretch and rescale steps.
//!
//! Neither operation preserves aspect ratio: the stretch only widens, and
//! the rescale multiplies both axes by the same factor. Target dimensions
//! are truncated, and a target that truncates to zero is an error rather
//! than an empty image.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::error::{EngineError, Result};

/// Filter used for every resize in the pipeline.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Stretch an image horizontally by `factor`, keeping its height.
pub fn stretch_horizontal(img: &DynamicImage, factor: f64) -> Result<DynamicImage> {
    let (orig_w, orig_h) = (img.width(), img.height());
    let new_width = scaled_dimension(orig_w, factor)?;

    if new_width == orig_w {
        debug!(orig_w, "Stretch leaves width unchanged, skipping resize");
        return Ok(img.clone());
    }

    debug!(
        orig_w,
        orig_h,
        new_width,
        factor,
        "Stretching image horizontally"
    );

    Ok(img.resize_exact(new_width, orig_h, FILTER))
}

/// Scale both dimensions of an image by `factor`.
///
/// A factor of exactly 1.0 returns the image unchanged.
pub fn scale_by(img: &DynamicImage, factor: f64) -> Result<DynamicImage> {
    let (orig_w, orig_h) = (img.width(), img.height());

    if factor == 1.0 {
        return Ok(img.clone());
    }

    let new_width = scaled_dimension(orig_w, factor)?;
    let new_height = scaled_dimension(orig_h, factor)?;

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        factor,
        "Rescaling strip"
    );

    Ok(img.resize_exact(new_width, new_height, FILTER))
}

/// `trunc(len * factor)`, rejecting results that are zero or overflow.
fn scaled_dimension(len: u32, factor: f64) -> Result<u32> {
    let scaled = (f64::from(len) * factor).trunc();
    if !(1.0..=f64::from(u32::MAX)).contains(&scaled) {
        return Err(EngineError::Transform(format!(
            "cannot scale dimension {len} by {factor}: result {scaled} is out of range"
        )));
    }
    Ok(scaled as u32)
}
