//! Partitioning an image into full-width horizontal strips.

use image::DynamicImage;
use tracing::debug;

use crate::error::{EngineError, Result};

/// Vertical bounds of one strip, `top` inclusive and `bottom` exclusive.
///
/// Only produced by [`strip_bounds`], which guarantees `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    index: u32,
    top: u32,
    bottom: u32,
}

impl Strip {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Crop this strip out of `img` across its full width.
    ///
    /// An empty strip (more rows than pixel lines) cannot be encoded, so it
    /// is reported as a transform error.
    pub fn crop(&self, img: &DynamicImage) -> Result<DynamicImage> {
        if self.top > self.bottom {
            return Err(EngineError::Transform(format!(
                "strip {} is inverted (top {} > bottom {})",
                self.index, self.top, self.bottom
            )));
        }
        if self.bottom > img.height() {
            return Err(EngineError::Transform(format!(
                "strip {} ends at {} but image height is {}",
                self.index,
                self.bottom,
                img.height()
            )));
        }
        if self.height() == 0 {
            return Err(EngineError::Transform(format!(
                "strip {} is empty (top = bottom = {})",
                self.index, self.top
            )));
        }
        Ok(img.crop_imm(0, self.top, img.width(), self.height()))
    }
}

/// Split `height` pixel lines into `rows` strips.
///
/// Strip `r` spans `floor(r * h / rows)..floor((r + 1) * h / rows)`, and the
/// last strip always ends at `height`, so the strips tile the image in order
/// with no gap or overlap.
pub fn strip_bounds(height: u32, rows: u32) -> Vec<Strip> {
    if rows == 0 {
        return Vec::new();
    }

    let part_height = f64::from(height) / f64::from(rows);
    let strips: Vec<Strip> = (0..rows)
        .map(|r| {
            let top = (f64::from(r) * part_height).floor() as u32;
            let bottom = if r == rows - 1 {
                height
            } else {
                (f64::from(r + 1) * part_height).floor() as u32
            };
            Strip {
                index: r,
                top,
                bottom,
            }
        })
        .collect();

    debug!(height, rows, part_height, "Computed strip bounds");
    strips
}
