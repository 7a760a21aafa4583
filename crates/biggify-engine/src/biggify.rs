//! Stretch-and-slice: the `/biggify` transform.

use tracing::{debug, error, warn};

use crate::codec::{self, EncodedImage};
use crate::error::{EngineError, Result};
use crate::params::StretchParameters;
use crate::resize::{scale_by, stretch_horizontal};
use crate::slice::strip_bounds;

/// Stretch an image, cut it into `rows` strips and rescale each strip.
///
/// Returns one encoded buffer per strip, top to bottom, in the source
/// image's format (PNG when the format is unknown). Any failure yields an
/// empty vector; the cause is logged.
pub fn biggify_image(
    image_bytes: &[u8],
    rows: i64,
    stretch_factor: f64,
    output_scale_factor: f64,
) -> Vec<EncodedImage> {
    let result = StretchParameters::new(rows, stretch_factor, output_scale_factor)
        .map_err(EngineError::from)
        .and_then(|params| try_biggify_image(image_bytes, &params));

    match result {
        Ok(strips) => strips,
        Err(e) if e.is_validation() => {
            warn!(rows, stretch_factor, output_scale_factor, "Rejected biggify request: {e}");
            Vec::new()
        }
        Err(e) => {
            error!(
                rows,
                stretch_factor,
                output_scale_factor,
                "Error processing image in biggify_image: {e}"
            );
            Vec::new()
        }
    }
}

/// Fallible form of [`biggify_image`] taking pre-validated parameters.
///
/// All-or-nothing: the first failing strip aborts the call and the strips
/// encoded so far are dropped.
pub fn try_biggify_image(
    image_bytes: &[u8],
    params: &StretchParameters,
) -> Result<Vec<EncodedImage>> {
    let source = codec::decode(image_bytes)?;
    let format = source.output_format();

    let stretched = stretch_horizontal(&source.image, params.stretch_factor())?;

    let strips = strip_bounds(stretched.height(), params.rows())
        .into_iter()
        .map(|strip| {
            let cropped = strip.crop(&stretched)?;
            let scaled = scale_by(&cropped, params.output_scale_factor())?;
            debug!(
                index = strip.index(),
                top = strip.top(),
                bottom = strip.bottom(),
                width = scaled.width(),
                height = scaled.height(),
                "Prepared strip"
            );
            codec::encode(&scaled, format)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = strips.len(), ?format, "Biggified image");
    Ok(strips)
}
