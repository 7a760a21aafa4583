//! Vertical merge: the `/mergebiggify` transform.

use image::DynamicImage;
use tracing::{debug, error, warn};

use crate::codec::{self, DEFAULT_FORMAT, EncodedImage};
use crate::compose::stack_vertical;
use crate::error::{EngineError, Result, ValidationError};

/// Stack a list of encoded strips into one PNG.
///
/// Returns `None` if the list is empty or any strip fails to decode; the
/// cause is logged.
pub fn merge_images<B: AsRef<[u8]>>(image_bytes_list: &[B]) -> Option<EncodedImage> {
    match try_merge_images(image_bytes_list) {
        Ok(merged) => Some(merged),
        Err(e) if e.is_validation() => {
            warn!("Rejected merge request: {e}");
            None
        }
        Err(e) => {
            error!(count = image_bytes_list.len(), "Error merging images: {e}");
            None
        }
    }
}

/// Fallible form of [`merge_images`].
pub fn try_merge_images<B: AsRef<[u8]>>(image_bytes_list: &[B]) -> Result<EncodedImage> {
    if image_bytes_list.is_empty() {
        return Err(ValidationError::NoImages.into());
    }

    let images = image_bytes_list
        .iter()
        .map(|bytes| codec::decode(bytes.as_ref()).map(|source| source.image))
        .collect::<Result<Vec<_>>>()?;

    let first_width = images[0].width();
    if images.iter().any(|img| img.width() != first_width) {
        debug!(first_width, "Merging strips of differing widths, output is left-aligned");
    }

    let canvas = stack_vertical(&images)?;
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        count = images.len(),
        "Merged strips"
    );

    codec::encode(&DynamicImage::ImageRgb8(canvas), DEFAULT_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biggify::biggify_image;
    use crate::test_support::{encoded, gradient_image, png_bytes, solid_image};
    use image::{GenericImageView, ImageFormat, Rgb};

    const RED: [u8; 3] = [255, 0, 0];
    const BLUE: [u8; 3] = [0, 0, 255];

    #[test]
    fn empty_list_fails() {
        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(merge_images(&empty).is_none());
        assert!(matches!(
            try_merge_images(&empty),
            Err(EngineError::Validation(ValidationError::NoImages))
        ));
    }

    #[test]
    fn strips_are_stacked_in_order() {
        let a = png_bytes(&solid_image(40, 50, RED));
        let b = png_bytes(&solid_image(40, 60, BLUE));
        let merged = merge_images(&[a, b]).unwrap();
        assert_eq!(merged.format(), ImageFormat::Png);

        let img = image::load_from_memory(merged.bytes()).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (40, 110));
        assert_eq!(*img.get_pixel(0, 0), Rgb(RED));
        assert_eq!(*img.get_pixel(39, 49), Rgb(RED));
        assert_eq!(*img.get_pixel(0, 50), Rgb(BLUE));
        assert_eq!(*img.get_pixel(39, 109), Rgb(BLUE));
    }

    #[test]
    fn single_strip_is_reencoded_as_png() {
        let jpeg = encoded(&gradient_image(16, 8), ImageFormat::Jpeg);
        let merged = merge_images(&[jpeg]).unwrap();
        assert_eq!(merged.format(), ImageFormat::Png);
        let img = image::load_from_memory(merged.bytes()).unwrap();
        assert_eq!(img.dimensions(), (16, 8));
    }

    #[test]
    fn any_bad_strip_fails_the_merge() {
        let good = png_bytes(&solid_image(10, 10, RED));
        let bad = b"garbage".to_vec();
        assert!(merge_images(&[good.clone(), bad]).is_none());
        assert!(matches!(
            try_merge_images(&[good, b"x".to_vec()]),
            Err(EngineError::Decode(_))
        ));
    }

    #[test]
    fn mismatched_widths_are_permitted() {
        let wide = png_bytes(&solid_image(30, 5, RED));
        let narrow = png_bytes(&solid_image(10, 5, BLUE));
        let merged = merge_images(&[wide, narrow]).unwrap();
        let img = image::load_from_memory(merged.bytes()).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (30, 10));
        assert_eq!(*img.get_pixel(9, 5), Rgb(BLUE));
        assert_eq!(*img.get_pixel(10, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn merging_biggified_strips_restores_stretched_image_size() {
        let source = png_bytes(&gradient_image(100, 101));
        let strips = biggify_image(&source, 4, 1.5, 1.0);
        let merged = merge_images(&strips).unwrap();
        let img = image::load_from_memory(merged.bytes()).unwrap();
        assert_eq!(img.dimensions(), (150, 101));
    }
}
