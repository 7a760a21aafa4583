//! Decoding source bytes and encoding output buffers.

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{EngineError, Result};

/// Format used when the source format is unknown, and for merged output.
pub const DEFAULT_FORMAT: ImageFormat = ImageFormat::Png;

/// A decoded raster together with the container format it came from.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The format strips derived from this image should be written in.
    pub fn output_format(&self) -> ImageFormat {
        self.format.unwrap_or(DEFAULT_FORMAT)
    }
}

/// An owned, encoded image ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl EncodedImage {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Preferred file extension for the encoding format, e.g. `png`.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("png")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for EncodedImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Decode image bytes, detecting the container format from its signature.
pub fn decode(bytes: &[u8]) -> Result<SourceImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EngineError::Decode(ImageError::IoError(e)))?;
    let format = reader.format();
    let image = reader.decode().map_err(EngineError::Decode)?;

    debug!(
        width = image.width(),
        height = image.height(),
        ?format,
        "Decoded source image"
    );

    Ok(SourceImage { image, format })
}

/// Encode an image in the given format.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<EncodedImage> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, format)
        .map_err(EngineError::Encode)?;
    let bytes = cursor.into_inner();

    debug!(
        width = image.width(),
        height = image.height(),
        ?format,
        len = bytes.len(),
        "Encoded image"
    );

    Ok(EncodedImage { bytes, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encoded, gradient_image};

    #[test]
    fn decode_reports_png_format() {
        let bytes = encoded(&gradient_image(12, 7), ImageFormat::Png);
        let source = decode(&bytes).unwrap();
        assert_eq!(source.format, Some(ImageFormat::Png));
        assert_eq!((source.width(), source.height()), (12, 7));
        assert_eq!(source.output_format(), ImageFormat::Png);
    }

    #[test]
    fn decode_reports_jpeg_format() {
        let bytes = encoded(&gradient_image(16, 16), ImageFormat::Jpeg);
        let source = decode(&bytes).unwrap();
        assert_eq!(source.format, Some(ImageFormat::Jpeg));
        assert_eq!(source.output_format(), ImageFormat::Jpeg);
    }

    #[test]
    fn unknown_format_falls_back_to_png() {
        let source = SourceImage {
            image: gradient_image(2, 2),
            format: None,
        };
        assert_eq!(source.output_format(), DEFAULT_FORMAT);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EngineError::Decode(_)));
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(matches!(decode(&[]), Err(EngineError::Decode(_))));
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let bytes = encoded(&gradient_image(20, 20), ImageFormat::Png);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(decode(truncated).is_err());
    }

    #[test]
    fn encode_tags_format_and_extension() {
        let out = encode(&gradient_image(5, 5), ImageFormat::Png).unwrap();
        assert_eq!(out.format(), ImageFormat::Png);
        assert_eq!(out.extension(), "png");
        assert!(!out.is_empty());

        let back = decode(out.bytes()).unwrap();
        assert_eq!((back.width(), back.height()), (5, 5));
    }

    #[test]
    fn jpeg_extension_is_jpg() {
        let out = encode(&gradient_image(8, 8), ImageFormat::Jpeg).unwrap();
        assert_eq!(out.extension(), "jpg");
    }
}
