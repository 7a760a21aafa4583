//! Image transforms behind the biggify bot commands.
//!
//! [`biggify_image`] stretches an image horizontally, cuts it into
//! horizontal strips and rescales each strip for preview. [`merge_images`]
//! stacks strips back into a single image. Both are synchronous and
//! collapse every failure into an empty/absent result; the `try_` variants
//! expose the typed [`EngineError`].

pub mod biggify;
pub mod codec;
pub mod compose;
pub mod error;
pub mod merge;
pub mod params;
pub mod resize;
pub mod slice;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use biggify::{biggify_image, try_biggify_image};
pub use codec::{DEFAULT_FORMAT, EncodedImage, SourceImage, decode, encode};
pub use compose::stack_vertical;
pub use error::{EngineError, Result, ValidationError};
pub use merge::{merge_images, try_merge_images};
pub use params::{DEFAULT_OUTPUT_SCALE_FACTOR, DEFAULT_STRETCH_FACTOR, StretchParameters};
pub use resize::{scale_by, stretch_horizontal};
pub use slice::{Strip, strip_bounds};
