//! Slash-command handlers for `/biggify` and `/mergebiggify`.
//!
//! Handlers are independent of any chat SDK: the platform layer downloads
//! the attachments, calls in with their bytes, posts every returned file
//! publicly in order and shows the messages to the invoking user only.
//! A [`CommandError`] displays as the message to show that user.

mod biggify;
mod merge;


pub use biggify::{BiggifyArgs, biggify};
pub use merge::merge_biggify;

/// File name of the `/mergebiggify` result.
pub const MERGED_FILE_NAME: &str = "merged_biggified_image.png";

/// An image (or anything else) the user attached to a command.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }

    /// Whether the platform reported an `image/*` content type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

/// A file to post back to the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything a successful command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReply {
    pub files: Vec<OutgoingFile>,
    pub messages: Vec<String>,
}

/// Why a command was rejected or failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Please attach a valid image to the command!")]
    NotAnImage,

    #[error("Rows must be between 1 and {max} (inclusive).")]
    RowsOutOfRange { max: u32 },

    #[error(
        "Stretch factor must be between 1.0 and 3.0 (e.g., 1.5). Larger values mean more stretch."
    )]
    StretchOutOfRange,

    #[error(
        "An error occurred while processing the image. Please try again with a different image or settings."
    )]
    ProcessingFailed,

    #[error("Please attach at least one valid image strip to merge.")]
    NoValidStrips,

    #[error("Please attach at least two image strips to merge them effectively.")]
    TooFewStrips,

    #[error("You can merge at most {max} image strips at once.")]
    TooManyStrips { max: usize },

    #[error("An error occurred while merging the images. Please ensure they are valid image strips.")]
    MergeFailed,

    #[error("An unexpected error occurred while processing the command.")]
    Worker(String),
}

impl From<tokio::task::JoinError> for CommandError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Worker(e.to_string())
    }
}
