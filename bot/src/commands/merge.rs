//! `/mergebiggify image1 [image2 ..]`

use biggify_engine::merge_images;

use super::{Attachment, CommandError, CommandReply, MERGED_FILE_NAME, OutgoingFile};
use crate::config::BotConfig;

/// Stack the attached strips, in attachment order, into one image.
///
/// Attachments that are not images are skipped. At least two strips and at
/// most the configured maximum must remain.
pub async fn merge_biggify(
    config: &BotConfig,
    attachments: Vec<Attachment>,
) -> Result<CommandReply, CommandError> {
    let strips: Vec<Attachment> = attachments.into_iter().filter(Attachment::is_image).collect();

    match strips.len() {
        0 => return Err(CommandError::NoValidStrips),
        1 => return Err(CommandError::TooFewStrips),
        n if n > config.max_merge_images => {
            return Err(CommandError::TooManyStrips {
                max: config.max_merge_images,
            });
        }
        _ => {}
    }

    let count = strips.len();
    let bytes_list: Vec<Vec<u8>> = strips.into_iter().map(|a| a.bytes).collect();
    let merged = tokio::task::spawn_blocking(move || merge_images(&bytes_list))
        .await?
        .ok_or(CommandError::MergeFailed)?;

    tracing::info!(count, len = merged.len(), "Images merged");

    Ok(CommandReply {
        files: vec![OutgoingFile {
            filename: MERGED_FILE_NAME.into(),
            bytes: merged.into_bytes(),
        }],
        messages: vec!["Images merged successfully!".into()],
    })
}
