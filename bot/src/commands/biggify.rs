//! `/biggify image [rows] [stretch_factor]`

use std::time::Instant;

use biggify_engine::biggify_image;
use biggify_engine::params::STRETCH_FACTOR_RANGE;

use super::{Attachment, CommandError, CommandReply, OutgoingFile};
use crate::config::BotConfig;

/// Optional arguments of `/biggify`. `None` means the configured default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiggifyArgs {
    pub rows: Option<i64>,
    pub stretch_factor: Option<f64>,
}

/// Stretch the attached image and return its strips as files.
///
/// Rows are bounded by the configured maximum on top of the engine's own
/// checks. The transform runs on the blocking pool.
pub async fn biggify(
    config: &BotConfig,
    image: Attachment,
    args: BiggifyArgs,
) -> Result<CommandReply, CommandError> {
    if !image.is_image() {
        return Err(CommandError::NotAnImage);
    }

    let rows = args.rows.unwrap_or(i64::from(config.default_rows));
    if !(1..=i64::from(config.max_rows)).contains(&rows) {
        return Err(CommandError::RowsOutOfRange {
            max: config.max_rows,
        });
    }

    let stretch_factor = args
        .stretch_factor
        .unwrap_or(config.default_stretch_factor);
    if !STRETCH_FACTOR_RANGE.contains(&stretch_factor) {
        return Err(CommandError::StretchOutOfRange);
    }

    let output_scale_factor = config.output_scale_factor;
    let started = Instant::now();
    let bytes = image.bytes;
    let strips = tokio::task::spawn_blocking(move || {
        biggify_image(&bytes, rows, stretch_factor, output_scale_factor)
    })
    .await?;

    if strips.is_empty() {
        tracing::warn!(
            filename = %image.filename,
            rows,
            stretch_factor,
            "Biggify produced no strips"
        );
        return Err(CommandError::ProcessingFailed);
    }

    tracing::info!(
        filename = %image.filename,
        rows,
        stretch_factor,
        output_scale_factor,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Image biggified"
    );

    let files = strips
        .into_iter()
        .enumerate()
        .map(|(i, strip)| OutgoingFile {
            filename: format!("biggified_part_{}.{}", i + 1, strip.extension()),
            bytes: strip.into_bytes(),
        })
        .collect();

    Ok(CommandReply {
        files,
        messages: vec!["Image biggified and sent!".into()],
    })
}
