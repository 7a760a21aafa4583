//! Local-file stand-ins for attachment download and file upload.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::commands::{Attachment, CommandReply};

/// Read a file as if the user had attached it.
///
/// The content type is guessed from the file extension, the way a chat
/// platform reports it for uploads.
pub fn attachment_from_path(path: &Path) -> anyhow::Result<Attachment> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path).first_raw();

    tracing::debug!(
        path = %path.display(),
        content_type,
        len = bytes.len(),
        "Loaded attachment"
    );

    Ok(Attachment::new(filename, content_type, bytes))
}

/// Write every reply file into `dir`, in order. Returns the written paths.
pub fn write_reply(reply: &CommandReply, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    reply
        .files
        .iter()
        .map(|file| {
            let path = dir.join(&file.filename);
            std::fs::write(&path, &file.bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), len = file.bytes.len(), "Wrote file");
            Ok(path)
        })
        .collect()
}
