use crate::core::ToolError;
use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

pub fn is_image_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}

/// Lists the images directly inside `folder`, sorted by full path.
///
/// Extension matching is case-sensitive and subdirectories are not descended.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let entries = std::fs::read_dir(folder).map_err(|source| ToolError::ReadFolder {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ToolError::ReadFolder {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    log::debug!("Found {} images in {}", images.len(), folder.display());
    Ok(images)
}
