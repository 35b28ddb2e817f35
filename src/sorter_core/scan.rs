use crate::sorter_core::error::{MediaSorterError, Result};
use crate::sorter_core::media::MediaKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collect the files under `root` whose extension belongs to `kind`.
///
/// Hidden files and directories below `root` (names starting with `.`, such
/// as `._IMG.jpg` or `.thumbnails/`) are skipped. Symlinks are followed. The
/// returned paths are sorted so repeated runs process files in the same order.
pub fn scan_media(root: &Path, kind: &MediaKind) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(MediaSorterError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(MediaSorterError::NotADirectory(root.to_path_buf()));
    }

    log::info!("Scanning {} for {}", root.display(), kind);

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| kind.matches(path))
        .collect();

    files.sort();

    log::info!("Found {} {} files", files.len(), kind);

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
