//! Turns user-selected paths into `(display name, source locator)` pairs.
//!
//! Files are taken as given; directories contribute their regular,
//! non-hidden files (one level deep, sorted by name). The locator is a
//! `file://` URL of the absolute path.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

pub type MediaItem = (String, String);

pub fn collect_media<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<MediaItem>> {
    let mut items = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .with_context(|| format!("Cannot access {}", path.display()))?;

        if metadata.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("Cannot list {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && !is_hidden(p))
                .collect();
            files.sort();

            debug!(directory = %path.display(), files = files.len(), "Directory scanned");
            for file in files {
                items.push(media_item(&file)?);
            }
        } else {
            items.push(media_item(path)?);
        }
    }

    Ok(items)
}

fn media_item(path: &Path) -> Result<MediaItem> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;

    let absolute = fs::canonicalize(path)
        .with_context(|| format!("Cannot resolve {}", path.display()))?;
    let url = Url::from_file_path(&absolute)
        .map_err(|_| anyhow!("Cannot build a file URL for {}", absolute.display()))?;

    Ok((name, url.to_string()))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_files_and_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let album = temp_dir.path().join("album");
        fs::create_dir(&album).unwrap();
        for name in ["02 b.mp4", "01 a.mp3", ".hidden.mp3"] {
            fs::write(album.join(name), b"x").unwrap();
        }
        fs::create_dir(album.join("nested")).unwrap();
        let single = temp_dir.path().join("single.mp3");
        fs::write(&single, b"x").unwrap();

        let items = collect_media(&[single.clone(), album]).unwrap();
        let names: Vec<&str> = items.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["single.mp3", "01 a.mp3", "02 b.mp4"]);

        assert!(items[0].1.starts_with("file://"));
        assert!(items[1].1.ends_with("01%20a.mp3"));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.mp3");
        assert!(collect_media(&[missing]).is_err());
    }
}
