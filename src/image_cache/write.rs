//! Atomic file replacement for the cache files.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Replaces `path` with `bytes` so that readers see either the previous or
/// the new content in full.
///
/// The data goes to a hidden sibling first and is renamed over the target.
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "atomic write target has no parent")
    })?;
    fs::create_dir_all(parent).await?;

    let tmp = temp_sibling(parent, path);
    let result = async {
        let mut file = fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp, path).await
    }
    .await;

    if result.is_err() {
        let _ = fs::remove_file(&tmp).await;
    }
    result
}

fn temp_sibling(parent: &Path, path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    parent.join(format!(".{}.tmp.{}", name, std::process::id()))
}
