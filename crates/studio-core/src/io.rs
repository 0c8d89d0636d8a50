use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Write `data` to `path` by way of a sibling temp file that is renamed into
/// place. Project configs and generated agent documents are either the old
/// bytes or the new bytes on disk, never a mix.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// `mkdir -p`. Scaffolding calls this for every layout entry, so existing
/// directories must not be an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Recursively copy `src` into `dst`. `dst` must not exist yet; it is created
/// with `create_dir` so an existing target fails instead of being merged into.
pub fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir(dst)?;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(std::io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Delete every regular file under `dir` whose name does not end with
/// `keep_suffix`. Directories are left in place. Returns the number of
/// files removed.
pub fn remove_files_except(dir: &Path, keep_suffix: &str) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let doomed: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.file_name().to_string_lossy().ends_with(keep_suffix))
        .map(|e| e.into_path())
        .collect();
    for path in &doomed {
        std::fs::remove_file(path)?;
    }
    Ok(doomed.len())
}
