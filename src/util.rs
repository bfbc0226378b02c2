/// Filesystem helpers shared by the runner.
pub mod fs {
    use std::fs;

    use anyhow::{Context, Result};
    use camino::Utf8Path;

    /// Ensure a directory exists, creating it if needed. An existing
    /// directory is left as is; an existing non-directory entry is an error.
    pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))
    }

    /// Create or truncate `path` and write `contents` as UTF-8.
    pub fn write_text(path: &Utf8Path, contents: &str) -> Result<()> {
        fs::write(path, contents.as_bytes()).with_context(|| format!("writing {}", path))
    }

}
