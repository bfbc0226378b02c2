use std::fmt;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::layout::Layout;
use crate::util::fs::{ensure_dir, write_text};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Summary {
    pub dir: Utf8PathBuf,
    pub written: u32,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done! Files are in {}", self.dir)
    }
}

pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    let base = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|_| anyhow!("current directory is not valid UTF-8"))?;

    let start = Instant::now();
    let summary = run_in(&base, &Layout::default())?;
    info!(
        "wrote {} files to {} in {:.2?}",
        summary.written,
        summary.dir,
        start.elapsed()
    );
    println!("{}", summary);
    Ok(())
}

/// Ensure `<base>/<dir_name>` exists and write every file of `layout` into it.
pub fn run_in(base: &Utf8Path, layout: &Layout) -> Result<Summary> {
    let dir = layout.target_dir(base);
    ensure_dir(&dir)?;

    let written = populate(&dir, layout)?;
    Ok(Summary { dir, written })
}

/// Write files in ascending index order, stopping at the first failure.
/// Files written before the failure are left in place.
fn populate(dir: &Utf8Path, layout: &Layout) -> Result<u32> {
    let mut written = 0;
    for index in layout.indices() {
        let path = layout.file_path(dir, index);
        write_text(&path, layout.content)?;
        debug!("wrote {}", path);
        written += 1;
    }
    Ok(written)
}
