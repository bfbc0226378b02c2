use std::ops::RangeInclusive;

use camino::{Utf8Path, Utf8PathBuf};

const DIR_NAME: &str = "words";
const PREFIX: &str = "word";
const WIDTH: usize = 4;
const EXTENSION: &str = "txt";
const COUNT: u32 = 2000;
const CONTENT: &str = "hello";

/// Naming and content of the generated tree. Only `Layout::default()` is
/// used at runtime; nothing is read from flags or the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    pub dir_name: &'static str,
    pub prefix: &'static str,
    pub width: usize,
    pub extension: &'static str,
    pub count: u32,
    pub content: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            dir_name: DIR_NAME,
            prefix: PREFIX,
            width: WIDTH,
            extension: EXTENSION,
            count: COUNT,
            content: CONTENT,
        }
    }
}

impl Layout {
    /// `word0042.txt` for index 42. Indices wider than `width` are not truncated.
    pub fn file_name(&self, index: u32) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index,
            self.extension,
            width = self.width
        )
    }

    pub fn indices(&self) -> RangeInclusive<u32> {
        1..=self.count
    }

    pub fn target_dir(&self, base: &Utf8Path) -> Utf8PathBuf {
        base.join(self.dir_name)
    }

    pub fn file_path(&self, dir: &Utf8Path, index: u32) -> Utf8PathBuf {
        dir.join(self.file_name(index))
    }
}
