//! Configuration handling for kintai.
//!
//! The only persisted configuration is the off-word list, stored as plain
//! editor-style text (one word per line) at `$KINTAI_HOME/off-words.txt`.
//! When no file exists the default seed list applies.

use crate::words::OffWords;
use crate::{utils, Result};
use std::path::{Path, PathBuf};

const WORDS_TXT: &str = "off-words.txt";

/// Paths within the kintai home directory. Instantiate with the home path
/// (typically from `--home` / `KINTAI_HOME`); nothing is touched on disk
/// until a load or save happens.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    words_path: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let words_path = root.join(WORDS_TXT);
        Self { root, words_path }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    /// The persisted off-word list, or the default seed when none has been
    /// saved yet.
    pub fn load_words(&self) -> Result<OffWords> {
        if !self.words_path.exists() {
            return Ok(OffWords::default());
        }
        let text = utils::read(&self.words_path)?;
        Ok(OffWords::parse(&text))
    }

    /// Replace the stored list atomically: the new text is written to a
    /// temporary file which is then renamed over the old one.
    pub fn save_words(&self, words: &OffWords) -> Result<()> {
        utils::make_dir(&self.root)?;
        let tmp = self.words_path.with_extension("txt.tmp");
        utils::write(&tmp, words.to_text())?;
        utils::rename(&tmp, &self.words_path)
    }

    /// Delete the stored list so the default seed applies again.
    pub fn reset_words(&self) -> Result<()> {
        if self.words_path.exists() {
            std::fs::remove_file(&self.words_path)?;
        }
        Ok(())
    }
}
