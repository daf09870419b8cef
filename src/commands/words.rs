use crate::commands::Out;
use crate::words::OffWords;
use crate::{utils, Config, Result};
use anyhow::Context;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Print the current off words, one per line.
pub fn words_show(config: &Config) -> Result<Out<OffWords>> {
    let words = config.load_words()?;
    Ok(Out::new(words.to_text(), words))
}

/// Replace the off words with editor-style text read from `file`, or from
/// stdin when no file is given. Blank lines are discarded and the trimmed
/// remainder replaces the stored list atomically.
pub fn words_set(config: &Config, file: Option<&Path>) -> Result<Out<OffWords>> {
    let text = match file {
        Some(path) => utils::read(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Unable to read words from stdin")?;
            text
        }
    };
    let words = OffWords::parse(&text);
    config.save_words(&words)?;
    info!("Saved {} off words to {}", words.len(), config.words_path().display());
    Ok(Out::new(
        format!("Updated the off words ({} entries)", words.len()),
        words,
    ))
}

/// Restore the default off words.
pub fn words_reset(config: &Config) -> Result<Out<OffWords>> {
    config.reset_words()?;
    let words = config.load_words()?;
    Ok(Out::new("Restored the default off words", words))
}
