//! The user-editable list of "off words": shift codes that mark a day as
//! not worked (holidays, paid leave, the night-duty codes and so on).

use serde::{Deserialize, Serialize};

/// The seed list. `words reset` restores this, and a fresh installation
/// starts from it.
pub const DEFAULT_OFF_WORDS: &[&str] = &["－", "深あ", "夜わ", "夜さ", "夜こ", "休", "休み", "年休"];

/// An ordered list of off words. Membership is exact and case-sensitive;
/// the classifier treats any cell whose trimmed text equals one of these
/// words as an off/special day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OffWords {
    words: Vec<String>,
}

impl Default for OffWords {
    fn default() -> Self {
        Self {
            words: DEFAULT_OFF_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl OffWords {
    pub fn new<S, I>(words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            words: words.into_iter().map(|w| w.into()).collect(),
        }
    }

    /// Parse editor-style text: one word per line, lines trimmed, blank and
    /// whitespace-only lines discarded. The result replaces the previous
    /// list wholesale.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn contains(&self, code: &str) -> bool {
        self.words.iter().any(|w| w == code)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The editor-style text form, one word per line.
    pub fn to_text(&self) -> String {
        self.words.join("\n")
    }
}
