//! Classification of a single shift-code cell into worked vs off/special.

use crate::model::MISSING;
use crate::words::OffWords;

/// The plain off token. The range report filters this one token out of its
/// listing (deliberately narrower than the whole off-word list), and the
/// comparison report substitutes it for blank cells when rendering.
pub const PLAIN_OFF: &str = "休";

/// Bucket markers for the off/special section, in matching priority order.
///
/// A cell on the off path is assigned to the first marker here that occurs
/// as a substring of its text. The same order groups the off/special section
/// of the day report. Note that matching is containment, not equality: a
/// cell such as "年休" is captured by "休" before its own marker is reached.
pub const BUCKET_MARKERS: &[&str] = &["深あ", "夜わ", "夜さ", "夜こ", "休", "休み", "年休", "nan"];

/// The outcome of classifying one cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Shift {
    /// An actual worked shift; carries the trimmed work code.
    Work(String),
    /// An off/special day assigned to `BUCKET_MARKERS[bucket]`.
    Off { bucket: usize, code: String },
    /// An off/special day that matched no bucket marker.
    Other(String),
}

/// Classify the raw text of one cell. Pure and total: every input string
/// maps to exactly one outcome.
///
/// A cell is a worked shift when its trimmed text is non-empty, not the
/// missing-cell token, and not one of the configured off words. Everything
/// else goes down the off path and is bucketed by `BUCKET_MARKERS`.
pub fn classify(raw: &str, words: &OffWords) -> Shift {
    let code = raw.trim();
    if !code.is_empty() && code != MISSING && !words.contains(code) {
        return Shift::Work(code.to_string());
    }
    for (bucket, marker) in BUCKET_MARKERS.iter().enumerate() {
        if code.contains(marker) {
            return Shift::Off {
                bucket,
                code: code.to_string(),
            };
        }
    }
    Shift::Other(code.to_string())
}

/// The display form of an off-path code: blank and missing cells render as
/// the missing-cell token.
pub fn display_code(code: &str) -> &str {
    if code.is_empty() || code == MISSING {
        MISSING
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> OffWords {
        OffWords::default()
    }

    #[test]
    fn test_plain_code_is_work() {
        assert_eq!(classify("A", &words()), Shift::Work("A".to_string()));
        assert_eq!(classify("  B2 ", &words()), Shift::Work("B2".to_string()));
    }

    #[test]
    fn test_dash_code_is_work() {
        // The long-dash code is not an off word and counts as a worked shift.
        assert_eq!(classify("ー", &words()), Shift::Work("ー".to_string()));
    }

    #[test]
    fn test_off_words_are_never_work() {
        for word in crate::words::DEFAULT_OFF_WORDS {
            let shift = classify(word, &words());
            assert!(
                !matches!(shift, Shift::Work(_)),
                "off word '{word}' classified as work"
            );
        }
    }

    #[test]
    fn test_blank_and_missing_are_never_work() {
        assert!(!matches!(classify("", &words()), Shift::Work(_)));
        assert!(!matches!(classify("   ", &words()), Shift::Work(_)));
        assert!(!matches!(classify("nan", &words()), Shift::Work(_)));
    }

    #[test]
    fn test_bucket_priority_is_deterministic() {
        // 休 appears before 年休 in the marker list, so a cell containing
        // both is always captured by 休.
        let shift = classify("年休", &words());
        assert_eq!(
            shift,
            Shift::Off {
                bucket: 4,
                code: "年休".to_string()
            }
        );
    }

    #[test]
    fn test_plain_off_lands_in_its_bucket() {
        let shift = classify("休", &words());
        assert_eq!(
            shift,
            Shift::Off {
                bucket: 4,
                code: "休".to_string()
            }
        );
    }

    #[test]
    fn test_night_code_lands_in_first_bucket() {
        let shift = classify("深あ", &words());
        assert_eq!(
            shift,
            Shift::Off {
                bucket: 0,
                code: "深あ".to_string()
            }
        );
    }

    #[test]
    fn test_missing_token_lands_in_nan_bucket() {
        let shift = classify("nan", &words());
        assert_eq!(
            shift,
            Shift::Off {
                bucket: 7,
                code: "nan".to_string()
            }
        );
    }

    #[test]
    fn test_unmatched_off_word_is_other() {
        // The full-width dash is an off word but contains no bucket marker.
        assert_eq!(classify("－", &words()), Shift::Other("－".to_string()));
    }

    #[test]
    fn test_empty_cell_is_other() {
        assert_eq!(classify("", &words()), Shift::Other(String::new()));
    }

    #[test]
    fn test_word_list_change_takes_effect() {
        // With the default list, 深あ is an off word and buckets under its
        // own marker. Once removed from the list it is an ordinary code.
        assert_eq!(
            classify("深あ", &OffWords::default()),
            Shift::Off {
                bucket: 0,
                code: "深あ".to_string()
            }
        );
        let narrowed = OffWords::new(["休", "年休"]);
        assert_eq!(classify("深あ", &narrowed), Shift::Work("深あ".to_string()));
    }

    #[test]
    fn test_display_code() {
        assert_eq!(display_code(""), "nan");
        assert_eq!(display_code("nan"), "nan");
        assert_eq!(display_code("休"), "休");
    }
}
