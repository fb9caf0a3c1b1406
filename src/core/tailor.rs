/// Audience tailoring and headline length limits.

use crate::core::twister::Twister;

/// Maximum number of whitespace-separated words in an angle.
pub const MAX_ANGLE_WORDS: usize = 12;

/// A draw above this threshold appends an audience suffix (about 40% of
/// calls).
pub const TAILOR_THRESHOLD: f64 = 0.6;

/// Append an audience suffix to `text` with probability ~0.4.
///
/// A missing or empty audience returns the text unchanged and consumes no
/// random state. Otherwise one float is drawn, and if it clears the
/// threshold one suffix form is chosen uniformly with a second draw.
pub fn tailor_for_audience(text: &str, audience: Option<&str>, rng: &mut Twister) -> String {
    let audience = match audience {
        Some(a) if !a.is_empty() => a,
        _ => return text.to_string(),
    };

    let suffixes = [
        format!(" (for {})", audience),
        format!(" tailored to {}", audience),
        format!(" with {} in mind", audience),
    ];

    if rng.random() > TAILOR_THRESHOLD {
        if let Some(suffix) = rng.choose(&suffixes) {
            return format!("{}{}", text, suffix);
        }
    }
    text.to_string()
}

/// Word separators: Unicode `White_Space` plus the ASCII information
/// separators U+001C..U+001F, which other splitters also treat as breaks.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `text` into words, dropping empty pieces between separators.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

/// Hard-cut `text` to at most `max_words` words.
///
/// Text already within the limit is returned untouched; truncated text is
/// rejoined with single spaces and gets no ellipsis.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let pieces: Vec<&str> = words(text).collect();
    if pieces.len() > max_words {
        pieces[..max_words].join(" ")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_audience_is_identity_and_pure() {
        let mut rng = Twister::new(5);
        let mut untouched = Twister::new(5);
        assert_eq!(tailor_for_audience("Hook them", None, &mut rng), "Hook them");
        assert_eq!(tailor_for_audience("Hook them", Some(""), &mut rng), "Hook them");
        assert_eq!(rng.next_word(), untouched.next_word());
    }

    #[test]
    fn suffix_forms() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = Twister::new(seed);
            let out = tailor_for_audience("Angle", Some("nurses"), &mut rng);
            assert!(
                out == "Angle"
                    || out == "Angle (for nurses)"
                    || out == "Angle tailored to nurses"
                    || out == "Angle with nurses in mind",
                "unexpected output: {}",
                out
            );
            seen.insert(out);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn tailoring_rate_is_about_forty_percent() {
        let mut rng = Twister::new(2024);
        let tailored = (0..5_000)
            .filter(|_| tailor_for_audience("x", Some("y"), &mut rng) != "x")
            .count();
        assert!((1_800..2_200).contains(&tailored), "tailored {}", tailored);
    }

    #[test]
    fn skipped_tailoring_consumes_one_float() {
        // Seed 1 draws 0.134..., below the threshold.
        let mut rng = Twister::new(1);
        assert_eq!(tailor_for_audience("x", Some("y"), &mut rng), "x");
        assert_eq!(rng.next_word(), 3_639_700_191);
    }

    #[test]
    fn applied_tailoring_draws_float_then_choice() {
        // Seed 42 draws 0.639..., above the threshold.
        let mut rng = Twister::new(42);
        let mut replay = Twister::new(42);
        let out = tailor_for_audience("x", Some("y"), &mut rng);
        assert!(replay.random() > TAILOR_THRESHOLD);
        let pick = replay.below(3);
        let expected = ["x (for y)", "x tailored to y", "x with y in mind"][pick];
        assert_eq!(out, expected);
        assert_eq!(rng.next_word(), replay.next_word());
    }

    #[test]
    fn truncate_long_text() {
        let text = "one two three four five six seven eight nine ten eleven twelve thirteen";
        assert_eq!(
            truncate_words(text, MAX_ANGLE_WORDS),
            "one two three four five six seven eight nine ten eleven twelve"
        );
    }

    #[test]
    fn truncate_collapses_whitespace_only_when_cutting() {
        assert_eq!(truncate_words("a  b   c", 12), "a  b   c");
        assert_eq!(truncate_words("a  b   c", 2), "a b");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_words("", 12), "");
        assert_eq!(truncate_words(" \t\n", 12), " \t\n");
    }

    #[test]
    fn information_separators_split_words() {
        let text = "a\u{1c}b\u{1d}c\u{1e}d\u{1f}e\u{85}f\u{a0}g";
        assert_eq!(words(text).collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(truncate_words(text, 3), "a b c");
        assert_eq!(truncate_words(text, 7), text);
    }

    #[test]
    fn separator_runs_count_as_one_break() {
        assert_eq!(words("\u{1f}\u{1f}x \u{1c} y\u{1f}").collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(!is_word_separator('\u{1b}'));
        assert!(!is_word_separator('\u{200b}'));
    }
}
