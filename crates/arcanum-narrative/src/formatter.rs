//! The deep-reading formatter: clamp a narrative into its locale's length
//! window without ever touching the conclusion.

use crate::compress::compress;
use crate::conclusion::ensure_conclusion;
use crate::locale::{Locale, measure};
use crate::paragraph::{join_paragraphs, split_paragraphs};

/// Maximum number of compression passes before paragraphs start dropping.
const MAX_COMPRESSION_PASSES: usize = 3;

/// Reshape `content` to satisfy the locale's length bounds.
///
/// The bounds are a window, not a target: text already at or under the
/// maximum is returned as-is, and text under the minimum is never padded —
/// the pipeline only shrinks. Over-long text goes through up to three
/// compression passes, then loses leading content paragraphs one at a time.
/// The conclusion paragraph survives every stage; if it alone exceeds the
/// maximum it is returned over-long rather than truncated mid-sentence.
pub fn format_deep_reading(locale: Locale, content: &str) -> String {
    let bounds = locale.bounds();
    let mut text = ensure_conclusion(locale, content);

    if measure(&text).in_unit(bounds.unit) <= bounds.max {
        return text;
    }

    for _ in 0..MAX_COMPRESSION_PASSES {
        text = compress(&text);
        if measure(&text).in_unit(bounds.unit) <= bounds.max {
            return text;
        }
    }

    let mut paragraphs = split_paragraphs(&text);
    while paragraphs.len() > 1
        && measure(&join_paragraphs(&paragraphs)).in_unit(bounds.unit) > bounds.max
    {
        paragraphs.remove(0);
    }
    join_paragraphs(&paragraphs)
}

/// Format pre-split paragraphs: they are joined with blank lines and run
/// through [`format_deep_reading`].
pub fn format_deep_reading_parts(locale: Locale, parts: &[String]) -> String {
    format_deep_reading(locale, &parts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LengthUnit;

    fn words(n: usize, word: &str) -> String {
        [word].repeat(n).join(" ")
    }

    #[test]
    fn short_text_gets_conclusion_but_no_padding() {
        let out = format_deep_reading(Locale::Zh, "短文本。");
        assert_eq!(out, "总体结论： 短文本。");
        // Well under the 300-char minimum and left that way.
        assert!(measure(&out).chars < 300);
    }

    #[test]
    fn text_within_bounds_returned_as_is() {
        let body = words(130, "steady");
        let input = format!("{body}\n\nOverall conclusion: hold the course.");
        assert_eq!(format_deep_reading(Locale::En, &input), input);
    }

    #[test]
    fn long_english_text_clamped_to_word_bounds() {
        let paragraphs: Vec<String> = (0..8).map(|_| words(40, "meaning")).collect();
        let input = format!(
            "{}\n\nOverall conclusion: the cards agree.",
            paragraphs.join("\n\n")
        );
        let out = format_deep_reading(Locale::En, &input);
        assert!(measure(&out).words <= 170, "{}", measure(&out).words);
        let final_paragraph = split_paragraphs(&out).pop().unwrap();
        assert!(final_paragraph.starts_with("Overall conclusion:"));
    }

    #[test]
    fn conclusion_text_survives_clamping_exactly() {
        let conclusion = "Overall conclusion: the cards agree.";
        let input = format!("{}\n\n{conclusion}", words(400, "noise"));
        let out = format_deep_reading(Locale::En, &input);
        assert!(out.ends_with(conclusion));
    }

    #[test]
    fn oversized_conclusion_alone_returned_anyway() {
        let input = format!("Overall conclusion: {}", words(200, "word"));
        let out = format_deep_reading(Locale::En, &input);
        assert_eq!(out, input);
        assert!(measure(&out).words > 170);
    }

    #[test]
    fn leading_paragraphs_drop_before_conclusion() {
        // Paragraphs of unstrippable words: compression cannot save this,
        // so the clamp has to drop from the front.
        let paragraphs: Vec<String> = (0..6)
            .map(|i| words(60, if i == 5 { "kept" } else { "dropped" }))
            .collect();
        let input = format!(
            "{}\n\nOverall conclusion: done.",
            paragraphs.join("\n\n")
        );
        let out = format_deep_reading(Locale::En, &input);
        let remaining = split_paragraphs(&out);
        assert!(remaining.len() <= 3);
        assert!(out.ends_with("Overall conclusion: done."));
        if remaining.len() == 2 {
            assert!(remaining[0].contains("kept"));
        }
    }

    #[test]
    fn cjk_clamped_in_characters() {
        let body = "运势".repeat(300);
        let input = format!("{body}\n\n总体结论：一切都会好。");
        let out = format_deep_reading(Locale::Zh, &input);
        let m = measure(&out);
        assert!(
            m.chars <= 400 || split_paragraphs(&out).len() == 1,
            "{}",
            m.chars
        );
        assert!(out.ends_with("总体结论：一切都会好。"));
    }

    #[test]
    fn parts_join_with_blank_lines() {
        let parts = ["first".to_string(), "second".to_string()];
        assert_eq!(
            format_deep_reading_parts(Locale::En, &parts),
            format_deep_reading(Locale::En, "first\n\nsecond")
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let input = format!("{}\n\nOverall conclusion: same.", words(300, "alike"));
        assert_eq!(
            format_deep_reading(Locale::En, &input),
            format_deep_reading(Locale::En, &input)
        );
    }

    #[test]
    fn unknown_locale_contract_is_english() {
        // Locale::parse fails closed, so formatting under an unknown code
        // behaves exactly like English.
        let locale = Locale::parse("xx-YY");
        assert_eq!(locale.bounds().unit, LengthUnit::Words);
        let out = format_deep_reading(locale, "a note");
        assert!(out.starts_with("Overall conclusion:"));
    }
}
