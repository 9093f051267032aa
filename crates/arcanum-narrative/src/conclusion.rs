//! Conclusion enforcement: every deep reading ends with a paragraph
//! carrying the locale's conclusion prefix.

use crate::locale::Locale;
use crate::paragraph::{join_paragraphs, split_paragraphs};

/// Lead-in phrases that compete with the canonical prefix. When a
/// conclusion has to be synthesized, one of these at the head of the final
/// paragraph is stripped before the canonical prefix is applied.
/// All entries are lowercase; matching is case-insensitive.
const COMPETING_LEADINS: &[&str] = &[
    "in conclusion,",
    "in conclusion:",
    "to conclude,",
    "to sum up,",
    "in summary,",
    "in summary:",
    "all in all,",
    "overall,",
    "overall:",
    "conclusion:",
    "summary:",
    "en conclusión,",
    "en resumen,",
    "conclusión:",
    "en conclusion,",
    "pour conclure,",
    "en résumé,",
    "zusammenfassend,",
    "abschließend,",
    "fazit:",
    "em conclusão,",
    "em resumo,",
    "conclusão:",
    "в заключение,",
    "в итоге,",
    "итог:",
    "вывод:",
    "总而言之，",
    "总之，",
    "总结：",
    "结论：",
    "總而言之，",
    "總之，",
    "總結：",
    "結論：",
    "結論として、",
    "要するに、",
    "まとめ：",
    "결론적으로,",
    "결론:",
    "요약:",
];

/// Guarantee that the last paragraph begins with the locale's conclusion
/// prefix.
///
/// Idempotent: text that already concludes correctly is returned unchanged.
/// A conclusion paragraph found earlier in the text is relocated to the
/// end; otherwise the final paragraph is re-prefixed, after any competing
/// lead-in phrase is stripped. Content is only reordered or re-prefixed,
/// never dropped. Empty input is returned unchanged.
pub fn ensure_conclusion(locale: Locale, text: &str) -> String {
    let prefix = locale.conclusion_prefix();
    let mut paragraphs = split_paragraphs(text);

    let Some(last) = paragraphs.last() else {
        return text.to_string();
    };
    if last.starts_with(prefix) {
        return text.to_string();
    }

    if let Some(index) = paragraphs.iter().position(|p| p.starts_with(prefix)) {
        let conclusion = paragraphs.remove(index);
        paragraphs.push(conclusion);
        return join_paragraphs(&paragraphs);
    }

    let body = paragraphs.pop().unwrap_or_default();
    let stripped = strip_competing_leadin(&body);
    paragraphs.push(format!("{prefix} {stripped}"));
    join_paragraphs(&paragraphs)
}

/// Drop one recognized lead-in phrase from the head of a paragraph.
fn strip_competing_leadin(paragraph: &str) -> String {
    for leadin in COMPETING_LEADINS {
        if let Some(rest) = strip_prefix_ci(paragraph, leadin) {
            return rest.trim_start().to_string();
        }
    }
    paragraph.to_string()
}

/// Case-insensitive `strip_prefix` that walks characters, so it stays
/// correct when case folding changes byte lengths.
pub(crate) fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text;
    for expected in prefix.chars() {
        let mut chars = rest.chars();
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = chars.as_str();
    }
    Some(rest)
}
