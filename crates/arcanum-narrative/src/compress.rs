//! Gentle lossy compression of narrative content.
//!
//! Every pass shrinks or preserves the text and none of them touch the
//! final paragraph, which is the conclusion. The heuristics are
//! locale-agnostic string operations; they run unchanged on CJK text, where
//! only the bounds unit differs. That is a known approximation carried over
//! from the original behavior.

use crate::conclusion::strip_prefix_ci;
use crate::paragraph::{join_paragraphs, split_paragraphs};

/// Single-token hedges stripped when they appear as bare words.
const FILLER_WORDS: &[&str] = &[
    "really",
    "very",
    "quite",
    "perhaps",
    "maybe",
    "honestly",
    "basically",
    "actually",
    "truly",
    "simply",
    "somewhat",
    "rather",
    "indeed",
    "definitely",
    "certainly",
    "just",
];

/// Multi-word hedge phrases stripped case-insensitively at word boundaries.
const FILLER_PHRASES: &[&str] = &[
    "i think",
    "i believe",
    "i feel like",
    "it seems that",
    "it seems like",
    "in a way",
    "sort of",
    "kind of",
    "needless to say",
    "as a matter of fact",
    "to be honest",
];

/// Sentence terminators recognized by the splitter.
const TERMINATORS: &[char] = &['.', '!', '?', '。', '！', '？'];

/// Compress every content paragraph of `text`, leaving the final
/// (conclusion) paragraph byte-for-byte intact.
///
/// Lossy and one-directional: repeated application only ever shrinks the
/// text further.
pub fn compress(text: &str) -> String {
    let mut paragraphs = split_paragraphs(text);
    if paragraphs.len() <= 1 {
        return text.to_string();
    }
    let content_end = paragraphs.len() - 1;
    for paragraph in &mut paragraphs[..content_end] {
        *paragraph = compress_paragraph(paragraph);
    }
    paragraphs.retain(|p| !p.is_empty());
    join_paragraphs(&paragraphs)
}

fn compress_paragraph(paragraph: &str) -> String {
    let mut text = collapse_whitespace(paragraph);
    for phrase in FILLER_PHRASES {
        text = remove_phrase_ci(&text, phrase);
    }
    text = remove_filler_words(&text);
    text = collapse_punctuation(&text);
    text = remove_parentheticals(&text);

    let sentences = split_sentences(&text);
    let flattened: Vec<String> = sentences
        .iter()
        .map(|s| flatten_trailing_clauses(s))
        .collect();

    // A rambling paragraph whose opening sentence already runs long keeps
    // only that sentence's first clause.
    if flattened.len() > 2 && flattened[0].chars().count() > 80 {
        return clause_head(&flattened[0]);
    }

    // Re-joining on spaces would inflate scripts that write without them,
    // so the original spacing survives unless a clause was actually cut.
    if flattened == sentences {
        tidy(&text)
    } else {
        tidy(&flattened.join(" "))
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Remove whole-word, case-insensitive occurrences of a phrase.
fn remove_phrase_ci(text: &str, phrase: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;
    while !rest.is_empty() {
        let at_boundary = prev.is_none_or(|c| !c.is_alphanumeric());
        if at_boundary
            && let Some(after) = strip_prefix_ci(rest, phrase)
            && after.chars().next().is_none_or(|c| !c.is_alphanumeric())
        {
            rest = after.trim_start();
            prev = Some(' ');
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
            prev = Some(c);
            rest = chars.as_str();
        }
    }
    out
}

/// Drop bare filler tokens. Tokens carrying punctuation are kept so that
/// sentence structure survives.
fn remove_filler_words(text: &str) -> String {
    text.split(' ')
        .filter(|token| {
            let core = token.trim_matches(|c: char| !c.is_alphanumeric());
            let bare = core.len() == token.len();
            !(bare && FILLER_WORDS.contains(&core.to_lowercase().as_str()))
        })
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Collapse runs of emphatic punctuation: `!!!` to `!`, `???` to `?`, and
/// four or more dots to a plain ellipsis.
fn collapse_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        match c {
            '!' | '?' | ',' | '！' | '？' | '…' => out.push(c),
            '.' if run >= 4 => out.push_str("..."),
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
        i += run;
    }
    out
}

/// Remove parenthetical asides, ASCII and fullwidth. An opening bracket
/// with no close is left alone.
fn remove_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(['(', '（']) {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find([')', '）']) {
            Some(close) => {
                let close_len = tail[close..].chars().next().map_or(1, char::len_utf8);
                rest = &tail[close + close_len..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    collapse_whitespace(&out)
}

/// Split into sentences, keeping terminal punctuation. Fragments without a
/// single alphanumeric character (stray dots, ellipsis leftovers) are
/// discarded.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if TERMINATORS.contains(&c) {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Keep at most two comma-separated clauses of a sentence.
fn flatten_trailing_clauses(sentence: &str) -> String {
    let terminal = sentence.chars().next_back().filter(|c| TERMINATORS.contains(c));
    let body = match terminal {
        Some(t) => &sentence[..sentence.len() - t.len_utf8()],
        None => sentence,
    };
    let clauses: Vec<&str> = body.split([',', '，']).collect();
    if clauses.len() <= 2 {
        return sentence.to_string();
    }
    let mut out = clauses[..2].join(",");
    out.push(terminal.unwrap_or('.'));
    out
}

/// First clause of a sentence (up to the first comma or semicolon),
/// closed with an ellipsis.
fn clause_head(sentence: &str) -> String {
    let cut = sentence
        .char_indices()
        .find(|&(_, c)| matches!(c, ',' | ';' | '，' | '；'))
        .map(|(i, _)| i);
    let head = match cut {
        Some(i) => &sentence[..i],
        None => sentence.trim_end_matches(TERMINATORS),
    };
    format!("{}...", head.trim_end())
}

/// Clean up artifacts the removal passes can leave behind.
fn tidy(text: &str) -> String {
    let mut out = collapse_whitespace(text)
        .replace(" ,", ",")
        .replace(" .", ".")
        .replace(" ;", ";")
        .replace(" !", "!")
        .replace(" ?", "?");
    while out.contains(",,") {
        out = out.replace(",,", ",");
    }
    out
}
