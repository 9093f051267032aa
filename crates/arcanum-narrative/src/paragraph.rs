//! Paragraph splitting shared by the conclusion and compression passes.

/// Split text into paragraphs on blank lines.
///
/// A blank line is any line that is empty or whitespace-only. Paragraphs
/// are trimmed; interior single newlines are preserved. Whitespace-only
/// input yields no paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut paragraphs, &mut current);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_paragraph(&mut paragraphs, &mut current);
    paragraphs
}

/// Join paragraphs back into one text with blank-line separators.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

fn push_paragraph(paragraphs: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}
