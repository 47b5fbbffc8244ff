//! Shared utilities for channel implementations.

/// Split a long message into chunks of at most `max_chars` characters.
///
/// The limit counts chars, not bytes, so Cyrillic text gets the full budget.
/// Cuts always fall on char boundaries, and a newline inside the chunk is
/// preferred as the cut.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    if text.chars().count() <= max_chars {
        return vec![text];
    }

    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(i, _)| i);
        let cut = if end < rest.len() {
            rest[..end].rfind('\n').map_or(end, |i| i + 1)
        } else {
            end
        };
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}
