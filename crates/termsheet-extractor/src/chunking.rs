//! Positional text chunking

/// Splits text into fixed-size character windows.
///
/// Boundaries are purely positional with no word, sentence, or section
/// awareness: that trades semantic cleanliness for deterministic, simple
/// reconstruction and a bounded request size. Concatenating the chunks in
/// order reproduces the input exactly; the last chunk may be shorter.
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    /// Create a new chunker with the given maximum chunk length, in
    /// characters.
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Chunk the given text. Empty input yields zero chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::with_capacity(text.len() / self.chunk_size.max(1) + 1);
        let mut current = String::new();
        let mut count = 0;

        // Counted in characters so a window never splits a code point.
        for ch in text.chars() {
            current.push(ch);
            count += 1;
            if count == self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                count = 0;
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

/// Truncate `text` to at most `max_chars` characters, on a character
/// boundary. Used by the half-size retry after a token-limit rejection.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
