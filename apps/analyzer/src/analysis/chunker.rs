//! Fixed-size document chunking.
//!
//! Segments are contiguous, non-overlapping, and at most `CHUNK_SIZE`
//! characters; concatenating them reproduces the input byte-for-byte.
//! Boundaries land on `char` boundaries — a byte-indexed split would panic
//! mid-codepoint on any résumé with accented names.

/// Maximum characters per extraction chunk.
pub const CHUNK_SIZE: usize = 1000;

/// Splits `text` into segments of at most `max_chars` characters; the final
/// segment may be shorter. Empty input yields no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let split_at = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split_at);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
