//! Small sequence helpers.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Result, UtilError};

/// De-duplicate, keeping the first occurrence of each item in order.
pub fn dedup<T: Eq + Hash + Clone>(src: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    src.iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Split a slice into runs of `length` items; the last run may be short.
/// A zero length is an error.
pub fn chunks_of<T>(src: &[T], length: usize) -> Result<Vec<&[T]>> {
    if length == 0 {
        return Err(UtilError::ZeroChunkLength);
    }
    Ok(src.chunks(length).collect())
}

/// Split a string into runs of `length` chars, respecting char
/// boundaries; the last run may be short. A zero length is an error.
pub fn str_chunks_of(src: &str, length: usize) -> Result<Vec<&str>> {
    if length == 0 {
        return Err(UtilError::ZeroChunkLength);
    }

    let mut chunks = Vec::new();
    let mut rest = src;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(length)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }
    Ok(chunks)
}

/// Count the items a predicate accepts.
pub fn count_if<T>(items: impl IntoIterator<Item = T>, predicate: impl Fn(&T) -> bool) -> usize {
    items.into_iter().filter(|item| predicate(item)).count()
}
