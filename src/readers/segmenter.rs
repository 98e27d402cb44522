// src/readers/segmenter.rs

//! Divide a `sar` buffer into chunks at each blank line.

use crate::common::CHUNK_DELIMITER;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A trimmed, blank-line-delimited slice of a `sar` buffer. The
/// [`SectionType`] is unknown until classified.
///
/// [`SectionType`]: crate::data::section::SectionType
pub type Chunk<'a> = &'a str;
pub type Chunks<'a> = Vec<Chunk<'a>>;

/// Split `buffer` at each `"\n\n"` into trimmed [`Chunk`]s, in byte order.
///
/// Chunks that are empty after trimming are not returned, so an empty or
/// whitespace-only `buffer` returns no chunks.
pub fn segment(buffer: &str) -> Chunks<'_> {
    defn!("(buffer len {})", buffer.len());
    let chunks: Chunks = buffer
        .split(CHUNK_DELIMITER)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();
    defx!("return {} chunks", chunks.len());

    chunks
}
