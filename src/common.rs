// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;
pub use std::path::Path;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;
pub type FileSz = u64;

/// Convert a [`Path`] to a [`FPath`], lossy for non-UTF8 paths.
pub fn path_to_fpath(path: &Path) -> FPath {
    (*(path.to_string_lossy())).to_string()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// misc.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// General purpose counting type, used for summary statistics.
pub type Count = u64;

/// Zero-based offset of a whitespace-separated token within a line.
pub type TokenIndex = usize;

/// Byte offset into a source buffer.
pub type BufferOffset = usize;

/// Newline as a `str`, used to join merged section text.
#[allow(non_upper_case_globals)]
pub const NLs: &str = "\n";

/// Two consecutive newlines separate `sar` report sections.
pub const CHUNK_DELIMITER: &str = "\n\n";
