// src/readers/sourcebuffer.rs

//! Implements a [`SourceBuffer`], the read-only bytes of one `sar` source.

use crate::common::{FPath, FileSz, Path, path_to_fpath};

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{Error, Result};

use ::memmap2::Mmap;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SourceBuffer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The entire contents of a `sar` source, held in memory before parsing.
///
/// A file is read through a read-only memory map. The map is released
/// when the `SourceBuffer` is dropped. Text already in memory is held
/// as-is.
pub enum SourceBuffer {
    /// read-only map of a file
    Mapped {
        path: FPath,
        mmap: Mmap,
    },
    /// text passed by the caller, or an empty file
    Owned {
        path: Option<FPath>,
        data: String,
    },
}

impl fmt::Debug for SourceBuffer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("path", &self.path())
            .field("mapped", &self.is_mapped())
            .field("len", &self.len())
            .finish()
    }
}

impl SourceBuffer {
    /// Open and map the file at `path`.
    ///
    /// Fails if the file does not exist or cannot be read. The returned
    /// [`Error`] keeps the original [`ErrorKind`] and names the path.
    ///
    /// [`ErrorKind`]: std::io::ErrorKind
    pub fn open(path: &Path) -> Result<SourceBuffer> {
        defn!("({:?})", path);
        let fpath: FPath = path_to_fpath(path);
        let file: File = match File::open(path) {
            Ok(val) => val,
            Err(err) => {
                defx!("File::open({:?}) error {}", path, err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, fpath)));
            }
        };
        let filesz: FileSz = match file.metadata() {
            Ok(val) => val.len(),
            Err(err) => {
                defx!("metadata({:?}) error {}", path, err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, fpath)));
            }
        };
        if filesz == 0 {
            // zero-length maps fail on some platforms
            defx!("empty file {:?}", path);
            return Ok(SourceBuffer::Owned {
                path: Some(fpath),
                data: String::new(),
            });
        }
        // SAFETY: the map is never written; the file must not be truncated
        //         while the map is alive.
        let mmap: Mmap = match unsafe { Mmap::map(&file) } {
            Ok(val) => val,
            Err(err) => {
                defx!("Mmap::map({:?}) error {}", path, err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, fpath)));
            }
        };
        defx!("mapped {} bytes", mmap.len());

        Ok(SourceBuffer::Mapped { path: fpath, mmap })
    }

    /// Hold text already in memory.
    pub fn from_string(data: String) -> SourceBuffer {
        SourceBuffer::Owned { path: None, data }
    }

    /// The path of a file source.
    pub fn path(&self) -> Option<&FPath> {
        match self {
            SourceBuffer::Mapped { path, .. } => Some(path),
            SourceBuffer::Owned { path, .. } => path.as_ref(),
        }
    }

    pub const fn is_mapped(&self) -> bool {
        matches!(self, SourceBuffer::Mapped { .. })
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            SourceBuffer::Mapped { mmap, .. } => &mmap[..],
            SourceBuffer::Owned { data, .. } => data.as_bytes(),
        }
    }

    /// The source as text. Invalid UTF-8 sequences are replaced with
    /// `U+FFFD`; valid text is borrowed, not copied.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for SourceBuffer {
    fn from(data: String) -> Self {
        SourceBuffer::from_string(data)
    }
}

impl From<&str> for SourceBuffer {
    fn from(data: &str) -> Self {
        SourceBuffer::from_string(data.to_string())
    }
}

impl AsRef<[u8]> for SourceBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
