// src/tests/mod.rs

//! Tests for _sarlib_.
//!
//! Tests are placed at `src/tests/`, inside the `sarlib`, for access to
//! crate-internal items.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.

pub mod columnresolver_tests;
pub mod common;
pub mod recordextractor_tests;
pub mod sourcebuffer_tests;
