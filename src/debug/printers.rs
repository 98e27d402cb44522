// src/debug/printers.rs

//! Printer macros and helpers for warnings, errors, and trace output.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `d`ebug `e`println! an `err`or
///
/// Only prints in debug and test builds.
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("ERROR: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_err;

/// `d`ebug `e`println! a `w`a`rn`ing
///
/// Only prints in debug and test builds. Degraded input that is also
/// recorded in a [`SummarySarProcessor`] is reported with this.
///
/// [`SummarySarProcessor`]: crate::readers::summary::SummarySarProcessor
#[macro_export]
macro_rules! de_wrn {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("WARNING: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_wrn;

/// `e`println! an `err`or
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("ERROR: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_err;

/// `e`println! a `w`a`rn`ing
#[macro_export]
macro_rules! e_wrn {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("WARNING: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_wrn;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Replace whitespace control characters with visible glyphs so a chunk of
/// `sar` text prints on one trace line.
///
/// `"a\nb\tc"` becomes `"a␊b␉c"`.
#[allow(non_snake_case)]
pub fn str_to_String_noraw(data: &str) -> String {
    let mut s = String::with_capacity(data.len() + 8);
    for c in data.chars() {
        match c {
            '\n' => s.push('␊'),
            '\r' => s.push('␍'),
            '\t' => s.push('␉'),
            '\0' => s.push('␀'),
            _ => s.push(c),
        }
    }

    s
}

/// Like [`str_to_String_noraw`] but truncated to `max` chars, with a
/// trailing `…` when truncated. Keeps trace output of large chunks short.
#[allow(non_snake_case)]
pub fn str_to_String_noraw_trunc(
    data: &str,
    max: usize,
) -> String {
    if data.chars().count() <= max {
        return str_to_String_noraw(data);
    }
    let head: String = data.chars().take(max).collect();
    let mut s = str_to_String_noraw(&head);
    s.push('…');

    s
}
