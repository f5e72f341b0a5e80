//! Joining rendered components with `.` separators.

use std::fmt;

/// Separator placed between components.
pub const SEPARATOR: char = '.';

/// Appends every part to `out`, separated by [`SEPARATOR`].
///
/// An empty iterator appends nothing.
///
/// ```rust
/// use ip_printer::dotted::join_into;
///
/// let mut out = String::new();
/// join_into(&mut out, [10, 0, 0, 1]);
/// assert_eq!(out, "10.0.0.1");
/// ```
pub fn join_into<I>(out: &mut String, parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&part.to_string());
    }
}

/// Joins `parts` into a new string.
#[must_use]
pub fn join<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::new();
    join_into(&mut out, parts);
    out
}
