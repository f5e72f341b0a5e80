//! Byte-group extraction for fixed-width integers.
//!
//! Every primitive integer is split into `size_of::<T>()` groups of 8 bits.
//! The split is done on the unsigned view of the value, so a negative number
//! yields the groups of its two's-complement bit pattern and never leaks
//! sign-extension into the output.
//!
//! ```rust
//! use ip_printer::octets::octets;
//!
//! let groups: Vec<u8> = octets(2130706433i32).collect();
//! assert_eq!(groups, vec![127, 0, 0, 1]);
//!
//! let groups: Vec<u8> = octets(-1i8).collect();
//! assert_eq!(groups, vec![255]);
//! ```

use crate::sealed;
use std::fmt;
use std::mem;

/// Primitive integer types accepted by the integer and sequence paths.
///
/// Sealed: only the built-in integer types implement it.
pub trait Integral: Copy + fmt::Display + sealed::Sealed {
    /// Width of the type in bytes.
    const WIDTH: usize;

    /// Bit pattern of the value as an unsigned integer of the same width,
    /// zero-extended to 128 bits.
    fn to_bits(self) -> u128;
}

macro_rules! impl_integral {
    ($($int:ty => $unsigned:ty),* $(,)?) => { $(
        impl Integral for $int {
            const WIDTH: usize = mem::size_of::<$int>();

            #[inline]
            fn to_bits(self) -> u128 {
                self as $unsigned as u128
            }
        }
    )* };
}

impl_integral!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

/// Iterator over the 8-bit groups of an integer, most significant first.
#[derive(Clone, Debug)]
pub struct Octets {
    bits: u128,
    remaining: usize,
}

impl Iterator for Octets {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let offset = 8 * self.remaining as u32;
        Some(((self.bits >> offset) & 0xFF) as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Octets {}

/// Splits `value` into its byte groups, most significant group first.
#[must_use]
pub fn octets<T: Integral>(value: T) -> Octets {
    Octets {
        bits: value.to_bits(),
        remaining: T::WIDTH,
    }
}
