//! Alphabet codec.
//! # Overview
//! The suffix-sort oracle only understands bytes. This module re-encodes
//! sequences of wider (possibly signed) integer symbols into a byte stream
//! whose byte-wise suffix order agrees with the symbol-wise suffix order:
//! signed values get their sign bit flipped (order preserving), symbols are
//! packed big-endian, and the byte width is minimized to the smallest power
//! of two that still distinguishes all values after subtracting the minimum.
//! The width minimization is purely an optimization; the resulting suffix
//! order is identical whichever width is used.

use crate::error::{Error, Result};

/// Text inputs longer than this emit a diagnostic about the full-size copy.
pub const LARGE_TEXT_THRESHOLD: usize = 1000;

/// A fixed-width integer symbol. Implemented for the signed and unsigned
/// integers of width 1, 2, 4 and 8 bytes.
pub trait Symbol: Copy + Ord + std::fmt::Debug {
    /// Native width of the symbol in bytes.
    const WIDTH: usize;
    /// Whether the native representation is signed.
    const SIGNED: bool;
    /// Map to an unsigned value with the same total order (sign-bit flip),
    /// widened so all symbol types share one working domain.
    fn normalize(self) -> u128;
}

macro_rules! impl_symbol_unsigned {
    ($($t:ty),*) => {$(
        impl Symbol for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = false;
            fn normalize(self) -> u128 {
                self as u128
            }
        }
    )*};
}

macro_rules! impl_symbol_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl Symbol for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = true;
            fn normalize(self) -> u128 {
                (self as $u ^ (1 << (Self::WIDTH * 8 - 1))) as u128
            }
        }
    )*};
}

impl_symbol_unsigned!(u8, u16, u32, u64);
impl_symbol_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

/// A byte stream ready for the suffix-sort oracle, together with the byte
/// width each symbol occupies in it. Byte offsets that are multiples of
/// `width`, divided by `width`, enumerate the original symbol positions.
#[derive(Debug, Clone)]
pub struct ByteEncoding {
    pub bytes: Vec<u8>,
    pub width: usize,
}

/// Encode a symbol sequence for the oracle.
pub fn encode<T: Symbol>(seq: &[T]) -> ByteEncoding {
    if T::WIDTH == 1 {
        // Single-byte symbols only need the sign flip.
        let bytes = seq.iter().map(|x| x.normalize() as u8).collect();
        return ByteEncoding { bytes, width: 1 };
    }
    let normalized: Vec<u128> = seq.iter().map(|x| x.normalize()).collect();
    encode_normalized(&normalized)
}

/// Encode an already order-normalized sequence. The working domain is u128
/// so that a separator one past the largest 8-byte symbol still fits.
pub fn encode_normalized(normalized: &[u128]) -> ByteEncoding {
    if normalized.is_empty() {
        return ByteEncoding {
            bytes: vec![],
            width: 1,
        };
    }
    let min = *normalized.iter().min().unwrap();
    let max = *normalized.iter().max().unwrap();
    let span = max - min;
    let span_bits = (128 - span.leading_zeros()) as usize;
    let span_bytes = ((span_bits + 7) / 8).max(1);
    let width = span_bytes.next_power_of_two();
    let mut bytes = Vec::with_capacity(normalized.len() * width);
    for &v in normalized {
        let be = (v - min).to_be_bytes();
        bytes.extend_from_slice(&be[16 - width..]);
    }
    ByteEncoding { bytes, width }
}

/// Validate 7-bit text and hand it over as a byte sequence.
///
/// Long inputs are accepted but a diagnostic is emitted, since the
/// conversion allocates a full-size copy.
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
        return Err(Error::UnsupportedTextEncoding(c));
    }
    if text.len() > LARGE_TEXT_THRESHOLD {
        log::warn!(
            "converting a {} character text input allocates a full-size copy",
            text.len()
        );
    }
    Ok(text.as_bytes().to_vec())
}

/// Accept an arbitrary buffer as raw bytes, flagging the fallback.
pub fn raw_buffer_to_bytes(buf: &[u8]) -> Vec<u8> {
    log::warn!("input type not recognized, handled as a raw byte buffer");
    buf.to_vec()
}
