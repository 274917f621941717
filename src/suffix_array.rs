//! Suffix array module.
//! # Overview
//! `SuffixArray<T>` is the permutation of `0..n` that orders all suffixes of
//! the input lexicographically: if `sa.get(12) == 34`, the suffix starting
//! at position 34 has rank 12. The sorting itself is delegated to the
//! external `cdivsufsort` oracle after the alphabet codec has reduced the
//! symbols to bytes; everything else in this crate is built on top of the
//! resulting permutation.
use std::cmp::Ord;

use crate::alphabet::{self, ByteEncoding, Symbol};
use crate::error::{Error, Result};

/// Offset storage. Narrow (i32) offsets are used below 2^31 positions,
/// wide (i64) offsets otherwise or on request.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Offsets {
    Narrow(Vec<i32>),
    Wide(Vec<i64>),
}

impl Offsets {
    fn len(&self) -> usize {
        match self {
            Offsets::Narrow(v) => v.len(),
            Offsets::Wide(v) => v.len(),
        }
    }
    fn get(&self, rank: usize) -> usize {
        match self {
            Offsets::Narrow(v) => v[rank] as usize,
            Offsets::Wide(v) => v[rank] as usize,
        }
    }
}

/// A suffix array over a sequence of `T` symbols.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SuffixArray<T: Ord + Clone + Eq> {
    offsets: Offsets,
    resource_type: std::marker::PhantomData<T>,
}

/// Run the oracle over an encoded byte stream and map the byte offsets
/// back to symbol positions.
pub(crate) fn sort_encoded(enc: &ByteEncoding) -> Result<Vec<usize>> {
    if enc.bytes.is_empty() {
        return Ok(vec![]);
    }
    if enc.bytes.len() > i32::MAX as usize {
        // The 32-bit oracle cannot address this input.
        return Err(Error::OracleFailure(-1));
    }
    let mut byte_sa = vec![0i32; enc.bytes.len()];
    cdivsufsort::sort_in_place(&enc.bytes, &mut byte_sa);
    let w = enc.width;
    Ok(byte_sa
        .into_iter()
        .map(|p| p as usize)
        .filter(|p| p % w == 0)
        .map(|p| p / w)
        .collect())
}

impl<T: Symbol> SuffixArray<T> {
    /// Build the suffix array through the sort oracle. Offsets are stored
    /// narrow when the sequence fits in 2^31-1 positions.
    pub fn new(input: &[T]) -> Result<Self> {
        Self::build(input, false)
    }

    /// Build with wide (i64) offsets regardless of length.
    pub fn new_wide(input: &[T]) -> Result<Self> {
        Self::build(input, true)
    }

    fn build(input: &[T], force_wide: bool) -> Result<Self> {
        let enc = alphabet::encode(input);
        let positions = sort_encoded(&enc)?;
        Ok(Self::from_positions(&positions, force_wide))
    }

    fn from_positions(positions: &[usize], force_wide: bool) -> Self {
        let offsets = if force_wide || positions.len() > i32::MAX as usize {
            Offsets::Wide(positions.iter().map(|&p| p as i64).collect())
        } else {
            Offsets::Narrow(positions.iter().map(|&p| p as i32).collect())
        };
        Self {
            offsets,
            resource_type: std::marker::PhantomData,
        }
    }
}

impl<T: Ord + Clone + Eq> SuffixArray<T> {
    /// Reference constructor sorting the suffixes directly. Quadratic in the
    /// worst case; used to validate the oracle pipeline in tests.
    pub fn new_naive(input: &[T]) -> Self {
        let mut positions: Vec<usize> = (0..input.len()).collect();
        positions.sort_by(|&i, &j| input[i..].cmp(&input[j..]));
        let offsets = Offsets::Narrow(positions.into_iter().map(|p| p as i32).collect());
        Self {
            offsets,
            resource_type: std::marker::PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.len() == 0
    }

    /// Whether the offsets are stored as i64.
    pub fn is_wide(&self) -> bool {
        matches!(self.offsets, Offsets::Wide(_))
    }

    /// Text position of the suffix with the given rank.
    pub fn get(&self, rank: usize) -> usize {
        self.offsets.get(rank)
    }

    /// The full permutation in rank order.
    pub fn positions(&self) -> Vec<usize> {
        (0..self.len()).map(|r| self.offsets.get(r)).collect()
    }

    /// Return the inverse suffix array of `self`.
    pub fn inverse(&self) -> Vec<usize> {
        let mut isa = vec![0; self.len()];
        for rank in 0..self.len() {
            isa[self.offsets.get(rank)] = rank;
        }
        isa
    }

    /// Count the occurrences of `pattern` and return the leftmost matching
    /// rank, if any. Comparison stops at the pattern length, so every
    /// suffix that starts with `pattern` matches.
    pub fn search(&self, input: &[T], pattern: &[T]) -> (usize, Option<usize>) {
        if self.is_empty() {
            return (0, None);
        }
        if pattern.is_empty() {
            return (self.len(), Some(0));
        }
        let max = input.len();
        let compare = |rank: usize| {
            let start = self.offsets.get(rank);
            let end = (start + pattern.len()).min(max);
            input[start..end].cmp(pattern)
        };
        match binary_search_by(0, self.len() - 1, compare) {
            Some((left, right)) => (right - left + 1, Some(left)),
            None => (0, None),
        }
    }

    /// All text positions where `pattern` occurs, in rank order.
    pub fn occurrences(&self, input: &[T], pattern: &[T]) -> Vec<usize> {
        match self.search(input, pattern) {
            (count, Some(left)) => (left..left + count).map(|r| self.offsets.get(r)).collect(),
            (_, None) => vec![],
        }
    }
}

fn binary_search_by<F: Fn(usize) -> std::cmp::Ordering>(
    start: usize,
    end: usize,
    compare: F,
) -> Option<(usize, usize)> {
    // First get the start location.
    let start = if compare(start) == std::cmp::Ordering::Equal {
        start
    } else {
        let (mut start, mut end) = (start, end);
        while end - start > 1 {
            let center = (start + end) / 2;
            match compare(center) {
                std::cmp::Ordering::Less => start = center,
                _ => end = center,
            }
        }
        match compare(end) {
            std::cmp::Ordering::Equal => end,
            _ => return None,
        }
    };
    // Similarly determine the end location.
    let end = if compare(end) == std::cmp::Ordering::Equal {
        end
    } else {
        let (mut start, mut end) = (start, end);
        while end - start > 1 {
            let center = (start + end) / 2;
            match compare(center) {
                std::cmp::Ordering::Greater => end = center,
                _ => start = center,
            }
        }
        match compare(start) {
            std::cmp::Ordering::Equal => start,
            _ => return None,
        }
    };
    Some((start, end))
}
