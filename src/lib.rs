//! Suffix-array based string algorithms over fixed-width integer symbols.
//!
//! The suffix sorting itself is delegated to the external `cdivsufsort`
//! oracle; this crate provides everything built on top of it: the alphabet
//! codec reducing arbitrary integer sequences to byte-level sorting, LCP
//! arrays (Kasai), constant-time range LCP queries, substring search, the
//! Burrows-Wheeler transform and its inverse, frequent- and common-substring
//! discovery, the longest-previous-factor / Lempel-Ziv pipeline, Booth's
//! minimal rotation, Levenshtein distance and a streaming KMP censor.
//!
//! [`IndexedSequence`] bundles a sequence with its derived structures,
//! building each of them at most once.
use std::sync::OnceLock;

#[macro_use]
extern crate serde;
pub mod alphabet;
pub mod bwt;
pub mod censor;
pub mod distance;
pub mod error;
pub mod lcp;
pub mod lpf;
pub mod rotation;
pub mod substrings;
pub mod suffix_array;

pub use crate::alphabet::Symbol;
pub use crate::bwt::{bw_transform, inverse_bw_transform};
pub use crate::censor::kmp_censor_stream;
pub use crate::distance::levenshtein;
pub use crate::error::{Error, Result};
pub use crate::lcp::{kasai, RangeLcpIndex};
pub use crate::lpf::{longest_previous_factor, lz_complexity, lz_factorization};
pub use crate::rotation::min_rotation;
pub use crate::substrings::{common_substrings, most_frequent_substrings};
pub use crate::suffix_array::SuffixArray;

/// A sequence bundled with its lazily built suffix array, inverse suffix
/// array, LCP array and range LCP index.
///
/// Construction never fails by itself; the oracle runs the first time a
/// derived structure is needed, and each structure is computed at most once
/// even under concurrent access.
#[derive(Debug, Default)]
pub struct IndexedSequence<T: Symbol> {
    seq: Vec<T>,
    sa: OnceLock<Result<SuffixArray<T>>>,
    isa: OnceLock<Vec<usize>>,
    lcp: OnceLock<Vec<usize>>,
    index: OnceLock<RangeLcpIndex>,
}

impl IndexedSequence<u8> {
    /// Index 7-bit text. Characters outside the 7-bit range are rejected.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(alphabet::text_to_bytes(text)?))
    }

    /// Index an arbitrary buffer as raw bytes (flagged as a fallback).
    pub fn from_raw_buffer(buf: &[u8]) -> Self {
        Self::new(alphabet::raw_buffer_to_bytes(buf))
    }
}

impl<T: Symbol> IndexedSequence<T> {
    pub fn new(seq: Vec<T>) -> Self {
        Self {
            seq,
            sa: OnceLock::new(),
            isa: OnceLock::new(),
            lcp: OnceLock::new(),
            index: OnceLock::new(),
        }
    }

    pub fn sequence(&self) -> &[T] {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// The suffix array, built on first use.
    pub fn suffix_array(&self) -> Result<&SuffixArray<T>> {
        self.sa
            .get_or_init(|| SuffixArray::new(&self.seq))
            .as_ref()
            .map_err(|e| e.clone())
    }

    fn inverse_suffix_array(&self) -> Result<&[usize]> {
        let sa = self.suffix_array()?;
        Ok(self.isa.get_or_init(|| sa.inverse()))
    }

    /// The LCP array, built on first use.
    pub fn lcp_array(&self) -> Result<&[usize]> {
        let sa = self.suffix_array()?;
        Ok(self
            .lcp
            .get_or_init(|| kasai(&self.seq, &sa.positions())))
    }

    /// The range LCP index, built on first use.
    pub fn range_lcp_index(&self) -> Result<&RangeLcpIndex> {
        let lcp = self.lcp_array()?;
        let sa = self.suffix_array()?;
        Ok(self
            .index
            .get_or_init(|| RangeLcpIndex::new(lcp.to_vec(), &sa.positions(), self.seq.len())))
    }

    /// Longest common prefix of the suffixes starting at text positions
    /// `i` and `j`. `lcp(i, i)` is the remaining suffix length.
    pub fn lcp(&self, i: usize, j: usize) -> Result<usize> {
        let isa = self.inverse_suffix_array()?;
        let (ri, rj) = (isa[i], isa[j]);
        Ok(self.range_lcp_index()?.query(ri, rj))
    }

    /// Occurrence count and leftmost suffix-array rank of `pattern`.
    pub fn search(&self, pattern: &[T]) -> Result<(usize, Option<usize>)> {
        Ok(self.suffix_array()?.search(&self.seq, pattern))
    }

    /// All text positions where `pattern` occurs, in rank order.
    pub fn occurrences(&self, pattern: &[T]) -> Result<Vec<usize>> {
        Ok(self.suffix_array()?.occurrences(&self.seq, pattern))
    }

    /// Text positions and occurrence counts of the most frequent substrings
    /// of the given length, counts decreasing.
    pub fn most_frequent_substrings(
        &self,
        length: usize,
        limit: usize,
        minimum_count: usize,
    ) -> Result<(Vec<usize>, Vec<usize>)> {
        let (ranks, counts) =
            most_frequent_substrings(self.lcp_array()?, length, limit, minimum_count);
        let sa = self.suffix_array()?;
        let positions = ranks.into_iter().map(|r| sa.get(r)).collect();
        Ok((positions, counts))
    }

    /// Burrows-Wheeler transform of the sequence. Only sequences whose
    /// minimized encoding is a single byte per symbol are supported.
    pub fn bwt(&self) -> Result<(usize, Vec<u8>)> {
        let enc = alphabet::encode(&self.seq);
        if enc.width != 1 {
            return Err(Error::UnsupportedElementType(enc.width));
        }
        bwt::bw_transform(&enc.bytes, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_parity() {
        let s = IndexedSequence::from_text("abcdabcd").unwrap();
        assert_eq!(s.lcp(0, 4).unwrap(), 4);
        assert_eq!(s.search(b"bc").unwrap().0, 2);
        let mut positions = s.occurrences(b"bc").unwrap();
        positions.sort();
        assert_eq!(positions, vec![1, 5]);
        let (positions, counts) = s.most_frequent_substrings(4, 1, 1).unwrap();
        assert_eq!((positions, counts), (vec![4], vec![2]));
    }

    #[test]
    fn lcp_of_position_with_itself_is_suffix_length() {
        let s = IndexedSequence::new(b"banana".to_vec());
        for i in 0..s.len() {
            assert_eq!(s.lcp(i, i).unwrap(), s.len() - i);
        }
    }

    #[test]
    fn derived_structures_are_memoized() {
        let s = IndexedSequence::new(b"mississippi".to_vec());
        let first = s.suffix_array().unwrap() as *const _;
        let second = s.suffix_array().unwrap() as *const _;
        assert_eq!(first, second);
        s.lcp_array().unwrap();
        s.range_lcp_index().unwrap();
    }

    #[test]
    fn non_ascii_text_is_rejected() {
        assert_eq!(
            IndexedSequence::from_text("naïve").unwrap_err(),
            Error::UnsupportedTextEncoding('ï')
        );
    }

    #[test]
    fn bwt_through_the_facade() {
        let s = IndexedSequence::new(b"banana".to_vec());
        let (primary, out) = s.bwt().unwrap();
        assert_eq!(inverse_bw_transform(primary, &out), b"banana");
        // Wide symbols with a small value span still reduce to bytes.
        let narrow: Vec<u32> = vec![70_000, 70_001, 70_000];
        let s = IndexedSequence::new(narrow);
        assert!(s.bwt().is_ok());
        // A genuinely wide alphabet is rejected.
        let wide: Vec<u32> = vec![0, 1 << 20];
        let s = IndexedSequence::new(wide);
        assert_eq!(s.bwt().unwrap_err(), Error::UnsupportedElementType(4));
    }

    #[test]
    fn shared_across_threads() {
        let s = std::sync::Arc::new(IndexedSequence::new(b"abracadabra".to_vec()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = std::sync::Arc::clone(&s);
                std::thread::spawn(move || s.lcp(0, 7).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 4);
        }
    }
}
