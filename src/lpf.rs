//! Longest previous factor array and the Lempel-Ziv pipeline built on it.
//!
//! `lpf[i]` is the length of the longest substring starting at `i` that
//! already occurs at some earlier position (the copy source may overlap the
//! factor itself). It is read off the suffix array: for each rank, the
//! candidate sources are the nearest ranks above and below whose text
//! position is smaller, and the match length with either candidate is a
//! range minimum over the LCP array.

use crate::alphabet::Symbol;
use crate::error::Result;
use crate::lcp::{kasai, SparseTable};
use crate::suffix_array::SuffixArray;

/// Longest-previous-factor array of `seq`.
pub fn longest_previous_factor<T: Symbol>(seq: &[T]) -> Result<Vec<usize>> {
    let n = seq.len();
    if n == 0 {
        return Ok(vec![]);
    }
    let sa = SuffixArray::new(seq)?.positions();
    let lcp = kasai(seq, &sa);
    let table = SparseTable::new(&lcp);

    // Nearest rank above/below with a smaller text position, by monotonic
    // stack.
    let mut prev_smaller = vec![usize::MAX; n];
    let mut stack: Vec<usize> = vec![];
    for r in 0..n {
        while let Some(&top) = stack.last() {
            if sa[top] < sa[r] {
                prev_smaller[r] = top;
                break;
            }
            stack.pop();
        }
        stack.push(r);
    }
    let mut next_smaller = vec![usize::MAX; n];
    stack.clear();
    for r in (0..n).rev() {
        while let Some(&top) = stack.last() {
            if sa[top] < sa[r] {
                next_smaller[r] = top;
                break;
            }
            stack.pop();
        }
        stack.push(r);
    }

    let mut lpf = vec![0; n];
    for r in 0..n {
        let mut best = 0;
        if prev_smaller[r] != usize::MAX {
            best = lcp[table.min_index(prev_smaller[r] + 1, r + 1)];
        }
        if next_smaller[r] != usize::MAX {
            best = best.max(lcp[table.min_index(r + 1, next_smaller[r] + 1)]);
        }
        lpf[sa[r]] = best;
    }
    Ok(lpf)
}

/// Lempel-Ziv factor boundaries from an LPF array: starts at 0, ends at n,
/// each factor is a copy of `lpf[i]` symbols or a single literal.
pub fn lz_factorization(lpf: &[usize]) -> Vec<usize> {
    let mut boundaries = vec![0];
    let mut i = 0;
    while i < lpf.len() {
        i += lpf[i].max(1);
        boundaries.push(i);
    }
    boundaries
}

/// Number of phrases in the exhaustive-history Lempel-Ziv parsing: each
/// phrase is the longest previously seen prefix plus one fresh symbol.
pub fn lz_complexity<T: Symbol>(seq: &[T]) -> Result<usize> {
    let lpf = longest_previous_factor(seq)?;
    let mut count = 0;
    let mut i = 0;
    while i < lpf.len() {
        i += lpf[i] + 1;
        count += 1;
    }
    Ok(count)
}
