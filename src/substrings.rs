//! Substring discovery by scanning runs in the LCP array.
//!
//! Frequent substrings of a fixed length come from maximal runs of
//! consecutive ranks whose adjacent LCP stays at or above that length.
//! Common substrings of two sequences come from the suffix array of their
//! separator-joined concatenation: inside each run, rank pairs that cross
//! the separator are matches, and only the ones that cannot be extended
//! leftward are reported.

use crate::alphabet::{self, Symbol};
use crate::error::Result;
use crate::lcp::kasai;
use crate::suffix_array::sort_encoded;

/// Representative ranks and occurrence counts of the substrings of a fixed
/// `length`, most frequent first.
///
/// Consecutive ranks are grouped into maximal runs wherever the adjacent
/// LCP value is at least `length`; a run of c ranks stands for a substring
/// occurring c times, represented by its first rank. Runs occurring fewer
/// than `minimum_count` times are dropped; `limit` (0 = unlimited) caps the
/// result. Ties in count are broken by rank order.
pub fn most_frequent_substrings(
    lcp: &[usize],
    length: usize,
    limit: usize,
    minimum_count: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = lcp.len();
    let mut runs: Vec<(usize, usize)> = vec![];
    let mut start = 0;
    for rank in 1..=n {
        if rank == n || lcp[rank] < length {
            runs.push((start, rank - start));
            start = rank;
        }
    }
    runs.retain(|&(_, count)| count >= minimum_count.max(1));
    runs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    if limit > 0 {
        runs.truncate(limit);
    }
    runs.into_iter().unzip()
}

/// All common substrings of `s1` and `s2` of length at least `limit`.
///
/// Returns `(idx1, idx2, length)` triples, sorted by `(idx1, idx2)`. Every
/// match is maximal: it cannot be extended to the right (the reported
/// length is the full common prefix of the two suffixes) nor to the left
/// (the preceding symbols differ or a sequence boundary is hit).
pub fn common_substrings<T: Symbol>(
    s1: &[T],
    s2: &[T],
    limit: usize,
) -> Result<Vec<(usize, usize, usize)>> {
    if s1.is_empty() || s2.is_empty() {
        return Ok(vec![]);
    }
    let threshold = limit.max(1);
    let n1 = s1.len();
    // Join with a separator one past the larger alphabet, so it can never
    // take part in a genuine match.
    let mut joined: Vec<u128> = Vec::with_capacity(s1.len() + s2.len() + 1);
    joined.extend(s1.iter().map(|x| x.normalize()));
    let max1 = s1.iter().map(|x| x.normalize()).max().unwrap();
    let max2 = s2.iter().map(|x| x.normalize()).max().unwrap();
    joined.push(max1.max(max2) + 1);
    joined.extend(s2.iter().map(|x| x.normalize()));

    let enc = alphabet::encode_normalized(&joined);
    let sa = sort_encoded(&enc)?;
    let lcp = kasai(&joined, &sa);

    let n = joined.len();
    let mut out = vec![];
    let mut block_start = 0;
    for rank in 1..=n {
        if rank < n && lcp[rank] >= threshold {
            continue;
        }
        // Ranks in block_start..rank share a prefix of at least `threshold`
        // across each adjacent pair; collect the separator-crossing pairs.
        for a in block_start..rank {
            let pa = sa[a];
            if pa == n1 {
                continue;
            }
            let mut k = usize::MAX;
            for b in a + 1..rank {
                k = k.min(lcp[b]);
                if k < threshold {
                    break;
                }
                let pb = sa[b];
                if pb == n1 || (pa < n1) == (pb < n1) {
                    continue;
                }
                let (i, j) = if pa < n1 {
                    (pa, pb - n1 - 1)
                } else {
                    (pb, pa - n1 - 1)
                };
                if i == 0 || j == 0 || s1[i - 1] != s2[j - 1] {
                    out.push((i, j, k));
                }
            }
        }
        block_start = rank;
    }
    out.sort();
    Ok(out)
}
