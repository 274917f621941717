//! LCP array construction and constant-time range LCP queries.
//!
//! `kasai` derives the LCP array from a sequence and its suffix array in
//! O(n). `RangeLcpIndex` layers a sparse table over the LCP array so the
//! longest common prefix of the suffixes at any two ranks is a range
//! minimum, answered in O(1) after an O(n log n) build.

/// LCP array by Kasai's algorithm: `lcp[r]` is the common prefix length of
/// the suffixes at ranks `r-1` and `r`, with `lcp[0] = 0`.
///
/// The running length `h` drops by at most one per text position, so the
/// total number of symbol comparisons is O(n).
pub fn kasai<T: Ord>(input: &[T], sa: &[usize]) -> Vec<usize> {
    let n = input.len();
    debug_assert_eq!(n, sa.len());
    let mut isa = vec![0; n];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[pos] = rank;
    }
    let mut lcp = vec![0; n];
    let mut h = 0;
    for i in 0..n {
        if isa[i] == 0 {
            h = 0;
            continue;
        }
        let j = sa[isa[i] - 1];
        while i + h < n && j + h < n && input[i + h] == input[j + h] {
            h += 1;
        }
        lcp[isa[i]] = h;
        h = h.max(1) - 1;
    }
    lcp
}

/// Sparse table answering range-minimum queries over a fixed array.
/// O(n log n) build, O(1) query via two overlapping power-of-two blocks.
#[derive(Debug, Clone)]
pub struct SparseTable<T: Ord + Copy> {
    data: Vec<T>,
    // table[i][p] holds the index of the minimum over data[i..i + 2^p].
    table: Vec<Vec<usize>>,
}

impl<T: Ord + Copy> SparseTable<T> {
    pub fn new(input: &[T]) -> Self {
        if input.is_empty() {
            return Self {
                data: vec![],
                table: vec![],
            };
        }
        let len = input.len() as u64;
        let msb = (64 - len.leading_zeros()) as usize - 1;
        let mut table: Vec<_> = (0..input.len()).map(|i| vec![i]).collect();
        for p in 0..msb {
            for i in 0..input.len() {
                let former = table[i][p];
                let latter = (i + (1 << p)).min(input.len() - 1);
                let latter = table[latter][p];
                if input[former] <= input[latter] {
                    table[i].push(former);
                } else {
                    table[i].push(latter);
                }
            }
        }
        Self {
            data: input.to_vec(),
            table,
        }
    }

    /// Index of a minimum over `data[start..end)`. Requires `start < end`.
    pub fn min_index(&self, start: usize, end: usize) -> usize {
        assert!(start < end);
        let diff = (64 - ((end - start) as u64).leading_zeros()) as usize - 1;
        let former = self.table[start][diff];
        let latter = self.table[end - (1 << diff)][diff];
        if self.data[former] <= self.data[latter] {
            former
        } else {
            latter
        }
    }

    /// Minimum value over `data[start..end)`.
    pub fn min_value(&self, start: usize, end: usize) -> T {
        self.data[self.min_index(start, end)]
    }
}

/// Constant-time LCP between the suffixes at any two ranks.
///
/// The LCP of the suffixes at ranks `i <= j` is `min(lcp[i+1..=j])`; a rank
/// paired with itself answers the full remaining suffix length.
#[derive(Debug, Clone)]
pub struct RangeLcpIndex {
    lcp: Vec<usize>,
    table: SparseTable<usize>,
    suffix_len: Vec<usize>,
}

impl RangeLcpIndex {
    /// Build from an LCP array and the matching suffix array of a length-n
    /// sequence.
    pub fn new(lcp: Vec<usize>, sa: &[usize], n: usize) -> Self {
        debug_assert_eq!(lcp.len(), sa.len());
        let table = SparseTable::new(&lcp);
        let suffix_len = sa.iter().map(|&p| n - p).collect();
        Self {
            lcp,
            table,
            suffix_len,
        }
    }

    /// LCP between the suffixes at ranks `i` and `j`.
    pub fn query(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        if lo == hi {
            return self.suffix_len[lo];
        }
        self.lcp[self.table.min_index(lo + 1, hi + 1)]
    }

    /// Answer a batch of rank pairs, results in input order.
    pub fn query_batch(&self, pairs: &[(usize, usize)]) -> Vec<usize> {
        pairs.iter().map(|&(i, j)| self.query(i, j)).collect()
    }

    pub fn lcp_array(&self) -> &[usize] {
        &self.lcp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix_array::SuffixArray;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoroshiro128PlusPlus;

    fn brute_lcp<T: Eq>(a: &[T], b: &[T]) -> usize {
        a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
    }

    #[test]
    fn kasai_small() {
        let input = b"banana";
        let sa = SuffixArray::new(input.as_ref()).unwrap().positions();
        // Ranks: a, ana, anana, banana, na, nana.
        assert_eq!(kasai(input.as_ref(), &sa), vec![0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn kasai_agrees_with_brute_force() {
        let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(348203);
        let alphabet = b"ACGT";
        for _ in 0..20 {
            let len = rng.gen_range(0..150);
            let seq: Vec<u8> = (0..len)
                .filter_map(|_| alphabet.choose(&mut rng))
                .copied()
                .collect();
            let sa = SuffixArray::new(&seq).unwrap().positions();
            let lcp = kasai(&seq, &sa);
            for r in 1..sa.len() {
                let expected = brute_lcp(&seq[sa[r - 1]..], &seq[sa[r]..]);
                assert_eq!(lcp[r], expected);
                assert!(lcp[r] <= seq.len() - sa[r]);
            }
        }
    }

    #[test]
    fn kasai_empty_and_single() {
        let empty: &[u8] = &[];
        assert_eq!(kasai(empty, &[]), Vec::<usize>::new());
        assert_eq!(kasai(b"z".as_ref(), &[0]), vec![0]);
    }

    #[test]
    fn sparse_table_agrees_with_scan() {
        let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(4417);
        let input: Vec<usize> = (0..150).map(|_| rng.gen_range(0..1000)).collect();
        let table = SparseTable::new(&input);
        for _ in 0..200 {
            let start = rng.gen_range(0..input.len() - 1);
            let end = rng.gen_range(start + 1..=input.len());
            let min = *input[start..end].iter().min().unwrap();
            assert_eq!(table.min_value(start, end), min);
            let idx = table.min_index(start, end);
            assert!(start <= idx && idx < end);
            assert_eq!(input[idx], min);
        }
    }

    #[test]
    fn range_lcp_matches_brute_force() {
        let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(77120);
        let alphabet = b"ab";
        let seq: Vec<u8> = (0..120)
            .filter_map(|_| alphabet.choose(&mut rng))
            .copied()
            .collect();
        let sa = SuffixArray::new(&seq).unwrap();
        let positions = sa.positions();
        let isa = sa.inverse();
        let lcp = kasai(&seq, &positions);
        let index = RangeLcpIndex::new(lcp, &positions, seq.len());
        for i in 0..seq.len() {
            for j in 0..seq.len() {
                let expected = if i == j {
                    seq.len() - i
                } else {
                    brute_lcp(&seq[i..], &seq[j..])
                };
                assert_eq!(index.query(isa[i], isa[j]), expected, "{},{}", i, j);
            }
        }
    }

    #[test]
    fn batch_queries_preserve_order() {
        let seq = b"abcdabcd";
        let sa = SuffixArray::new(seq.as_ref()).unwrap();
        let positions = sa.positions();
        let isa = sa.inverse();
        let lcp = kasai(seq.as_ref(), &positions);
        let index = RangeLcpIndex::new(lcp, &positions, seq.len());
        let pairs = vec![(isa[0], isa[4]), (isa[1], isa[5]), (isa[0], isa[1])];
        assert_eq!(index.query_batch(&pairs), vec![4, 3, 0]);
    }
}
