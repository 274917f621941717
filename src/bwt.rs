//! Burrows-Wheeler transform and its inverse over byte sequences.
//!
//! The forward direction reads the preceding byte off each suffix-array
//! rank; the index convention is the one libdivsufsort uses: the output
//! starts with the last input byte, the rank holding suffix 0 contributes
//! no byte, and the primary index is that rank plus one. The inverse
//! rebuilds the input by stable-counting the transformed bytes into first
//! column order and following the last-to-first chain for n steps.

use crate::error::Result;
use crate::suffix_array::SuffixArray;

/// Forward transform. Returns `(primary_index, transformed)`; a suffix
/// array may be supplied to skip the sort.
pub fn bw_transform(input: &[u8], sa: Option<&SuffixArray<u8>>) -> Result<(usize, Vec<u8>)> {
    let n = input.len();
    if n == 0 {
        return Ok((0, vec![]));
    }
    let owned;
    let sa = match sa {
        Some(sa) => sa,
        None => {
            owned = SuffixArray::new(input)?;
            &owned
        }
    };
    debug_assert_eq!(sa.len(), n);
    let mut out = Vec::with_capacity(n);
    out.push(input[n - 1]);
    let mut primary = 0;
    for rank in 0..n {
        let pos = sa.get(rank);
        if pos > 0 {
            out.push(input[pos - 1]);
        } else {
            primary = rank + 1;
        }
    }
    Ok((primary, out))
}

/// Inverse transform: rebuild the original byte sequence.
pub fn inverse_bw_transform(primary: usize, bwt: &[u8]) -> Vec<u8> {
    let n = bwt.len();
    if n == 0 {
        return vec![];
    }
    // Stable rank of each transformed byte in the sorted first column.
    let mut counts = [0usize; 256];
    for &b in bwt {
        counts[b as usize] += 1;
    }
    let mut starts = [0usize; 256];
    let mut acc = 0;
    for (start, count) in starts.iter_mut().zip(counts.iter()) {
        *start = acc;
        acc += count;
    }
    let mut first_to_input = vec![0usize; n];
    for (i, &b) in bwt.iter().enumerate() {
        first_to_input[starts[b as usize]] = i;
        starts[b as usize] += 1;
    }
    // Last-to-first traversal; rows at or past the primary index are
    // shifted by one because the primary row carries no transformed byte.
    // The chain ends at input index 0, which maps to no predecessor row,
    // so the step is only taken while output remains to be produced.
    let mut out = Vec::with_capacity(n);
    let mut row = primary - 1;
    for step in 1..=n {
        let i = first_to_input[row];
        out.push(bwt[i]);
        if step < n {
            row = i + (i >= primary) as usize - 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoroshiro128PlusPlus;

    #[test]
    fn banana() {
        let (primary, out) = bw_transform(b"banana", None).unwrap();
        assert_eq!(out, b"annbaa");
        assert_eq!(primary, 4);
        assert_eq!(inverse_bw_transform(primary, &out), b"banana");
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(bw_transform(b"", None).unwrap(), (0, vec![]));
        assert_eq!(inverse_bw_transform(0, &[]), Vec::<u8>::new());
        let (primary, out) = bw_transform(b"x", None).unwrap();
        assert_eq!(out, b"x");
        assert_eq!(inverse_bw_transform(primary, &out), b"x");
    }

    #[test]
    fn inverse_traversal_ends_at_the_first_input_byte() {
        // The last-to-first chain always terminates on transformed index 0;
        // the shortest nonempty inputs pin that boundary step in both sort
        // orders.
        let inputs: [&[u8]; 3] = [b"ab", b"ba", b"aa"];
        for input in inputs {
            let (primary, out) = bw_transform(input, None).unwrap();
            assert_eq!(inverse_bw_transform(primary, &out), input, "{:?}", input);
        }
    }

    #[test]
    fn roundtrip_known_strings() {
        let inputs: [&[u8]; 5] = [
            b"abracadabra",
            b"mississippi",
            b"aaaaa",
            b"abcde",
            b"the quick brown fox jumps over the lazy dog",
        ];
        for input in inputs {
            let (primary, out) = bw_transform(input, None).unwrap();
            assert_eq!(inverse_bw_transform(primary, &out), input);
        }
    }

    #[test]
    fn roundtrip_random() {
        let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(88321);
        for _ in 0..30 {
            let len = rng.gen_range(1..300);
            let input: Vec<u8> = (0..len).map(|_| rng.gen_range(0..8)).collect();
            let (primary, out) = bw_transform(&input, None).unwrap();
            assert_eq!(inverse_bw_transform(primary, &out), input, "{:?}", input);
        }
    }

    #[test]
    fn precomputed_suffix_array_matches() {
        let input = b"abracadabra";
        let sa = SuffixArray::new(input.as_ref()).unwrap();
        let with_sa = bw_transform(input.as_ref(), Some(&sa)).unwrap();
        let without = bw_transform(input.as_ref(), None).unwrap();
        assert_eq!(with_sa, without);
    }
}
