//! Lexicographically minimal rotation by Booth's algorithm.

/// Starting offset of the lexicographically smallest rotation of `seq`,
/// in O(n) with a failure-function scan over a virtual doubled buffer.
/// Returns the first such offset when the sequence is periodic.
pub fn min_rotation<T: Ord>(seq: &[T]) -> usize {
    let n = seq.len();
    if n == 0 {
        return 0;
    }
    let at = |i: usize| &seq[i % n];
    let mut failure: Vec<isize> = vec![-1; 2 * n];
    let mut k = 0;
    for j in 1..2 * n {
        let sj = at(j);
        let mut i = failure[j - k - 1];
        while i != -1 && sj != at(k + i as usize + 1) {
            if sj < at(k + i as usize + 1) {
                k = j - i as usize - 1;
            }
            i = failure[i as usize];
        }
        if i == -1 && sj != at(k) {
            if sj < at(k) {
                k = j;
            }
            failure[j - k] = -1;
        } else {
            failure[j - k] = i + 1;
        }
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoroshiro128PlusPlus;

    fn brute(seq: &[u8]) -> usize {
        (0..seq.len())
            .min_by_key(|&i| {
                let mut rotation = seq[i..].to_vec();
                rotation.extend_from_slice(&seq[..i]);
                rotation
            })
            .unwrap_or(0)
    }

    #[test]
    fn small_cases() {
        assert_eq!(min_rotation::<u8>(&[]), 0);
        assert_eq!(min_rotation(b"a"), 0);
        assert_eq!(min_rotation(b"ba"), 1);
        assert_eq!(min_rotation(b"cba"), 2);
        assert_eq!(min_rotation(b"baca"), 3);
        assert_eq!(min_rotation(b"bbbb"), 0);
    }

    #[test]
    fn agrees_with_brute_force() {
        let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(77001);
        for _ in 0..300 {
            let len = rng.gen_range(1..=20);
            let seq: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..b'd')).collect();
            assert_eq!(min_rotation(&seq), brute(&seq), "{:?}", seq);
        }
    }

    #[test]
    fn periodic_sequences_report_first_offset() {
        assert_eq!(min_rotation(b"abab"), 0);
        assert_eq!(min_rotation(b"baba"), 1);
    }
}
