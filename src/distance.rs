//! Levenshtein edit distance.

/// Minimum number of single-symbol insertions, deletions and substitutions
/// transforming `a` into `b`. O(|a|·|b|) time, one DP row of the shorter
/// sequence in memory.
pub fn levenshtein<T: Eq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, x) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let substitute = diagonal + (x != y) as usize;
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    *row.last().unwrap()
}
