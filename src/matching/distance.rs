/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Edit distance between two token sequences.
///
/// Minimum number of single-token insertions, deletions and substitutions
/// turning `a` into `b`. Tokens are compared with `==`, so URLs must match
/// exactly (case-sensitive, no normalization).
///
/// The table has `|b| + 1` rows and `|a| + 1` columns; the answer is the
/// bottom-right cell. Only the previous and current rows are kept, so memory
/// is linear in `|a|`.
///
/// # Examples
///
/// ```
/// use tabfold::matching::distance::edit_distance;
///
/// assert_eq!(edit_distance(&["a", "b"], &["a", "c"]), 1);
/// assert_eq!(edit_distance::<&str>(&[], &["a", "b"]), 2);
/// ```
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, b_tok) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, a_tok) in a.iter().enumerate() {
            curr[j + 1] = if b_tok == a_tok {
                prev[j]
            } else {
                1 + prev[j] // substitution
                    .min(curr[j]) // insertion
                    .min(prev[j + 1]) // deletion
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Similarity in `[0.0, 1.0]` derived from [`edit_distance`].
///
/// `1 - distance / max(|a|, |b|)`. Two empty sequences are identical (1.0).
#[must_use]
pub fn similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - count_to_f64(edit_distance(a, b)) / count_to_f64(longest)
}
