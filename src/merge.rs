//! MergeSort: divide-and-conquer stable sort with auxiliary storage.
//!
//! The sorter never mutates its input; every call returns a freshly
//! allocated sorted vector. Complexity is O(n log n) time and O(n)
//! auxiliary space, with no worst-case degradation.

/// Sort a slice of integers, returning a new sorted vector.
pub fn merge_sort(values: &[i64]) -> Vec<i64> {
    merge_sort_by_key(values, |v| *v)
}

/// Generic mergesort over any element type with an orderable key.
///
/// Elements with equal keys keep their relative input order: the merge
/// step takes from the left half on ties.
pub fn merge_sort_by_key<T, K, F>(values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if values.len() <= 1 {
        return values.to_vec();
    }
    // Left half gets the smaller-or-equal share.
    let mid = values.len() / 2;
    let left = merge_sort_by_key(&values[..mid], key);
    let right = merge_sort_by_key(&values[mid..], key);
    merge(&left, &right, key)
}

/// Merge two sorted halves into a single sorted vector.
fn merge<T, K, F>(left: &[T], right: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // `<=` is the stability tie-break: equal keys come from the left.
        if key(&left[i]) <= key(&right[j]) {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of these is non-empty.
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(merge_sort(&[]), Vec::<i64>::new());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn test_basic_sort() {
        assert_eq!(merge_sort(&[5, 3, 8, 3, 1]), vec![1, 3, 3, 5, 8]);
    }

    #[test]
    fn test_already_sorted() {
        let input = vec![1, 2, 3, 4, 5];
        assert_eq!(merge_sort(&input), input);
    }

    #[test]
    fn test_reverse_sorted() {
        let input: Vec<i64> = (0..1000).rev().collect();
        let expected: Vec<i64> = (0..1000).collect();
        assert_eq!(merge_sort(&input), expected);
    }

    #[test]
    fn test_all_equal() {
        let input = vec![7; 50];
        assert_eq!(merge_sort(&input), input);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(merge_sort(&[-3, 10, -50, 0, 2]), vec![-50, -3, 0, 2, 10]);
    }

    #[test]
    fn test_input_unmodified() {
        let input = vec![3, 1, 2];
        let sorted = merge_sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_stability_with_tagged_duplicates() {
        // Equal values must keep their original relative order, which is
        // only observable when elements carry extra data.
        let input: Vec<(i64, usize)> =
            vec![(3, 0), (1, 1), (3, 2), (2, 3), (1, 4), (3, 5)];
        let sorted = merge_sort_by_key(&input, |&(value, _)| value);
        assert_eq!(
            sorted,
            vec![(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)]
        );
    }

    #[test]
    fn test_matches_std_sort() {
        let mut seed: i64 = 987_654_321;
        let input: Vec<i64> = (0..2000)
            .map(|_| {
                seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                seed % 10_000
            })
            .collect();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(merge_sort(&input), expected);
    }
}
