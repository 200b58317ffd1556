//! Index-based slicing, reshaping, and equality search.

use tracing::debug;

/// Return a copy of the first `n` items.
///
/// If `n` is `0` the result is empty; if `n` exceeds the length the whole sequence is copied.
pub fn take<T: Clone>(items: Option<&[T]>, n: usize) -> Option<Vec<T>> {
    let items = items?;
    let end = n.min(items.len());
    Some(items[..end].to_vec())
}

/// Return a copy of the items after the first `n`.
///
/// If `n` is `0` the whole sequence is copied; if `n` exceeds the length the result is empty.
pub fn skip<T: Clone>(items: Option<&[T]>, n: usize) -> Option<Vec<T>> {
    let items = items?;
    let start = n.min(items.len());
    Some(items[start..].to_vec())
}

/// Return a copy of the items in reverse order.
pub fn reverse<T: Clone>(items: Option<&[T]>) -> Option<Vec<T>> {
    let items = items?;
    Some(items.iter().rev().cloned().collect())
}

/// Split the items into consecutive groups of at most `size` items.
///
/// The last group may be shorter. A `size` of `0` has no valid chunking and yields `None`
/// regardless of the input.
pub fn chunk<T: Clone>(items: Option<&[T]>, size: usize) -> Option<Vec<Vec<T>>> {
    if size == 0 {
        debug!(size, "invalid chunk size");
        return None;
    }
    let items = items?;
    Some(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Concatenate a sequence of sequences into a single sequence.
pub fn flatten<T: Clone, S: AsRef<[T]>>(sequences: Option<&[S]>) -> Option<Vec<T>> {
    let sequences = sequences?;
    let total = sequences.iter().map(|s| s.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for sequence in sequences {
        result.extend_from_slice(sequence.as_ref());
    }
    Some(result)
}

/// Returns `true` if any item equals `value`.
pub fn contains<T: PartialEq>(items: Option<&[T]>, value: &T) -> bool {
    items.is_some_and(|items| items.contains(value))
}

/// Returns the index of the first item equal to `value`, if any.
pub fn index_of<T: PartialEq>(items: Option<&[T]>, value: &T) -> Option<usize> {
    items?.iter().position(|item| item == value)
}

/// Returns the index of the last item equal to `value`, if any.
pub fn last_index_of<T: PartialEq>(items: Option<&[T]>, value: &T) -> Option<usize> {
    items?.iter().rposition(|item| item == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take() {
        let items = [1, 2, 3];

        // Test case 0: absent
        assert_eq!(take(None::<&[i32]>, 2), None);

        // Test case 1: zero
        assert_eq!(take(Some(items.as_slice()), 0), Some(vec![]));

        // Test case 2: prefix
        assert_eq!(take(Some(items.as_slice()), 2), Some(vec![1, 2]));

        // Test case 3: beyond length clamps
        assert_eq!(take(Some(items.as_slice()), 5), Some(vec![1, 2, 3]));

        // Test case 4: empty input
        assert_eq!(take(Some(&[] as &[i32]), 5), Some(vec![]));
    }

    #[test]
    fn test_skip() {
        let items = [1, 2, 3];

        // Test case 0: absent
        assert_eq!(skip(None::<&[i32]>, 1), None);

        // Test case 1: zero copies everything
        assert_eq!(skip(Some(items.as_slice()), 0), Some(vec![1, 2, 3]));

        // Test case 2: suffix
        assert_eq!(skip(Some(items.as_slice()), 1), Some(vec![2, 3]));

        // Test case 3: exact length and beyond yield empty
        assert_eq!(skip(Some(items.as_slice()), 3), Some(vec![]));
        assert_eq!(skip(Some(items.as_slice()), 5), Some(vec![]));
    }

    #[test]
    fn test_reverse() {
        // Test case 0: absent
        assert_eq!(reverse(None::<&[char]>), None);

        // Test case 1: empty stays present
        assert_eq!(reverse(Some(&[] as &[char])), Some(vec![]));

        // Test case 2: populated
        let items = ['a', 'b', 'c'];
        assert_eq!(reverse(Some(items.as_slice())), Some(vec!['c', 'b', 'a']));
        assert_eq!(items, ['a', 'b', 'c']);
    }

    #[test]
    fn test_chunk() {
        let items = [1, 2, 3, 4, 5];

        // Test case 0: uneven split
        assert_eq!(
            chunk(Some(items.as_slice()), 2),
            Some(vec![vec![1, 2], vec![3, 4], vec![5]])
        );

        // Test case 1: even split
        assert_eq!(
            chunk(Some(&items[..4]), 2),
            Some(vec![vec![1, 2], vec![3, 4]])
        );

        // Test case 2: size larger than input
        assert_eq!(chunk(Some(items.as_slice()), 10), Some(vec![items.to_vec()]));

        // Test case 3: empty input yields zero groups
        assert_eq!(chunk(Some(&[] as &[i32]), 3), Some(vec![]));

        // Test case 4: absent
        assert_eq!(chunk(None::<&[i32]>, 3), None);

        // Test case 5: invalid size wins over everything
        assert_eq!(chunk(Some(items.as_slice()), 0), None);
        assert_eq!(chunk(Some(&[] as &[i32]), 0), None);
        assert_eq!(chunk(None::<&[i32]>, 0), None);
    }

    #[test]
    fn test_flatten() {
        // Test case 0: absent outer
        assert_eq!(flatten::<u8, _>(None::<&[Vec<u8>]>), None);

        // Test case 1: empty outer
        assert_eq!(flatten::<u8, _>(Some(&[] as &[Vec<u8>])), Some(vec![]));

        // Test case 2: empty inner sequences are skipped
        let nested = vec![vec![1], vec![], vec![2, 3], vec![]];
        assert_eq!(flatten::<u8, _>(Some(nested.as_slice())), Some(vec![1, 2, 3]));

        // Test case 3: all inner sequences empty
        let nested: Vec<Vec<u8>> = vec![vec![], vec![]];
        assert_eq!(flatten::<u8, _>(Some(nested.as_slice())), Some(vec![]));

        // Test case 4: borrowed inner sequences
        let nested: [&[u8]; 2] = [&[1, 2], &[3]];
        let flat = flatten::<u8, _>(Some(nested.as_slice())).unwrap();
        assert_eq!(flat, vec![1, 2, 3]);
        assert_eq!(flat.capacity(), 3);
    }

    #[test]
    fn test_chunk_flatten() {
        let items: Vec<u32> = (0..17).collect();
        let chunks = chunk(Some(items.as_slice()), 4).unwrap();
        assert_eq!(chunks.len(), 5);
        assert_eq!(flatten::<u32, _>(Some(chunks.as_slice())), Some(items));
    }

    #[test]
    fn test_contains() {
        let items = ["x", "y", "z"];

        // Test case 0: absent and empty
        assert!(!contains(None::<&[&str]>, &"x"));
        assert!(!contains(Some(&[] as &[&str]), &"x"));

        // Test case 1: present and missing
        assert!(contains(Some(items.as_slice()), &"y"));
        assert!(!contains(Some(items.as_slice()), &"w"));
    }

    #[test]
    fn test_index_of() {
        let items = [5, 1, 5, 2, 5];

        // Test case 0: absent and empty
        assert_eq!(index_of(None::<&[i32]>, &5), None);
        assert_eq!(index_of(Some(&[] as &[i32]), &5), None);
        assert_eq!(last_index_of(None::<&[i32]>, &5), None);
        assert_eq!(last_index_of(Some(&[] as &[i32]), &5), None);

        // Test case 1: first and last of repeated value
        assert_eq!(index_of(Some(items.as_slice()), &5), Some(0));
        assert_eq!(last_index_of(Some(items.as_slice()), &5), Some(4));

        // Test case 2: single occurrence
        assert_eq!(index_of(Some(items.as_slice()), &2), Some(3));
        assert_eq!(last_index_of(Some(items.as_slice()), &2), Some(3));

        // Test case 3: missing
        assert_eq!(index_of(Some(items.as_slice()), &9), None);
        assert_eq!(last_index_of(Some(items.as_slice()), &9), None);
    }
}
