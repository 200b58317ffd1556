//! Pair items positionally.

/// Pair up items at the same index of `a` and `b`.
///
/// The result has the length of the shorter input. If either input is absent, the result is
/// absent.
pub fn zip<A: Clone, B: Clone>(a: Option<&[A]>, b: Option<&[B]>) -> Option<Vec<(A, B)>> {
    let (a, b) = (a?, b?);
    Some(
        a.iter()
            .zip(b.iter())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect(),
    )
}

/// Pair each item with its index.
pub fn zip_with_index<T: Clone>(items: Option<&[T]>) -> Option<Vec<(T, usize)>> {
    let items = items?;
    Some(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.clone(), index))
            .collect(),
    )
}
