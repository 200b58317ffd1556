//! Element-wise transforms and folds.

/// Apply `f` to every item (and its index), returning the results in order.
///
/// The output always has the same length as the input. An absent input yields `None`.
pub fn map<T, R>(items: Option<&[T]>, mut f: impl FnMut(&T, usize) -> R) -> Option<Vec<R>> {
    let items = items?;
    Some(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect(),
    )
}

/// Return the items for which `predicate` holds, preserving their order.
///
/// An absent input yields `None`. A present input always yields `Some`, even if no item matches.
pub fn filter<T: Clone>(
    items: Option<&[T]>,
    mut predicate: impl FnMut(&T, usize) -> bool,
) -> Option<Vec<T>> {
    let items = items?;
    Some(
        items
            .iter()
            .enumerate()
            .filter(|(index, item)| predicate(item, *index))
            .map(|(_, item)| item.clone())
            .collect(),
    )
}

/// Project every item through `getter` (e.g. to extract a single field).
///
/// Behaves like [map] but the getter does not receive the index.
pub fn pluck<T, R>(items: Option<&[T]>, mut getter: impl FnMut(&T) -> R) -> Option<Vec<R>> {
    let items = items?;
    Some(items.iter().map(&mut getter).collect())
}

/// Invoke `action` on every item in index order.
pub fn for_each<T>(items: Option<&[T]>, mut action: impl FnMut(&T, usize)) {
    let Some(items) = items else {
        return;
    };
    for (index, item) in items.iter().enumerate() {
        action(item, index);
    }
}

/// Left fold over the items, starting from `initial`.
///
/// Returns `initial` untouched if the input is absent or empty.
pub fn reduce<T, A>(
    items: Option<&[T]>,
    initial: A,
    mut reducer: impl FnMut(A, &T, usize) -> A,
) -> A {
    let Some(items) = items else {
        return initial;
    };
    items
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, item)| reducer(acc, item, index))
}

/// Map every item and fold the mapped values in a single pass.
///
/// Equivalent to calling [reduce] on the output of [map], without allocating the intermediate
/// sequence.
pub fn map_reduce<T, M, A>(
    items: Option<&[T]>,
    mut mapper: impl FnMut(&T, usize) -> M,
    initial: A,
    mut reducer: impl FnMut(A, M, usize) -> A,
) -> A {
    let Some(items) = items else {
        return initial;
    };
    items.iter().enumerate().fold(initial, |acc, (index, item)| {
        let mapped = mapper(item, index);
        reducer(acc, mapped, index)
    })
}
