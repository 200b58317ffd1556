//! Predicate-driven search and partitioning.

use std::{collections::HashMap, hash::Hash};

/// Returns the first item (scanning from the front) for which `predicate` holds.
pub fn find_first<'a, T>(
    items: Option<&'a [T]>,
    mut predicate: impl FnMut(&T, usize) -> bool,
) -> Option<&'a T> {
    items?
        .iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
}

/// Returns the last item (scanning from the back) for which `predicate` holds.
pub fn find_last<'a, T>(
    items: Option<&'a [T]>,
    mut predicate: impl FnMut(&T, usize) -> bool,
) -> Option<&'a T> {
    items?
        .iter()
        .enumerate()
        .rev()
        .find(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
}

/// Split the items into `(matched, unmatched)` according to `predicate`.
///
/// Both sides preserve source order. An absent input yields `(None, None)`; a present input
/// always yields two present sides, even when one of them is empty.
pub fn partition<T: Clone>(
    items: Option<&[T]>,
    mut predicate: impl FnMut(&T, usize) -> bool,
) -> (Option<Vec<T>>, Option<Vec<T>>) {
    let Some(items) = items else {
        return (None, None);
    };
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index) {
            matched.push(item.clone());
        } else {
            unmatched.push(item.clone());
        }
    }
    (Some(matched), Some(unmatched))
}

/// Group items by the key returned from `key`.
///
/// Items within a group keep their source order. An empty input yields an empty map.
pub fn group_by<T: Clone, K: Eq + Hash>(
    items: Option<&[T]>,
    mut key: impl FnMut(&T) -> K,
) -> Option<HashMap<K, Vec<T>>> {
    let items = items?;
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    Some(groups)
}
