//! Set algebra over sequences with deterministic, first-occurrence ordering.
//!
//! Values are compared with [Eq] and tracked with [Hash]. Unlike a [std::collections::HashSet],
//! every result preserves the order in which qualifying values were first encountered.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// Remove duplicate items, keeping the first occurrence of each value.
///
/// An empty input yields `None` (not an empty sequence) because there is nothing to
/// de-duplicate. This differs from the rest of the crate, where an empty input produces an
/// empty output, and callers rely on it.
pub fn unique<T: Eq + Hash + Clone>(items: Option<&[T]>) -> Option<Vec<T>> {
    let items = items?;
    if items.is_empty() {
        return None;
    }
    let mut seen = HashSet::with_capacity(items.len());
    Some(
        items
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect(),
    )
}

/// Collect the distinct items of all `sequences`, ordered by first appearance (scanning the
/// sequences left to right, each from front to back).
///
/// Returns `None` if no sequences are provided.
pub fn union<T: Eq + Hash + Clone>(sequences: &[&[T]]) -> Option<Vec<T>> {
    if sequences.is_empty() {
        return None;
    }
    let mut seen = HashSet::new();
    Some(
        sequences
            .iter()
            .flat_map(|sequence| sequence.iter())
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect(),
    )
}

/// Collect the distinct items of the first sequence that appear in every other sequence,
/// ordered by first occurrence in the first sequence.
///
/// Returns `None` if no sequences are provided. If exactly one sequence is provided, it is
/// returned as-is (borrowed, duplicates included) rather than copied.
pub fn intersect<'a, T: Eq + Hash + Clone>(sequences: &[&'a [T]]) -> Option<Cow<'a, [T]>> {
    let (first, rest) = match sequences {
        [] => return None,
        [only] => return Some(Cow::Borrowed(*only)),
        [first, rest @ ..] => (*first, rest),
    };

    // Count the number of other sequences each value appears in (at least once)
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for sequence in rest {
        let mut seen = HashSet::with_capacity(sequence.len());
        for item in sequence.iter() {
            if seen.insert(item) {
                *counts.entry(item).or_default() += 1;
            }
        }
    }

    // Keep values from the first sequence that were seen everywhere
    let mut emitted = HashSet::new();
    let result: Vec<T> = first
        .iter()
        .filter(|item| counts.get(*item) == Some(&rest.len()) && emitted.insert(*item))
        .cloned()
        .collect();
    Some(Cow::Owned(result))
}

/// Return the items of `first` that do not appear in any of `others`.
///
/// Order and duplicates of `first` are preserved. If `others` is empty, the result is a copy of
/// `first`.
pub fn difference<T: Eq + Hash + Clone>(first: Option<&[T]>, others: &[&[T]]) -> Option<Vec<T>> {
    let first = first?;
    let exclude: HashSet<&T> = others.iter().flat_map(|other| other.iter()).collect();
    Some(
        first
            .iter()
            .filter(|item| !exclude.contains(*item))
            .cloned()
            .collect(),
    )
}
