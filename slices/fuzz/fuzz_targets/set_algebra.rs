#![no_main]

use arbitrary::Arbitrary;
use commonware_slices::{difference, intersect, union, unique};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

const MAX_SEQUENCES: usize = 8;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    sequences: Vec<Vec<u8>>,
}

fn fuzz(input: FuzzInput) {
    let sequences: Vec<&[u8]> = input
        .sequences
        .iter()
        .take(MAX_SEQUENCES)
        .map(Vec::as_slice)
        .collect();
    let sets: Vec<HashSet<u8>> = sequences
        .iter()
        .map(|sequence| sequence.iter().copied().collect())
        .collect();

    // Unique
    for (sequence, set) in sequences.iter().zip(sets.iter()) {
        match unique(Some(*sequence)) {
            None => assert!(sequence.is_empty()),
            Some(result) => {
                assert_eq!(result.len(), set.len());
                assert_eq!(unique(Some(result.as_slice())), Some(result.clone()));
            }
        }
    }

    // Union
    match union(&sequences) {
        None => assert!(sequences.is_empty()),
        Some(result) => {
            let all: HashSet<u8> = sets.iter().flatten().copied().collect();
            assert_eq!(result.len(), all.len());
            assert!(result.iter().all(|item| all.contains(item)));
        }
    }

    // Intersect
    match intersect(&sequences) {
        None => assert!(sequences.is_empty()),
        Some(result) if sequences.len() == 1 => assert_eq!(&*result, sequences[0]),
        Some(result) => {
            let mut seen = HashSet::new();
            for item in result.iter() {
                assert!(seen.insert(*item));
                assert!(sets.iter().all(|set| set.contains(item)));
            }
            let common = sets[0]
                .iter()
                .filter(|item| sets[1..].iter().all(|set| set.contains(*item)))
                .count();
            assert_eq!(result.len(), common);
        }
    }

    // Difference
    if let Some((first, others)) = sequences.split_first() {
        let result = difference(Some(*first), others).unwrap();
        assert!(result
            .iter()
            .all(|item| others.iter().all(|other| !other.contains(item))));
        let kept = first
            .iter()
            .filter(|item| others.iter().all(|other| !other.contains(item)))
            .count();
        assert_eq!(result.len(), kept);
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
