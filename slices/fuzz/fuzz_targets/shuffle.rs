#![no_main]

use arbitrary::Arbitrary;
use commonware_slices::{shuffle_with, try_shuffle};
use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    seed: u64,
    items: Vec<u16>,
}

fn fuzz(input: FuzzInput) {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let shuffled = shuffle_with(&mut rng, Some(input.items.as_slice())).unwrap();

    let mut expected = input.items.clone();
    let mut actual = shuffled;
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);

    // The infallible and fallible variants agree for the same seed
    let mut a = StdRng::seed_from_u64(input.seed);
    let mut b = StdRng::seed_from_u64(input.seed);
    assert_eq!(
        shuffle_with(&mut a, Some(input.items.as_slice())),
        try_shuffle(&mut b, Some(input.items.as_slice())).unwrap()
    );
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
