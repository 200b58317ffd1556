//! Transform, search, combine, and shuffle ordered sequences.
//!
//! # Overview
//!
//! Every operation is a free function over a borrowed sequence that never mutates its input and
//! returns a freshly allocated result. Sequences are passed as `Option<&[T]>` and returned as
//! `Option<Vec<T>>` so that three states stay distinguishable:
//!
//! - absent (`None`): no sequence was supplied,
//! - empty (`Some` with zero items): a sequence was supplied or produced but holds nothing,
//! - populated (`Some` with at least one item).
//!
//! An absent input yields an absent output. The exceptions are documented on each function
//! (for example, [reduce] falls back to its initial value and [unique] maps an empty input to
//! `None`).
//!
//! Trait bounds are applied per operation: transforms accept any `T`, equality searches require
//! `PartialEq`, and set algebra requires `Eq + Hash + Clone`.
//!
//! # Example
//!
//! ```
//! use commonware_slices::{chunk, filter, intersect, map};
//!
//! let items = vec![1, 2, 3, 4, 5];
//!
//! let doubled = map(Some(items.as_slice()), |item, _| item * 2);
//! assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10]));
//!
//! let evens = filter(Some(items.as_slice()), |item, _| item % 2 == 0);
//! assert_eq!(evens, Some(vec![2, 4]));
//!
//! let chunks = chunk(Some(items.as_slice()), 2);
//! assert_eq!(chunks, Some(vec![vec![1, 2], vec![3, 4], vec![5]]));
//!
//! let sequences: [&[i32]; 3] = [&[1, 2, 3, 4], &[3, 4, 5, 6], &[3, 4, 7, 8]];
//! let common = intersect(&sequences);
//! assert_eq!(common.as_deref(), Some(&[3, 4][..]));
//! ```
//!
//! # Randomness
//!
//! [shuffle()] draws from the operating system's CSPRNG. Use [shuffle_with] to inject any
//! [rand::CryptoRng] provider, or [try_shuffle] to observe entropy failures instead of falling
//! back to the original order.

#![doc(
    html_logo_url = "https://commonware.xyz/imgs/rustdoc_logo.svg",
    html_favicon_url = "https://commonware.xyz/favicon.ico"
)]

use thiserror::Error;

pub mod pair;
pub use pair::{zip, zip_with_index};
pub mod position;
pub use position::{chunk, contains, flatten, index_of, last_index_of, reverse, skip, take};
pub mod search;
pub use search::{find_first, find_last, group_by, partition};
pub mod set;
pub use set::{difference, intersect, union, unique};
pub mod shuffle;
pub use shuffle::{shuffle, shuffle_with, try_shuffle};
pub mod transform;
pub use transform::{filter, for_each, map, map_reduce, pluck, reduce};

/// Errors that can occur when reordering a sequence.
#[derive(Error, Debug)]
pub enum Error {
    #[error("entropy source failed: {0}")]
    Entropy(#[source] rand::Error),
}
