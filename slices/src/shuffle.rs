//! Reorder a sequence with a cryptographically secure Fisher–Yates shuffle.
//!
//! # Drawing Indices
//!
//! At step `i` (from `len - 1` down to `1`), the shuffle requests the fewest random bytes able to
//! represent `i` (1 byte when `i <= 255`, 2 bytes when `i <= 65535`, otherwise 4 bytes),
//! interprets them as a big-endian unsigned integer, and reduces the result modulo `i + 1`.
//!
//! The modulo reduction is slightly biased whenever `i + 1` does not evenly divide the range of
//! the chosen width (e.g. `256 % 3 != 0`). This bias is accepted rather than paying for rejection
//! sampling. Because at most 4 bytes are drawn, positions at or beyond `2^32` are never selected
//! as swap targets.
//!
//! # Entropy Failures
//!
//! [shuffle] and [shuffle_with] never fail: if the entropy source cannot fill a request, the
//! shuffle stops and a copy of the input in its **original order** is returned (and a warning is
//! logged). Use [try_shuffle] to observe the failure instead.

use crate::Error;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::warn;

/// Return a shuffled copy of `items` using the operating system's CSPRNG.
///
/// Sequences with at most one item are copied without requesting any randomness. If the
/// entropy source fails, the copy is returned in its original order.
pub fn shuffle<T: Clone>(items: Option<&[T]>) -> Option<Vec<T>> {
    shuffle_with(&mut OsRng, items)
}

/// Return a shuffled copy of `items` using the provided entropy source.
///
/// If `rng` fails to supply bytes, shuffling stops immediately and a copy of `items` in its
/// original order is returned instead of an error.
pub fn shuffle_with<T: Clone, R: RngCore + CryptoRng>(
    rng: &mut R,
    items: Option<&[T]>,
) -> Option<Vec<T>> {
    let items = items?;
    match shuffled(rng, items) {
        Ok(result) => Some(result),
        Err(err) => {
            warn!(?err, len = items.len(), "entropy source failed, returning unshuffled copy");
            Some(items.to_vec())
        }
    }
}

/// Return a shuffled copy of `items`, surfacing any failure of the entropy source.
pub fn try_shuffle<T: Clone, R: RngCore + CryptoRng>(
    rng: &mut R,
    items: Option<&[T]>,
) -> Result<Option<Vec<T>>, Error> {
    items.map(|items| shuffled(rng, items)).transpose()
}

fn shuffled<T: Clone, R: RngCore>(rng: &mut R, items: &[T]) -> Result<Vec<T>, Error> {
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = random_index(rng, i)?;
        result.swap(i, j);
    }
    Ok(result)
}

/// Number of random bytes requested to draw an index in `[0, i]`.
fn width(i: usize) -> usize {
    if i <= u8::MAX as usize {
        1
    } else if i <= u16::MAX as usize {
        2
    } else {
        4
    }
}

/// Draw an index in `[0, i]` from `rng`.
fn random_index<R: RngCore>(rng: &mut R, i: usize) -> Result<usize, Error> {
    let mut buf = [0u8; 4];
    let bytes = &mut buf[..width(i)];
    rng.try_fill_bytes(bytes).map_err(Error::Entropy)?;
    Ok(modulo(bytes, i as u64 + 1) as usize)
}

/// Compute the modulo of bytes interpreted as a big-endian integer.
fn modulo(bytes: &[u8], n: u64) -> u64 {
    let mut result = 0;
    for &byte in bytes {
        result = (result << 8) | (byte as u64);
        result %= n;
    }
    result
}
