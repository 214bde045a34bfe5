//! Question selection.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::{DeckError, Result};

/// Terms to ask, drawn one at a time.
///
/// Each call to `next` makes one independent draw, so nothing is allocated
/// up front no matter how large `count` is.
pub struct Draws<'r, R: ?Sized> {
    pool: Vec<String>,
    remaining: usize,
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> Iterator for Draws<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.pool.choose(&mut *self.rng).cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for Draws<'_, R> {}

/// Pick `count` terms to ask, sampled uniformly with replacement.
///
/// The term list is shuffled once, then each draw picks independently from
/// it, so a term may come up more than once and `count` may exceed the
/// number of cards.
///
/// # Errors
///
/// Returns `DeckError::EmptyDeck` when `count > 0` and `terms` is empty.
/// A `count` of zero never samples and always succeeds.
pub fn select_sequence<'r, R>(
    terms: &[String],
    count: usize,
    rng: &'r mut R,
) -> Result<Draws<'r, R>>
where
    R: Rng + ?Sized,
{
    if count > 0 && terms.is_empty() {
        return Err(DeckError::EmptyDeck);
    }

    let mut pool = terms.to_vec();
    pool.shuffle(rng);

    Ok(Draws {
        pool,
        remaining: count,
        rng,
    })
}
