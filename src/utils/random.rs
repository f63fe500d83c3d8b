//! Random numbers and random element selection
//!
//! The plain variants draw from `rand::rng()`, a thread-local generator seeded
//! from system entropy. The `_with` variants take any [`Rng`] so callers can
//! pass a seeded generator for reproducible picks.

use rand::Rng;

/// Generate `count` independent uniform values in `[0, 1)`.
pub fn gen_random_numbers(count: usize) -> Vec<f64> {
    gen_random_numbers_with(count, &mut rand::rng())
}

/// Generate `count` independent uniform values in `[0, 1)` from `rng`.
pub fn gen_random_numbers_with<R: Rng>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.random::<f64>()).collect()
}

/// Pick a uniformly random element, or `None` if `items` is empty.
pub fn random_element<T>(items: &[T]) -> Option<&T> {
    random_element_with(items, &mut rand::rng())
}

/// Pick a uniformly random element using `rng`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use utilbelt::utils::random::random_element_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(random_element_with(&[42], &mut rng), Some(&42));
/// assert_eq!(random_element_with::<i32, _>(&[], &mut rng), None);
/// ```
pub fn random_element_with<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    let index = pick_index(items.len(), rng)?;
    items.get(index)
}

/// Pick a uniformly random element from an ordered, non-indexable collection.
///
/// The index is drawn exactly as in [`random_element_with`] and the element
/// is reached by walking the iterator, so for the same generator state and
/// the same iteration order both functions select the same element.
pub fn random_element_from_iter<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: Rng,
{
    let mut iter = items.into_iter();
    let index = pick_index(iter.len(), rng)?;
    iter.nth(index)
}

fn pick_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}
