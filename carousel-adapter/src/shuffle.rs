use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;

/// Place categories sampled for the recommended carousel, in request order.
pub const RECOMMENDED_CATEGORIES: [&str; 4] = ["cafe", "bakery", "bar", "meal_takeaway"];
/// Records kept from the head of each category's results.
pub const RECOMMENDED_PER_CATEGORY: usize = 3;
/// Upper bound on the shuffled recommended list.
pub const RECOMMENDED_LIMIT: usize = 15;

/// Shuffles `items` in place with the injected generator.
///
/// The same generator state always yields the same permutation.
pub fn shuffle<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Builds the recommended list from per-category result groups.
///
/// Takes the first `per_category` records of every group (in group order), shuffles the
/// concatenation with `rng`, and keeps at most `limit` records.
pub fn pick_recommended<T, G, R>(
    groups: impl IntoIterator<Item = G>,
    per_category: usize,
    limit: usize,
    rng: &mut R,
) -> Vec<T>
where
    T: Clone,
    G: AsRef<[T]>,
    R: RngCore + ?Sized,
{
    let mut picked: Vec<T> = groups
        .into_iter()
        .flat_map(|group| {
            let group = group.as_ref();
            group[..per_category.min(group.len())].to_vec()
        })
        .collect();
    shuffle(&mut picked, rng);
    adebug!(picked = picked.len(), limit, "pick_recommended");
    picked.truncate(limit);
    picked
}
