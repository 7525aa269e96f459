//! Grouped sum aggregation.
//!
//! One contract serves every grouped view: given rows, a grouping key, and
//! a numeric measure, produce one `(key, sum)` pair per distinct key. Keys
//! appear in first-encounter order; the sums themselves are independent of
//! row order.

use std::collections::HashMap;
use std::hash::Hash;

/// Sums a measure over items sharing a grouping key.
///
/// Returns one entry per distinct key, ordered by first appearance. The
/// per-group sums are order-independent; consumers that need a particular
/// display order re-sort the result.
pub fn sum_by<T, K, KF, MF>(items: &[T], key_fn: KF, measure_fn: MF) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    MF: Fn(&T) -> f64,
{
    let mut order: Vec<K> = Vec::new();
    let mut totals: HashMap<K, f64> = HashMap::new();

    for item in items {
        let key = key_fn(item);
        match totals.entry(key.clone()) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += measure_fn(item);
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(measure_fn(item));
                order.push(key);
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let total = totals[&key];
            (key, total)
        })
        .collect()
}
