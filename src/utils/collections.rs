//! Collection helpers
//!
//! Small transformations used by the list screens: mapping, filtering,
//! folding and picking items out of loaded pages.

use std::cmp::Ordering;

/// Callback used by [`reduce`], called with the accumulator then the item
pub trait ReduceCallback<T, R> {
    fn reduce(&mut self, acc: R, val: T) -> R;
}

impl<T, R, F> ReduceCallback<T, R> for F
where
    F: FnMut(R, T) -> R,
{
    fn reduce(&mut self, acc: R, val: T) -> R {
        self(acc, val)
    }
}

/// Applies `transformer` to every item, keeping order and length
pub fn map_items<I, R, F>(source: I, transformer: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    source.into_iter().map(transformer).collect()
}

/// Returns the first item, or `None` when the source is absent or empty
pub fn first_item<T>(source: Option<&[T]>) -> Option<&T> {
    source.and_then(|items| items.first())
}

/// Returns `transformer` applied to the first item
///
/// The transformer is not called when the source is absent or empty.
pub fn first_item_with<T, R, F>(source: Option<&[T]>, transformer: F) -> Option<R>
where
    F: FnOnce(&T) -> R,
{
    first_item(source).map(transformer)
}

/// Keeps the items for which `condition` holds, in their original order
pub fn filter<I, F>(source: I, mut condition: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .filter(|item| condition(item))
        .collect()
}

/// Picks the minimum item according to `comparator`
///
/// Returns `default_value` when the source is empty. The running minimum is
/// replaced whenever `comparator(current, candidate)` is not `Less`, so among
/// equal items the last one wins. This differs from [`Iterator::min_by`],
/// which keeps the first.
pub fn min_item<I, F>(source: I, default_value: I::Item, mut comparator: F) -> I::Item
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    source
        .into_iter()
        .reduce(|current, candidate| {
            if comparator(&current, &candidate) != Ordering::Less {
                candidate
            } else {
                current
            }
        })
        .unwrap_or(default_value)
}

/// Left fold starting from `initial_value`
pub fn fold<I, R, F>(initial_value: R, source: I, accumulator: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    source.into_iter().fold(initial_value, accumulator)
}

/// Left fold that tolerates an absent source
///
/// An absent source returns `initial_value` untouched.
pub fn reduce<I, R, C>(source: Option<I>, mut callback: C, initial_value: R) -> R
where
    I: IntoIterator,
    C: ReduceCallback<I::Item, R>,
{
    let mut acc = initial_value;
    if let Some(source) = source {
        for val in source {
            acc = callback.reduce(acc, val);
        }
    }
    acc
}
