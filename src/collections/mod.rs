//! Collection filter/map/reduce convenience layer
//!
//! Architecture: Thin Facade - one vocabulary for the filter/map/reduce shapes
//! business code repeats constantly
//! - Sequential helpers are direct delegations to the standard iterator adapters
//! - Parallel helpers (behind the `parallel` feature) delegate to rayon and cover
//!   the order-insensitive operations where parallelism pays off
//! - Nothing here owns state; every call consumes its inputs and returns a value

use std::collections::HashSet;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lazy filter over `values`. The collecting forms below are usually what
/// business code wants; this exists for callers chaining further adapters.
pub fn filter<I, T>(
    values: I,
    mut predicate: impl FnMut(&T) -> bool,
) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().filter(move |v| predicate(v))
}

/// Lazy map over `values`.
pub fn map<I, T, R>(values: I, mapper: impl FnMut(T) -> R) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(mapper)
}

/// Elements of `values` satisfying `predicate`, in order.
pub fn filter_to_vec<I, T>(values: I, mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().filter(|v| predicate(v)).collect()
}

/// Distinct elements of `values` satisfying `predicate`.
pub fn filter_to_set<I, T>(values: I, mut predicate: impl FnMut(&T) -> bool) -> HashSet<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    values.into_iter().filter(|v| predicate(v)).collect()
}

/// Apply `mapper` to the elements of `values` satisfying `predicate`.
pub fn filter_map_to_vec<I, T, R>(
    values: I,
    mut predicate: impl FnMut(&T) -> bool,
    mapper: impl FnMut(T) -> R,
) -> Vec<R>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().filter(|v| predicate(v)).map(mapper).collect()
}

/// Number of elements of `values` satisfying `predicate`.
pub fn filter_count<I, T>(values: I, mut predicate: impl FnMut(&T) -> bool) -> usize
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().filter(|v| predicate(v)).count()
}

/// Apply `mapper` to every element of `values`, in order.
pub fn map_to_vec<I, T, R>(values: I, mapper: impl FnMut(T) -> R) -> Vec<R>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(mapper).collect()
}

/// Apply `mapper` to every element of `values`, collecting distinct results.
pub fn map_to_set<I, T, R>(values: I, mapper: impl FnMut(T) -> R) -> HashSet<R>
where
    I: IntoIterator<Item = T>,
    R: Eq + Hash,
{
    values.into_iter().map(mapper).collect()
}

/// Integer projection of `values`.
pub fn map_to_i64<I, T>(values: I, mapper: impl FnMut(T) -> i64) -> Vec<i64>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(mapper).collect()
}

/// Floating-point projection of `values`.
pub fn map_to_f64<I, T>(values: I, mapper: impl FnMut(T) -> f64) -> Vec<f64>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(mapper).collect()
}

/// Sum of the projection of `values` through `mapper`.
pub fn sum_by<I, T, N>(values: I, mapper: impl FnMut(T) -> N) -> N
where
    I: IntoIterator<Item = T>,
    N: std::iter::Sum<N>,
{
    values.into_iter().map(mapper).sum()
}

/// Whether any element of `values` satisfies `predicate`. Short-circuits.
pub fn any_match<I, T>(values: I, mut predicate: impl FnMut(&T) -> bool) -> bool
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().any(|v| predicate(&v))
}

/// Alias of [`any_match`] kept for vocabulary symmetry with the filter helpers.
pub fn contains<I, T>(values: I, predicate: impl FnMut(&T) -> bool) -> bool
where
    I: IntoIterator<Item = T>,
{
    any_match(values, predicate)
}

/// First element of `values` satisfying `predicate`, in order.
pub fn find_first<I, T>(values: I, mut predicate: impl FnMut(&T) -> bool) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().find(|v| predicate(v))
}

/// Some element of `values` satisfying `predicate`, searched in parallel.
///
/// Which matching element is returned is unspecified when several match.
#[cfg(feature = "parallel")]
pub fn find_any<I, T>(values: I, predicate: impl Fn(&T) -> bool + Sync + Send) -> Option<T>
where
    I: IntoParallelIterator<Item = T>,
    T: Send,
{
    values.into_par_iter().find_any(|v| predicate(v))
}

/// Parallel [`filter_to_vec`]. Result order matches input order.
#[cfg(feature = "parallel")]
pub fn par_filter_to_vec<I, T>(values: I, predicate: impl Fn(&T) -> bool + Sync + Send) -> Vec<T>
where
    I: IntoParallelIterator<Item = T>,
    T: Send,
{
    values.into_par_iter().filter(|v| predicate(v)).collect()
}

/// Parallel [`map_to_vec`]. Result order matches input order.
#[cfg(feature = "parallel")]
pub fn par_map_to_vec<I, T, R>(values: I, mapper: impl Fn(T) -> R + Sync + Send) -> Vec<R>
where
    I: IntoParallelIterator<Item = T>,
    T: Send,
    R: Send,
{
    values.into_par_iter().map(mapper).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts() -> Vec<i64> {
        vec![120, 35, 990, 35, 40]
    }

    #[test]
    fn test_lazy_filter_and_map_compose() {
        let labels: Vec<String> =
            map(filter(amounts(), |a| *a >= 100), |a| format!("R${a}")).collect();
        assert_eq!(labels, vec!["R$120", "R$990"]);
    }

    #[test]
    fn test_filter_to_vec_keeps_order() {
        let large = filter_to_vec(amounts(), |a| *a >= 100);
        assert_eq!(large, vec![120, 990]);
    }

    #[test]
    fn test_filter_to_set_deduplicates() {
        let small = filter_to_set(amounts(), |a| *a < 100);
        assert_eq!(small, HashSet::from([35, 40]));
    }

    #[test]
    fn test_filter_map_to_vec() {
        let labels = filter_map_to_vec(amounts(), |a| *a >= 100, |a| format!("R${a}"));
        assert_eq!(labels, vec!["R$120", "R$990"]);
    }

    #[test]
    fn test_filter_count() {
        assert_eq!(filter_count(amounts(), |a| *a == 35), 2);
        assert_eq!(filter_count(Vec::<i64>::new(), |_| true), 0);
    }

    #[test]
    fn test_map_to_vec_and_set() {
        let doubled = map_to_vec(vec![1, 2, 3], |n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);

        let parities = map_to_set(amounts(), |a| a % 2 == 0);
        assert_eq!(parities, HashSet::from([true, false]));
    }

    #[test]
    fn test_numeric_projections() {
        let cents = map_to_i64(vec!["1.20", "0.35"], |s| {
            let (reais, cents) = s.split_once('.').unwrap();
            reais.parse::<i64>().unwrap() * 100 + cents.parse::<i64>().unwrap()
        });
        assert_eq!(cents, vec![120, 35]);

        let halves = map_to_f64(vec![1, 3], |n| n as f64 / 2.0);
        assert_eq!(halves, vec![0.5, 1.5]);

        let total: i64 = sum_by(amounts(), |a| a);
        assert_eq!(total, 1220);
    }

    #[test]
    fn test_any_match_short_circuits() {
        let mut evaluated = 0;
        let found = any_match(amounts(), |a| {
            evaluated += 1;
            *a == 35
        });

        assert!(found);
        assert_eq!(evaluated, 2);
        assert!(contains(amounts(), |a| *a == 990));
        assert!(!any_match(amounts(), |a| *a < 0));
    }

    #[test]
    fn test_find_first_returns_earliest_match() {
        assert_eq!(find_first(amounts(), |a| *a < 100), Some(35));
        assert_eq!(find_first(amounts(), |a| *a < 0), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_find_any_finds_some_match() {
        let found = find_any(amounts(), |a| *a == 35);
        assert_eq!(found, Some(35));

        assert_eq!(find_any(amounts(), |a| *a < 0), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_helpers_preserve_order() {
        assert_eq!(par_filter_to_vec(amounts(), |a| *a >= 100), vec![120, 990]);
        assert_eq!(par_map_to_vec(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
    }
}
