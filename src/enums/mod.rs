//! Enum introspection helpers
//!
//! Architecture: Capability Traits - Rust has no runtime reflection, so introspection
//! is expressed through strum's derive-provided traits
//! - `IntoEnumIterator` (from `#[derive(EnumIter)]`) supplies the variant sequence
//! - `AsRef<str>` (from `#[derive(AsRefStr)]`) supplies the symbolic name
//! - Helpers here are generic free functions over those bounds

use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Iterator over all variants of `T` in declaration order.
pub fn variants<T: IntoEnumIterator>() -> T::Iterator {
    T::iter()
}

/// All variants of `T` in declaration order.
pub fn to_vec<T: IntoEnumIterator>() -> Vec<T> {
    T::iter().collect()
}

/// All variants of `T` ordered by symbolic name.
pub fn to_sorted_vec<T>() -> Vec<T>
where
    T: IntoEnumIterator + AsRef<str>,
{
    let mut all: Vec<T> = T::iter().collect();
    all.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    all
}

/// Map from each variant's ordinal (declaration position) to its symbolic name.
pub fn ordinal_names<T>() -> BTreeMap<usize, String>
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .enumerate()
        .map(|(ordinal, variant)| (ordinal, variant.as_ref().to_owned()))
        .collect()
}

/// The variant at the given declaration position, if any.
pub fn from_ordinal<T: IntoEnumIterator>(ordinal: usize) -> Option<T> {
    T::iter().nth(ordinal)
}

/// Number of variants of `T`.
pub fn variant_count<T: IntoEnumIterator>() -> usize {
    T::iter().count()
}
