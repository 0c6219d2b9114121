//! Sequence and map implementations for the standard collections.
//!
//! Collections are never null on their own; wrap them in `Option` to tell an
//! absent container (`null`) apart from an empty one (`[]` or `{}`).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

use crate::{ProjectKey, Projectable, Shape};

fn sequence<'a, I, T>(items: I) -> Shape<'a>
where
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
    T: Projectable + 'a,
{
    Shape::Sequence(Box::new(items.into_iter().map(|item| item as &dyn Projectable)))
}

fn entries<'a, I, K, V>(items: I) -> Shape<'a>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    I::IntoIter: 'a,
    K: ProjectKey + 'a,
    V: Projectable + 'a,
{
    Shape::Map(Box::new(
        items
            .into_iter()
            .map(|(key, value)| (key as &dyn ProjectKey, value as &dyn Projectable)),
    ))
}

impl<T> Projectable for [T]
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Projectable for [T; N]
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> Projectable for Vec<T>
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Projectable for VecDeque<T>
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Projectable for BTreeSet<T>
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Projectable for HashSet<T, S>
where
    T: Projectable,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Projectable for BTreeMap<K, V>
where
    K: ProjectKey,
    V: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        entries(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Projectable for HashMap<K, V, S>
where
    K: ProjectKey,
    V: Projectable,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        entries(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
