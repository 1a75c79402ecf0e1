// Benchvis - Go benchmark output parser and visualizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A finite set of unique values, used to collect distinct scenario labels.
//!
//! Backed by a [`HashSet`]; enumeration order is unspecified everywhere,
//! including [`FiniteSet::to_vec`] and the slice helpers.

use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// A collection of unique values.
///
/// # Examples
///
/// ```rust
/// use benchvis_core::FiniteSet;
///
/// let a: FiniteSet<&str> = ["10", "100"].into_iter().collect();
/// let b: FiniteSet<&str> = ["100", "1000"].into_iter().collect();
///
/// assert_eq!(a.union(&b).len(), 3);
/// assert!(a.intersection(&b).contains(&"100"));
/// assert_eq!(a.difference(&b).to_vec(), vec!["10"]);
/// ```
#[derive(Debug, Clone)]
pub struct FiniteSet<T: Eq + Hash> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> FiniteSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Create an empty set with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Add a value. Returns `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Remove a value. Removing an absent value is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Values in either set.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let (small, large) = small_large(self, other);
        let mut result = large.clone();
        for value in small.iter() {
            result.add(value.clone());
        }
        result
    }

    /// Values in both sets.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let (small, large) = small_large(self, other);
        small
            .iter()
            .filter(|value| large.contains(value))
            .cloned()
            .collect()
    }

    /// Values in `self` but not in `other`. Not symmetric: `a - b != b - a`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|value| !other.contains(value))
            .cloned()
            .collect()
    }

    /// True when both sets hold exactly the same values.
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Copy the values out, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Consume the set, yielding its values in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_iter().collect()
    }
}

fn small_large<'a, T: Eq + Hash>(
    a: &'a FiniteSet<T>,
    b: &'a FiniteSet<T>,
) -> (&'a FiniteSet<T>, &'a FiniteSet<T>) {
    if b.len() > a.len() {
        (a, b)
    } else {
        (b, a)
    }
}

impl<T: Eq + Hash> Default for FiniteSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for FiniteSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq + Hash> Eq for FiniteSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for FiniteSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> From<Vec<T>> for FiniteSet<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Eq + Hash> IntoIterator for FiniteSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a FiniteSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Union of two slices. Inputs may contain duplicates; output is unique, unordered.
pub fn slice_union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).union(&to_set(b)).into_vec()
}

/// Intersection of two slices. Inputs may contain duplicates; output is unique, unordered.
pub fn slice_intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).intersection(&to_set(b)).into_vec()
}

/// `a - b` over slices. Inputs may contain duplicates; output is unique, unordered.
pub fn slice_difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).difference(&to_set(b)).into_vec()
}

/// True when both slices hold the same distinct values.
pub fn slice_equal<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> bool {
    to_set(a) == to_set(b)
}

fn to_set<T: Eq + Hash + Clone>(values: &[T]) -> FiniteSet<T> {
    values.iter().cloned().collect()
}
