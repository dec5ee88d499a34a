//! Stable top-down merge sort.
//!
//! `merge_sort_by` is the generic form (any `Clone` item, any comparator);
//! `sort_by_axis` orders points by one coordinate. Neither mutates its input.

use std::cmp::Ordering;

use crate::Point;

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// `0 → X`, `1 → Y`, anything else `None`.
    #[inline]
    pub fn from_index(d: usize) -> Option<Self> {
        match d {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    #[inline]
    pub fn coord(self, p: &Point) -> f64 {
        p[self.index()]
    }
}

/// Sort points by one coordinate, ties kept in input order.
pub fn sort_by_axis(points: &[Point], axis: Axis) -> Vec<Point> {
    merge_sort_by(points, |a, b| {
        axis.coord(a)
            .partial_cmp(&axis.coord(b))
            .unwrap_or(Ordering::Equal)
    })
}

/// Stable merge sort returning a new vector.
///
/// The right head is taken only when it compares strictly `Less` than the
/// left head, so equal elements keep their relative order.
pub fn merge_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(items, &mut cmp)
}

fn sort_rec<T, F>(items: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = sort_rec(&items[..mid], cmp);
    let right = sort_rec(&items[mid..], cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    loop {
        let take_right = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => cmp(b, a) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { r.next() } else { l.next() };
        out.extend(next);
    }
    out
}
