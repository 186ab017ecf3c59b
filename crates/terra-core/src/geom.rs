//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A `Point` names a cell of a terrain grid by row `x` and column `y`; a
//! `Range` is the half-open rectangle of valid cell coordinates.

use std::fmt;

/// A 2D integer cell coordinate. Ordered by `x`, then `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Absolute per-axis offset to `other`, as `(|dx|, |dy|)`.
    #[inline]
    pub fn abs_delta(self, other: Point) -> (i32, i32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Whether `other` is one of the eight neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let (dx, dy) = self.abs_delta(other);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.abs_delta(other) == (1, 1)
    }

    /// The eight neighbours, row by row from `(x - 1, y - 1)`. Not clipped
    /// to any bounds.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Self::new(x - 1, y - 1),
            Self::new(x - 1, y),
            Self::new(x - 1, y + 1),
            Self::new(x, y - 1),
            Self::new(x, y + 1),
            Self::new(x + 1, y - 1),
            Self::new(x + 1, y),
            Self::new(x + 1, y + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Half-open rectangle of cells `[min, max)`.
///
/// All empty ranges compare equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty()) || (self.min == other.min && self.max == other.max)
    }
}

impl Eq for Range {}

impl Range {
    /// Range spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Extent along `x`.
    #[inline]
    pub fn rows(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Extent along `y`.
    #[inline]
    pub fn cols(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.rows() as usize * self.cols() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point of the range in grid storage order (`x` outer, `y`
    /// inner).
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

/// Iterator over the points of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.range.len() {
            return None;
        }
        let cols = self.range.cols() as usize;
        let p = self
            .range
            .min
            .shift((self.next / cols) as i32, (self.next % cols) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}
