//! Grid coordinates: [`Point`] and the rectangle [`Range`] a grid covers.

use std::fmt;

/// A cell position. `x` is the column and `y` the row, growing downwards.
///
/// Displays as `(x, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours in down, up, right, left order.
    ///
    /// Searches expand neighbours in this order, so it decides tie-breaks
    /// between equally good paths.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x, y + 1),
            Point::new(x, y - 1),
            Point::new(x + 1, y),
            Point::new(x - 1, y),
        ]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-open rectangle of points: `min` is inside, `max` is one past the
/// last column and row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The `width` × `height` rectangle anchored at the origin. Negative
    /// sizes are clamped to zero.
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of points covered.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point, row by row.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let cols = self.min.x..self.max.x;
        (self.min.y..self.max.y).flat_map(move |y| cols.clone().map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_order() {
        assert_eq!(
            Point::new(2, 2).neighbors_4(),
            [(2, 3), (2, 1), (3, 2), (1, 2)].map(Point::from)
        );
    }

    #[test]
    fn point_display_is_column_then_row() {
        assert_eq!(Point::new(5, 2).to_string(), "(5, 2)");
    }

    #[test]
    fn contains_excludes_max() {
        let r = Range::sized(6, 6);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(5, 5)));
        assert!(!r.contains(Point::new(6, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn iter_is_row_major() {
        let pts: Vec<_> = Range::sized(3, 2).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts.last(), Some(&Point::new(2, 1)));
    }

    #[test]
    fn negative_size_is_empty() {
        let r = Range::sized(-3, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}
