//! Rectangle primitives for detection grouping.
//!
//! Two representations meet at the crate boundary:
//!
//! - [`BoundingBox`] is the detector-facing form: an origin corner plus
//!   extents, matching the `(x, y, width, height)` tuples that contour
//!   extraction emits.
//! - [`Rect`] is the corner form used internally: a low and a high bound per
//!   axis, which is what the sweep's interval tests want.
//!
//! Conversion between the two is exact integer arithmetic in both
//! directions.
//!
//! # Examples
//!
//! ```rust
//! use rect_group::{BoundingBox, Rect};
//!
//! let bbox = BoundingBox::new(10, 20, 30, 40);
//! let rect = Rect::from(bbox);
//! assert_eq!(rect, Rect::from_corners(10, 20, 40, 60));
//! assert_eq!(BoundingBox::from(rect), bbox);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in corner form.
///
/// `min_x`/`min_y` is the low corner and `max_x`/`max_y` the high corner.
/// The intersection predicate treats the low bounds as inclusive and the
/// high bounds as exclusive, so rectangles that merely share an edge do not
/// intersect. Point queries treat all four bounds as part of the rectangle.
///
/// # Examples
///
/// ```rust
/// use rect_group::Rect;
///
/// let a = Rect::from_corners(0, 0, 4, 4);
/// let b = Rect::from_corners(2, 2, 6, 6);
/// assert!(a.intersects(&b));
/// assert_eq!(a.merge(&b), Rect::from_corners(0, 0, 6, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Low x bound (inclusive).
    pub min_x: i64,
    /// Low y bound (inclusive).
    pub min_y: i64,
    /// High x bound (exclusive for intersection).
    pub max_x: i64,
    /// High y bound (exclusive for intersection).
    pub max_y: i64,
}

impl Rect {
    /// Create a rectangle from its low and high corners.
    ///
    /// # Arguments
    /// * `min_x` - Low x bound (inclusive)
    /// * `min_y` - Low y bound (inclusive)
    /// * `max_x` - High x bound
    /// * `max_y` - High y bound
    pub fn from_corners(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Extent along the x axis.
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Extent along the y axis.
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Area of the rectangle.
    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// Check whether two rectangles overlap.
    ///
    /// The test is strict on both axes: each rectangle's low bound must sit
    /// strictly below the other's high bound. Rectangles that only touch
    /// along an edge or at a corner do not intersect, and a degenerate
    /// rectangle (zero width or height) never intersects itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rect_group::Rect;
    ///
    /// let a = Rect::from_corners(2, 2, 8, 8);
    /// assert!(a.intersects(&Rect::from_corners(4, 4, 10, 10)));
    /// assert!(!a.intersects(&Rect::from_corners(8, 2, 12, 8))); // shared edge
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn merge(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Euclidean distance from `point` to the nearest point of the
    /// rectangle.
    ///
    /// Zero when the point lies inside the rectangle or on its boundary.
    /// Each axis contributes how far the point sits outside the rectangle's
    /// span on that axis; the distance is the hypotenuse of the two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rect_group::Rect;
    ///
    /// let rect = Rect::from_corners(3, 3, 9, 9);
    /// assert_eq!(rect.distance_to_point((4, 4)), 0.0);
    /// assert_eq!(rect.distance_to_point((1, 4)), 2.0);
    /// ```
    pub fn distance_to_point(&self, point: (i64, i64)) -> f64 {
        let dx = (self.min_x - point.0).max(0).max(point.0 - self.max_x);
        let dy = (self.min_y - point.1).max(0).max(point.1 - self.max_y);
        if dx == 0 && dy == 0 {
            return 0.0;
        }
        ((dx * dx + dy * dy) as f64).sqrt()
    }

    /// Check whether `point` lies inside the rectangle or on its boundary.
    pub fn contains_point(&self, point: (i64, i64)) -> bool {
        self.distance_to_point(point) == 0.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Smallest rectangle covering every rectangle in `rects`, or `None` when
/// the slice is empty.
///
/// # Examples
///
/// ```rust
/// use rect_group::{merge_all, Rect};
///
/// let rects = vec![
///     Rect::from_corners(2, 2, 8, 8),
///     Rect::from_corners(15, 15, 16, 16),
/// ];
/// assert_eq!(merge_all(&rects), Some(Rect::from_corners(2, 2, 16, 16)));
/// assert_eq!(merge_all(&[]), None);
/// ```
pub fn merge_all(rects: &[Rect]) -> Option<Rect> {
    if rects.is_empty() {
        return None;
    }

    let mut merged = rects[0];
    for rect in rects.iter().skip(1) {
        merged = merged.merge(rect);
    }
    Some(merged)
}

/// Detection rectangle in origin-plus-extent form, as emitted by contour
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Low x bound.
    pub x: i64,
    /// Low y bound.
    pub y: i64,
    /// Extent along the x axis.
    pub width: i64,
    /// Extent along the y axis.
    pub height: i64,
}

impl BoundingBox {
    /// Create a box from its origin corner and extents.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// High x bound of the box.
    pub fn x_max(&self) -> i64 {
        self.x + self.width
    }

    /// High y bound of the box.
    pub fn y_max(&self) -> i64 {
        self.y + self.height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        Rect {
            min_x: bbox.x,
            min_y: bbox.y,
            max_x: bbox.x_max(),
            max_y: bbox.y_max(),
        }
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        BoundingBox {
            x: rect.min_x,
            y: rect.min_y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}
