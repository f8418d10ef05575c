//! Grouping of overlapping detection rectangles.
//!
//! Icon detection pipelines emit one bounding box per contour, so a single
//! icon on screen often arrives as a clump of overlapping boxes. This crate
//! collapses each clump into one rectangle: a sweep along the x axis feeds
//! strict pairwise overlap tests into a disjoint-set forest, and every
//! connected component is replaced by its minimal bounding rectangle.
//! Rectangles that merely touch along an edge stay separate.
//!
//! Point queries ([`containing_rectangle`], [`closest_rectangle`],
//! [`candidate_rectangle`]) then resolve cursor positions against the
//! grouped rectangles.
//!
//! # Examples
//!
//! ```rust
//! use rect_group::{group_rects, BoundingBox};
//!
//! // Two overlapping detections over one icon, plus a stray detection.
//! let detections = vec![
//!     BoundingBox::new(10, 10, 8, 8),
//!     BoundingBox::new(14, 12, 9, 9),
//!     BoundingBox::new(40, 40, 5, 5),
//! ];
//!
//! let grouped = group_rects(&detections, 0..64).unwrap();
//! assert_eq!(grouped.len(), 2);
//! ```

pub mod grouping;
pub mod query;
pub mod rect;
pub mod union_find;

pub use grouping::group_rects;
pub use query::{candidate_rectangle, closest_rectangle, containing_rectangle};
pub use rect::{merge_all, BoundingBox, Rect};
pub use union_find::{UnionFind, UnionFindError};
