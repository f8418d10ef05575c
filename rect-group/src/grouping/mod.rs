//! Sweep-line grouping of overlapping rectangles.
//!
//! [`group_rects`] replaces every set of transitively overlapping input
//! boxes with the one box covering the set. The sweep walks the x axis left
//! to right: boxes are bucketed by leading edge, tested against the
//! rectangles whose extent still covers the sweep line, and retired once
//! the line passes their trailing edge. Overlap tests are strict, so boxes
//! that only share an edge stay in separate groups.
//!
//! Connectivity is tracked in a [`UnionFind`] keyed by input position;
//! after the sweep each component folds into its bounding rectangle.

mod sweep;


use std::collections::HashMap;
use std::ops::Range;

use crate::rect::{merge_all, BoundingBox, Rect};
use crate::union_find::{UnionFind, UnionFindError};
use sweep::ActiveSet;

/// Bucket rectangles by leading x coordinate, preserving input order within
/// each bucket.
fn bucket_by_leading(rects: &[Rect]) -> HashMap<i64, Vec<(usize, Rect)>> {
    let mut buckets: HashMap<i64, Vec<(usize, Rect)>> = HashMap::new();
    for (index, rect) in rects.iter().enumerate() {
        buckets.entry(rect.min_x).or_default().push((index, *rect));
    }
    buckets
}

/// Group transitively overlapping boxes into their bounding boxes.
///
/// The sweep visits every x coordinate in `scan` in ascending order. Boxes
/// whose leading edge lies outside `scan` are never examined and come back
/// unchanged as groups of one. Output order carries no meaning.
///
/// # Arguments
///
/// * `boxes` - Detection boxes, typically contour bounds from a detector
/// * `scan` - Coordinate range swept along the x axis, usually `0..width`
///
/// # Returns
///
/// One box per group of transitively overlapping inputs.
///
/// # Errors
///
/// Returns [`UnionFindError`] if connectivity bookkeeping is handed an
/// index outside the input range.
///
/// # Examples
///
/// ```rust
/// use rect_group::{group_rects, BoundingBox};
///
/// let detections = vec![
///     BoundingBox::new(0, 0, 2, 2),
///     BoundingBox::new(1, 1, 2, 2), // overlaps the first
///     BoundingBox::new(5, 5, 1, 1), // isolated
/// ];
///
/// let grouped = group_rects(&detections, 0..8).unwrap();
/// assert_eq!(grouped.len(), 2);
/// assert!(grouped.contains(&BoundingBox::new(0, 0, 3, 3)));
/// assert!(grouped.contains(&BoundingBox::new(5, 5, 1, 1)));
/// ```
pub fn group_rects(
    boxes: &[BoundingBox],
    scan: Range<i64>,
) -> Result<Vec<BoundingBox>, UnionFindError> {
    let rects: Vec<Rect> = boxes.iter().map(|&bbox| Rect::from(bbox)).collect();
    let buckets = bucket_by_leading(&rects);

    let mut components = UnionFind::new(rects);
    let mut active = ActiveSet::new();

    for x in scan.clone() {
        active.evict_expired(x);

        let incoming = match buckets.get(&x) {
            Some(incoming) => incoming,
            None => continue,
        };

        // Rectangles sharing a leading edge are never tested against each
        // other; they join a group only through a rectangle admitted at an
        // earlier coordinate that overlaps both.
        for (active_index, active_rect) in active.iter() {
            for &(new_index, new_rect) in incoming {
                if active_rect.intersects(&new_rect) {
                    components.union(active_index, new_index)?;
                }
            }
        }

        for &(new_index, new_rect) in incoming {
            active.push(new_index, new_rect);
        }
    }

    let mut grouped = Vec::with_capacity(components.count());
    for members in components.groups().values() {
        let group: Vec<Rect> = members.iter().map(|&&rect| rect).collect();
        if let Some(merged) = merge_all(&group) {
            grouped.push(BoundingBox::from(merged));
        }
    }

    log::debug!(
        "grouped {} boxes into {} rectangles over scan range {}..{}",
        boxes.len(),
        grouped.len(),
        scan.start,
        scan.end
    );

    Ok(grouped)
}
