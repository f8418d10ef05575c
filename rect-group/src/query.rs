//! Point-to-rectangle queries for resolving cursor positions against
//! grouped detections.
//!
//! All queries are linear scans over the candidate slice, O(n) per call.

use crate::rect::Rect;

/// Find a rectangle containing `point`, boundary included.
///
/// Returns the first hit in slice order; overlapping candidates make the
/// result order-sensitive, not a smallest-container guarantee.
pub fn containing_rectangle(rects: &[Rect], point: (i64, i64)) -> Option<&Rect> {
    rects.iter().find(|rect| rect.contains_point(point))
}

/// Find the rectangle closest to `point`.
///
/// Distance is zero inside a rectangle, so a containing rectangle always
/// wins. Ties keep the earliest candidate in slice order. Returns `None`
/// for an empty slice.
pub fn closest_rectangle(rects: &[Rect], point: (i64, i64)) -> Option<&Rect> {
    let mut min_distance = f64::INFINITY;
    let mut closest = None;

    for rect in rects {
        let distance = rect.distance_to_point(point);
        if distance < min_distance {
            min_distance = distance;
            closest = Some(rect);
        }
    }

    closest
}

/// Resolve `point` to the rectangle a cursor at that position refers to:
/// the containing rectangle when one exists, otherwise the closest one.
pub fn candidate_rectangle(rects: &[Rect], point: (i64, i64)) -> Option<&Rect> {
    containing_rectangle(rects, point).or_else(|| closest_rectangle(rects, point))
}
