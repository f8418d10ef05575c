//! End-to-end grouping and query scenarios on detector-shaped fixtures.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rect_group::{
    candidate_rectangle, closest_rectangle, containing_rectangle, group_rects, merge_all,
    BoundingBox, Rect, UnionFind,
};

/// Letter bounds traced from a six-letter wordmark screenshot.
fn wordmark_letters() -> Vec<Rect> {
    vec![
        Rect::from_corners(6, 14, 74, 84),    // capital G
        Rect::from_corners(77, 39, 122, 84),  // first o
        Rect::from_corners(125, 39, 170, 84), // second o
        Rect::from_corners(173, 39, 215, 103), // descender g
        Rect::from_corners(221, 16, 231, 82), // l
        Rect::from_corners(235, 39, 276, 84), // e
    ]
}

/// Contour boxes from a full search-page screenshot, duplicates included.
fn search_page_detections() -> Vec<BoundingBox> {
    vec![
        BoundingBox::new(279, 193, 18, 43),
        BoundingBox::new(279, 255, 15, 20),
        BoundingBox::new(282, 241, 12, 9),
        BoundingBox::new(279, 343, 15, 10),
        BoundingBox::new(279, 353, 19, 57),
        BoundingBox::new(279, 316, 15, 17),
        BoundingBox::new(280, 275, 14, 35),
        BoundingBox::new(279, 272, 14, 2),
        BoundingBox::new(279, 237, 15, 3),
        BoundingBox::new(225, 391, 15, 37),
        BoundingBox::new(226, 319, 11, 19),
        BoundingBox::new(225, 341, 15, 46),
        BoundingBox::new(226, 228, 11, 45),
        BoundingBox::new(225, 178, 15, 46),
        BoundingBox::new(151, 559, 20, 14),
        BoundingBox::new(152, 29, 15, 14),
        BoundingBox::new(44, 396, 45, 41),
        BoundingBox::new(44, 334, 64, 42),
        BoundingBox::new(44, 286, 45, 45),
        BoundingBox::new(44, 238, 45, 45),
        BoundingBox::new(21, 382, 66, 10),
        BoundingBox::new(21, 382, 66, 10),
        BoundingBox::new(19, 167, 70, 68),
        BoundingBox::new(19, 167, 70, 68),
    ]
}

/// Raw contour boxes around three icons, inner and outer contours included.
fn icon_contours() -> Vec<BoundingBox> {
    vec![
        // First icon: outer box, inner box, and an offshoot.
        BoundingBox::new(10, 10, 20, 20),
        BoundingBox::new(12, 8, 14, 26),
        BoundingBox::new(25, 20, 17, 25),
        // Second icon: two nested contours.
        BoundingBox::new(60, 10, 20, 15),
        BoundingBox::new(61, 24, 24, 16),
        // Third icon: a single clean contour.
        BoundingBox::new(120, 50, 20, 20),
    ]
}

fn sorted(mut boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    boxes.sort_unstable_by_key(|b| (b.x, b.y, b.width, b.height));
    boxes
}

/// All-pairs reference grouping used to cross-check the sweep.
fn group_rects_exhaustive(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    let rects: Vec<Rect> = boxes.iter().map(|&bbox| Rect::from(bbox)).collect();
    let mut components = UnionFind::new(rects.clone());
    for p in 0..rects.len() {
        for q in (p + 1)..rects.len() {
            if rects[p].intersects(&rects[q]) {
                components.union(p, q).unwrap();
            }
        }
    }

    let mut grouped = Vec::new();
    for members in components.groups().values() {
        let group: Vec<Rect> = members.iter().map(|&&rect| rect).collect();
        if let Some(merged) = merge_all(&group) {
            grouped.push(BoundingBox::from(merged));
        }
    }
    grouped
}

#[test]
fn test_icon_contours_collapse_per_icon() {
    env_logger::init();

    let grouped = group_rects(&icon_contours(), 0..160).unwrap();
    let expected = vec![
        BoundingBox::new(10, 8, 32, 37),
        BoundingBox::new(60, 10, 25, 30),
        BoundingBox::new(120, 50, 20, 20),
    ];
    assert_eq!(sorted(grouped), sorted(expected));
}

#[test]
fn test_wordmark_letters_stay_separate() {
    // The letters overlap vertically but never horizontally.
    let letters: Vec<BoundingBox> = wordmark_letters()
        .into_iter()
        .map(BoundingBox::from)
        .collect();
    let grouped = group_rects(&letters, 0..300).unwrap();
    assert_eq!(sorted(grouped), sorted(letters));
}

#[test]
fn test_search_page_detections_pass_through() {
    // The only overlapping pairs in this capture share their leading edge
    // (duplicate contours), so the sweep keeps all of them apart.
    let detections = search_page_detections();
    let grouped = group_rects(&detections, 0..600).unwrap();
    assert_eq!(sorted(grouped), sorted(detections));
}

#[test]
fn test_cursor_hits_inside_letters() {
    let letters = wordmark_letters();
    let hits = [
        ((40, 45), 0),
        ((100, 63), 1),
        ((151, 63), 2),
        ((196, 72), 3),
        ((226, 51), 4),
        ((259, 66), 5),
    ];

    for (point, expected) in hits {
        assert_eq!(
            containing_rectangle(&letters, point),
            Some(&letters[expected]),
            "point {point:?} should land in letter {expected}"
        );
        assert_eq!(candidate_rectangle(&letters, point), Some(&letters[expected]));
    }
}

#[test]
fn test_cursor_snaps_to_nearest_letter() {
    let letters = wordmark_letters();
    let snaps = [
        ((7, 95), 0),
        ((100, 92), 1),
        ((148, 89), 2),
        ((193, 110), 3),
        ((226, 11), 4),
        ((259, 89), 5),
    ];

    for (point, expected) in snaps {
        assert_eq!(containing_rectangle(&letters, point), None);
        assert_eq!(
            closest_rectangle(&letters, point),
            Some(&letters[expected]),
            "point {point:?} should snap to letter {expected}"
        );
        assert_eq!(candidate_rectangle(&letters, point), Some(&letters[expected]));
    }
}

#[test]
fn test_sweep_matches_exhaustive_grouping() {
    for seed in [7, 21, 1234] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // Distinct leading edges keep every overlapping pair visible to the
        // sweep.
        let mut leading: Vec<i64> = (0..400).collect();
        leading.shuffle(&mut rng);
        leading.truncate(120);

        let detections: Vec<BoundingBox> = leading
            .iter()
            .map(|&x| {
                let y = rng.gen_range(0..300);
                let width = rng.gen_range(1..40);
                let height = rng.gen_range(1..40);
                BoundingBox::new(x, y, width, height)
            })
            .collect();

        let swept = group_rects(&detections, 0..450).unwrap();
        let exhaustive = group_rects_exhaustive(&detections);
        assert_eq!(sorted(swept), sorted(exhaustive), "seed {seed}");
    }
}
