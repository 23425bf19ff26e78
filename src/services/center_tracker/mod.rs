//! Centre tracking for the date strip.
//!
//! Given the cells the host laid out this pass and the viewport width, finds
//! the cell whose centre is closest to the viewport centre. Pure, so it can run
//! on every scroll tick as well as when motion stops.

use crate::models::date_window::Position;
use crate::models::geometry::ItemGeometry;

/// Horizontal centre of a viewport of the given width.
pub fn viewport_center(viewport_width: f32) -> f32 {
    viewport_width / 2.0
}

/// Absolute distance between a cell's centre and the viewport centre.
pub fn distance_to_center(geometry: &ItemGeometry, viewport_width: f32) -> f32 {
    (geometry.center() - viewport_center(viewport_width)).abs()
}

/// Position of the cell nearest the viewport centre, `None` for an empty layout.
///
/// Ties go to the earliest geometry in `geometries` (left-to-right scan).
pub fn nearest_position(geometries: &[ItemGeometry], viewport_width: f32) -> Option<Position> {
    nearest_geometry(geometries, viewport_width).map(|geometry| geometry.position)
}

pub fn nearest_geometry(geometries: &[ItemGeometry], viewport_width: f32) -> Option<&ItemGeometry> {
    let mut best: Option<(&ItemGeometry, f32)> = None;

    for geometry in geometries {
        let distance = distance_to_center(geometry, viewport_width);
        // NaN distances never win
        let closer = match best {
            None => !distance.is_nan(),
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((geometry, distance));
        }
    }

    best.map(|(geometry, _)| geometry)
}

/// Geometry for `position` in this layout pass, if the host laid it out.
pub fn find_geometry(geometries: &[ItemGeometry], position: Position) -> Option<&ItemGeometry> {
    geometries.iter().find(|geometry| geometry.position == position)
}

/// Offset that moves a view's centre onto a box's centre.
///
/// Positive means the view must move right.
pub fn center_alignment_delta(view_start: f32, view_end: f32, box_start: f32, box_end: f32) -> f32 {
    let view_center = (view_start + view_end) / 2.0;
    let box_center = (box_start + box_end) / 2.0;
    box_center - view_center
}

/// Scroll distance that brings `geometry` to the viewport centre, in the
/// `ScrollBy` convention (positive shifts content left).
pub fn snap_distance(geometry: &ItemGeometry, viewport_width: f32) -> f32 {
    -center_alignment_delta(geometry.left_edge, geometry.right_edge, 0.0, viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(start: Position, count: usize, width: f32, offset: f32) -> Vec<ItemGeometry> {
        (0..count)
            .map(|i| {
                let left = i as f32 * width - offset;
                ItemGeometry::new(start + i, left, left + width)
            })
            .collect()
    }

    #[test]
    fn empty_layout_has_no_center() {
        assert_eq!(nearest_position(&[], 400.0), None);
    }

    #[test]
    fn picks_the_cell_under_the_center() {
        // Cells 50px wide, viewport 450px: the fifth cell spans 200..250
        let geometries = strip(10, 8, 50.0, 0.0);
        assert_eq!(nearest_position(&geometries, 450.0), Some(14));

        let shifted = strip(10, 8, 50.0, 40.0);
        assert_eq!(nearest_position(&shifted, 450.0), Some(15));
    }

    #[test]
    fn ties_go_to_first_listed() {
        let geometries = vec![
            ItemGeometry::new(3, 150.0, 200.0),
            ItemGeometry::new(4, 200.0, 250.0),
        ];
        assert_eq!(nearest_position(&geometries, 400.0), Some(3));

        let reversed = vec![geometries[1], geometries[0]];
        assert_eq!(nearest_position(&reversed, 400.0), Some(4));
    }

    #[test]
    fn repeated_calls_agree() {
        let geometries = strip(0, 9, 48.0, 13.0);
        let first = nearest_position(&geometries, 360.0);
        for _ in 0..10 {
            assert_eq!(nearest_position(&geometries, 360.0), first);
        }
    }

    #[test]
    fn nan_geometry_is_ignored() {
        let geometries = vec![
            ItemGeometry::new(0, f32::NAN, f32::NAN),
            ItemGeometry::new(1, 0.0, 50.0),
        ];
        assert_eq!(nearest_position(&geometries, 400.0), Some(1));
    }

    #[test]
    fn snap_distance_centers_the_cell() {
        let cell = ItemGeometry::new(7, 0.0, 50.0);
        // Centre 25 must travel to 200: content shifts right, so negative dx
        assert_eq!(snap_distance(&cell, 400.0), -175.0);

        let right = ItemGeometry::new(8, 300.0, 350.0);
        assert_eq!(snap_distance(&right, 400.0), 125.0);
    }

    #[test]
    fn alignment_delta_matches_centres() {
        assert_eq!(center_alignment_delta(0.0, 10.0, 0.0, 100.0), 45.0);
        assert_eq!(center_alignment_delta(90.0, 110.0, 0.0, 100.0), -50.0);
    }
}
