// Property: centre tracking is deterministic and picks a closest cell

use horizontal_calendar::services::center_tracker::{distance_to_center, nearest_position};
use horizontal_calendar::ItemGeometry;
use proptest::prelude::*;

fn geometries() -> impl Strategy<Value = Vec<ItemGeometry>> {
    prop::collection::vec((-500.0f32..1500.0, 1.0f32..200.0), 1..20).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(position, (left, width))| ItemGeometry::new(position, left, left + width))
            .collect()
    })
}

proptest! {
    /// Same layout, same answer
    #[test]
    fn prop_nearest_is_deterministic(layout in geometries(), viewport in 1.0f32..2000.0) {
        let first = nearest_position(&layout, viewport);
        prop_assert!(first.is_some());
        for _ in 0..5 {
            prop_assert_eq!(nearest_position(&layout, viewport), first);
        }
    }

    /// No cell is strictly closer than the chosen one, and no earlier cell ties it
    #[test]
    fn prop_nearest_is_first_minimum(layout in geometries(), viewport in 1.0f32..2000.0) {
        let chosen = nearest_position(&layout, viewport).unwrap();
        let chosen_index = layout.iter().position(|g| g.position == chosen).unwrap();
        let best = distance_to_center(&layout[chosen_index], viewport);

        for (index, geometry) in layout.iter().enumerate() {
            let distance = distance_to_center(geometry, viewport);
            prop_assert!(distance >= best);
            if index < chosen_index {
                prop_assert!(distance > best);
            }
        }
    }

    /// Mirror-image pair around the centre: the earlier-listed cell wins
    #[test]
    fn prop_symmetric_tie_goes_to_first(offset in 1u32..300, half_width in 1u32..50) {
        // Whole-pixel layout keeps both distances exactly equal
        let viewport = 800.0;
        let center = viewport / 2.0;
        let (offset, half_width) = (offset as f32, half_width as f32);
        let left_cell = ItemGeometry::new(7, center - offset - half_width, center - offset + half_width);
        let right_cell = ItemGeometry::new(8, center + offset - half_width, center + offset + half_width);
        prop_assert_eq!(distance_to_center(&left_cell, viewport), distance_to_center(&right_cell, viewport));

        prop_assert_eq!(nearest_position(&[left_cell, right_cell], viewport), Some(7));
        prop_assert_eq!(nearest_position(&[right_cell, left_cell], viewport), Some(8));
    }
}
