//! Property checks over random footprints, grids, and points.
//!
//! Each property is one of the documented guarantees
//! (rectangle enumeration, odd-footprint centering identity, idempotent snap,
//! gridless behaviour, border clamping, footprint validation).

use std::collections::HashSet;

use nalgebra::vector;
use proptest::prelude::*;

use crate::grid::points_close;
use crate::prelude::*;

fn any_grid() -> impl Strategy<Value = GridDescriptor> {
    (
        0u8..3,
        10.0f64..200.0,
        10.0f64..200.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(kind, w, h, columns, even)| {
            let axis = if columns {
                HexAxis::ColumnMajor
            } else {
                HexAxis::RowMajor
            };
            match kind {
                0 => GridDescriptor::gridless(),
                1 => GridDescriptor::square(w, h).unwrap(),
                _ => GridDescriptor::hex(w, h, axis, even).unwrap(),
            }
        })
}

fn any_footprint() -> impl Strategy<Value = Footprint> {
    (1i32..7, 1i32..7, 0i32..9, any::<bool>()).prop_map(|(w, h, border, alt)| Footprint {
        width_cells: w,
        height_cells: h,
        hex_border_size: border,
        alt_orientation: alt,
    })
}

proptest! {
    #[test]
    fn square_shape_is_the_floor_biased_rectangle(w in 1i32..12, h in 1i32..12) {
        let g = GridDescriptor::square(32.0, 32.0).unwrap();
        let shape = enumerate_shape(&Footprint::square(w, h), &g).unwrap();
        prop_assert_eq!(shape.len(), (w * h) as usize);
        let got: HashSet<Cell> = shape.iter().copied().collect();
        let mut expected = HashSet::new();
        for col in -(w / 2)..=((w + 1) / 2 - 1) {
            for row in -(h / 2)..=((h + 1) / 2 - 1) {
                expected.insert(Cell::new(col, row));
            }
        }
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn odd_footprints_center_as_identity(
        g in any_grid(),
        w in 0i32..5,
        h in 0i32..5,
        alt in any::<bool>(),
        xs in prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4), 0..8),
    ) {
        let f = Footprint {
            width_cells: 2 * w + 1,
            height_cells: 2 * h + 1,
            hex_border_size: 0,
            alt_orientation: alt,
        };
        let points: Vec<PixelPoint> = xs.iter().map(|&(x, y)| vector![x, y]).collect();
        prop_assert_eq!(center_waypoints(&points, &f, &g).unwrap(), points);
    }

    #[test]
    fn snap_is_idempotent(
        g in any_grid(),
        f in any_footprint(),
        alt_rule in any::<bool>(),
        x in -5e3f64..5e3,
        y in -5e3f64..5e3,
    ) {
        let support = NearestVertexSnap::new(alt_rule);
        let once = resolve_snap(vector![x, y], &f, &g, Some(&support)).unwrap();
        let twice = resolve_snap(once, &f, &g, Some(&support)).unwrap();
        prop_assert!(points_close(once, twice, 1e-6), "{:?} -> {:?}", once, twice);
    }

    #[test]
    fn center_snap_lands_on_a_cell_center(
        g in any_grid(),
        x in -5e3f64..5e3,
        y in -5e3f64..5e3,
    ) {
        prop_assume!(!g.is_gridless());
        let p = resolve_snap(vector![x, y], &Footprint::square(1, 1), &g, None).unwrap();
        prop_assert!(points_close(p, g.cell_center(g.cell_at(p)), 1e-6));
    }

    #[test]
    fn gridless_calls_pass_inputs_through(
        f in any_footprint(),
        x in -1e4f64..1e4,
        y in -1e4f64..1e4,
    ) {
        let g = GridDescriptor::gridless();
        let p = vector![x, y];
        prop_assert_eq!(resolve_snap(p, &f, &g, None).unwrap(), p);
        prop_assert_eq!(center_waypoints(&[p], &f, &g).unwrap(), vec![p]);
        let unsupported = matches!(
            enumerate_shape(&f, &g),
            Err(GeometryError::UnsupportedGridKind { .. })
        );
        prop_assert!(unsupported);
    }

    #[test]
    fn large_border_sizes_clamp_to_top_tier(
        border in 5i32..1000,
        alt in any::<bool>(),
        columns in any::<bool>(),
    ) {
        let axis = if columns { HexAxis::ColumnMajor } else { HexAxis::RowMajor };
        let g = GridDescriptor::hex(60.0, 70.0, axis, false).unwrap();
        let big = enumerate_shape(&Footprint::hex_cluster(border, alt), &g).unwrap();
        let top = enumerate_shape(&Footprint::hex_cluster(4, alt), &g).unwrap();
        prop_assert_eq!(big.offsets(), top.offsets());
        let clamped = Anomaly::BorderSizeClamped { requested: border, used: 4 };
        prop_assert_eq!(big.anomaly(), Some(clamped));
    }

    #[test]
    fn highlight_preserves_length_and_order(
        g in any_grid(),
        f in any_footprint(),
        col in -50i32..50,
        row in -50i32..50,
    ) {
        prop_assume!(!g.is_gridless());
        let shape = enumerate_shape(&f, &g).unwrap();
        let px = project_highlight_cells(Cell::new(col, row), &shape, &g).unwrap();
        prop_assert_eq!(px.len(), shape.len());
        let unique: HashSet<(i64, i64)> = px
            .iter()
            .map(|p| ((p.x * 1e3).round() as i64, (p.y * 1e3).round() as i64))
            .collect();
        prop_assert_eq!(unique.len(), px.len());
    }

    #[test]
    fn non_positive_sizes_are_rejected_everywhere(
        g in any_grid(),
        w in -4i32..=0,
        h in -4i32..7,
        x in -1e3f64..1e3,
        y in -1e3f64..1e3,
    ) {
        let f = Footprint::square(w, h);
        let p = vector![x, y];
        let support = NearestVertexSnap::new(true);
        prop_assert!(resolve_snap(p, &f, &g, Some(&support)).is_err());
        prop_assert!(center_waypoints(&[p], &f, &g).is_err());
        prop_assert!(snap_waypoints(&[p], &f, &g, None).is_err());
        prop_assert!(enumerate_shape(&f, &g).is_err());
    }
}
