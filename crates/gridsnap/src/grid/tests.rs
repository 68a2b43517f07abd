use super::*;
use nalgebra::vector;

fn hex_configs(radius: f64) -> Vec<GridDescriptor> {
    let mut out = Vec::new();
    for axis in [HexAxis::RowMajor, HexAxis::ColumnMajor] {
        for even in [false, true] {
            out.push(GridDescriptor::regular_hex(radius, axis, even).unwrap());
        }
    }
    out
}

#[test]
fn descriptor_rejects_degenerate_cells() {
    assert!(GridDescriptor::square(0.0, 10.0).is_err());
    assert!(GridDescriptor::square(10.0, -1.0).is_err());
    assert!(GridDescriptor::hex(f64::NAN, 10.0, HexAxis::RowMajor, false).is_err());
    assert!(GridDescriptor::hex(f64::INFINITY, 10.0, HexAxis::RowMajor, false).is_err());
    let err = GridDescriptor::square(0.0, 1.0).unwrap_err();
    assert!(matches!(err, crate::GeometryError::InvalidGrid { .. }));
}

#[test]
fn square_transforms() {
    let g = GridDescriptor::square(100.0, 50.0).unwrap();
    assert_eq!(g.cell_origin(Cell::new(2, -1)), vector![200.0, -50.0]);
    assert_eq!(g.cell_center(Cell::new(2, -1)), vector![250.0, -25.0]);
    assert_eq!(g.cell_at(vector![250.0, -25.0]), Cell::new(2, -1));
    assert_eq!(g.cell_at(vector![-0.5, 0.0]), Cell::new(-1, 0));
    assert_eq!(g.snap_to_center(vector![130.0, 99.0]), vector![150.0, 75.0]);
    assert_eq!(g.nearest_vertex(vector![130.0, 99.0]), vector![100.0, 100.0]);
    assert_eq!(g.cell_vertices(Cell::new(0, 0)).len(), 4);
}

#[test]
fn hex_row_stagger_follows_parity() {
    let (w, h) = (100.0, 120.0);
    let odd = GridDescriptor::hex(w, h, HexAxis::RowMajor, false).unwrap();
    assert_eq!(odd.cell_origin(Cell::new(0, 0)), vector![0.0, 0.0]);
    assert_eq!(odd.cell_origin(Cell::new(0, 1)), vector![50.0, 90.0]);
    assert_eq!(odd.cell_origin(Cell::new(0, -1)), vector![50.0, -90.0]);

    let even = GridDescriptor::hex(w, h, HexAxis::RowMajor, true).unwrap();
    assert_eq!(even.cell_origin(Cell::new(0, 0)), vector![50.0, 0.0]);
    assert_eq!(even.cell_origin(Cell::new(0, 1)), vector![0.0, 90.0]);
}

#[test]
fn hex_column_stagger_is_transposed() {
    let (w, h) = (120.0, 100.0);
    let odd = GridDescriptor::hex(w, h, HexAxis::ColumnMajor, false).unwrap();
    assert_eq!(odd.cell_origin(Cell::new(1, 0)), vector![90.0, 50.0]);
    assert_eq!(odd.cell_origin(Cell::new(2, 0)), vector![180.0, 0.0]);
    assert_eq!(odd.cell_center(Cell::new(0, 0)), vector![60.0, 50.0]);
    let even = GridDescriptor::hex(w, h, HexAxis::ColumnMajor, true).unwrap();
    assert_eq!(even.cell_origin(Cell::new(0, 0)), vector![0.0, 50.0]);
}

#[test]
fn hex_cell_at_inverts_cell_center() {
    for g in hex_configs(40.0) {
        for col in -4..=4 {
            for row in -4..=4 {
                let c = Cell::new(col, row);
                assert_eq!(g.cell_at(g.cell_center(c)), c, "grid {g:?}");
                // a small nudge stays inside the same hexagon
                let nudged = g.cell_center(c) + vector![3.0, -2.0];
                assert_eq!(g.cell_at(nudged), c);
            }
        }
    }
}

#[test]
fn regular_hex_neighbours_are_one_pitch_apart() {
    let r = 30.0;
    let pitch = 3f64.sqrt() * r;
    for g in hex_configs(r) {
        let ctr = g.cell_center(Cell::new(0, 0));
        let mut neighbours = 0;
        for col in -2..=2 {
            for row in -2..=2 {
                let d = (g.cell_center(Cell::new(col, row)) - ctr).norm();
                if (d - pitch).abs() < 1e-6 {
                    neighbours += 1;
                }
            }
        }
        assert_eq!(neighbours, 6, "grid {g:?}");
    }
}

#[test]
fn hex_nearest_vertex_is_a_corner_and_stable() {
    for g in hex_configs(25.0) {
        let p = g.cell_center(Cell::new(1, 2)) + vector![4.0, -9.0];
        let v = g.nearest_vertex(p);
        let corners = g.cell_vertices(g.cell_at(p));
        assert!(corners.iter().any(|c| points_close(*c, v, 1e-9)));
        assert!(points_close(g.nearest_vertex(v), v, 1e-9));
    }
}

#[test]
fn gridless_snapping_is_identity() {
    let g = GridDescriptor::gridless();
    let p = vector![12.3, -4.56];
    assert_eq!(g.snap_to_center(p), p);
    assert_eq!(g.nearest_vertex(p), p);
}

#[test]
fn orient_is_an_involution() {
    let c = Cell::new(3, -7);
    for axis in [HexAxis::RowMajor, HexAxis::ColumnMajor] {
        assert_eq!(axis.orient(axis.orient(c)), c);
    }
    assert_eq!(HexAxis::ColumnMajor.orient(c), Cell::new(-7, 3));
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_deserialization_validates() {
    let ok: GridDescriptor = serde_json::from_str(
        r#"{"kind":"hex","cell_width":50,"cell_height":60,"hex_axis":"column_major"}"#,
    )
    .unwrap();
    assert_eq!(ok.hex_axis(), HexAxis::ColumnMajor);
    assert!(!ok.hex_shift_is_even());
    let bad = serde_json::from_str::<GridDescriptor>(
        r#"{"kind":"square","cell_width":0,"cell_height":60}"#,
    );
    assert!(bad.is_err());
}
