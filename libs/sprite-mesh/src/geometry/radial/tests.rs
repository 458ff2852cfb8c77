use super::*;
use approx::assert_relative_eq;

fn square() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

fn grid_for(rect: &Rect) -> ScratchGrid {
    let mut grid = ScratchGrid::default();
    grid.vert[0] = rect.min();
    grid.vert[3] = rect.max();
    grid.collapse_inner();
    grid
}

fn direction_angle(line: &ClipLine) -> f64 {
    let d = line.end - line.start;
    d.y.atan2(d.x)
}

#[test]
fn test_cut_offset_corner_signs() {
    // A full clockwise sweep from each corner ends along the adjacent edge
    // that runs clockwise from the vertical one.
    let end = radial_cut_offset(DVec2::ZERO, 1.0, true, 0, 0.0, 90.0, DVec2::ONE);
    assert_relative_eq!(end.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(end.y, 0.0, epsilon = 1e-12);

    let end = radial_cut_offset(DVec2::ZERO, 0.0, true, 0, 0.0, 90.0, DVec2::ONE);
    assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(end.y, 1.0, epsilon = 1e-12);

    // Odd corner flips the direction
    let end = radial_cut_offset(DVec2::ZERO, 0.0, true, 1, 0.0, 90.0, DVec2::ONE);
    assert_relative_eq!(end.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(end.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_cut_offset_clamps_fill() {
    let over = radial_cut_offset(DVec2::ZERO, 3.0, true, 2, 0.0, 90.0, DVec2::ONE);
    let full = radial_cut_offset(DVec2::ZERO, 1.0, true, 2, 0.0, 90.0, DVec2::ONE);
    assert_eq!(over, full);
}

#[test]
fn test_cut_offset_extent_scales_axes() {
    let end = radial_cut_offset(DVec2::ZERO, 0.5, true, 0, 0.0, 90.0, DVec2::new(200.0, 100.0));
    assert_relative_eq!(end.x / end.y, 2.0, epsilon = 1e-9);
}

#[test]
fn test_horizontal_sweep_positions() {
    let rect = Rect::new(10.0, 20.0, 200.0, 50.0);
    for amount in [0.25, 0.5, 0.75] {
        let line = horizontal_sweep(&rect, amount, 0);
        assert_eq!(line.start.x, line.end.x);
        assert_relative_eq!(line.start.x, 10.0 + amount * 200.0);
        assert!(line.keeps(rect.min()));

        let line = horizontal_sweep(&rect, amount, 1);
        assert_relative_eq!(line.start.x, 210.0 - amount * 200.0);
        assert!(line.keeps(rect.max()));
    }
}

#[test]
fn test_vertical_sweep_positions() {
    let rect = Rect::new(10.0, 20.0, 200.0, 50.0);
    for amount in [0.25, 0.5, 0.75] {
        let line = vertical_sweep(&rect, amount, 0);
        assert_eq!(line.start.y, line.end.y);
        assert_relative_eq!(line.start.y, 20.0 + amount * 50.0);
        assert!(line.keeps(rect.min()));

        let line = vertical_sweep(&rect, amount, 1);
        assert_relative_eq!(line.start.y, 70.0 - amount * 50.0);
        assert!(line.keeps(rect.max()));
    }
}

#[test]
fn test_radial90_keep_angle_on_square() {
    let rect = square();
    let grid = grid_for(&rect);
    for origin in 0..4 {
        for amount in [0.1, 0.4, 0.8] {
            let warped = radial90_sweep(&grid, &rect, amount, true, origin, false);
            let kept = radial90_sweep(&grid, &rect, amount, true, origin, true);
            assert_eq!(warped.start, kept.start);
            assert_relative_eq!(direction_angle(&warped), direction_angle(&kept), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_radial90_keep_angle_on_wide_rect_differs() {
    let rect = Rect::new(0.0, 0.0, 300.0, 100.0);
    let grid = grid_for(&rect);
    let warped = radial90_sweep(&grid, &rect, 0.5, true, 0, false);
    let kept = radial90_sweep(&grid, &rect, 0.5, true, 0, true);
    assert!((direction_angle(&warped) - direction_angle(&kept)).abs() > 1e-3);
    // Keeping the angle puts the half-way line on the 45 degree diagonal
    assert_relative_eq!(direction_angle(&kept), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
}

#[test]
fn test_radial90_origin_corners() {
    let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
    let grid = grid_for(&rect);
    let starts: Vec<DVec2> = (0..4)
        .map(|o| radial90_sweep(&grid, &rect, 0.5, true, o, false).start)
        .collect();
    assert_eq!(
        starts,
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 20.0),
            DVec2::new(40.0, 20.0),
            DVec2::new(40.0, 0.0),
        ]
    );
}

#[test]
fn test_radial180_half_splits_rect() {
    let rect = square();
    // Origin 0 (bottom) at half fill: vertical line through the center
    let line = radial180_sweep(&rect, 0.5, true, 0, false);
    assert_eq!(line.start, DVec2::new(50.0, 0.0));
    assert_relative_eq!(line.end.x, 50.0, epsilon = 1e-9);
    assert!(line.keeps(DVec2::new(10.0, 50.0)));
    assert!(!line.keeps(DVec2::new(90.0, 50.0)));

    // Origin 1 (left) at half fill: horizontal line through the center
    let line = radial180_sweep(&rect, 0.5, true, 1, false);
    assert_eq!(line.start, DVec2::new(0.0, 50.0));
    assert_relative_eq!(line.end.y, 50.0, epsilon = 1e-9);
}

#[test]
fn test_quadrant_fill_half_clockwise_origin_zero() {
    let fills: Vec<f64> = (0..4).map(|q| quadrant_fill(0.5, true, 0, q)).collect();
    assert_eq!(fills, vec![1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_quadrant_fill_counter_clockwise() {
    let fills: Vec<f64> = (0..4).map(|q| quadrant_fill(0.5, false, 0, q)).collect();
    assert_eq!(fills, vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_quadrant_fill_reconstructs_amount() {
    for origin in 0..4 {
        for clockwise in [true, false] {
            for amount in [0.0, 0.1, 0.3, 0.5, 0.66, 0.9, 1.0] {
                let sum: f64 = (0..4).map(|q| quadrant_fill(amount, clockwise, origin, q)).sum();
                assert_relative_eq!(sum, amount * 4.0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_quadrant_sweep_half_is_diagonal() {
    let center = DVec2::new(50.0, 50.0);
    let line = quadrant_sweep(center, 0.5, true, 0, false, DVec2::splat(50.0));
    let d = line.end - line.start;
    assert_relative_eq!(d.x, d.y, epsilon = 1e-9);
    assert!(d.x < 0.0);
    // The bottom edge of the quadrant is kept, the left edge is not
    assert!(line.keeps(DVec2::new(40.0, 0.0)));
    assert!(!line.keeps(DVec2::new(0.0, 40.0)));
}

#[test]
fn test_quadrants_cover_grid() {
    let qs = quadrants();
    assert_eq!(qs[0].xs, 0..2);
    assert_eq!(qs[2].ys, 2..4);
    assert_eq!(qs.iter().map(|q| q.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}
