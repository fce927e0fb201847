use super::*;

const AREA: PlotArea = PlotArea { left: 40.0, top: 10.0, width: 300.0, height: 200.0 };

// =============================================================
// nice_value_axis
// =============================================================

#[test]
fn nice_axis_for_millisecond_values() {
    let axis = nice_value_axis(4000.0, 5);
    assert_eq!(axis.ticks, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
    assert_eq!(axis.max, 4000.0);
}

#[test]
fn nice_axis_rounds_step_up() {
    let axis = nice_value_axis(3700.0, 5);
    assert_eq!(axis.ticks, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);

    let axis = nice_value_axis(0.9, 5);
    assert_eq!(axis.ticks, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn nice_axis_handles_empty_or_zero_data() {
    let axis = nice_value_axis(0.0, 5);
    assert_eq!(axis.max, 1.0);
    let axis = nice_value_axis(f64::NAN, 5);
    assert_eq!(axis.max, 1.0);
}

#[test]
fn value_axis_maps_zero_to_bottom_and_max_to_top() {
    let axis = nice_value_axis(4000.0, 5);
    assert_eq!(axis.y(0.0, &AREA), AREA.bottom());
    assert_eq!(axis.y(4000.0, &AREA), AREA.top);
    assert_eq!(axis.y(2000.0, &AREA), 110.0);
}

// =============================================================
// point_positions
// =============================================================

#[test]
fn point_positions_span_the_plot_width() {
    assert_eq!(point_positions(3, &AREA), vec![40.0, 190.0, 340.0]);
    assert_eq!(AREA.right(), 340.0);
}

#[test]
fn point_positions_center_a_single_point() {
    assert_eq!(point_positions(1, &AREA), vec![190.0]);
    assert!(point_positions(0, &AREA).is_empty());
}

// =============================================================
// ticks_from_start / nearest_index
// =============================================================

#[test]
fn ticks_from_start_keeps_first_and_enforces_gap() {
    let positions = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0];
    assert_eq!(ticks_from_start(&positions, 30.0, 50.0), vec![0, 4]);
}

#[test]
fn ticks_from_start_keeps_everything_when_sparse() {
    let positions = [0.0, 100.0, 200.0];
    assert_eq!(ticks_from_start(&positions, 30.0, 50.0), vec![0, 1, 2]);
}

#[test]
fn nearest_index_picks_closest_point() {
    let positions = [0.0, 100.0, 200.0];
    assert_eq!(nearest_index(-10.0, &positions), Some(0));
    assert_eq!(nearest_index(140.0, &positions), Some(1));
    assert_eq!(nearest_index(190.0, &positions), Some(2));
    assert_eq!(nearest_index(50.0, &positions), Some(0));
    assert_eq!(nearest_index(5.0, &[]), None);
}

// =============================================================
// paths
// =============================================================

#[test]
fn line_path_for_one_and_two_points() {
    assert_eq!(monotone_line_path(&[(1.0, 2.0)]), "M1,2");
    assert_eq!(monotone_line_path(&[(0.0, 0.0), (10.0, 5.0)]), "M0,0L10,5");
    assert_eq!(monotone_line_path(&[]), "");
}

#[test]
fn line_path_uses_flat_tangent_at_local_extremum() {
    // Middle point is a peak, so its tangent is zero and both control points
    // next to it share its y.
    let path = monotone_line_path(&[(0.0, 0.0), (30.0, 30.0), (60.0, 0.0)]);
    assert_eq!(path, "M0,0C10,15,20,30,30,30C40,30,50,15,60,0");
}

#[test]
fn line_path_skips_coincident_points() {
    let once = monotone_line_path(&[(0.0, 0.0), (10.0, 5.0)]);
    let twice = monotone_line_path(&[(0.0, 0.0), (0.0, 0.0), (10.0, 5.0)]);
    assert_eq!(once, twice);
}

#[test]
fn area_path_closes_on_baseline() {
    assert_eq!(area_path(&[(0.0, 0.0), (10.0, 5.0)], 20.0), "M0,0L10,5L10,20L0,20Z");
    assert_eq!(area_path(&[], 20.0), "");
}
