use urania::geometry::{to_point, RingRadii};
use urania::placement::{jitter_for, place_entities};
use urania::rendering::primitives::Point;
use urania::rendering::{ChartSpecGenerator, WheelConfig};
use urania::selection::sign_degree_minutes;
use urania::zodiac::{segment_for, ZODIAC};
use urania::{CelestialPosition, NatalWheel, Propagation, Selection};

const EPS: f64 = 1e-6;

fn center() -> Point {
    Point { x: 160.0, y: 160.0 }
}

fn sample_positions() -> Vec<CelestialPosition> {
    vec![
        CelestialPosition::new("Sun", "Leo", 135.2),
        CelestialPosition::new("Moon", "Pisces", 340.75),
        CelestialPosition::new("Mercury", "Leo", 136.0),
        CelestialPosition::new("ASC", "Scorpio", 215.5),
    ]
}

#[test]
fn test_to_point_is_periodic() {
    let mut angle = 0.0;
    while angle < 360.0 {
        let a = to_point(angle, 80.0, center());
        let b = to_point(angle + 360.0, 80.0, center());
        assert!((a.x - b.x).abs() < EPS, "x differs at {angle}");
        assert!((a.y - b.y).abs() < EPS, "y differs at {angle}");
        angle += 7.5;
    }
}

#[test]
fn test_to_point_stays_on_radius() {
    for angle in [0.0, 12.34, 90.0, 181.0, 270.5, 359.99, -45.0, 725.0] {
        let p = to_point(angle, 80.0, center());
        assert!((p.distance_to(center()) - 80.0).abs() < EPS, "off radius at {angle}");
    }
}

#[test]
fn test_segments_partition_circle_for_any_size() {
    for size in [240.0, 320.0, 999.0] {
        let config = WheelConfig::with_size(size);
        let radii = RingRadii::from_config(&config);
        assert!(radii.outer > radii.middle && radii.middle > radii.entity);
        let ring = ChartSpecGenerator::with_config(config).zodiac_ring_shapes();
        assert_eq!(ring.len(), 3 + 2 * ZODIAC.len());

        let mut cursor = 0.0;
        for segment in ZODIAC.iter() {
            assert_eq!(segment.start_angle(), cursor);
            assert_eq!(segment.end_angle() - segment.start_angle(), 30.0);
            cursor = segment.end_angle();
        }
        assert_eq!(cursor, 360.0);
    }

    // every sampled degree falls in exactly one segment
    let mut angle = 0.0;
    while angle < 360.0 {
        let owners = ZODIAC.iter().filter(|s| s.contains(angle)).count();
        assert_eq!(owners, 1, "angle {angle} owned by {owners} segments");
        assert!(segment_for(angle).contains(angle));
        angle += 0.25;
    }
}

#[test]
fn test_static_ring_is_independent_of_chart() {
    let mut wheel = NatalWheel::default();
    let empty = wheel.spec();
    wheel.set_positions(sample_positions());
    let full = wheel.spec();
    let ring_len = 3 + ZODIAC.len() * 2;
    assert_eq!(empty.shapes[..ring_len], full.shapes[..ring_len]);
}

#[test]
fn test_jitter_moves_glyph_but_not_anchor() {
    let layout = place_entities(&sample_positions(), 80.0, center());
    for placement in &layout.placements {
        let expected_anchor = to_point(placement.position.angle, 80.0, center());
        assert!((placement.anchor.x - expected_anchor.x).abs() < EPS);
        let expected_point = to_point(
            placement.position.angle + jitter_for(placement.index),
            80.0,
            center(),
        );
        assert!((placement.point.y - expected_point.y).abs() < EPS);
    }
    // index 1 carries a 3° jitter, so the drawn point differs from the anchor
    assert!(layout.placements[1].point.distance_to(layout.placements[1].anchor) > 1.0);
}

#[test]
fn test_jitter_does_not_touch_reported_degrees() {
    let mut wheel = NatalWheel::default();
    wheel.set_positions(sample_positions());
    for index in 0..wheel.positions().len() {
        assert!(wheel.select(index));
        let detail = wheel.detail().expect("selected");
        let angle = wheel.positions()[index].angle;
        assert_eq!((detail.degrees, detail.minutes), sign_degree_minutes(angle));
    }
    // Moon at 340.75 with a 3° jitter still reads 10° 45'
    wheel.select(1);
    assert_eq!(wheel.detail().map(|d| d.position_label()), Some("10° 45'".to_string()));
}

#[test]
fn test_mesh_is_full_pairwise() {
    let layout = place_entities(&sample_positions(), 80.0, center());
    assert_eq!(layout.mesh.len(), 6);
    for line in &layout.mesh {
        assert!(line.from < line.to);
        assert_eq!(line.start, layout.placements[line.from].anchor);
        assert_eq!(line.end, layout.placements[line.to].anchor);
    }
}

#[test]
fn test_empty_and_single_lists_render_ring_only() {
    let mut wheel = NatalWheel::default();
    assert!(wheel.layout().is_empty());
    let spec = wheel.spec();
    assert_eq!(spec.metadata.entity_count, 0);
    assert_eq!(spec.metadata.mesh_line_count, 0);
    assert_eq!(spec.entity_glyphs().count(), 0);

    wheel.set_positions(vec![CelestialPosition::new("Sun", "Aries", 10.0)]);
    assert!(!wheel.layout().is_empty());
    let spec = wheel.spec();
    assert_eq!(spec.metadata.entity_count, 1);
    assert_eq!(spec.metadata.mesh_line_count, 0);
}

#[test]
fn test_click_selects_and_stops_propagation() {
    let mut wheel = NatalWheel::default();
    wheel.set_positions(sample_positions());

    let moon_point = wheel.layout().placements[1].point;
    assert_eq!(wheel.click(moon_point), Propagation::Stop);
    assert!(wheel.selection().is_selected(1));

    let asc_point = wheel.layout().placements[3].point;
    assert_eq!(wheel.click(asc_point), Propagation::Stop);
    assert!(wheel.selection().is_selected(3));

    // the center is covered only by mesh/tick lines
    assert_eq!(wheel.click(center()), Propagation::Continue);
    assert!(wheel.selection().is_selected(3));

    wheel.close();
    assert_eq!(*wheel.selection(), Selection::Unselected);
}

#[test]
fn test_mesh_lines_are_not_clickable() {
    let mut wheel = NatalWheel::default();
    wheel.set_positions(vec![
        CelestialPosition::new("Sun", "Aries", 0.0),
        CelestialPosition::new("Moon", "Libra", 180.0),
    ]);
    // midpoint of the Sun-Moon mesh line is the wheel center
    let mesh = &wheel.layout().mesh[0];
    let mid = Point {
        x: (mesh.start.x + mesh.end.x) / 2.0,
        y: (mesh.start.y + mesh.end.y) / 2.0,
    };
    assert_eq!(wheel.hit_test(mid), None);
}

#[test]
fn test_new_positions_clear_selection() {
    let mut wheel = NatalWheel::default();
    wheel.set_positions(sample_positions());
    wheel.select(0);
    assert!(wheel.detail().is_some());

    wheel.set_positions(sample_positions());
    assert_eq!(*wheel.selection(), Selection::Unselected);

    wheel.select(2);
    wheel.reset();
    assert!(wheel.positions().is_empty());
    assert!(wheel.detail().is_none());
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut wheel = NatalWheel::default();
    wheel.set_positions(sample_positions());
    assert!(!wheel.select(99));
    assert_eq!(*wheel.selection(), Selection::Unselected);
}
