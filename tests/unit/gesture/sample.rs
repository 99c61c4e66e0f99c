use super::*;

#[test]
fn single_finger_swipe() {
    let start = TouchSample::new(vec![Point::new(100.0, 50.0)], 1_000.0);
    let end = TouchSample::new(vec![Point::new(40.0, 58.0)], 1_020.0);

    let m = measure(&start, &end);
    assert_eq!(m.center, Point::new(40.0, 58.0));
    assert_eq!(m.delta, Vec2::new(-60.0, 8.0));
    assert_eq!(m.delta_time, 20.0);
    assert_eq!(m.velocity, Velocity { x: 3.0, y: 0.4 });
    assert_eq!(m.direction, Direction::Left);
    assert!((m.distance - (60.0f64.powi(2) + 8.0f64.powi(2)).sqrt()).abs() < 1e-9);
    assert_eq!(m.scale, 1.0);
    assert_eq!(m.rotation, 0.0);
    assert_eq!(m.touch_count, 1);
}

#[test]
fn pinch_reports_scale_and_keeps_center() {
    let start = TouchSample::new(vec![Point::new(40.0, 0.0), Point::new(60.0, 0.0)], 0.0);
    let end = TouchSample::new(vec![Point::new(30.0, 0.0), Point::new(70.0, 0.0)], 16.0);

    let m = measure(&start, &end);
    assert_eq!(m.center, Point::new(50.0, 0.0));
    assert_eq!(m.delta, Vec2::ZERO);
    assert_eq!(m.velocity, Velocity::ZERO);
    assert_eq!(m.scale, 2.0);
    assert!(m.rotation.abs() < 1e-9);
    assert_eq!(m.touch_count, 2);
}

#[test]
fn simultaneous_samples_have_zero_velocity() {
    let start = TouchSample::new(vec![Point::new(0.0, 0.0)], 5.0);
    let end = TouchSample::new(vec![Point::new(10.0, 10.0)], 5.0);
    assert_eq!(measure(&start, &end).velocity, Velocity::ZERO);
}

#[test]
fn sample_deserializes_from_json() {
    let s: TouchSample =
        serde_json::from_str(r#"{"touches":[{"x":1.0,"y":2.0}],"time_ms":3.0}"#).unwrap();
    assert_eq!(s.touches, vec![Point::new(1.0, 2.0)]);
    assert_eq!(s.time_ms, 3.0);
}
