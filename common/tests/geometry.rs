//! Geometry checks against the library as it ships (`no_std` float math),
//! not the std-backed build the unit tests see.

use level_common::widgets::bar::indicator_position;
use level_common::widgets::circle::indicator_offset;
use level_common::{AngleSample, Axis, CalibrationOffset, WidgetDescriptor, WidgetSet, render};

const MAIN: f32 = 100.0;
const BUBBLE: f32 = 15.0;

fn assert_close(
    a: f32,
    b: f32,
) {
    assert!((a - b).abs() < 1e-3, "{a} != {b}");
}

fn distance((dx, dy): (f32, f32)) -> f32 { (dx * dx + dy * dy).sqrt() }

#[test]
fn test_circle_scenario() {
    let circle = WidgetDescriptor::circle(0.0, 0.0, 2.0 * (MAIN + 10.0)).with_tolerance(2.0);

    assert_eq!(indicator_offset(AngleSample::ZERO, MAIN, BUBBLE), (0.0, 0.0));
    assert!(circle.classify(AngleSample::ZERO));

    let (dx, dy) = indicator_offset(AngleSample::new(45.0, 0.0), MAIN, BUBBLE);
    assert_close(dx, 0.0);
    assert_close(dy, -50.0);
    assert!(!circle.classify(AngleSample::new(45.0, 0.0)));

    let (dx, dy) = indicator_offset(AngleSample::new(90.0, 0.0), MAIN, BUBBLE);
    assert_close(dx, 0.0);
    assert_close(dy, -85.0);
}

#[test]
fn test_circle_near_limit_is_not_pulled_in() {
    let (dx, dy) = indicator_offset(AngleSample::new(70.0, 30.0), MAIN, BUBBLE);
    assert_close(dx, -100.0 / 3.0);
    assert_close(dy, -700.0 / 9.0);
}

#[test]
fn test_circle_clamp_sweep() {
    let limit = MAIN - BUBBLE;
    let mut beta = -1000.0f32;
    while beta <= 1000.0 {
        let mut gamma = -1000.0f32;
        while gamma <= 1000.0 {
            let offset = indicator_offset(AngleSample::new(beta, gamma), MAIN, BUBBLE);
            let unclamped = distance((gamma / 90.0 * MAIN, beta / 90.0 * MAIN));
            let expected = unclamped.min(limit);
            assert!(
                (distance(offset) - expected).abs() < 1e-2,
                "({beta}, {gamma}) landed at {} instead of {expected}",
                distance(offset)
            );
            gamma += 12.5;
        }
        beta += 13.0;
    }
}

#[test]
fn test_circle_huge_tilt_keeps_direction() {
    for magnitude in [1e20f32, 1e38, f32::MAX] {
        let (dx, dy) = indicator_offset(AngleSample::new(magnitude, magnitude), MAIN, BUBBLE);
        assert_close(distance((dx, dy)), MAIN - BUBBLE);
        assert_close(dx, dy);
        assert!(dy < 0.0);
    }
}

#[test]
fn test_bar_scenario() {
    assert_close(indicator_position(90.0, 0.0, 110.0, 12.0), -98.0);
    assert_close(indicator_position(200.0, 0.0, 110.0, 12.0), -98.0);

    let mut beta = -1000.0f32;
    while beta <= 1000.0 {
        let y = indicator_position(beta, 0.0, 110.0, 12.0);
        assert!((-98.0..=98.0).contains(&y), "beta {beta} escaped: {y}");
        beta += 0.5;
    }
}

#[test]
fn test_tolerance_boundary_and_calibration() {
    assert!(Axis::Both.is_level(AngleSample::new(1.99, -1.99), 2.0));
    assert!(!Axis::Both.is_level(AngleSample::new(2.0, 0.0), 2.0));

    let raw = AngleSample::new(17.25, -4.5);
    let mut offset = CalibrationOffset::new();
    offset.calibrate(offset.apply_offset(raw));
    assert_eq!(offset.apply_offset(raw), AngleSample::ZERO);
}

#[test]
fn test_render_through_public_api() {
    let widgets = WidgetSet::standard();
    let angles = AngleSample::new(90.0, 0.0);

    let small = render(&widgets, angles, 300).unwrap();
    let large = render(&widgets, angles, 600).unwrap();
    assert_eq!(small, render(&widgets, angles, 300).unwrap());

    // standard circle: center (120, 120), main radius 100, bubble 15
    let bubble = small.indicators()[0];
    assert_close(bubble.center.x, 120.0);
    assert_close(bubble.center.y, 35.0);
    assert!(!bubble.level);

    for index in 0..widgets.len() {
        let a = small.physical_indicator(index).unwrap();
        let b = large.physical_indicator(index).unwrap();
        assert_close(b.x, a.x * 2.0);
        assert_close(b.y, a.y * 2.0);
    }
}
