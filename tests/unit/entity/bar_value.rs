use super::*;

#[test]
fn grows_by_step_until_target() {
    let mut b = BarValue::new(1.2);
    b.update();
    assert_eq!(b.height, 0.5);
    b.update();
    assert_eq!(b.height, 1.0);
    b.update();
    assert_eq!(b.height, 1.2);
    assert!(b.is_settled());
    b.update();
    assert_eq!(b.height, 1.2);
}

#[test]
fn reaches_integer_target_in_expected_frames() {
    let mut b = BarValue::new(40.0);
    for _ in 0..80 {
        b.update();
    }
    assert_eq!(b.height, 40.0);
    b.update();
    assert_eq!(b.height, 40.0);
}

#[test]
fn never_shrinks_when_above_target() {
    let mut b = BarValue {
        height: 10.0,
        target: 5.0,
    };
    b.update();
    assert_eq!(b.height, 10.0);
}
