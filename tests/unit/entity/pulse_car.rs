use super::*;
use crate::{foundation::core::Canvas, render::ops::DrawOp};

#[test]
fn grid_layout_is_four_per_row() {
    let c = PulseCar::grid(0);
    assert_eq!((c.x, c.base_y), (8.0, 15.0));
    let c = PulseCar::grid(3);
    assert_eq!((c.x, c.base_y), (44.0, 15.0));
    let c = PulseCar::grid(5);
    assert_eq!((c.x, c.base_y), (20.0, 35.0));
}

#[test]
fn bobs_around_base_line() {
    let mut c = PulseCar::grid(2);
    c.update(FrameCounter(0));
    assert!((c.y - (15.0 + 2.0_f64.sin() * 2.0)).abs() < 1e-12);

    for f in 0..500 {
        c.update(FrameCounter(f));
        assert!((c.y - c.base_y).abs() <= 2.0);
    }
}

#[test]
fn draw_emits_body_and_two_headlights() {
    let mut s = Surface::new(Canvas::new(80, 80).unwrap()).unwrap();
    PulseCar::grid(0).draw(&mut s);
    let rects: Vec<Rect> = s
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(8.0, 15.0, 18.0, 31.0),
            Rect::new(9.0, 28.0, 12.0, 30.0),
            Rect::new(14.0, 28.0, 17.0, 30.0),
        ]
    );
}
