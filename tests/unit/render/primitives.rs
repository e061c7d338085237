use super::*;
use crate::foundation::core::Canvas;

fn surface() -> Surface {
    Surface::new(Canvas::new(100, 50).unwrap()).unwrap()
}

#[test]
fn each_primitive_records_one_op() {
    let mut s = surface();
    fill_circle(&mut s, Point::new(5.0, 5.0), 2.0, Rgba8::WHITE);
    stroke_rect(&mut s, Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, Rgba8::BLACK);
    line(&mut s, Point::ZERO, Point::new(10.0, 0.0), 1.0, Rgba8::WHITE);
    assert_eq!(s.ops().len(), 3);
}

#[test]
fn fade_covers_whole_surface() {
    let mut s = surface();
    let wash = Rgba8::rgb(15, 23, 42).with_alpha(0.1);
    fade(&mut s, wash);
    assert_eq!(
        s.ops(),
        &[DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
            paint: Paint::Solid(wash),
        }]
    );
}

#[test]
fn clear_discards_earlier_ops() {
    let mut s = surface();
    fill_rect(&mut s, Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::WHITE);
    fill_rect(&mut s, Rect::new(1.0, 1.0, 2.0, 2.0), Rgba8::WHITE);
    clear(&mut s);
    fill_circle(&mut s, Point::new(1.0, 1.0), 1.0, Rgba8::WHITE);
    assert_eq!(s.ops().len(), 2);
    assert!(s.ops()[0].is_clear());
}

#[test]
fn dashed_line_keeps_phase() {
    let mut s = surface();
    let dash = Dash {
        on: 20.0,
        off: 15.0,
        offset: 6.0,
    };
    dashed_line(&mut s, Point::ZERO, Point::new(0.0, 50.0), 3.0, Rgba8::WHITE, dash);
    let DrawOp::Line { dash: Some(d), .. } = &s.ops()[0] else {
        panic!("expected dashed line");
    };
    assert_eq!(d.offset, 6.0);
    assert_eq!(d.period(), 35.0);
}

#[test]
fn resize_drops_pending_ops_and_take_empties() {
    let mut s = surface();
    fill_rect(&mut s, Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::WHITE);
    s.resize(100, 50).unwrap();
    assert_eq!(s.ops().len(), 1);
    s.resize(200, 80).unwrap();
    assert!(s.ops().is_empty());
    assert_eq!(s.canvas(), Canvas::new(200, 80).unwrap());

    text(&mut s, Point::ZERO, "ID:7", 10.0, Rgba8::BLACK, TextAlign::Start);
    assert_eq!(s.take_ops().len(), 1);
    assert!(s.ops().is_empty());
    assert!(s.resize(0, 10).is_err());
}
