use super::*;
use crate::{
    foundation::{
        core::{Canvas, FrameCounter},
        rng::SiteRng,
    },
    render::ops::{DrawOp, Paint},
    traffic::sync::TrafficSynchronizer,
};

fn run(widget: &mut dyn Widget, canvas: Canvas) -> (StepOutcome, Surface) {
    let mut rng = SiteRng::default();
    let mut traffic = TrafficSynchronizer::new(canvas, &mut rng.0);
    let mut surface = Surface::new(canvas).unwrap();
    let mut ctx = FrameCtx {
        frame: FrameCounter(0),
        traffic: &mut traffic,
        rng: &mut rng,
    };
    let outcome = widget.step(&mut surface, &mut ctx).unwrap();
    (outcome, surface)
}

#[test]
fn profile_icon_draws_head_and_shoulders_once() {
    let (outcome, surface) = run(&mut ProfileIcon, Canvas::new(40, 40).unwrap());
    assert_eq!(outcome, StepOutcome::Done);
    let ops = surface.ops();
    assert!(matches!(
        &ops[1],
        DrawOp::FillCircle { center, radius, .. } if *center == Point::new(20.0, 17.0) && *radius == 8.0
    ));
    let DrawOp::FillPolygon { points, .. } = &ops[2] else {
        panic!("expected shoulders");
    };
    // Upper half-disc: nothing below the base line.
    assert!(points.iter().all(|p| p.y <= 32.0 + 1e-9));
    assert!(points.iter().any(|p| (p.y - 20.0).abs() < 1e-9));
}

#[test]
fn avatar_shows_initials_over_gradient_disc() {
    let mut avatar = Avatar::new("Ada Lovelace");
    assert_eq!(avatar.initials(), "AL");
    assert_eq!(avatar.label(), "avatar_ada_lovelace");

    let (outcome, surface) = run(&mut avatar, Canvas::new(120, 120).unwrap());
    assert_eq!(outcome, StepOutcome::Done);
    let ops = surface.ops();
    assert!(matches!(
        &ops[1],
        DrawOp::FillCircle { radius, paint: Paint::Linear(_), .. } if *radius == 60.0
    ));
    assert!(matches!(
        &ops[2],
        DrawOp::FillCircle { radius, .. } if *radius == 55.0
    ));
    assert!(matches!(
        &ops[3],
        DrawOp::Text { content, size_px, align: TextAlign::CenterMiddle, .. }
            if content == "AL" && *size_px == 48.0
    ));
}

#[test]
fn methodology_has_five_steps_and_four_arrows() {
    let (outcome, surface) = run(&mut MethodologyChart, Canvas::new(400, 300).unwrap());
    assert_eq!(outcome, StepOutcome::Done);
    let ops = surface.ops();

    let labels: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            "Upload Video",
            "Extract Frames",
            "YOLO-V4 Detection",
            "Deep SORT Tracking",
            "Display Results"
        ]
    );
    let heads = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::FillPolygon { .. }))
        .count();
    assert_eq!(heads, 4);
    assert_eq!(MethodologyChart::step_box(50.0), Rect::new(50.0, 35.0, 350.0, 65.0));
}
