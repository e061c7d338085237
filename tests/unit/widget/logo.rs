use super::*;
use crate::{
    foundation::{core::Canvas, rng::SiteRng},
    render::ops::{DrawOp, Paint},
    traffic::sync::TrafficSynchronizer,
};

#[test]
fn default_cycle_boundaries() {
    assert_eq!(LightPhase::at(FrameCounter(0)), LightPhase::Red);
    assert_eq!(LightPhase::at(FrameCounter(59)), LightPhase::Red);
    assert_eq!(LightPhase::at(FrameCounter(60)), LightPhase::Amber);
    assert_eq!(LightPhase::at(FrameCounter(119)), LightPhase::Amber);
    assert_eq!(LightPhase::at(FrameCounter(120)), LightPhase::Green);
    assert_eq!(LightPhase::at(FrameCounter(179)), LightPhase::Green);
    assert_eq!(LightPhase::at(FrameCounter(180)), LightPhase::Red);
}

#[test]
fn custom_cycle_scales_phases() {
    let cycle = LightCycle {
        period: 30,
        phase_len: 10,
    };
    assert_eq!(cycle.phase(FrameCounter(9)), LightPhase::Red);
    assert_eq!(cycle.phase(FrameCounter(10)), LightPhase::Amber);
    assert_eq!(cycle.phase(FrameCounter(25)), LightPhase::Green);
    assert_eq!(cycle.phase(FrameCounter(31)), LightPhase::Red);
}

#[test]
fn invalid_cycle_is_rejected() {
    assert!(
        TrafficLightLogo::new(LightCycle {
            period: 180,
            phase_len: 0
        })
        .is_err()
    );
    assert!(
        TrafficLightLogo::new(LightCycle {
            period: 10,
            phase_len: 60
        })
        .is_err()
    );
}

fn lamp_colors(frame: u64) -> Vec<Rgba8> {
    let canvas = Canvas::new(40, 40).unwrap();
    let mut rng = SiteRng::default();
    let mut traffic = TrafficSynchronizer::new(canvas, &mut rng.0);
    let mut logo = TrafficLightLogo::default();
    let mut surface = Surface::new(canvas).unwrap();
    let mut ctx = FrameCtx {
        frame: FrameCounter(frame),
        traffic: &mut traffic,
        rng: &mut rng,
    };
    logo.step(&mut surface, &mut ctx).unwrap();

    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillCircle {
                radius,
                paint: Paint::Solid(c),
                ..
            } if *radius == 4.0 => Some(*c),
            _ => None,
        })
        .collect()
}

#[test]
fn exactly_one_lamp_is_lit() {
    let red = LightPhase::Red.color();
    let amber = LightPhase::Amber.color();
    let green = LightPhase::Green.color();
    let off = Rgba8::hex(0x334155);

    assert_eq!(lamp_colors(0), vec![red, off, off]);
    assert_eq!(lamp_colors(90), vec![off, amber, off]);
    assert_eq!(lamp_colors(150), vec![off, off, green]);
}
