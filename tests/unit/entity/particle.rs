use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::render::ops::{DrawOp, Paint};

fn canvas() -> Canvas {
    Canvas::new(200, 100).unwrap()
}

#[test]
fn spawn_stays_inside_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let p = Particle::spawn(canvas(), &mut rng);
        assert!((0.0..200.0).contains(&p.x));
        assert!((0.0..100.0).contains(&p.y));
        assert!((0.0..FAR_PLANE).contains(&p.z));
        assert!((1.0..3.0).contains(&p.vz));
        assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
    }
}

#[test]
fn crossing_near_plane_respawns_on_same_update() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut p = Particle {
        x: 10.0,
        y: 10.0,
        z: 2.0,
        vx: 0.0,
        vy: 0.0,
        vz: 1.5,
    };
    p.update(canvas(), &mut rng);
    assert_eq!(p.z, FAR_PLANE);
    assert!((0.0..200.0).contains(&p.x));
    assert!((0.0..100.0).contains(&p.y));
}

#[test]
fn landing_exactly_on_near_plane_respawns() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut p = Particle {
        x: 10.0,
        y: 10.0,
        z: 3.0,
        vx: 0.0,
        vy: 0.0,
        vz: 2.0,
    };
    p.update(canvas(), &mut rng);
    assert_eq!(p.z, FAR_PLANE);
}

#[test]
fn depth_decreases_by_its_velocity() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut p = Particle {
        x: 50.0,
        y: 50.0,
        z: 500.0,
        vx: 0.2,
        vy: -0.1,
        vz: 2.0,
    };
    p.update(canvas(), &mut rng);
    assert_eq!(p.z, 498.0);
    assert!((p.x - 50.2).abs() < 1e-9);
    assert!((p.y - 49.9).abs() < 1e-9);
}

#[test]
fn leaving_horizontal_bound_reflects_velocity() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut p = Particle {
        x: 199.9,
        y: 50.0,
        z: 500.0,
        vx: 0.25,
        vy: 0.0,
        vz: 1.0,
    };
    p.update(canvas(), &mut rng);
    assert!(p.vx < 0.0);

    p.update(canvas(), &mut rng);
    assert!(p.x < 200.0);
}

#[test]
fn projection_and_opacity_follow_depth() {
    let near = Particle {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        vx: 0.0,
        vy: 0.0,
        vz: 1.0,
    };
    assert_eq!(near.scale(), 1.0);
    assert_eq!(near.opacity(), 1.0);
    assert_eq!(near.projected(canvas()), Point::new(0.0, 0.0));

    let far = Particle {
        z: FAR_PLANE,
        ..near
    };
    assert_eq!(far.scale(), 0.5);
    assert_eq!(far.opacity(), 0.0);
    // Halfway toward the center at scale 0.5.
    assert_eq!(far.projected(canvas()), Point::new(50.0, 25.0));
}

#[test]
fn draw_emits_scaled_translucent_circle() {
    let mut s = Surface::new(canvas()).unwrap();
    let p = Particle {
        x: 100.0,
        y: 50.0,
        z: 500.0,
        vx: 0.0,
        vy: 0.0,
        vz: 1.0,
    };
    p.draw(&mut s);
    let DrawOp::FillCircle {
        center,
        radius,
        paint: Paint::Solid(c),
    } = &s.ops()[0]
    else {
        panic!("expected a filled circle");
    };
    assert_eq!(*center, Point::new(100.0, 50.0));
    assert!((radius - 2.0 * (1000.0 / 1500.0)).abs() < 1e-9);
    assert_eq!(c.a, 128);
}
