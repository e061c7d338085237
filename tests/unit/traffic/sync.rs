use std::sync::mpsc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn sync() -> (TrafficSynchronizer, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let s = TrafficSynchronizer::new(Canvas::new(800, 450).unwrap(), &mut rng);
    (s, rng)
}

#[test]
fn starts_low_with_pool_sized() {
    let (s, _) = sync();
    assert_eq!(s.level(), TrafficLevel::Low);
    assert_eq!(s.pool().len(), 5);
    assert!(s.last_display().is_none());
}

#[test]
fn pool_follows_level_targets() {
    let (mut s, mut rng) = sync();
    let mut sizes = Vec::new();
    for level in [TrafficLevel::Medium, TrafficLevel::High, TrafficLevel::Low] {
        s.set_level(level, &mut rng);
        sizes.push(s.pool().len());
    }
    assert_eq!(sizes, vec![15, 30, 5]);

    s.set_level(TrafficLevel::Low, &mut rng);
    assert_eq!(s.pool().len(), 5);
}

#[test]
fn vehicle_count_stays_in_range() {
    let (mut s, mut rng) = sync();
    for _ in 0..50 {
        for level in TrafficLevel::ALL {
            let d = s.set_level(level, &mut rng);
            let (lo, hi) = level.profile().vehicles;
            assert!((lo..=hi).contains(&d.vehicle_count));
        }
    }
}

#[test]
fn display_carries_profile_values() {
    let (mut s, mut rng) = sync();
    let d = s.set_level(TrafficLevel::Medium, &mut rng);
    assert_eq!(d.status_text, "MEDIUM TRAFFIC");
    assert_eq!(d.fps, 55);
    assert_eq!(d.precision, "96.2%");
    assert_eq!(d.density_text, "60%");
    assert_eq!(d.congestion_text, "Medium");
    assert_eq!((d.density_bar_pct, d.congestion_bar_pct), (60, 60));
    assert_eq!(d.theme, "medium-traffic");
    assert_eq!(s.last_display(), Some(&d));
    assert_eq!(s.controls().active(), TrafficLevel::Medium);
}

#[test]
fn publishes_to_every_sink() {
    let (mut s, mut rng) = sync();
    let (tx_a, rx_a) = mpsc::channel();
    let (tx_b, rx_b) = mpsc::channel();
    s.subscribe(Box::new(tx_a));
    s.subscribe(Box::new(tx_b));

    let d = s.set_level(TrafficLevel::High, &mut rng);
    assert_eq!(rx_a.try_recv().unwrap(), d);
    assert_eq!(rx_b.try_recv().unwrap(), d);
}

#[test]
fn new_vehicles_spawn_inside_monitor_bounds() {
    let (mut s, mut rng) = sync();
    s.set_monitor_canvas(Canvas::new(100, 100).unwrap());
    s.set_level(TrafficLevel::High, &mut rng);
    for v in &s.pool().vehicles()[5..] {
        assert!((0.0..100.0).contains(&v.x));
    }
}
