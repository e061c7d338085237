use super::*;

fn sample() -> TrafficDisplay {
    TrafficDisplay {
        level: TrafficLevel::Low,
        status_text: "LOW TRAFFIC".to_string(),
        vehicle_count: 9,
        fps: 60,
        precision: "98.5%".to_string(),
        density_text: "25%".to_string(),
        congestion_text: "Low".to_string(),
        density_bar_pct: 25,
        congestion_bar_pct: 25,
        theme: "low-traffic".to_string(),
    }
}

#[test]
fn board_keeps_latest_record() {
    let mut board = DisplayBoard::default();
    assert!(board.last().is_none());
    board.show(&sample());
    let mut second = sample();
    second.vehicle_count = 11;
    board.show(&second);
    assert_eq!(board.updates(), 2);
    assert_eq!(board.last().unwrap().vehicle_count, 11);
}

#[test]
fn channel_sink_forwards_records() {
    let (mut tx, rx) = mpsc::channel();
    tx.show(&sample());
    assert_eq!(rx.try_recv().unwrap(), sample());
}

#[test]
fn channel_sink_ignores_closed_receiver() {
    let (mut tx, rx) = mpsc::channel::<TrafficDisplay>();
    drop(rx);
    tx.show(&sample());
}

#[test]
fn exactly_one_control_is_active() {
    for level in TrafficLevel::ALL {
        let controls = LevelControls::for_level(level);
        assert_eq!(controls.buttons.iter().filter(|b| b.active).count(), 1);
        assert_eq!(controls.active(), level);
    }
}

#[test]
fn serializes_with_lowercase_level() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["level"], "low");
    assert_eq!(json["status_text"], "LOW TRAFFIC");
}
