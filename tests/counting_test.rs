use footfall_rs::{
    CountingSession, Detection, DetectionBuilder, DrawInstruction, Error, Point, SessionConfig,
    Zone, ZoneLayout,
};

/// Person box whose bottom-left corner sits at `(x, y)`.
fn person(id: u64, x: f32, y: f32) -> Detection {
    DetectionBuilder::new()
        .tlbr(x, y - 90.0, x + 45.0, y)
        .track_id(id)
        .class_label("person")
        .build()
}

fn session() -> CountingSession {
    CountingSession::new(SessionConfig::default()).unwrap()
}

#[test]
fn test_doorway_enter_scenario() {
    let mut session = session();

    // Frame 1: anchor inside area2 (the outer side of the doorway).
    let r1 = session.process(&[person(7, 250.0, 470.0)], false);
    assert!(r1.enter_events.is_empty());
    assert_eq!(r1.total_entered, 0);

    // Frame 2: anchor inside area1.
    let r2 = session.process(&[person(7, 300.0, 480.0)], false);
    assert_eq!(r2.enter_events, vec![7]);
    assert!(r2.exit_events.is_empty());
    assert_eq!(r2.total_entered, 1);
    assert_eq!(r2.total_exited, 0);
}

#[test]
fn test_direction_matters() {
    let mut session = session();

    // Outside, then area2, then area1: enter only on the third frame.
    let r1 = session.process(&[person(1, 100.0, 100.0)], false);
    let r2 = session.process(&[person(1, 250.0, 470.0)], false);
    let r3 = session.process(&[person(1, 300.0, 480.0)], false);
    assert!(r1.enter_events.is_empty());
    assert!(r2.enter_events.is_empty());
    assert_eq!(r3.enter_events, vec![1]);

    // Never in area2 before area1: sitting in area1 never counts as enter.
    for _ in 0..5 {
        let r = session.process(&[person(2, 350.0, 520.0)], false);
        assert!(r.enter_events.is_empty());
    }
    assert_eq!(session.totals().0, 1);
}

#[test]
fn test_walk_through_and_back_counts_once_each() {
    let mut session = session();
    let path = [(250.0, 470.0), (300.0, 480.0), (400.0, 560.0)];

    let mut entered = 0;
    let mut exited = 0;
    for _ in 0..4 {
        for &(x, y) in path.iter().chain(path.iter().rev()) {
            let r = session.process(&[person(11, x, y)], false);
            entered += r.enter_events.len();
            exited += r.exit_events.len();
        }
    }

    assert_eq!(entered, 1);
    assert_eq!(exited, 1);
    assert_eq!(session.totals(), (1, 1));
}

#[test]
fn test_totals_never_decrease() {
    let mut session = session();
    let frames = [
        vec![person(1, 250.0, 470.0), person(2, 350.0, 520.0)],
        vec![person(1, 300.0, 480.0), person(2, 400.0, 560.0)],
        vec![],
        vec![person(3, 250.0, 470.0)],
        vec![person(3, 300.0, 480.0), person(1, 250.0, 470.0)],
    ];

    let mut last = (0, 0);
    for batch in &frames {
        let r = session.process(batch, false);
        assert!(r.total_entered >= last.0);
        assert!(r.total_exited >= last.1);
        last = (r.total_entered, r.total_exited);
    }
    assert_eq!(last, (2, 2));
}

#[test]
fn test_trail_keeps_last_fifty_centroids() {
    let mut session = session();
    for i in 0..55 {
        session.process(&[person(5, 600.0 + i as f32, 300.0)], false);
    }

    let xs: Vec<f32> = session.trajectories().points(5).map(|p| p.x).collect();
    assert_eq!(xs.len(), 50);
    assert_eq!(xs[0], 627.5);
    assert_eq!(xs[49], 676.5);

    let r = session.process(&[], false);
    assert!(
        !r.draw
            .iter()
            .any(|d| matches!(d, DrawInstruction::Segment { .. }))
    );
}

#[test]
fn test_snapshot_leaves_raw_grid_alone() {
    let mut session = session();
    session.process(&[person(1, 600.0, 300.0), person(2, 100.0, 100.0)], false);
    session.process(&[person(1, 600.0, 300.0)], false);

    let before = session.density().raw().clone();
    let r = session.process(&[], true);
    assert!(r.density.is_some());
    assert_eq!(session.density().raw(), &before);
}

#[test]
fn test_edge_detections_are_ignored_by_density() {
    let mut session = session();
    // Centroid lands below the 600 px frame.
    session.process(&[person(1, 500.0, 700.0)], false);
    assert!(session.density().raw().iter().all(|&v| v == 0));
    assert_eq!(session.trajectories().len(), 1);
}

#[test]
fn test_restart_forgets_everything() {
    let mut session = session();
    session.process(&[person(1, 250.0, 470.0), person(2, 250.0, 470.0)], false);
    session.process(&[person(1, 300.0, 480.0)], false);
    assert_eq!(session.totals(), (1, 0));

    // Identity 2 is mid-crossing when the restart happens.
    session.restart();
    assert_eq!(session.totals(), (0, 0));
    assert!(session.tracker().is_empty());
    assert!(session.trajectories().is_empty());
    assert!(session.density().raw().iter().all(|&v| v == 0));

    let r = session.process(&[person(2, 300.0, 480.0)], false);
    assert!(r.enter_events.is_empty());
    assert_eq!(r.total_entered, 0);
}

#[test]
fn test_degenerate_zone_aborts_construction() {
    let err = Zone::new("line", vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]).unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));
}

#[test]
fn test_three_zone_layout() {
    let zones = vec![
        Zone::from_pixels("street", &[(0, 0), (100, 0), (100, 50), (0, 50)]).unwrap(),
        Zone::from_pixels("lobby", &[(0, 50), (100, 50), (100, 100), (0, 100)]).unwrap(),
        Zone::from_pixels("hall", &[(100, 50), (200, 50), (200, 100), (100, 100)]).unwrap(),
    ];
    let layout = ZoneLayout::from_names(
        zones,
        &[("arrive", "street", "lobby"), ("proceed", "lobby", "hall")],
    )
    .unwrap();
    let mut session = CountingSession::with_layout(SessionConfig::default(), layout);

    session.process(&[person(1, 20.0, 25.0)], false);
    session.process(&[person(1, 20.0, 75.0)], false);
    let r = session.process(&[person(1, 150.0, 75.0)], false);

    // No enter/exit transitions in this layout.
    assert_eq!(r.total_entered, 0);
    assert_eq!(r.total_exited, 0);
    assert_eq!(
        r.totals,
        vec![("arrive".to_string(), 1), ("proceed".to_string(), 1)]
    );
}
