//! End-to-end containment scenarios

use firebreak_core::{
    nearest_exit, Engine, FirebreakError, Link, NetworkBuilder, PathOutcome,
};

#[test]
fn chain_pursuit_cuts_link_entering_exit() {
    // 0 - 1 - 2 - 3, exit at 3, intruder at 0
    let mut net = NetworkBuilder::new(4)
        .with_links([(0, 1), (1, 2), (2, 3)])
        .exit(3)
        .build()
        .unwrap();
    net.set_intruder_position(0);

    let outcome = nearest_exit(&net).unwrap();
    assert_eq!(outcome, PathOutcome::Path(vec![0, 1, 2, 3]));

    let cut = firebreak_core::select_cut(&net, &outcome).unwrap();
    assert_eq!((cut.a, cut.b), (3, 2));
}

#[test]
fn intruder_on_sole_exit_falls_back_to_incident_link() {
    let mut net = NetworkBuilder::new(3)
        .with_links([(0, 2), (1, 2)])
        .exit(2)
        .build()
        .unwrap();
    net.set_intruder_position(2);

    let outcome = nearest_exit(&net).unwrap();
    assert_eq!(outcome, PathOutcome::AlreadyThere);

    let cut = firebreak_core::select_cut(&net, &outcome).unwrap();
    assert_eq!(cut.a, 2);
    assert!(cut.b == 0 || cut.b == 1);
    assert!(net.has_link(cut.a, cut.b));
}

#[test]
fn intruder_on_sole_exit_with_no_links_fails() {
    let mut net = NetworkBuilder::new(3)
        .link(0, 1)
        .exit(2)
        .build()
        .unwrap();
    net.set_intruder_position(2);

    let outcome = nearest_exit(&net).unwrap();
    assert_eq!(outcome, PathOutcome::AlreadyThere);
    assert_eq!(
        firebreak_core::select_cut(&net, &outcome).unwrap_err(),
        FirebreakError::NodeIsolated(2)
    );
}

#[test]
fn disconnected_isolated_intruder_produces_no_cut() {
    // exit in another component, intruder with zero links
    let mut engine = Engine::new(
        NetworkBuilder::new(4)
            .with_links([(1, 2), (2, 3)])
            .exit(3)
            .build()
            .unwrap(),
    );
    let err = engine.play_round(0).unwrap_err();
    assert_eq!(err, FirebreakError::NodeIsolated(0));
    assert!(err.is_round_failure());
    // nothing was removed
    assert_eq!(engine.network().link_count(), 2);
}

#[test]
fn equidistant_exits_selected_cut_is_a_real_link() {
    // exits 2 and 3, both two links from the intruder at 0
    let mut net = NetworkBuilder::new(4)
        .with_links([(0, 1), (1, 2), (1, 3)])
        .with_exits([2, 3])
        .build()
        .unwrap();
    net.set_intruder_position(0);

    let outcome = nearest_exit(&net).unwrap();
    assert_eq!(outcome.link_len(), 2);

    let cut = firebreak_core::select_cut(&net, &outcome).unwrap();
    assert!(net.has_link(cut.a, cut.b));
    assert!(net.is_exit(cut.a));
    assert_eq!(cut.b, 1);
}

#[test]
fn containment_runs_to_exhaustion() {
    // diamond with a tail: the engine severs a link every round until
    // the intruder is walled off, then rounds fail without crashing
    let mut engine = Engine::new(
        NetworkBuilder::new(6)
            .with_links([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)])
            .exit(5)
            .build()
            .unwrap(),
    );

    let mut cuts: Vec<Link> = Vec::new();
    for _ in 0..10 {
        match engine.play_round(0) {
            Ok(cut) => cuts.push(cut),
            Err(err) => assert!(err.is_round_failure()),
        }
    }

    // every reported cut was distinct
    let mut canonical: Vec<_> = cuts.iter().map(Link::canonical).collect();
    canonical.sort_unstable();
    canonical.dedup();
    assert_eq!(canonical.len(), cuts.len());

    // the intruder can no longer reach the exit
    let outcome = nearest_exit(engine.network()).unwrap();
    assert!(!outcome.is_path());

    let stats = engine.stats();
    assert_eq!(stats.rounds, 10);
    assert_eq!(stats.cuts, cuts.len() as u64);
    assert_eq!(stats.failed_rounds, 10 - cuts.len() as u64);
}

#[test]
fn pursuit_tracks_moving_intruder() {
    // star: hub 0 connected to exits 1..=4; the intruder camps on the hub
    let mut engine = Engine::new(
        NetworkBuilder::new(5)
            .with_links([(0, 1), (0, 2), (0, 3), (0, 4)])
            .with_exits([1, 2, 3, 4])
            .build()
            .unwrap(),
    );

    for round in 0..4 {
        let cut = engine.play_round(0).unwrap();
        assert_eq!(cut.b, 0, "round {round}: hub side second");
        assert!(engine.network().is_exit(cut.a));
    }
    // hub fully isolated now
    assert_eq!(
        engine.play_round(0).unwrap_err(),
        FirebreakError::NodeIsolated(0)
    );
}
