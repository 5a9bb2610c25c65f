//! Containment Demonstration
//!
//! Plays a full containment episode on a small network and prints the
//! cut chosen each round. It shows how to:
//!
//! 1. Build a network with links and exits
//! 2. Drive the engine round by round
//! 3. Watch the pursuit outcome shrink as links disappear

use firebreak_core::prelude::*;

fn main() {
    println!("=== Containment Demonstration ===\n");

    // Diamond with a tail: the intruder at 0, the exit at 5
    //
    //   0 - 1       4 - 5
    //   |   |      /
    //   2 - 3 ----
    let network = NetworkBuilder::new(6)
        .with_links([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)])
        .exit(5)
        .build()
        .expect("valid network");

    println!("start: {network}\n");
    let mut engine = Engine::new(network);

    // The intruder keeps pressing toward the exit from node 3
    for position in [0i64, 0, 3, 3] {
        match engine.play_round(position) {
            Ok(cut) => println!(
                "round {}: intruder at {position}, severed {cut}",
                engine.round()
            ),
            Err(err) => println!("round {}: no cut ({err})", engine.round()),
        }
    }

    let stats = engine.stats();
    println!(
        "\n{} rounds, {} cuts, {} failed",
        stats.rounds, stats.cuts, stats.failed_rounds
    );
    println!("end: {}", engine.network());
}
