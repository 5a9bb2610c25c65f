//! Property tests for the search and removal invariants

use std::collections::BTreeSet;

use proptest::prelude::*;

use firebreak_core::{nearest_exit, shortest_path, Link, Network, NetworkBuilder, PathOutcome};

const INF: usize = usize::MAX;

/// All-pairs distances by Floyd–Warshall, as a slow reference
fn reference_distances(network: &Network) -> Vec<Vec<usize>> {
    let n = network.node_count();
    let mut dist = vec![vec![INF; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for link in network.links() {
        dist[link.a][link.b] = 1;
        dist[link.b][link.a] = 1;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] != INF && dist[k][j] != INF {
                    dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                }
            }
        }
    }
    dist
}

/// Random node count plus a deduplicated undirected link set
fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..20).prop_flat_map(|n| {
        let links = prop::collection::vec((0..n, 0..n), 0..n * 3).prop_map(|raw| {
            let canonical: BTreeSet<(usize, usize)> = raw
                .into_iter()
                .filter(|&(a, b)| a != b)
                .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
                .collect();
            canonical.into_iter().collect::<Vec<_>>()
        });
        (Just(n), links)
    })
}

fn build(n: usize, links: &[(usize, usize)]) -> Network {
    NetworkBuilder::new(n)
        .with_links(links.iter().copied())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn bfs_length_matches_reference((n, links) in arb_network()) {
        let net = build(n, &links);
        let dist = reference_distances(&net);
        for start in 0..n {
            for end in 0..n {
                match shortest_path(&net, start, end) {
                    PathOutcome::AlreadyThere => prop_assert_eq!(start, end),
                    PathOutcome::Unreachable => {
                        prop_assert_ne!(start, end);
                        prop_assert_eq!(dist[start][end], INF);
                    }
                    PathOutcome::Path(path) => {
                        prop_assert_eq!(path.len() - 1, dist[start][end]);
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_path_walks_real_links((n, links) in arb_network()) {
        let net = build(n, &links);
        for start in 0..n {
            for end in 0..n {
                if let PathOutcome::Path(path) = shortest_path(&net, start, end) {
                    prop_assert_eq!(path[0], start);
                    prop_assert_eq!(*path.last().unwrap(), end);
                    for pair in path.windows(2) {
                        prop_assert!(net.has_link(pair[0], pair[1]));
                    }
                }
            }
        }
    }

    #[test]
    fn nearest_exit_is_min_over_reachable_exits(
        (n, links) in arb_network(),
        exit_picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
        start_pick in any::<prop::sample::Index>(),
    ) {
        let exits: BTreeSet<usize> = exit_picks.iter().map(|ix| ix.index(n)).collect();
        let start = start_pick.index(n);
        let mut net = NetworkBuilder::new(n)
            .with_links(links.iter().copied())
            .with_exits(exits.iter().copied())
            .build()
            .unwrap();
        net.set_intruder_position(start as i64);

        let dist = reference_distances(&net);
        let best = exits
            .iter()
            .filter(|&&e| e != start)
            .map(|&e| dist[start][e])
            .min()
            .unwrap_or(INF);

        match nearest_exit(&net).unwrap() {
            PathOutcome::Path(path) => prop_assert_eq!(path.len() - 1, best),
            PathOutcome::AlreadyThere => {
                prop_assert!(exits.contains(&start));
                prop_assert_eq!(best, INF);
            }
            PathOutcome::Unreachable => {
                prop_assert!(!exits.contains(&start));
                prop_assert_eq!(best, INF);
            }
        }
    }

    #[test]
    fn removal_only_affects_the_removed_link(
        (n, links) in arb_network(),
        victim_pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!links.is_empty());
        let mut net = build(n, &links);
        let victim = net.links()[victim_pick.index(net.link_count())];

        net.remove_link(&victim);

        prop_assert!(!net.has_link(victim.a, victim.b));
        prop_assert!(!net.neighbors(victim.a).contains(&victim.b));
        prop_assert!(!net.neighbors(victim.b).contains(&victim.a));

        let remaining: BTreeSet<(usize, usize)> =
            net.links().iter().map(Link::canonical).collect();
        let expected: BTreeSet<(usize, usize)> = links
            .iter()
            .copied()
            .filter(|&pair| pair != victim.canonical())
            .collect();
        prop_assert_eq!(&remaining, &expected);

        // second removal of the same link is a no-op
        net.remove_link(&victim);
        let after: BTreeSet<(usize, usize)> =
            net.links().iter().map(Link::canonical).collect();
        prop_assert_eq!(&after, &expected);
    }
}
