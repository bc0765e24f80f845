use std::collections::HashSet;

use vertexwalk::{Endpoint, GraphDescription, TraversalError, VertexGraph};

#[test]
fn three_cycle_scenario() {
    VertexGraph::new(|mut graph| {
        // A(1) -> B(2) -> C(3) -> A
        let a = graph.add_vertex(1i32);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        graph.add_edge(a, b);
        graph.add_edge(b, c);
        graph.add_edge(c, a);

        let walk = graph.traversal();
        assert_eq!(walk.reachable(Some(a)), HashSet::from([a, b, c]));
        assert_eq!(walk.max(Some(a)), Some(&3));
        assert_eq!(walk.max_or_min(Some(a)), 3);
        assert!(walk.leaves(Some(a)).is_empty());
        assert!(walk.has_strictly_increasing_path(Some(a), Some(c)).unwrap());
        assert!(!walk.has_strictly_increasing_path(Some(c), Some(a)).unwrap());
        assert!(!walk.all_odd(Some(a)));
    });
}

#[test]
fn isolated_vertex_scenario() {
    VertexGraph::new(|mut graph| {
        let x = graph.add_vertex(5i32);

        let walk = graph.traversal();
        assert_eq!(walk.leaves(Some(x)), HashSet::from([x]));
        assert_eq!(walk.max(Some(x)), Some(&5));
        assert!(walk.all_odd(Some(x)));
        assert_eq!(walk.reachable(Some(x)), HashSet::from([x]));
    });
}

#[test]
fn absent_start_scenario() {
    VertexGraph::new(|mut graph| {
        let x = graph.add_vertex(5i32);

        let walk = graph.traversal();
        assert!(walk.reachable(None).is_empty());
        assert_eq!(walk.max(None), None);
        assert_eq!(walk.max_or_min(None), i32::MIN);
        assert!(walk.leaves(None).is_empty());
        assert!(walk.all_odd(None));

        let mut out: Vec<u8> = Vec::new();
        walk.write_vertex_vals(None, &mut out).unwrap();
        assert!(out.is_empty());

        let err = walk.has_strictly_increasing_path(None, Some(x)).unwrap_err();
        assert!(matches!(err, TraversalError::MissingEndpoint(Endpoint::Start)));
    });
}

#[test]
fn printing_matches_reachable_set() {
    let text = r#"{
        "vertices": [
            { "value": 3, "neighbors": [1, 2] },
            { "value": 7, "neighbors": [2, 0] },
            { "value": 34, "neighbors": [3] },
            { "value": 11 },
            { "value": 99, "neighbors": [0] }
        ]
    }"#;
    let description = GraphDescription::<i64>::from_json(text).unwrap();

    VertexGraph::from_description(&description, |graph, ids| {
        let walk = graph.traversal();

        let mut out = Vec::new();
        walk.write_vertex_vals(Some(ids[0]), &mut out).unwrap();
        let mut printed: Vec<i64> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| line.parse().unwrap())
            .collect();
        printed.sort_unstable();

        let mut expected: Vec<i64> = walk
            .reachable(Some(ids[0]))
            .into_iter()
            .map(|v| *graph.value(v))
            .collect();
        expected.sort_unstable();

        assert_eq!(printed, vec![3, 7, 11, 34]);
        assert_eq!(printed, expected);
        assert_eq!(walk.leaves(Some(ids[0])), HashSet::from([ids[3]]));
        assert_eq!(walk.max(Some(ids[0])), Some(&34));
        assert_eq!(walk.max(Some(ids[4])), Some(&99));
    })
    .unwrap();
}

#[test]
fn deep_chain_does_not_exhaust_the_stack() {
    const DEPTH: usize = 200_000;

    VertexGraph::with_capacity(DEPTH, |mut graph| {
        let ids: Vec<_> = (0..DEPTH as i64).map(|i| graph.add_vertex(i)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }

        let walk = graph.traversal();
        let first = Some(ids[0]);
        let last = Some(ids[DEPTH - 1]);
        assert_eq!(walk.reachable_count(first), DEPTH);
        assert_eq!(walk.max(first), Some(&(DEPTH as i64 - 1)));
        assert_eq!(walk.leaves(first), HashSet::from([ids[DEPTH - 1]]));
        assert!(walk.has_strictly_increasing_path(first, last).unwrap());
    });
}
