use std::sync::Arc;
use std::thread;

use digraph_shortest_path::types::*;
use digraph_shortest_path::utils::random_graph::random_graph;
use digraph_shortest_path::{shortest_path, AdjacencyList, Graph, GraphArray, GraphError};
use rand::rngs::StdRng;
use rand::SeedableRng;

//       ┌─┐
//  ┌──4─┤0├─1──┐
//  │    └─┘    │
// ┌┴┐         ┌┴┐
// │1├────1────┤2│
// └┬┘         └┬┘
//  │1   ┌─┐   5│
//  └────┤3├────┘
//       └─┘
// arcs: 0->1, 0->2, 2->1, 1->3, 2->3
fn get_test_graph() -> AdjacencyList {
    let mut graph = AdjacencyList::new(4);
    graph.add_arc(0, 1, 4).unwrap();
    graph.add_arc(0, 2, 1).unwrap();
    graph.add_arc(2, 1, 1).unwrap();
    graph.add_arc(1, 3, 1).unwrap();
    graph.add_arc(2, 3, 5).unwrap();

    graph
}

/// checks that the path starts and ends at the right vertices and that its arc weights sum up to the distance
fn assert_valid_path(graph: &AdjacencyList, origin: NodeId, destination: NodeId, distance: Weight, path: &[NodeId]) {
    assert_eq!(path.first(), Some(&origin));
    assert_eq!(path.last(), Some(&destination));

    let mut length: u64 = 0;
    for pair in path.windows(2) {
        let cheapest = graph.arcs(pair[0]).unwrap().into_iter()
            .filter(|(head, _)| *head == pair[1])
            .map(|(_, weight)| weight)
            .min()
            .unwrap();

        length += cheapest as u64;
    }

    assert_eq!(length, distance as u64);
}

/// plain bellman ford used as reference for the random graphs
fn reference_distances(graph: &AdjacencyList, origin: NodeId) -> Vec<u64> {
    let mut distances = vec![u64::MAX; graph.num_vertices()];
    distances[origin] = 0;

    for _ in 0..graph.num_vertices() {
        for node in graph.node_ids() {
            if distances[node] == u64::MAX {
                continue;
            }

            for (head, weight) in graph.arcs(node).unwrap() {
                distances[head] = distances[head].min(distances[node] + weight as u64);
            }
        }
    }

    distances
}

#[test]
fn test_shortest_path() {
    let graph = get_test_graph();
    let result = graph.shortest_path(0, 3).unwrap();

    assert_eq!(result.distance, 3);
    assert_eq!(result.path, vec![0, 2, 1, 3]);
    assert!(result.is_reachable());
}

#[test]
fn test_unreachable_destination() {
    let graph = AdjacencyList::new(2);
    let result = graph.shortest_path(0, 1).unwrap();

    assert_eq!(result.distance, UNREACHABLE);
    assert_eq!(result.path, vec![1]);

    // arcs only lead away from the destination
    let graph = get_test_graph();
    let result = graph.shortest_path(3, 0).unwrap();
    assert_eq!(result.distance, UNREACHABLE);
    assert_eq!(result.path, vec![0]);
}

#[test]
fn test_same_origin_and_destination() {
    let graph = get_test_graph();

    for node in graph.node_ids() {
        let result = graph.shortest_path(node, node).unwrap();

        assert_eq!(result.distance, 0);
        assert_eq!(result.path, vec![node]);
    }
}

#[test]
fn test_invalid_vertices() {
    let graph = get_test_graph();

    assert_eq!(graph.shortest_path(4, 0), Err(GraphError::InvalidVertex {vertex: 4, num_vertices: 4}));
    assert_eq!(graph.shortest_path(0, 9), Err(GraphError::InvalidVertex {vertex: 9, num_vertices: 4}));
    assert_eq!(graph.shortest_path(7, 7), Err(GraphError::InvalidVertex {vertex: 7, num_vertices: 4}));
}

#[test]
fn test_zero_weight_arcs_and_cycles() {
    let mut graph = AdjacencyList::new(4);
    graph.add_arc(0, 1, 0).unwrap();
    graph.add_arc(1, 0, 0).unwrap();
    graph.add_arc(1, 2, 0).unwrap();
    graph.add_arc(2, 1, 3).unwrap();
    graph.add_arc(2, 3, 2).unwrap();
    graph.add_arc(0, 3, 5).unwrap();

    let result = graph.shortest_path(0, 3).unwrap();

    assert_eq!(result.distance, 2);
    assert_eq!(result.path, vec![0, 1, 2, 3]);
}

#[test]
fn test_parallel_arcs_use_cheapest() {
    let mut graph = AdjacencyList::new(2);
    graph.add_arc(0, 1, 8).unwrap();
    graph.add_arc(0, 1, 3).unwrap();

    let result = graph.shortest_path(0, 1).unwrap();

    assert_eq!(result.distance, 3);
    assert_eq!(result.path, vec![0, 1]);
}

#[test]
fn test_snapshot_matches_adjacency_list() {
    let graph = get_test_graph();
    let array = GraphArray::from(&graph);

    for origin in graph.node_ids() {
        for destination in graph.node_ids() {
            assert_eq!(array.shortest_path(origin, destination), graph.shortest_path(origin, destination));
        }
    }

    assert_eq!(array.arclist(0), graph.arcs(0).unwrap());
}

#[test]
fn test_concurrent_queries_on_snapshot() {
    let array = Arc::new(get_test_graph().to_array());

    let handles: Vec<_> = (0..4).map(|origin| {
        let array = Arc::clone(&array);
        thread::spawn(move || shortest_path(array.as_ref(), origin, 3).unwrap().distance)
    }).collect();

    let distances: Vec<Weight> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();

    assert_eq!(distances, vec![3, 1, 2, 0]);
}

#[test]
fn test_random_graphs_against_reference() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let graph = random_graph(25, 80, 20, &mut rng).unwrap();

        for origin in graph.node_ids() {
            let expected = reference_distances(&graph, origin);

            for destination in graph.node_ids() {
                let result = graph.shortest_path(origin, destination).unwrap();

                if expected[destination] == u64::MAX {
                    assert_eq!(result.distance, UNREACHABLE);
                    assert_eq!(result.path, vec![destination]);
                }
                else {
                    assert_eq!(result.distance as u64, expected[destination]);
                    assert_valid_path(&graph, origin, destination, result.distance, &result.path);
                }
            }
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(15, 60, 30, &mut rng).unwrap();

    for origin in graph.node_ids() {
        for middle in graph.node_ids() {
            let first_leg = graph.shortest_path(origin, middle).unwrap();
            if !first_leg.is_reachable() {
                continue;
            }

            for destination in graph.node_ids() {
                let second_leg = graph.shortest_path(middle, destination).unwrap();
                if !second_leg.is_reachable() {
                    continue;
                }

                let direct = graph.shortest_path(origin, destination).unwrap();
                assert!(direct.is_reachable());
                assert!(direct.distance as u64 <= first_leg.distance as u64 + second_leg.distance as u64);
            }
        }
    }
}
