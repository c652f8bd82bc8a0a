use contest_library::minimum_cost_flow::error::FlowError;
use contest_library::minimum_cost_flow::tree_cycle_canceling::TreeCycleCanceling;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// successive shortest paths with bellman-ford, valid while the network has no negative cycle
fn reference_min_cost_max_flow(num_nodes: usize, arcs: &[(usize, usize, i64, i64)], source: usize, sink: usize) -> (i64, i64) {
    let mut to = Vec::new();
    let mut capacity = Vec::new();
    let mut cost = Vec::new();
    let mut from = Vec::new();
    for &(u, v, c, w) in arcs {
        from.extend([u, v]);
        to.extend([v, u]);
        capacity.extend([c, 0]);
        cost.extend([w, -w]);
    }

    let (mut total_flow, mut total_cost) = (0, 0);
    loop {
        let mut dist = vec![None; num_nodes];
        let mut prev = vec![usize::MAX; num_nodes];
        dist[source] = Some(0);
        for _ in 0..num_nodes {
            let mut updated = false;
            for e in 0..to.len() {
                if capacity[e] == 0 {
                    continue;
                }
                if let Some(d) = dist[from[e]] {
                    if dist[to[e]].map_or(true, |x| d + cost[e] < x) {
                        dist[to[e]] = Some(d + cost[e]);
                        prev[to[e]] = e;
                        updated = true;
                    }
                }
            }
            if !updated {
                break;
            }
        }

        let Some(d) = dist[sink] else { break };
        let mut delta = i64::MAX;
        let mut v = sink;
        while v != source {
            delta = delta.min(capacity[prev[v]]);
            v = from[prev[v]];
        }
        let mut v = sink;
        while v != source {
            capacity[prev[v]] -= delta;
            capacity[prev[v] ^ 1] += delta;
            v = from[prev[v]];
        }
        total_flow += delta;
        total_cost += delta * d;
    }

    (total_cost, total_flow)
}

fn random_arcs(rng: &mut StdRng, num_nodes: usize, num_arcs: usize, acyclic: bool) -> Vec<(usize, usize, i64, i64)> {
    let mut arcs = Vec::new();
    while arcs.len() < num_arcs {
        let (u, v) = (rng.gen_range(0..num_nodes), rng.gen_range(0..num_nodes));
        if acyclic {
            if u >= v {
                continue;
            }
            arcs.push((u, v, rng.gen_range(0..=5), rng.gen_range(-6..=10)));
        } else {
            if u == v {
                continue;
            }
            arcs.push((u, v, rng.gen_range(0..=5), rng.gen_range(0..=10)));
        }
    }
    arcs
}

fn build(num_nodes: usize, arcs: &[(usize, usize, i64, i64)]) -> (TreeCycleCanceling<i64>, Vec<usize>) {
    let mut solver = TreeCycleCanceling::new(num_nodes);
    let arc_ids = arcs.iter().map(|&(u, v, capacity, cost)| solver.add_arc(u, v, capacity, cost).unwrap()).collect();
    (solver, arc_ids)
}

// capacity conservation, flow conservation, cost consistency, optimality and tree validity
fn check_solution(solver: &mut TreeCycleCanceling<i64>, arcs: &[(usize, usize, i64, i64)], arc_ids: &[usize], source: usize, sink: usize, cost: i64, flow: i64) {
    let mut balance = vec![0; solver.num_nodes()];
    let mut total_cost = 0;
    for (&(u, v, capacity, arc_cost), &arc_id) in arcs.iter().zip(arc_ids) {
        let arc = solver.get_arc(arc_id).unwrap();
        assert_eq!((arc.from, arc.to, arc.upper, arc.cost), (u, v, capacity, arc_cost));
        assert!(0 <= arc.flow && arc.flow <= arc.upper);
        assert_eq!(solver.residual_capacity(arc_id).unwrap() + solver.residual_capacity(arc_id ^ 1).unwrap(), capacity);

        balance[u] -= arc.flow;
        balance[v] += arc.flow;
        total_cost += arc.flow * arc.cost;
    }

    for (u, &b) in balance.iter().enumerate() {
        if u == source {
            assert_eq!(b, -flow);
        } else if u == sink {
            assert_eq!(b, flow);
        } else {
            assert_eq!(b, 0);
        }
    }
    assert_eq!(total_cost, cost);
    assert!(solver.satisfy_optimality_conditions());
    assert!(solver.validate_spanning_tree());
}

#[rstest]
#[case::two_routes(4, vec![(0, 1, 2, 1), (0, 2, 1, 2), (1, 3, 1, 1), (2, 3, 2, 1)], 0, 3, (5, 2))]
#[case::shared_middle_arc(4, vec![(0, 1, 2, 1), (0, 2, 1, 2), (1, 2, 1, 1), (1, 3, 1, 3), (2, 3, 2, 1)], 0, 3, (10, 3))]
#[case::disconnected_sink(4, vec![(0, 1, 2, 1), (1, 2, 3, 1), (3, 0, 5, 1)], 0, 3, (0, 0))]
#[case::no_arcs(2, vec![], 0, 1, (0, 0))]
#[case::zero_capacity(2, vec![(0, 1, 0, 1)], 0, 1, (0, 0))]
#[case::negative_arc_on_zero_cost_path(4, vec![(0, 1, 1, 0), (1, 2, 1, -3), (2, 3, 1, 0)], 0, 3, (-3, 1))]
#[case::negative_arc_preferred(4, vec![(0, 1, 1, 0), (1, 3, 1, 0), (0, 2, 1, 0), (2, 3, 1, -2), (0, 3, 5, 1)], 0, 3, (3, 7))]
#[case::parallel_arcs(2, vec![(0, 1, 2, 5), (0, 1, 3, 1)], 0, 1, (13, 5))]
#[case::sink_is_node_zero(3, vec![(2, 1, 4, 2), (1, 0, 3, 2)], 2, 0, (12, 3))]
#[case::flow_through_a_back_arc(4, vec![(0, 1, 1, 1), (0, 2, 1, 5), (1, 2, 1, 1), (1, 3, 1, 5), (2, 3, 1, 1)], 0, 3, (12, 2))]
fn min_cost_max_flow(#[case] num_nodes: usize, #[case] arcs: Vec<(usize, usize, i64, i64)>, #[case] source: usize, #[case] sink: usize, #[case] expected: (i64, i64)) {
    init_logger();
    let (mut solver, arc_ids) = build(num_nodes, &arcs);
    let (cost, flow) = solver.compute(source, sink).unwrap();

    assert_eq!((cost, flow), expected);
    check_solution(&mut solver, &arcs, &arc_ids, source, sink, cost, flow);
}

#[test]
fn negative_self_loop_is_saturated() {
    let arcs = vec![(0, 1, 2, 5), (0, 1, 3, 1), (1, 1, 4, -2)];
    let (mut solver, arc_ids) = build(2, &arcs);

    assert_eq!(solver.compute(0, 1), Ok((5, 5)));
    assert_eq!(solver.get_arc(arc_ids[2]).unwrap().flow, 4);
}

#[test]
fn negative_cycles_reachable_from_the_source_are_canceled() {
    // 1 -> 2 -> 1 costs -4 and is only reachable through 0 -> 1
    let arcs = vec![(0, 3, 1, 1), (1, 2, 1, -2), (2, 1, 1, -2), (0, 1, 1, 0)];
    let (mut solver, arc_ids) = build(4, &arcs);

    assert_eq!(solver.compute(0, 3), Ok((-3, 1)));
    assert_eq!(solver.get_arc(arc_ids[1]).unwrap().flow, 1);
    assert_eq!(solver.get_arc(arc_ids[2]).unwrap().flow, 1);
    assert_eq!(solver.get_arc(arc_ids[3]).unwrap().flow, 0);
}

#[test]
fn nodes_unreachable_from_the_tree_are_left_alone() {
    let arcs = vec![(0, 3, 1, 1), (1, 2, 1, -2), (2, 1, 1, -2)];
    let (mut solver, arc_ids) = build(4, &arcs);

    assert_eq!(solver.compute(0, 3), Ok((1, 1)));
    assert_eq!(solver.get_arc(arc_ids[1]).unwrap().flow, 0);
    assert_eq!(solver.potential(1), None);
    assert_eq!(solver.potential(2), None);
    assert_eq!(solver.potential(3), Some(0));
}

#[test]
fn potentials_are_stable_between_pivots() {
    let arcs = vec![(0, 1, 2, 1), (0, 2, 1, 2), (1, 3, 1, 1), (2, 3, 2, 1)];
    let (mut solver, _) = build(4, &arcs);
    assert_eq!(solver.potential(0), None);

    solver.compute(0, 3).unwrap();
    let first: Vec<_> = (0..4).map(|u| solver.potential(u)).collect();
    let second: Vec<_> = (0..4).map(|u| solver.potential(u)).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(Option::is_some));
    assert_eq!(first[3], Some(0));
    assert!(solver.num_pivots() > 0);
}

#[rstest]
#[case::acyclic_with_negative_costs(true, 0)]
#[case::acyclic_with_negative_costs_2(true, 1)]
#[case::acyclic_with_negative_costs_3(true, 2)]
#[case::cyclic_with_non_negative_costs(false, 3)]
#[case::cyclic_with_non_negative_costs_2(false, 4)]
#[case::cyclic_with_non_negative_costs_3(false, 5)]
fn matches_successive_shortest_paths(#[case] acyclic: bool, #[case] seed: u64) {
    init_logger();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..200 {
        let num_nodes = rng.gen_range(2..=8);
        let num_arcs = rng.gen_range(0..=16);
        let arcs = random_arcs(&mut rng, num_nodes, num_arcs, acyclic);
        let (source, sink) = if acyclic { (0, num_nodes - 1) } else { (0, rng.gen_range(1..num_nodes)) };

        let (mut solver, arc_ids) = build(num_nodes, &arcs);
        let (cost, flow) = solver.compute(source, sink).unwrap();

        assert_eq!((cost, flow), reference_min_cost_max_flow(num_nodes, &arcs, source, sink), "arcs: {arcs:?}");
        check_solution(&mut solver, &arcs, &arc_ids, source, sink, cost, flow);
    }
}

#[test]
fn large_costs_fit_in_i128() {
    let big = 1_000_000_000_000_000_000i128;
    let mut solver = TreeCycleCanceling::new(3);
    solver.add_arc(0, 1, big, big).unwrap();
    solver.add_arc(1, 2, big, -big).unwrap();
    solver.add_arc(0, 2, big, 1).unwrap();

    assert_eq!(solver.compute(0, 2), Ok((big, 2 * big)));
}

#[rstest]
#[case(4, 0, 1, FlowError::NodeOutOfRange { node: 4, num_nodes: 3 })]
#[case(0, 3, 1, FlowError::NodeOutOfRange { node: 3, num_nodes: 3 })]
#[case(0, 1, -1, FlowError::NegativeCapacity)]
fn invalid_arcs_are_rejected(#[case] from: usize, #[case] to: usize, #[case] capacity: i64, #[case] expected: FlowError) {
    let mut solver = TreeCycleCanceling::new(3);
    assert_eq!(solver.add_arc(from, to, capacity, 1), Err(expected));
    assert_eq!(solver.num_arcs(), 0);
}

#[rstest]
#[case(1, 1, FlowError::SourceEqualsSink)]
#[case(3, 1, FlowError::NodeOutOfRange { node: 3, num_nodes: 3 })]
#[case(0, 5, FlowError::NodeOutOfRange { node: 5, num_nodes: 3 })]
fn invalid_terminals_are_rejected(#[case] source: usize, #[case] sink: usize, #[case] expected: FlowError) {
    let mut solver = TreeCycleCanceling::new(3);
    solver.add_arc(0, 1, 1, 1).unwrap();
    assert_eq!(solver.compute(source, sink), Err(expected));

    // nothing was consumed by the rejected call
    assert_eq!(solver.compute(0, 1), Ok((1, 1)));
}

#[test]
fn an_instance_is_single_use() {
    let mut solver = TreeCycleCanceling::new(2);
    solver.add_arc(0, 1, 1, 1).unwrap();
    assert_eq!(solver.compute(0, 1), Ok((1, 1)));

    assert_eq!(solver.compute(0, 1), Err(FlowError::AlreadyComputed));
    assert_eq!(solver.add_arc(0, 1, 1, 1), Err(FlowError::AlreadyComputed));
    assert!(solver.get_arc(2).is_none());
}
