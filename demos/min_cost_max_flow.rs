use contest_library::minimum_cost_flow::tree_cycle_canceling::TreeCycleCanceling;

fn main() {
    let mut solver = TreeCycleCanceling::new(4);

    let arcs = vec![
        solver.add_arc(0, 1, 2, 1).unwrap(),
        solver.add_arc(0, 2, 1, 2).unwrap(),
        solver.add_arc(1, 2, 1, 1).unwrap(),
        solver.add_arc(1, 3, 1, 3).unwrap(),
        solver.add_arc(2, 3, 2, 1).unwrap(),
    ];

    match solver.compute(0, 3) {
        Ok((cost, flow)) => {
            println!("maximum flow:{flow} minimum cost:{cost}");
            for arc_id in arcs {
                println!("{:?}", solver.get_arc(arc_id).unwrap());
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}
