pub mod data_structure;
pub mod graph;
pub mod minimum_cost_flow;
pub mod number_theory;
pub mod numerical;
pub mod string;
