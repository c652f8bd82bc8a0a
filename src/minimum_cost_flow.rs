pub mod error;
pub mod pivot_rules;
pub mod residual_network;
pub mod spanning_tree_structure;
pub mod tree_cycle_canceling;
