pub mod centroid_decomposition;
pub mod dominator_tree;
pub mod heavy_light_decomposition;
pub mod hungarian;
pub mod manhattan_mst;
pub mod maximum_clique;
pub mod tree_hash;
