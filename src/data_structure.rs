pub mod fenwick_tree;
