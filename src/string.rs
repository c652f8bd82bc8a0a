pub mod aho_corasick;
