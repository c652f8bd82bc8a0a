pub mod factorization;
pub mod mod_int;
pub mod primitive_root;
