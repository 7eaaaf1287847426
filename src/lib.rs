pub mod config;
pub mod id_gen;
pub mod random;
