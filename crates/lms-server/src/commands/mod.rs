pub mod serve;
pub mod tree;
