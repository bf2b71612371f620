pub mod classifier;
pub mod tables;
