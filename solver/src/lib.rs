pub mod bounds;
pub mod cli;
