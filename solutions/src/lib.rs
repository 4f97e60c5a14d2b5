pub mod ref_solver;
pub mod sim;
