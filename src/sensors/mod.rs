pub mod interface;
pub mod simulated;
