pub mod actuators;
pub mod climate;
pub mod config;
pub mod decision;
pub mod error;
pub mod irrigation;
pub mod report;
pub mod sensors;
pub mod test;
pub mod time;
pub mod utils;
