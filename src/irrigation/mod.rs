pub mod ds;
pub mod irrigation_system;
