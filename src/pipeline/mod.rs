pub mod aggregate;
pub mod emit;
pub mod rank;
