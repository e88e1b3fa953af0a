pub mod standings;
pub mod stats;
