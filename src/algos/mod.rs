pub mod caesar;
pub mod ranking;
