pub mod intake;
pub mod lending;
