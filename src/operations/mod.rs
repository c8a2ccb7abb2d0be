pub mod sampling;
pub mod subdivision;
