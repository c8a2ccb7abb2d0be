mod levels;
mod linear_combination;

pub use levels::SubdivisionLevels;
pub use linear_combination::{de_casteljau_point, linear_combination};
