pub mod calc;
pub mod lenses;
pub mod sensors;
