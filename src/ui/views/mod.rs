pub mod calc;
pub mod lenses;
pub mod sensors;
pub mod warnings;
