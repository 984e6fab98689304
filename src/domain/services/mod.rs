//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod dof_calculator;
mod lens_merger;

pub use dof_calculator::{DepthOfField, DofCalculator};
pub use lens_merger::{merge, LensUpdate};
