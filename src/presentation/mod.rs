//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Shared text formatting
//!
//! ## Structure
//!
//! - `cli` - Argument types for the `dofcalc` binary
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Length, distance and aperture formatting with unicode or ASCII glyphs

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{
    AddLensArgs, CalcArgs, Cli, Commands, EditLensArgs, ExplicitLensArgs, LensCommands,
};
pub use factory::{create_calculate_use_case, create_catalog_use_case};
pub use output::{Formatter, Icons};
