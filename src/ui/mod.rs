//! Terminal UI for the `dofcalc` binary
//!
//! Views render to `String` so they can be tested without a terminal;
//! commands decide where the text goes.

pub mod context;
pub mod json;
pub mod terminal;
pub mod text;
pub mod views;
