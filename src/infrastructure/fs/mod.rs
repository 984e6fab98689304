//! File system locations

mod config_dir;

pub use config_dir::{dofcalc_config_dir, XDG_CONFIG_HOME_VAR};
