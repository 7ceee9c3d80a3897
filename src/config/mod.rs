// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for ocm.
//!
//! Settings come from an optional `ocm.toml` and are then overlaid with
//! command-line flags and `OCM_*` environment variables.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, load_config, merge_configs, parse_config, validate_config};
pub use schema::*;
