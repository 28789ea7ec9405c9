//! Runtime settings: search endpoint and player tuning.
//!
//! Values come from environment variables (prefix `SAAVN__`), then an optional
//! TOML file, then the defaults in [`schema`].

mod load;
mod schema;

pub use load::{CONFIG_PATH_ENV, default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
