//! Configuration schema and loader.
//!
//! Settings come from `BREATHER__*` environment variables, then an optional
//! TOML file, then struct defaults.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
