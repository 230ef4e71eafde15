//! Configuration loading for the year-end bonus service.
//!
//! This module loads the server settings and form defaults from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use decimo_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default installment: {:?}", config.form_defaults().installment);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorConfig, FormDefaults, ServerConfig};
