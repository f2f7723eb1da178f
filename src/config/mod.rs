//! Configuration loading and management for the roster engine.
//!
//! This module provides functionality to load roster definitions from YAML
//! files: one rotation per team plus the task templates the expander
//! generates shifts from.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster").unwrap();
//! println!("Loaded {} task templates", config.task_templates().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RotationsFile, TasksFile};
