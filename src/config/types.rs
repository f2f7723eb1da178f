//! Configuration file structures.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the roster configuration YAML files.

use serde::Deserialize;

use crate::models::{TaskTemplate, TeamRotation};

/// The `rotations.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RotationsFile {
    /// The configured team rotations, one per team.
    pub rotations: Vec<TeamRotation>,
}

/// The `tasks.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksFile {
    /// The configured task templates.
    pub tasks: Vec<TaskTemplate>,
}
