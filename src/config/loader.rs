//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! definitions (team rotations and task templates) from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{TaskTemplate, TeamRotation};

use super::types::{RotationsFile, TasksFile};

/// Loads and provides access to the roster configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the configured team rotations and task templates.
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// ├── rotations.yaml   # One rotation per team
/// └── tasks.yaml       # Task templates
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// let task = loader.get_task("task_gate_watch").unwrap();
/// println!("Task: {}", task.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rotations: Vec<TeamRotation>,
    tasks: Vec<TaskTemplate>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/roster")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A team carries more than one rotation
    /// - A task id repeats
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rotations_path = path.join("rotations.yaml");
        let rotations_file = Self::load_yaml::<RotationsFile>(&rotations_path)?;

        let tasks_path = path.join("tasks.yaml");
        let tasks_file = Self::load_yaml::<TasksFile>(&tasks_path)?;

        // At most one rotation per team.
        let mut seen_teams = HashSet::new();
        for rotation in &rotations_file.rotations {
            if !seen_teams.insert(rotation.team_id.as_str()) {
                return Err(EngineError::ConfigParse {
                    path: rotations_path.display().to_string(),
                    message: format!("multiple rotations for team '{}'", rotation.team_id),
                });
            }
        }

        let mut seen_tasks = HashSet::new();
        for task in &tasks_file.tasks {
            if !seen_tasks.insert(task.id.as_str()) {
                return Err(EngineError::ConfigParse {
                    path: tasks_path.display().to_string(),
                    message: format!("duplicate task id '{}'", task.id),
                });
            }
        }

        Ok(Self {
            rotations: rotations_file.rotations,
            tasks: tasks_file.tasks,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configured team rotations.
    pub fn team_rotations(&self) -> &[TeamRotation] {
        &self.rotations
    }

    /// Returns the configured task templates.
    pub fn task_templates(&self) -> &[TaskTemplate] {
        &self.tasks
    }

    /// Gets a task template by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/roster")?;
    /// let task = loader.get_task("task_gate_watch")?;
    /// println!("Task: {}", task.name);
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn get_task(&self, task_id: &str) -> EngineResult<&TaskTemplate> {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| EngineError::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }
}
