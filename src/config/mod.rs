//! Job configuration
//!
//! Settings come from an optional TOML file, then `EDGECOPY_*` environment
//! variables, then CLI flags, each layer overriding the previous one:
//!
//! ```toml
//! [edge_copy]
//! direction = "out"   # out | in  (both is rejected)
//!
//! [job]
//! map_tasks = 4
//! reduce_tasks = 4
//! ```

use crate::error::{EdgeCopyError, ErrorCode, Result};
use crate::runtime::local::{DEFAULT_MAP_TASKS, DEFAULT_REDUCE_TASKS};
use crate::transform::{DirectionOption, EdgeCopyConfig};
use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::ConfigLoader;

pub const ENV_DIRECTION: &str = "EDGECOPY_DIRECTION";
pub const ENV_MAP_TASKS: &str = "EDGECOPY_MAP_TASKS";
pub const ENV_REDUCE_TASKS: &str = "EDGECOPY_REDUCE_TASKS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub edge_copy: EdgeCopySection,
    pub job: JobSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeCopySection {
    pub direction: DirectionOption,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSection {
    pub map_tasks: usize,
    pub reduce_tasks: usize,
}

impl Default for JobSection {
    fn default() -> Self {
        Self {
            map_tasks: DEFAULT_MAP_TASKS,
            reduce_tasks: DEFAULT_REDUCE_TASKS,
        }
    }
}

impl JobConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `EDGECOPY_*` overrides from the process environment
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply `EDGECOPY_*` overrides from an arbitrary lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(direction) = lookup(ENV_DIRECTION) {
            self.edge_copy.direction = direction
                .parse()
                .map_err(|e: EdgeCopyError| e.with_context(ENV_DIRECTION))?;
        }

        if let Some(tasks) = lookup(ENV_MAP_TASKS) {
            self.job.map_tasks = parse_task_count(ENV_MAP_TASKS, &tasks)?;
        }

        if let Some(tasks) = lookup(ENV_REDUCE_TASKS) {
            self.job.reduce_tasks = parse_task_count(ENV_REDUCE_TASKS, &tasks)?;
        }

        Ok(())
    }

    /// Check every setting, including the copy direction
    pub fn validate(&self) -> Result<()> {
        self.edge_copy_config()?;
        if self.job.map_tasks == 0 {
            return Err(EdgeCopyError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "job.map_tasks must be at least 1",
            ));
        }
        if self.job.reduce_tasks == 0 {
            return Err(EdgeCopyError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "job.reduce_tasks must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn edge_copy_config(&self) -> Result<EdgeCopyConfig> {
        EdgeCopyConfig::new(self.edge_copy.direction)
    }
}

fn parse_task_count(key: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        EdgeCopyError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("{key}: expected a positive integer, got '{value}'"),
        )
    })
}
