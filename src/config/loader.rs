use super::JobConfig;
use crate::error::{EdgeCopyError, ErrorCode, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Loads a [`JobConfig`] from an optional file plus the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            path: None,
            use_env: true,
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Skip `EDGECOPY_*` overrides
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub async fn load(&self) -> Result<JobConfig> {
        let mut config = match &self.path {
            Some(path) => load_file(path).await?,
            None => JobConfig::default(),
        };

        if self.use_env {
            config.merge_env_vars()?;
        }

        debug!(?config, "loaded job configuration");
        Ok(config)
    }
}

async fn load_file(path: &Path) -> Result<JobConfig> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EdgeCopyError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("config file not found: {}", path.display()),
            )
        } else {
            EdgeCopyError::io(
                ErrorCode::IO_READ_FAILED,
                format!("cannot read {}", path.display()),
                e,
            )
        }
    })?;

    JobConfig::from_toml_str(&content).map_err(|e| e.with_context(path.display()))
}
