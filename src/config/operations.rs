//! Config loading, validation, and template lookup.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{ReadmeError, Result};
use crate::readme::DEFAULT_TEMPLATE;
use std::path::Path;

impl Config {
    /// Load `<worktree>/.readmegen.yaml`, or defaults when it does not exist.
    pub fn load_for_worktree<P: AsRef<Path>>(worktree: P) -> Result<Self> {
        let path = worktree.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReadmeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            ReadmeError::UserError(format!("invalid config '{}': {}", path.display(), e))
        })
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ReadmeError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validation rules:
    /// - `trigger` must contain a non-whitespace character
    /// - `output_file` must be a bare file name
    pub fn validate(&self) -> Result<()> {
        if self.trigger.trim().is_empty() {
            return Err(ReadmeError::UserError(
                "trigger must not be empty".to_string(),
            ));
        }

        let name = self.output_file.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ReadmeError::UserError(format!(
                "output_file must be a plain file name, got '{}'",
                self.output_file
            )));
        }

        Ok(())
    }

    /// The README template text: the configured file, or the built-in scaffold.
    pub fn template_text(&self, worktree: &Path) -> Result<String> {
        let Some(rel) = &self.template_path else {
            return Ok(DEFAULT_TEMPLATE.to_string());
        };

        let path = worktree.join(rel);
        std::fs::read_to_string(&path).map_err(|e| {
            ReadmeError::TemplateError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
