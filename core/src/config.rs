//! Pipeline configuration, loaded from TOML.
//!
//! ```toml
//! name = "navigation"
//! description = "Guards checked before every route change"
//! traced = true
//! steps = ["can-deactivate-previous", "can-activate-next"]
//! ```

use crate::activation::{CanActivateNextStep, CanDeactivatePreviousStep};
use crate::pipeline::NavigationPipeline;
use crate::step::PipelineStep;
use crate::telemetry::Traced;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read pipeline config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid pipeline config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The built-in guard steps a pipeline can be assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    CanDeactivatePrevious,
    CanActivateNext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Wrap every step in a [`Traced`] decorator.
    #[serde(default)]
    pub traced: bool,
    #[serde(default = "default_steps")]
    pub steps: Vec<StepKind>,
}

fn default_steps() -> Vec<StepKind> {
    vec![StepKind::CanDeactivatePrevious, StepKind::CanActivateNext]
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: "navigation".to_string(),
            description: None,
            traced: false,
            steps: default_steps(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), name = %config.name, "Loaded pipeline config");
        Ok(config)
    }

    /// Assemble the configured steps, in order.
    pub fn build(&self) -> NavigationPipeline {
        let mut pipeline = NavigationPipeline::new(&self.name);
        if let Some(desc) = &self.description {
            pipeline = pipeline.with_description(desc);
        }

        for kind in &self.steps {
            pipeline = match kind {
                StepKind::CanDeactivatePrevious => {
                    with_step(pipeline, CanDeactivatePreviousStep::new(), self.traced)
                }
                StepKind::CanActivateNext => {
                    with_step(pipeline, CanActivateNextStep::new(), self.traced)
                }
            };
        }
        pipeline
    }
}

fn with_step<S: PipelineStep>(
    pipeline: NavigationPipeline,
    step: S,
    traced: bool,
) -> NavigationPipeline {
    if traced {
        pipeline.add_step(Traced::new(step))
    } else {
        pipeline.add_step(step)
    }
}
