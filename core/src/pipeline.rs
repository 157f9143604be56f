//! # Navigation Pipeline
//!
//! An ordered list of [`PipelineStep`]s. Each step receives a [`Next`]
//! continuation that either runs the following step or cancels the whole
//! navigation. Running past the last step completes it.

use crate::continuation::Continuation;
use crate::instruction::NavigationInstruction;
use crate::settle::Settle;
use crate::step::PipelineStep;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// How a navigation pipeline ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    /// Every step advanced.
    Completed,
    /// A step called `cancel`.
    Canceled,
}

impl PipelineStatus {
    pub fn is_completed(self) -> bool {
        self == PipelineStatus::Completed
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStatus::Completed => f.write_str("completed"),
            PipelineStatus::Canceled => f.write_str("canceled"),
        }
    }
}

pub struct NavigationPipeline {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl NavigationPipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn add_step<S: PipelineStep>(mut self, step: S) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn steps(&self) -> impl Iterator<Item = &dyn PipelineStep> {
        self.steps.iter().map(|step| step.as_ref())
    }

    /// Run every step against `instruction`.
    ///
    /// Stays synchronous as long as every step does.
    pub fn run(&self, instruction: Arc<NavigationInstruction>) -> Settle<PipelineStatus> {
        let span = tracing::info_span!("Pipeline", tollgate.pipeline = %self.name);
        let _enter = span.enter();
        tracing::debug!(steps = self.steps.len(), "Starting navigation pipeline");

        Next {
            steps: self.steps.iter().cloned().collect(),
            index: 0,
            instruction,
        }
        .proceed()
    }
}

impl fmt::Debug for NavigationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationPipeline")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// The continuation handed to each pipeline step.
pub struct Next {
    steps: Arc<[Arc<dyn PipelineStep>]>,
    index: usize,
    instruction: Arc<NavigationInstruction>,
}

impl Continuation for Next {
    type Output = PipelineStatus;

    fn proceed(self) -> Settle<PipelineStatus> {
        let Some(step) = self.steps.get(self.index).cloned() else {
            tracing::debug!("Navigation pipeline completed");
            return Settle::Ready(PipelineStatus::Completed);
        };

        let label = step.metadata().label;
        let span = tracing::info_span!("Step", tollgate.step = %label, tollgate.index = self.index);
        let _enter = span.enter();

        let instruction = self.instruction.clone();
        let next = Next {
            index: self.index + 1,
            ..self
        };
        step.run(&instruction, next)
    }

    fn cancel(self) -> Settle<PipelineStatus> {
        tracing::info!(
            skipped = self.steps.len().saturating_sub(self.index),
            "Navigation pipeline canceled"
        );
        Settle::Ready(PipelineStatus::Canceled)
    }
}
