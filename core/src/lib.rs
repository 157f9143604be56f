//! Tollgate Core - navigation guard engine.
//!
//! Asks every outgoing and incoming view whether it permits a pending route
//! change, before anything is torn down or mounted.

pub mod activation;
pub mod combinator;
pub mod config;
pub mod continuation;
pub mod error;
pub mod guard;
pub mod instruction;
pub mod metadata;
pub mod pipeline;
mod scope;
pub mod settle;
pub mod step;
pub mod strategy;
pub mod telemetry;

pub use activation::{CanActivateNextStep, CanDeactivatePreviousStep};
pub use config::{ConfigError, PipelineConfig, StepKind};
pub use continuation::{Continuation, FnContinuation};
pub use error::GuardFault;
pub use guard::{DynamicViewModel, GuardKind, GuardOutcome, ViewModel};
pub use instruction::{
    ChildRouter, Component, NavigationInstruction, ViewPortInstruction, ViewPortPlan,
};
pub use metadata::StepMetadata;
pub use pipeline::{NavigationPipeline, Next, PipelineStatus};
pub use settle::{BoxFuture, Settle, Verdict};
pub use step::PipelineStep;
pub use strategy::ActivationStrategy;
