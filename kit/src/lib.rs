//! Tollgate facade crate.
//!
//! This crate re-exports the guard engine with a single entry point.
//! `Tollgate::pipeline()` assembles the standard guard pipeline; it does not
//! plan routes or mount views.

pub use tollgate_core as core;

pub use tollgate_core::{
    ActivationStrategy, CanActivateNextStep, CanDeactivatePreviousStep, NavigationInstruction,
    NavigationPipeline, PipelineConfig, PipelineStatus, Settle, Verdict,
};

/// Entry point for the standard guard pipeline.
pub struct Tollgate;

impl Tollgate {
    /// `can-deactivate-previous` followed by `can-activate-next`.
    pub fn pipeline() -> NavigationPipeline {
        PipelineConfig::default().build()
    }

    /// Same as [`Tollgate::pipeline`], with every step traced.
    pub fn traced_pipeline() -> NavigationPipeline {
        PipelineConfig {
            traced: true,
            ..PipelineConfig::default()
        }
        .build()
    }
}

pub mod prelude {
    pub use crate::Tollgate;
    pub use tollgate_core::activation::{CanActivateNextStep, CanDeactivatePreviousStep};
    pub use tollgate_core::continuation::{Continuation, FnContinuation};
    pub use tollgate_core::error::GuardFault;
    pub use tollgate_core::guard::{DynamicViewModel, GuardKind, GuardOutcome, ViewModel};
    pub use tollgate_core::instruction::{
        ChildRouter, Component, NavigationInstruction, ViewPortInstruction, ViewPortPlan,
    };
    pub use tollgate_core::pipeline::{NavigationPipeline, Next, PipelineStatus};
    pub use tollgate_core::settle::{Settle, Verdict};
    pub use tollgate_core::step::PipelineStep;
    pub use tollgate_core::strategy::ActivationStrategy;
    pub use tollgate_core::telemetry::{Traced, init_stdout_tracing};
}
