//! # Activation Guards
//!
//! The two pipeline steps that gate a navigation before anything is torn
//! down or mounted:
//!
//! * [`CanDeactivatePreviousStep`] asks every outgoing view (including views
//!   nested under child routers) whether it may leave.
//! * [`CanActivateNextStep`] asks every incoming view whether it may enter.
//!
//! Both steps fold all answers with AND semantics and then call exactly one
//! branch of the continuation. The step result is synchronous whenever every
//! guard answered synchronously.

use crate::combinator;
use crate::continuation::{self, Continuation};
use crate::guard::{self, GuardKind};
use crate::instruction::NavigationInstruction;
use crate::metadata::StepMetadata;
use crate::pipeline::{Next, PipelineStatus};
use crate::scope::Scope;
use crate::settle::{Settle, Verdict};
use crate::step::PipelineStep;

/// Checks `can_deactivate` on everything the navigation will remove.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanDeactivatePreviousStep;

impl CanDeactivatePreviousStep {
    pub fn new() -> Self {
        Self
    }

    /// Combined permission of every outgoing view.
    pub fn verdict(&self, instruction: &NavigationInstruction) -> Verdict {
        Scope::Planned(instruction).deactivation()
    }

    pub fn run<C: Continuation>(
        &self,
        instruction: &NavigationInstruction,
        next: C,
    ) -> Settle<C::Output> {
        let verdict = self.verdict(instruction);
        tracing::debug!(pending = verdict.is_pending(), "Deactivation verdict computed");
        continuation::settle_with(verdict, next)
    }
}

impl PipelineStep for CanDeactivatePreviousStep {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("CanDeactivatePrevious")
            .with_description("Ask outgoing views whether they may be deactivated")
            .with_guard(GuardKind::CanDeactivate)
    }

    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Settle<PipelineStatus> {
        CanDeactivatePreviousStep::run(self, instruction, next)
    }
}

/// Checks `can_activate` on every incoming view.
///
/// Nested child instructions are not descended into here; they are checked
/// when the child router runs its own pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanActivateNextStep;

impl CanActivateNextStep {
    pub fn new() -> Self {
        Self
    }

    /// Combined permission of every incoming view.
    pub fn verdict(&self, instruction: &NavigationInstruction) -> Verdict {
        combinator::all(
            instruction
                .view_port_instructions
                .iter()
                .map(|(name, vpi)| match instruction.plan.get(name) {
                    Some(plan) if plan.strategy.invokes_lifecycle() => {
                        guard::resolve(vpi.component.view_model.as_ref(), GuardKind::CanActivate)
                    }
                    Some(plan) => {
                        tracing::debug!(
                            view_port = %name,
                            strategy = %plan.strategy,
                            "Activation guard bypassed"
                        );
                        Settle::Ready(true)
                    }
                    None => {
                        tracing::debug!(view_port = %name, "No plan for viewport, guard bypassed");
                        Settle::Ready(true)
                    }
                }),
        )
    }

    pub fn run<C: Continuation>(
        &self,
        instruction: &NavigationInstruction,
        next: C,
    ) -> Settle<C::Output> {
        let verdict = self.verdict(instruction);
        tracing::debug!(pending = verdict.is_pending(), "Activation verdict computed");
        continuation::settle_with(verdict, next)
    }
}

impl PipelineStep for CanActivateNextStep {
    fn metadata(&self) -> StepMetadata {
        StepMetadata::new("CanActivateNext")
            .with_description("Ask incoming views whether they may be activated")
            .with_guard(GuardKind::CanActivate)
    }

    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Settle<PipelineStatus> {
        CanActivateNextStep::run(self, instruction, next)
    }
}
