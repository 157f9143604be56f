//! Single tree walker over both kinds of nested scope.
//!
//! A pending child plan and an active child router are both "a deeper scope
//! to evaluate". Each scope folds its children with the result combinator, so a
//! subtree of synchronous guards yields a `Ready` verdict.

use crate::combinator;
use crate::guard::{self, GuardKind};
use crate::instruction::{Component, NavigationInstruction};
use crate::settle::{Settle, Verdict};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Scope<'a> {
    /// A navigation plan whose outgoing viewports are being torn down.
    Planned(&'a NavigationInstruction),
    /// A component that is currently on screen.
    Active(&'a Component),
}

impl Scope<'_> {
    /// Evaluate `can_deactivate` for everything leaving with this scope.
    pub(crate) fn deactivation(self) -> Verdict {
        match self {
            Scope::Planned(instruction) => {
                combinator::all(instruction.plan.iter().map(|(name, plan)| {
                    let own = match &plan.prev_component {
                        Some(component) if plan.strategy.invokes_lifecycle() => {
                            Scope::Active(component).deactivation()
                        }
                        Some(_) => {
                            tracing::debug!(
                                view_port = %name,
                                strategy = %plan.strategy,
                                "Deactivation guard bypassed"
                            );
                            Settle::Ready(true)
                        }
                        None => Settle::Ready(true),
                    };
                    match &plan.child_navigation_instruction {
                        Some(child) => combinator::and(own, Scope::Planned(child).deactivation()),
                        None => own,
                    }
                }))
            }
            Scope::Active(component) => match component.active_child_instruction() {
                // the deepest active view models answer for this component
                Some(current) => combinator::all(
                    current
                        .view_port_instructions
                        .values()
                        .map(|vpi| Scope::Active(&vpi.component).deactivation()),
                ),
                None => guard::resolve(component.view_model.as_ref(), GuardKind::CanDeactivate),
            },
        }
    }
}
