//! # Instruction Tree
//!
//! The read-only description of a pending navigation, as handed over by the
//! planner. Guard evaluation never mutates any of these types.
//!
//! * [`NavigationInstruction`] - the whole transition
//! * [`ViewPortPlan`] - outgoing half, per viewport
//! * [`ViewPortInstruction`] - incoming half, per viewport
//! * [`Component`] - a view model, optionally hosting a child router

use crate::guard::ViewModel;
use crate::strategy::ActivationStrategy;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One pending route transition.
#[derive(Debug, Clone, Default)]
pub struct NavigationInstruction {
    /// Outgoing side, keyed by viewport name.
    pub plan: BTreeMap<String, ViewPortPlan>,
    /// Incoming side, keyed by viewport name.
    pub view_port_instructions: BTreeMap<String, ViewPortInstruction>,
}

impl NavigationInstruction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(mut self, view_port: impl Into<String>, plan: ViewPortPlan) -> Self {
        self.plan.insert(view_port.into(), plan);
        self
    }

    pub fn with_view_port_instruction(
        mut self,
        view_port: impl Into<String>,
        instruction: ViewPortInstruction,
    ) -> Self {
        self.view_port_instructions
            .insert(view_port.into(), instruction);
        self
    }
}

/// The outgoing plan for a single viewport.
#[derive(Debug, Clone, Default)]
pub struct ViewPortPlan {
    pub strategy: ActivationStrategy,
    /// The component currently occupying the viewport.
    pub prev_component: Option<Component>,
    /// A nested navigation already planned below this viewport.
    pub child_navigation_instruction: Option<Box<NavigationInstruction>>,
}

impl ViewPortPlan {
    pub fn new(strategy: impl Into<ActivationStrategy>) -> Self {
        Self {
            strategy: strategy.into(),
            ..Self::default()
        }
    }

    pub fn with_prev_component(mut self, component: Component) -> Self {
        self.prev_component = Some(component);
        self
    }

    pub fn with_child_navigation_instruction(mut self, child: NavigationInstruction) -> Self {
        self.child_navigation_instruction = Some(Box::new(child));
        self
    }
}

/// The incoming instruction for a single viewport.
#[derive(Debug, Clone)]
pub struct ViewPortInstruction {
    pub component: Component,
}

impl ViewPortInstruction {
    pub fn new(component: Component) -> Self {
        Self { component }
    }
}

/// A view model plus the router it hosts, if any.
#[derive(Clone)]
pub struct Component {
    pub view_model: Arc<dyn ViewModel>,
    pub child_router: Option<ChildRouter>,
}

impl Component {
    pub fn new(view_model: impl ViewModel + 'static) -> Self {
        Self::from_arc(Arc::new(view_model))
    }

    pub fn from_arc(view_model: Arc<dyn ViewModel>) -> Self {
        Self {
            view_model,
            child_router: None,
        }
    }

    pub fn with_child_router(mut self, router: ChildRouter) -> Self {
        self.child_router = Some(router);
        self
    }

    /// The instruction the hosted router is currently showing, if any.
    pub fn active_child_instruction(&self) -> Option<&NavigationInstruction> {
        self.child_router
            .as_ref()
            .and_then(|router| router.current_instruction.as_deref())
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("child_router", &self.child_router)
            .finish_non_exhaustive()
    }
}

/// The router hosted by a component.
#[derive(Debug, Clone, Default)]
pub struct ChildRouter {
    pub current_instruction: Option<Arc<NavigationInstruction>>,
}

impl ChildRouter {
    /// A router that is not showing anything yet.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn showing(instruction: NavigationInstruction) -> Self {
        Self {
            current_instruction: Some(Arc::new(instruction)),
        }
    }
}
