use parking_lot::Mutex;
use std::sync::Arc;
use tollgate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    True,
    Cancel,
}

/// Records which branch a step took. Like the router's own `next`, both
/// branches answer asynchronously.
#[derive(Clone, Default)]
struct State {
    result: Arc<Mutex<Option<Signal>>>,
}

impl State {
    fn next(&self) -> RecordingNext {
        RecordingNext(self.result.clone())
    }

    fn result(&self) -> Option<Signal> {
        *self.result.lock()
    }
}

struct RecordingNext(Arc<Mutex<Option<Signal>>>);

impl Continuation for RecordingNext {
    type Output = Signal;

    fn proceed(self) -> Settle<Signal> {
        *self.0.lock() = Some(Signal::True);
        Settle::pending(async { Signal::True })
    }

    fn cancel(self) -> Settle<Signal> {
        *self.0.lock() = Some(Signal::Cancel);
        Settle::pending(async { Signal::Cancel })
    }
}

mod can_deactivate_previous {
    use super::*;

    fn view_port<O>(guard: impl Fn() -> O + Send + Sync + 'static) -> ViewPortPlan
    where
        O: Into<GuardOutcome>,
    {
        view_port_with(guard, ActivationStrategy::InvokeLifecycle)
    }

    fn view_port_with<O>(
        guard: impl Fn() -> O + Send + Sync + 'static,
        strategy: impl Into<ActivationStrategy>,
    ) -> ViewPortPlan
    where
        O: Into<GuardOutcome>,
    {
        ViewPortPlan::new(strategy)
            .with_prev_component(Component::new(DynamicViewModel::new().with_can_deactivate(guard)))
    }

    #[test]
    fn returns_true_when_context_can_deactivate() {
        let state = State::default();
        let instruction = NavigationInstruction::new().with_plan("first", view_port(|| true));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[test]
    fn returns_true_with_replace_strategy() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port_with(|| true, ActivationStrategy::Replace));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[test]
    fn cancels_when_context_cannot_deactivate() {
        let state = State::default();
        let instruction = NavigationInstruction::new().with_plan("first", view_port(|| false));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::Cancel));
    }

    #[test]
    fn returns_true_with_unknown_strategy() {
        let state = State::default();
        let instruction =
            NavigationInstruction::new().with_plan("first", view_port_with(|| false, "unknown"));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[tokio::test]
    async fn returns_true_with_async_guard() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port(|| GuardOutcome::from_future(async { true })));

        let settled = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), None);
        assert_eq!(settled.await, Signal::True);
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[tokio::test]
    async fn cancels_with_async_guard() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port(|| GuardOutcome::from_future(async { false })));

        let settled = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(settled.await, Signal::Cancel);
        assert_eq!(state.result(), Some(Signal::Cancel));
    }

    #[tokio::test]
    async fn cancels_when_guard_panics() {
        let state = State::default();
        let instruction = NavigationInstruction::new().with_plan(
            "first",
            view_port(|| -> bool {
                panic!("oops");
            }),
        );

        let settled = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(settled.await, Signal::Cancel);
        assert_eq!(state.result(), Some(Signal::Cancel));
    }

    #[tokio::test]
    async fn cancels_when_guard_rejects() {
        let state = State::default();
        let instruction = NavigationInstruction::new().with_plan(
            "first",
            view_port(|| {
                GuardOutcome::try_from_future(async { Err::<bool, _>(anyhow::anyhow!("unsaved changes")) })
            }),
        );

        let settled = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(settled.await, Signal::Cancel);
    }

    #[test]
    fn returns_true_when_all_plans_return_true() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port(|| true))
            .with_plan("second", view_port(|| true));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[test]
    fn cancels_when_some_plans_return_false() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port(|| true))
            .with_plan("second", view_port(|| false));

        let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::Cancel));
    }

    #[tokio::test]
    async fn cancels_when_async_and_sync_guards_disagree() {
        let state = State::default();
        let instruction = NavigationInstruction::new()
            .with_plan("first", view_port(|| GuardOutcome::from_future(async { true })))
            .with_plan("second", view_port(|| false));

        let settled = CanDeactivatePreviousStep::new().run(&instruction, state.next());
        assert_eq!(settled.await, Signal::Cancel);
    }

    mod with_child_navigation_instruction {
        use super::*;

        #[test]
        fn returns_true_when_child_is_true() {
            let state = State::default();
            let child = NavigationInstruction::new().with_plan("first", view_port(|| true));
            let instruction = NavigationInstruction::new()
                .with_plan("first", view_port(|| true).with_child_navigation_instruction(child));

            let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
            assert_eq!(state.result(), Some(Signal::True));
        }

        #[test]
        fn cancels_when_child_is_false() {
            let state = State::default();
            let child = NavigationInstruction::new().with_plan("first", view_port(|| false));
            let instruction = NavigationInstruction::new()
                .with_plan("first", view_port(|| true).with_child_navigation_instruction(child));

            let _ = CanDeactivatePreviousStep::new().run(&instruction, state.next());
            assert_eq!(state.result(), Some(Signal::Cancel));
        }
    }

    mod with_router_and_current_instruction {
        use super::*;

        fn instruction(nested_allows: bool) -> NavigationInstruction {
            let current = NavigationInstruction::new().with_view_port_instruction(
                "first",
                ViewPortInstruction::new(Component::new(
                    DynamicViewModel::new().with_can_deactivate(move || nested_allows),
                )),
            );
            let prev = Component::new(DynamicViewModel::new().with_can_deactivate(|| true))
                .with_child_router(ChildRouter::showing(current));

            NavigationInstruction::new().with_plan(
                "first",
                ViewPortPlan::new(ActivationStrategy::InvokeLifecycle).with_prev_component(prev),
            )
        }

        #[test]
        fn returns_true_when_router_instruction_can_deactivate() {
            let state = State::default();
            let _ = CanDeactivatePreviousStep::new().run(&instruction(true), state.next());
            assert_eq!(state.result(), Some(Signal::True));
        }

        #[test]
        fn cancels_when_router_instruction_cannot_deactivate() {
            let state = State::default();
            let _ = CanDeactivatePreviousStep::new().run(&instruction(false), state.next());
            assert_eq!(state.result(), Some(Signal::Cancel));
        }
    }
}

mod can_activate_next {
    use super::*;

    fn navigation_instruction(
        guard: impl Fn() -> bool + Send + Sync + 'static,
        strategy: impl Into<ActivationStrategy>,
    ) -> NavigationInstruction {
        NavigationInstruction::new()
            .with_plan("default", ViewPortPlan::new(strategy))
            .with_view_port_instruction(
                "default",
                ViewPortInstruction::new(Component::new(DynamicViewModel::new().with_can_activate(guard))),
            )
    }

    #[test]
    fn returns_true_when_context_can_activate() {
        let state = State::default();
        let instruction = navigation_instruction(|| true, ActivationStrategy::InvokeLifecycle);

        let _ = CanActivateNextStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[test]
    fn returns_true_with_replace_strategy() {
        let state = State::default();
        let instruction = navigation_instruction(|| true, ActivationStrategy::Replace);

        let _ = CanActivateNextStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::True));
    }

    #[test]
    fn cancels_when_context_cannot_activate() {
        let state = State::default();
        let instruction = navigation_instruction(|| false, ActivationStrategy::InvokeLifecycle);

        let _ = CanActivateNextStep::new().run(&instruction, state.next());
        assert_eq!(state.result(), Some(Signal::Cancel));
    }
}
