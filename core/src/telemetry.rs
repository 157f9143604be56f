//! # Telemetry: Observability Decorators
//!
//! This module provides decorators for adding observability to pipeline steps,
//! plus a stdout subscriber for development.

use crate::instruction::NavigationInstruction;
use crate::metadata::StepMetadata;
use crate::pipeline::{Next, PipelineStatus};
use crate::settle::Settle;
use crate::step::PipelineStep;
use std::time::Instant;
use tracing::Instrument;

/// Initialize a simple stdout tracing subscriber for development.
///
/// Respects `RUST_LOG`; defaults to `info,tollgate_core=debug`.
pub fn init_stdout_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tollgate_core=debug"));

    // A subscriber may already be installed by the host application.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A wrapper step that adds tracing to any inner step.
///
/// The final status is logged once it settles, whether that happens
/// synchronously or after the inner step's future resolves.
#[derive(Debug, Clone)]
pub struct Traced<S> {
    inner: S,
    name: String,
}

impl<S: PipelineStep> Traced<S> {
    pub fn new(inner: S) -> Self {
        let name = inner.metadata().label;
        Self { inner, name }
    }

    pub fn named(inner: S, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }
}

impl<S: PipelineStep> PipelineStep for Traced<S> {
    fn metadata(&self) -> StepMetadata {
        self.inner.metadata()
    }

    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Settle<PipelineStatus> {
        let span = tracing::info_span!("Node", tollgate.node = %self.name);
        let start = Instant::now();

        let settled = span.in_scope(|| {
            tracing::debug!(
                view_ports = instruction.plan.len(),
                incoming = instruction.view_port_instructions.len(),
                "Entering step"
            );
            self.inner.run(instruction, next)
        });

        match settled {
            Settle::Ready(status) => {
                span.in_scope(|| log_status(status, start));
                Settle::Ready(status)
            }
            Settle::Pending(future) => Settle::pending(
                async move {
                    let status = future.await;
                    log_status(status, start);
                    status
                }
                .instrument(span),
            ),
        }
    }
}

fn log_status(status: PipelineStatus, start: Instant) {
    let duration = start.elapsed();
    match status {
        PipelineStatus::Completed => tracing::info!(?duration, "Step completed: Next"),
        PipelineStatus::Canceled => tracing::info!(?duration, "Step completed: Cancel"),
    }
}
