use crate::instruction::NavigationInstruction;
use crate::metadata::StepMetadata;
use crate::pipeline::{Next, PipelineStatus};
use crate::settle::Settle;

/// A stage of the navigation pipeline.
///
/// A step reads the instruction and then hands control to exactly one branch
/// of `next`, returning whatever that branch returns.
pub trait PipelineStep: Send + Sync + 'static {
    fn metadata(&self) -> StepMetadata;
    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Settle<PipelineStatus>;
}
