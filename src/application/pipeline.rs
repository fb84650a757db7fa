//! Pipeline executor: folds a chain of steps over a document.

use tracing::{debug, instrument};

use crate::application::{parse_steps, ApplicationResult, Step, StepContext};
use crate::domain::{Document, NodeId};

/// Result of running a whole chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Node selected when the last step finished
    pub current: NodeId,
    /// Whether any step changed the document
    pub dirty: bool,
}

/// Ordered chain of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Build a pipeline from the tokens following the file name.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ApplicationResult<Self> {
        parse_steps(tokens).map(Self::new)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step starting at the root.
    ///
    /// Stops at the first failing step and returns its error; steps after it
    /// never run. A failed run carries no dirty flag, so callers cannot
    /// persist a partially applied chain.
    #[instrument(level = "debug", skip(self, document, ctx), fields(steps = self.steps.len()))]
    pub fn run(
        &self,
        document: &mut Document,
        ctx: &mut StepContext<'_>,
    ) -> ApplicationResult<Outcome> {
        let mut current = document.root();
        let mut dirty = false;

        for (position, step) in self.steps.iter().enumerate() {
            current = step.apply(document, current, ctx).map_err(|e| {
                debug!("step {} ({:?}) failed: {}", position, step, e);
                e
            })?;
            dirty |= step.is_mutating();
        }

        debug!("pipeline finished, dirty={}", dirty);
        Ok(Outcome { current, dirty })
    }
}
