// condflow/src/pipeline/execution.rs

//! Contains `Conditional::run()` and `Conditional::evaluate()`, which fold the ordered
//! branches into a single pending result for one input value.

use crate::core::control::{BranchOutcome, MatchedBranch};
use crate::core::deferred::{self, Deferred};
use crate::core::step::Step;
use crate::pipeline::definition::Conditional;
use std::fmt;
use std::sync::Arc;
use tracing::{event, span, Instrument, Level};

impl<T, E> Conditional<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  /// Runs the pipeline against `value`.
  ///
  /// Resolves to the matched branch's consequence result, or to `value` itself when
  /// no branch matches. Rejects with the first error raised by a condition or by an
  /// unrecovered consequence handler; branches after that point are not evaluated.
  pub fn run(&self, value: T) -> Deferred<T, E> {
    if self.steps.is_empty() {
      event!(Level::TRACE, "Empty pipeline. Resolving input unchanged.");
      return deferred::resolve(value);
    }
    let steps = Arc::clone(&self.steps);
    let run_span = span!(Level::DEBUG, "Conditional::run", num_steps = steps.len());
    Box::pin(
      async move { fold_steps(&steps, value).await.map(BranchOutcome::into_value) }.instrument(run_span),
    )
  }

  /// Like `run`, but also reports which branch produced the value.
  pub fn evaluate(&self, value: T) -> Deferred<BranchOutcome<T>, E> {
    let steps = Arc::clone(&self.steps);
    let run_span = span!(Level::DEBUG, "Conditional::evaluate", num_steps = steps.len());
    Box::pin(async move { fold_steps(&steps, value).await }.instrument(run_span))
  }
}

/// Walks the branches in declaration order. Conditions and the matched consequence
/// both see the original `value`; once a branch has handled the value, the rest are skipped.
async fn fold_steps<T, E>(steps: &[Step<T, E>], value: T) -> Result<BranchOutcome<T>, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  let mut handled: Option<BranchOutcome<T>> = None;

  for (branch_index, step) in steps.iter().enumerate() {
    if handled.is_some() {
      event!(Level::TRACE, branch_index, branch_kind = %step.kind, "Branch skipped, already handled.");
      continue;
    }

    let condition_met = match step.condition.evaluate(&value).await {
      Ok(met) => met,
      Err(e) => {
        event!(Level::ERROR, branch_index, branch_kind = %step.kind, error = %e, "Branch condition rejected.");
        return Err(e);
      }
    };

    if !condition_met {
      event!(Level::TRACE, branch_index, branch_kind = %step.kind, "Branch condition not met.");
      continue;
    }

    event!(
      Level::DEBUG,
      branch_index,
      branch_kind = %step.kind,
      num_links = step.consequence.len(),
      "Branch matched. Running consequence chain."
    );
    match step.consequence.replay(value.clone()).await {
      Ok(settled) => {
        handled = Some(BranchOutcome {
          value: settled,
          matched: Some(MatchedBranch {
            index: branch_index,
            kind: step.kind,
          }),
        });
      }
      Err(e) => {
        event!(Level::ERROR, branch_index, branch_kind = %step.kind, error = %e, "Consequence chain rejected.");
        return Err(e);
      }
    }
  }

  match handled {
    Some(outcome) => Ok(outcome),
    None => {
      event!(Level::DEBUG, "No branch matched. Passing input through unchanged.");
      Ok(BranchOutcome::unmatched(value))
    }
  }
}
