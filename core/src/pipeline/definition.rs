// condflow/src/pipeline/definition.rs

//! Contains the `Conditional<T, E>` struct: an immutable snapshot of a builder's branches.

use crate::core::control::BranchKind;
use crate::core::deferred::Deferred;
use crate::core::step::Step;
use std::fmt;
use std::sync::Arc;

/// A compiled conditional pipeline.
///
/// Cloning is cheap and clones share the same branches. A `Conditional` keeps no
/// state between runs, so any number of runs may be in flight at once.
pub struct Conditional<T, E = anyhow::Error>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  /// Branches in declaration order; earlier branches take priority.
  pub(crate) steps: Arc<[Step<T, E>]>,
}

impl<T, E> Conditional<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  pub(crate) fn new(steps: Vec<Step<T, E>>) -> Self {
    Self { steps: steps.into() }
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn branch_kinds(&self) -> Vec<BranchKind> {
    self.steps.iter().map(Step::kind).collect()
  }

  pub fn steps(&self) -> &[Step<T, E>] {
    &self.steps
  }

  /// Turns the pipeline into a plain function from input value to pending result.
  pub fn into_fn(self) -> impl Fn(T) -> Deferred<T, E> + Clone + Send + Sync + 'static {
    move |value| self.run(value)
  }
}

impl<T, E> Clone for Conditional<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  fn clone(&self) -> Self {
    Self {
      steps: Arc::clone(&self.steps),
    }
  }
}

impl<T, E> fmt::Debug for Conditional<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Conditional").field("steps", &self.steps).finish()
  }
}
