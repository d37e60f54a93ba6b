// condflow/src/core/step.rs

//! Defines a single branch of a conditional pipeline.

use crate::conditional::condition::Condition;
use crate::conditional::consequence::{Consequence, Link};
use crate::core::control::BranchKind;
use std::sync::Arc;

/// One `if` / `else if` / `else` branch: the condition guarding it and the
/// consequence chain that runs when it is the first branch to match.
pub struct Step<T, E> {
  pub(crate) kind: BranchKind,
  pub(crate) condition: Arc<dyn Condition<T, E>>,
  pub(crate) consequence: Consequence<T, E>,
}

impl<T, E> Step<T, E> {
  pub(crate) fn new(kind: BranchKind, condition: Arc<dyn Condition<T, E>>) -> Self {
    Self {
      kind,
      condition,
      consequence: Consequence::identity(),
    }
  }

  /// Same condition, consequence extended by one link.
  pub(crate) fn with_link(&self, link: Link<T, E>) -> Self {
    Self {
      kind: self.kind,
      condition: Arc::clone(&self.condition),
      consequence: self.consequence.extended(link),
    }
  }

  pub fn kind(&self) -> BranchKind {
    self.kind
  }

  pub fn consequence(&self) -> &Consequence<T, E> {
    &self.consequence
  }
}

impl<T, E> Clone for Step<T, E> {
  fn clone(&self) -> Self {
    Self {
      kind: self.kind,
      condition: Arc::clone(&self.condition),
      consequence: self.consequence.clone(),
    }
  }
}

// The condition is a trait object and has no useful Debug output.
impl<T, E> std::fmt::Debug for Step<T, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Step")
      .field("kind", &self.kind)
      .field("consequence", &self.consequence)
      .finish()
  }
}
