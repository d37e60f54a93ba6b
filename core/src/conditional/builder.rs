// condflow/src/conditional/builder.rs

//! Implements the fluent builder (`ConditionalBuilder`) that accumulates branches and
//! their consequence chains before being compiled into a `Conditional` with `end()`.
//!
//! The builder is immutable: every method takes `&self` and returns a new builder.
//! Branches already present are shared with the new builder, so forking a builder
//! half-way and extending both halves is cheap and the halves never affect each other.

use crate::conditional::condition::{Always, AsyncFnCondition, Condition, FnCondition, TryFnCondition};
use crate::conditional::consequence::Link;
use crate::core::control::BranchKind;
use crate::core::step::Step;
use crate::error::{ConditionalError, ConditionalResult};
use crate::pipeline::Conditional;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Builder for an `if` / `else if` / `else` cascade over values of type `T`.
///
/// `E` is the error type conditions and handlers reject with. It defaults to `anyhow::Error`.
pub struct ConditionalBuilder<T, E = anyhow::Error>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  steps: Vec<Step<T, E>>,
}

impl<T, E> ConditionalBuilder<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  /// A builder with no branches.
  pub fn new() -> Self {
    Self { steps: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  /// Kinds of the branches declared so far, in declaration order.
  pub fn branch_kinds(&self) -> Vec<BranchKind> {
    self.steps.iter().map(Step::kind).collect()
  }

  // --- Branches ---

  /// Opens a branch guarded by a synchronous predicate.
  ///
  /// The predicate cannot fail. Use `when_try` for one that can reject the run.
  pub fn when<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T) -> bool + Send + Sync + 'static,
  {
    self.push_step(BranchKind::If, Arc::new(FnCondition::new(predicate)))
  }

  /// Opens a branch guarded by a fallible synchronous predicate. `Err` rejects the run.
  pub fn when_try<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
  {
    self.push_step(BranchKind::If, Arc::new(TryFnCondition::new(predicate)))
  }

  /// Opens a branch guarded by an async predicate, which may reject.
  pub fn when_async<F, Fut>(&self, predicate: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, E>> + Send + 'static,
  {
    self.push_step(BranchKind::If, Arc::new(AsyncFnCondition::new(predicate)))
  }

  pub fn when_condition<C>(&self, condition: C) -> Self
  where
    C: Condition<T, E>,
  {
    self.push_step(BranchKind::If, Arc::new(condition))
  }

  /// Adds a subsequent branch. Behaves exactly like `when`; only the recorded kind differs.
  pub fn else_when<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T) -> bool + Send + Sync + 'static,
  {
    self.push_step(BranchKind::ElseIf, Arc::new(FnCondition::new(predicate)))
  }

  pub fn else_when_try<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
  {
    self.push_step(BranchKind::ElseIf, Arc::new(TryFnCondition::new(predicate)))
  }

  pub fn else_when_async<F, Fut>(&self, predicate: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, E>> + Send + 'static,
  {
    self.push_step(BranchKind::ElseIf, Arc::new(AsyncFnCondition::new(predicate)))
  }

  pub fn else_when_condition<C>(&self, condition: C) -> Self
  where
    C: Condition<T, E>,
  {
    self.push_step(BranchKind::ElseIf, Arc::new(condition))
  }

  /// Adds a branch whose condition always holds. It fires whenever it is reached.
  pub fn otherwise(&self) -> Self {
    self.push_step(BranchKind::Else, Arc::new(Always))
  }

  fn push_step(&self, kind: BranchKind, condition: Arc<dyn Condition<T, E>>) -> Self {
    if let Some(else_idx) = self.steps.iter().position(|s| s.kind == BranchKind::Else) {
      event!(
        Level::WARN,
        branch_kind = %kind,
        else_index = else_idx,
        branch_index = self.steps.len(),
        "Branch added after an 'otherwise' branch can never match."
      );
    }
    let mut steps = Vec::with_capacity(self.steps.len() + 1);
    steps.extend(self.steps.iter().cloned());
    steps.push(Step::new(kind, condition));
    Self { steps }
  }

  // --- Consequence chain of the last branch ---

  /// Appends `link` to the consequence chain of the most recently added branch.
  ///
  /// Fails with `ConditionalError::NoSteps` if no branch has been added yet.
  pub fn try_chain(&self, link: Link<T, E>) -> ConditionalResult<Self> {
    let method = link.kind();
    let Some((last, preceding)) = self.steps.split_last() else {
      event!(Level::ERROR, method = %method, "Consequence added before any branch.");
      return Err(ConditionalError::NoSteps { method });
    };

    let mut steps = Vec::with_capacity(self.steps.len());
    steps.extend(preceding.iter().cloned());
    steps.push(last.with_link(link));
    Ok(Self { steps })
  }

  // Setup mistakes are programming errors, so the shorthand methods panic.
  #[track_caller]
  fn chain(&self, link: Link<T, E>) -> Self {
    match self.try_chain(link) {
      Ok(builder) => builder,
      Err(e) => panic!("{}", e),
    }
  }

  /// Chains a synchronous `then` handler onto the last branch.
  ///
  /// # Panics
  /// If no branch has been added yet. Use `try_chain(Link::then(..))` to get an error instead.
  #[track_caller]
  pub fn then<F>(&self, handler: F) -> Self
  where
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
  {
    self.chain(Link::then(handler))
  }

  #[track_caller]
  pub fn then_async<F, Fut>(&self, handler: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
  {
    self.chain(Link::then_async(handler))
  }

  /// Chains a synchronous `catch` handler onto the last branch.
  ///
  /// # Panics
  /// If no branch has been added yet.
  #[track_caller]
  pub fn catch<F>(&self, handler: F) -> Self
  where
    F: Fn(E) -> Result<T, E> + Send + Sync + 'static,
  {
    self.chain(Link::catch(handler))
  }

  #[track_caller]
  pub fn catch_async<F, Fut>(&self, handler: F) -> Self
  where
    F: Fn(E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
  {
    self.chain(Link::catch_async(handler))
  }

  /// Chains a synchronous `finally` handler onto the last branch.
  ///
  /// # Panics
  /// If no branch has been added yet.
  #[track_caller]
  pub fn finally<F>(&self, handler: F) -> Self
  where
    F: Fn() -> Result<(), E> + Send + Sync + 'static,
  {
    self.chain(Link::finally(handler))
  }

  #[track_caller]
  pub fn finally_async<F, Fut>(&self, handler: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
  {
    self.chain(Link::finally_async(handler))
  }

  // --- Finalization ---

  /// Compiles the branches declared so far into a reusable `Conditional`.
  #[instrument(name = "ConditionalBuilder::end", skip_all, fields(num_steps = self.steps.len()))]
  pub fn end(self) -> Conditional<T, E> {
    event!(Level::DEBUG, branches = ?self.branch_kinds(), "Conditional pipeline compiled.");
    Conditional::new(self.steps)
  }
}

impl<T, E> Default for ConditionalBuilder<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> Clone for ConditionalBuilder<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  fn clone(&self) -> Self {
    Self {
      steps: self.steps.clone(),
    }
  }
}

impl<T, E> fmt::Debug for ConditionalBuilder<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConditionalBuilder").field("steps", &self.steps).finish()
  }
}

/// Entry point: a fresh builder with no branches.
pub fn conditional<T, E>() -> ConditionalBuilder<T, E>
where
  T: Clone + Send + Sync + 'static,
  E: fmt::Display + Send + 'static,
{
  ConditionalBuilder::new()
}
