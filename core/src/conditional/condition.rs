// condflow/src/conditional/condition.rs

//! Defines the `Condition` trait guarding each branch, and its built-in implementations.
//!
//! Every condition is evaluated against the *original* input value of a run and
//! yields `Result<bool, E>` asynchronously. Synchronous predicates are lifted into
//! that shape by `FnCondition`.

use async_trait::async_trait;
use std::future::Future;

/// Something that decides whether a branch should run for a given input value.
///
/// Implement this directly for condition sources that carry their own state
/// (a lookup table, a client handle, ...). Closures are covered by
/// `FnCondition` and `AsyncFnCondition`.
///
/// Returning `Err(e)` rejects the whole run with `e`; no later branch is evaluated.
#[async_trait]
pub trait Condition<T, E>: Send + Sync + 'static {
  async fn evaluate(&self, value: &T) -> Result<bool, E>;
}

// --- Synchronous predicate ---

/// Wraps a plain `Fn(&T) -> bool`. It never rejects.
pub struct FnCondition<F> {
  predicate: F,
}

impl<F> FnCondition<F> {
  pub fn new(predicate: F) -> Self {
    Self { predicate }
  }
}

#[async_trait]
impl<T, E, F> Condition<T, E> for FnCondition<F>
where
  T: Send + Sync + 'static,
  E: Send + 'static,
  F: Fn(&T) -> bool + Send + Sync + 'static,
{
  async fn evaluate(&self, value: &T) -> Result<bool, E> {
    Ok((self.predicate)(value))
  }
}

// --- Fallible synchronous predicate ---

/// Wraps a `Fn(&T) -> Result<bool, E>`. `Err` rejects the run without awaiting anything.
pub struct TryFnCondition<F> {
  predicate: F,
}

impl<F> TryFnCondition<F> {
  pub fn new(predicate: F) -> Self {
    Self { predicate }
  }
}

#[async_trait]
impl<T, E, F> Condition<T, E> for TryFnCondition<F>
where
  T: Send + Sync + 'static,
  E: Send + 'static,
  F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
{
  async fn evaluate(&self, value: &T) -> Result<bool, E> {
    (self.predicate)(value)
  }
}

// --- Asynchronous predicate ---

/// Wraps an async predicate `Fn(T) -> impl Future<Output = Result<bool, E>>`.
///
/// The predicate receives its own clone of the input so the returned future can be `'static`.
pub struct AsyncFnCondition<F> {
  predicate: F,
}

impl<F> AsyncFnCondition<F> {
  pub fn new(predicate: F) -> Self {
    Self { predicate }
  }
}

#[async_trait]
impl<T, E, F, Fut> Condition<T, E> for AsyncFnCondition<F>
where
  T: Clone + Send + Sync + 'static,
  E: Send + 'static,
  F: Fn(T) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<bool, E>> + Send + 'static,
{
  async fn evaluate(&self, value: &T) -> Result<bool, E> {
    (self.predicate)(value.clone()).await
  }
}

// --- Always ---

/// The condition behind `otherwise()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

#[async_trait]
impl<T, E> Condition<T, E> for Always
where
  T: Send + Sync + 'static,
  E: Send + 'static,
{
  async fn evaluate(&self, _value: &T) -> Result<bool, E> {
    Ok(true)
  }
}
