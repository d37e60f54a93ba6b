// condflow/src/core/deferred.rs

//! The deferred computation that conditions, consequence links and pipeline runs resolve through.
//!
//! A `Deferred<T, E>` is an ordinary boxed future: `Ok` is resolution, `Err` is rejection.
//! Nothing here depends on a particular executor.

use std::future::Future;
use std::pin::Pin;

/// A pending `Result<T, E>`, boxed so that heterogeneous handlers can be stored side by side.
pub type Deferred<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Lifts a plain value into an already-resolved `Deferred`.
pub fn resolve<T, E>(value: T) -> Deferred<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  Box::pin(std::future::ready(Ok(value)))
}

/// Lifts an error into an already-rejected `Deferred`.
pub fn reject<T, E>(error: E) -> Deferred<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  Box::pin(std::future::ready(Err(error)))
}

/// Lifts a synchronously computed outcome, resolved or rejected.
pub fn settle<T, E>(outcome: Result<T, E>) -> Deferred<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  match outcome {
    Ok(value) => resolve(value),
    Err(error) => reject(error),
  }
}

pub fn from_future<T, E, Fut>(fut: Fut) -> Deferred<T, E>
where
  Fut: Future<Output = Result<T, E>> + Send + 'static,
{
  Box::pin(fut)
}
