// condflow/src/conditional/consequence.rs

//! The consequence chain attached to a branch: an ordered list of `then` / `catch` /
//! `finally` links, replayed against the input value when the branch matches.
//!
//! Links follow the usual promise rules:
//!  - `then` runs only on a resolved outcome and replaces it.
//!  - `catch` runs only on a rejected outcome and replaces it (recovery or re-rejection).
//!  - `finally` always runs; its own failure replaces the outcome, success leaves it untouched.

use crate::core::deferred::{self, Deferred};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Which chaining operation a link performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
  Then,
  Catch,
  Finally,
}

impl fmt::Display for ChainKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChainKind::Then => f.write_str("then"),
      ChainKind::Catch => f.write_str("catch"),
      ChainKind::Finally => f.write_str("finally"),
    }
  }
}

pub type ThenHandler<T, E> = Arc<dyn Fn(T) -> Deferred<T, E> + Send + Sync + 'static>;
pub type CatchHandler<T, E> = Arc<dyn Fn(E) -> Deferred<T, E> + Send + Sync + 'static>;
pub type FinallyHandler<E> = Arc<dyn Fn() -> Deferred<(), E> + Send + Sync + 'static>;

/// One handler in a consequence chain.
///
/// Build links with the constructors (`Link::then`, `Link::catch_async`, ...) and
/// attach them with `ConditionalBuilder::try_chain`, or use the builder's shorthand methods.
pub enum Link<T, E> {
  Then(ThenHandler<T, E>),
  Catch(CatchHandler<T, E>),
  Finally(FinallyHandler<E>),
}

impl<T, E> Link<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  /// A `then` link from a synchronous handler. `Err` rejects the chain.
  pub fn then<F>(handler: F) -> Self
  where
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
  {
    Link::Then(Arc::new(move |value| deferred::settle(handler(value))))
  }

  pub fn then_async<F, Fut>(handler: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
  {
    Link::Then(Arc::new(move |value| deferred::from_future(handler(value))))
  }

  /// A `catch` link from a synchronous handler. `Ok` recovers, `Err` keeps the chain rejected.
  pub fn catch<F>(handler: F) -> Self
  where
    F: Fn(E) -> Result<T, E> + Send + Sync + 'static,
  {
    Link::Catch(Arc::new(move |error| deferred::settle(handler(error))))
  }

  pub fn catch_async<F, Fut>(handler: F) -> Self
  where
    F: Fn(E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
  {
    Link::Catch(Arc::new(move |error| deferred::from_future(handler(error))))
  }

  /// A `finally` link from a synchronous handler. It sees neither the value nor the error.
  pub fn finally<F>(handler: F) -> Self
  where
    F: Fn() -> Result<(), E> + Send + Sync + 'static,
  {
    Link::Finally(Arc::new(move || deferred::settle(handler())))
  }

  pub fn finally_async<F, Fut>(handler: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
  {
    Link::Finally(Arc::new(move || deferred::from_future(handler())))
  }
}

impl<T, E> Link<T, E> {
  pub fn kind(&self) -> ChainKind {
    match self {
      Link::Then(_) => ChainKind::Then,
      Link::Catch(_) => ChainKind::Catch,
      Link::Finally(_) => ChainKind::Finally,
    }
  }
}

// Handlers are shared, so cloning never requires T: Clone or E: Clone.
impl<T, E> Clone for Link<T, E> {
  fn clone(&self) -> Self {
    match self {
      Link::Then(h) => Link::Then(Arc::clone(h)),
      Link::Catch(h) => Link::Catch(Arc::clone(h)),
      Link::Finally(h) => Link::Finally(Arc::clone(h)),
    }
  }
}

impl<T, E> fmt::Debug for Link<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Link").field(&self.kind()).finish()
  }
}

/// The composed chain of one branch. Empty means identity: the input resolves unchanged.
pub struct Consequence<T, E> {
  links: Vec<Link<T, E>>,
}

impl<T, E> Consequence<T, E> {
  pub(crate) fn identity() -> Self {
    Self { links: Vec::new() }
  }

  /// Returns a new chain with `link` appended; `self` is left as it was.
  pub(crate) fn extended(&self, link: Link<T, E>) -> Self {
    let mut links = Vec::with_capacity(self.links.len() + 1);
    links.extend(self.links.iter().cloned());
    links.push(link);
    Self { links }
  }

  pub fn len(&self) -> usize {
    self.links.len()
  }

  pub fn is_empty(&self) -> bool {
    self.links.is_empty()
  }

  pub fn kinds(&self) -> impl Iterator<Item = ChainKind> + '_ {
    self.links.iter().map(Link::kind)
  }
}

impl<T, E> Consequence<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  /// Runs the chain against `value`, link by link, in the order the links were added.
  pub(crate) async fn replay(&self, value: T) -> Result<T, E> {
    let mut outcome: Result<T, E> = Ok(value);
    for link in &self.links {
      outcome = match (link, outcome) {
        (Link::Then(handler), Ok(value)) => handler(value).await,
        (Link::Catch(handler), Err(error)) => handler(error).await,
        (Link::Finally(handler), settled) => match handler().await {
          Ok(()) => settled,
          Err(error) => Err(error),
        },
        (_, settled) => settled,
      };
    }
    outcome
  }
}

impl<T, E> Clone for Consequence<T, E> {
  fn clone(&self) -> Self {
    Self {
      links: self.links.clone(),
    }
  }
}

impl<T, E> fmt::Debug for Consequence<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.kinds()).finish()
  }
}
