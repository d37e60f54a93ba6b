// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use condflow::{conditional, Conditional, ConditionalBuilder};
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Test condition failed: {0}")]
  Condition(String),

  #[error("{0}")]
  Handler(String),

  #[error("Test cleanup failed: {0}")]
  Cleanup(String),
}

pub type TestBuilder = ConditionalBuilder<i32, TestError>;
pub type TestConditional = Conditional<i32, TestError>;

pub fn builder() -> TestBuilder {
  conditional::<i32, TestError>()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Execution counters ---

/// Counts how many times a condition or handler ran.
#[derive(Clone, Default, Debug)]
pub struct Probe(Arc<AtomicUsize>);

impl Probe {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn hit(&self) {
    self.0.fetch_add(1, Ordering::SeqCst);
  }

  pub fn count(&self) -> usize {
    self.0.load(Ordering::SeqCst)
  }
}

/// A predicate that records each evaluation before answering.
pub fn probed_predicate(
  probe: &Probe,
  answer: impl Fn(&i32) -> bool + Send + Sync + 'static,
) -> impl Fn(&i32) -> bool + Send + Sync + 'static {
  let probe = probe.clone();
  move |v: &i32| {
    probe.hit();
    answer(v)
  }
}

/// A `then` handler that records each call and applies `f`.
pub fn probed_handler(
  probe: &Probe,
  f: impl Fn(i32) -> i32 + Send + Sync + 'static,
) -> impl Fn(i32) -> Result<i32, TestError> + Send + Sync + 'static {
  let probe = probe.clone();
  move |v: i32| {
    probe.hit();
    Ok(f(v))
  }
}

// Global counters for the serial tests.
pub static CONDITION_EVAL_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static HANDLER_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  CONDITION_EVAL_COUNTER.store(0, Ordering::SeqCst);
  HANDLER_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

pub async fn short_delay(millis: u64) {
  tokio::time::sleep(Duration::from_millis(millis)).await;
}
