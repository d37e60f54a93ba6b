// src/lib.rs

//! condflow: asynchronous `if` / `else if` / `else` cascades, built fluently.
//!
//! A conditional pipeline is declared once and run many times:
//!  - Branches are added with `when`, `else_when` and `otherwise`, in priority order.
//!  - Each branch carries its own consequence chain of `then`, `catch` and `finally` handlers.
//!  - Conditions may be plain predicates, async predicates, or any `Condition` implementation.
//!  - `end()` compiles the builder into a `Conditional`, a cheap-to-clone, shareable pipeline.
//!  - At run time the first branch whose condition holds runs its chain; the others are skipped.
//!
//! Builders are immutable. Every method returns a new builder and leaves the receiver untouched.

pub mod conditional;
pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::conditional::builder::{conditional, ConditionalBuilder};
pub use crate::conditional::condition::{Always, AsyncFnCondition, Condition, FnCondition, TryFnCondition};
pub use crate::conditional::consequence::{ChainKind, Link};

pub use crate::core::control::{BranchKind, BranchOutcome, MatchedBranch};
pub use crate::core::deferred::{self, Deferred};

// The compiled, runnable pipeline
pub use crate::pipeline::definition::Conditional;

pub use crate::error::{ConditionalError, ConditionalResult};

/*
    Typical flow:
    1. Start a builder with `conditional::<T, E>()`.
    2. Add a branch with `.when(|v| ...)` and chain `.then(...)`, `.catch(...)`, `.finally(...)`.
    3. Add further branches with `.else_when(...)` and finish with `.otherwise()` if needed.
    4. Call `.end()` to obtain a `Conditional<T, E>`.
    5. Call `.run(value).await` (or `.evaluate(value).await` to learn which branch matched).
*/
