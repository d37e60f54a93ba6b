// condflow/src/conditional/mod.rs

//! The fluent half of the crate: branches (`when` / `else_when` / `otherwise`), the
//! conditions guarding them, and the `then` / `catch` / `finally` consequence chains
//! attached to each.

pub mod builder;
pub mod condition;
pub mod consequence;

pub use builder::{conditional, ConditionalBuilder};
pub use condition::{Always, AsyncFnCondition, Condition, FnCondition, TryFnCondition};
pub use consequence::{ChainKind, Consequence, Link};
