// condflow/src/pipeline/mod.rs

//! Defines the compiled `Conditional<T, E>` pipeline produced by `ConditionalBuilder::end()`,
//! and its execution logic.

pub mod definition;
pub mod execution;

// Re-export the main Conditional struct
pub use definition::Conditional;
