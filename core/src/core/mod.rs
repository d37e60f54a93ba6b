pub mod control;
pub mod deferred;
pub mod step;

// Re-export key types for easier access from other condflow modules (and lib.rs)
pub use control::{BranchKind, BranchOutcome, MatchedBranch};
pub use deferred::Deferred;
pub use step::Step;
