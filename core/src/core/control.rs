// condflow/src/core/control.rs

//! Describes which branch a step represents and which one (if any) matched during a run.

use std::fmt;

/// The builder call that introduced a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
  /// Added with `when` (the leading `if`).
  If,
  /// Added with `else_when`.
  ElseIf,
  /// Added with `otherwise`. Its condition always holds.
  Else,
}

impl fmt::Display for BranchKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BranchKind::If => f.write_str("if"),
      BranchKind::ElseIf => f.write_str("else if"),
      BranchKind::Else => f.write_str("else"),
    }
  }
}

/// Position and kind of the branch whose consequence chain ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedBranch {
  /// Zero-based declaration index of the branch.
  pub index: usize,
  pub kind: BranchKind,
}

/// Result of a full evaluation: the settled value plus the branch that produced it.
///
/// `matched` is `None` when no condition held, in which case `value` is the
/// untouched input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOutcome<T> {
  pub value: T,
  pub matched: Option<MatchedBranch>,
}

impl<T> BranchOutcome<T> {
  pub(crate) fn unmatched(value: T) -> Self {
    Self { value, matched: None }
  }

  pub fn is_matched(&self) -> bool {
    self.matched.is_some()
  }

  pub fn into_value(self) -> T {
    self.value
  }
}
