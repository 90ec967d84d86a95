//! Errors raised by holder construction paths.

use crate::core::HolderKind;
use thiserror::Error;

/// Errors that can be returned by a singleton's private construction path.
///
/// The accessors themselves never fail. This error only surfaces when
/// something tries to build a second instance outside the accessor's gate,
/// see [`crate::bypass::forge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SingletonError {
  /// The holder for `kind` has already constructed its instance.
  #[error("duplicate construction of the {kind} singleton was rejected; use its accessor instead")]
  DuplicateConstruction { kind: HolderKind },
}

impl SingletonError {
  /// The holder kind that refused the construction.
  #[inline]
  pub fn kind(&self) -> HolderKind {
    match self {
      SingletonError::DuplicateConstruction { kind } => *kind,
    }
  }
}
