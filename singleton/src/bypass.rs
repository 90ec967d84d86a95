//! Construction that sidesteps the accessor.
//!
//! Rust has no reflective constructor call, so this module plays that part:
//! it drives a holder's private constructor directly, the way reflection
//! would in a runtime that offers it. The guard in every constructor refuses
//! the attempt, which is what the tests rely on.

use crate::core::Guarded;
use crate::error::SingletonError;

/// Tries to build a second instance of `S` without going through its accessor.
///
/// The canonical instance is published first, just as a reflective caller
/// would already have the type loaded. The direct construction that follows
/// always fails with [`SingletonError::DuplicateConstruction`] and leaves the
/// published instance untouched.
///
/// ```
/// use fibre_singleton::{bypass, HolderKind, LockedLazySingleton, SingletonError};
///
/// let err = bypass::forge::<LockedLazySingleton>().unwrap_err();
/// assert_eq!(
///   err,
///   SingletonError::DuplicateConstruction { kind: HolderKind::LockedLazy }
/// );
/// ```
pub fn forge<S: Guarded>() -> Result<S, SingletonError> {
  let canonical = S::get();
  tracing::debug!(
    kind = %S::KIND,
    identity = canonical.identity(),
    "attempting construction outside the accessor"
  );
  S::construct()
}
