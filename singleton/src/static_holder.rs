//! Lazy initialization through a nested holder scope.

use crate::core::{
  built_by_accessor, sealed, ConstructionGuard, ConstructionStats, Guarded, HolderKind, Singleton,
};
use crate::error::SingletonError;
use once_cell::sync::Lazy;

const LABEL: &str = "static holder";

static GUARD: ConstructionGuard = ConstructionGuard::new(HolderKind::StaticHolder);

// Nothing in here is touched until `get` first references `holder::INSTANCE`.
mod holder {
  use super::*;

  pub(super) static INSTANCE: Lazy<StaticHolderSingleton> =
    Lazy::new(|| built_by_accessor(<StaticHolderSingleton as sealed::Construct>::construct()));
}

/// A singleton built on first access by a `Lazy` static in a nested scope.
///
/// Behaves like [`crate::DoubleCheckedSingleton`] but leaves the
/// exactly-once and publication logic to `once_cell`.
#[derive(Debug)]
pub struct StaticHolderSingleton {
  label: &'static str,
}

impl StaticHolderSingleton {
  /// Returns the shared instance, building it on the first call.
  pub fn get() -> &'static Self {
    &holder::INSTANCE
  }
}

impl sealed::Sealed for StaticHolderSingleton {}

impl sealed::Construct for StaticHolderSingleton {
  fn construct() -> Result<Self, SingletonError> {
    GUARD.claim()?;
    Ok(StaticHolderSingleton { label: LABEL })
  }
}

impl Singleton for StaticHolderSingleton {
  const KIND: HolderKind = HolderKind::StaticHolder;

  fn get() -> &'static Self {
    StaticHolderSingleton::get()
  }

  fn is_initialized() -> bool {
    Lazy::get(&holder::INSTANCE).is_some()
  }

  fn stats() -> ConstructionStats {
    GUARD.stats()
  }

  fn label(&self) -> &'static str {
    self.label
  }
}

impl Guarded for StaticHolderSingleton {}
