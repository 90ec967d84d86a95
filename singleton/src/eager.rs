//! Eager initialization: the instance is built while the binary loads.

use crate::core::{
  built_by_accessor, sealed, ConstructionGuard, ConstructionStats, Guarded, HolderKind, Singleton,
};
use crate::error::SingletonError;
use once_cell::sync::OnceCell;

const LABEL: &str = "eager";

static GUARD: ConstructionGuard = ConstructionGuard::new(HolderKind::Eager);
static INSTANCE: OnceCell<EagerSingleton> = OnceCell::new();

// Runs before `main` (and before any test), so the instance and its
// construction event exist even if `get` is never called. Any subscriber
// installed later in `main` will not see that event; `stats()` still records it.
#[ctor::ctor]
fn construct_at_load() {
  EagerSingleton::get();
}

/// A singleton that exists before `main` runs.
///
/// A load-time hook builds the instance, so by the time any caller can reach
/// [`EagerSingleton::get`] there is nothing left to race on. The trade-off is
/// that the instance is built whether or not anyone uses it.
#[derive(Debug)]
pub struct EagerSingleton {
  label: &'static str,
}

impl EagerSingleton {
  /// Returns the shared instance.
  pub fn get() -> &'static Self {
    // Only the load-time hook ever takes the initializing branch.
    INSTANCE.get_or_init(|| built_by_accessor(<Self as sealed::Construct>::construct()))
  }
}

impl sealed::Sealed for EagerSingleton {}

impl sealed::Construct for EagerSingleton {
  fn construct() -> Result<Self, SingletonError> {
    GUARD.claim()?;
    Ok(EagerSingleton { label: LABEL })
  }
}

impl Singleton for EagerSingleton {
  const KIND: HolderKind = HolderKind::Eager;

  fn get() -> &'static Self {
    EagerSingleton::get()
  }

  fn is_initialized() -> bool {
    INSTANCE.get().is_some()
  }

  fn stats() -> ConstructionStats {
    GUARD.stats()
  }

  fn label(&self) -> &'static str {
    self.label
  }
}

impl Guarded for EagerSingleton {}
