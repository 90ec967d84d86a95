//! Lazy initialization behind a lock held for the whole accessor call.

use crate::core::{
  built_by_accessor, sealed, ConstructionGuard, ConstructionStats, Guarded, HolderKind, Singleton,
};
use crate::error::SingletonError;
use parking_lot::{const_mutex, Mutex};

const LABEL: &str = "locked lazy";

static GUARD: ConstructionGuard = ConstructionGuard::new(HolderKind::LockedLazy);
static SLOT: Mutex<Option<&'static LockedLazySingleton>> = const_mutex(None);

/// A singleton built on first access, with every access serialized.
///
/// Correct under any amount of concurrency, but each call after the first
/// still pays for acquiring the mutex. [`crate::DoubleCheckedSingleton`]
/// removes that cost from the steady state.
#[derive(Debug)]
pub struct LockedLazySingleton {
  label: &'static str,
}

impl LockedLazySingleton {
  /// Returns the shared instance, building it on the first call.
  pub fn get() -> &'static Self {
    let mut slot = SLOT.lock();
    let instance = *slot.get_or_insert_with(|| {
      let instance = built_by_accessor(<Self as sealed::Construct>::construct());
      &*Box::leak(Box::new(instance))
    });
    instance
  }
}

impl sealed::Sealed for LockedLazySingleton {}

impl sealed::Construct for LockedLazySingleton {
  fn construct() -> Result<Self, SingletonError> {
    GUARD.claim()?;
    Ok(LockedLazySingleton { label: LABEL })
  }
}

impl Singleton for LockedLazySingleton {
  const KIND: HolderKind = HolderKind::LockedLazy;

  fn get() -> &'static Self {
    LockedLazySingleton::get()
  }

  fn is_initialized() -> bool {
    SLOT.lock().is_some()
  }

  fn stats() -> ConstructionStats {
    GUARD.stats()
  }

  fn label(&self) -> &'static str {
    self.label
  }
}

impl Guarded for LockedLazySingleton {}
