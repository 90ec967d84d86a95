//! Lazy initialization with double-checked locking.

use crate::core::{
  built_by_accessor, sealed, ConstructionGuard, ConstructionStats, Guarded, HolderKind, Singleton,
};
use crate::error::SingletonError;
use parking_lot::{const_mutex, Mutex};
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

const LABEL: &str = "double-checked";

static GUARD: ConstructionGuard = ConstructionGuard::new(HolderKind::DoubleChecked);
// Null until published. Once set, the pointee is leaked and never freed.
static INSTANCE: AtomicPtr<DoubleCheckedSingleton> = AtomicPtr::new(ptr::null_mut());
static GATE: Mutex<()> = const_mutex(());

/// A singleton built on first access with double-checked locking.
///
/// Readers first load the published pointer with `Acquire`. Only if it is
/// still null do they take the gate, check again, and construct. The new
/// instance is published with a `Release` store, so a reader that sees a
/// non-null pointer also sees a fully built instance. After publication
/// every read is lock-free.
#[derive(Debug)]
pub struct DoubleCheckedSingleton {
  label: &'static str,
}

impl DoubleCheckedSingleton {
  /// Returns the shared instance, building it on the first call.
  pub fn get() -> &'static Self {
    if let Some(instance) = Self::published() {
      return instance;
    }

    let _gate = GATE.lock();
    // Another thread may have published while we waited on the gate.
    if let Some(instance) = Self::published() {
      return instance;
    }

    let instance = built_by_accessor(<Self as sealed::Construct>::construct());
    let raw = Box::into_raw(Box::new(instance));
    INSTANCE.store(raw, Ordering::Release);
    // SAFETY: `raw` came from `Box::into_raw` and is never freed.
    unsafe { &*raw }
  }

  #[inline]
  fn published() -> Option<&'static Self> {
    let raw = INSTANCE.load(Ordering::Acquire);
    // SAFETY: a non-null pointer was published by `get` after the instance
    // was fully written, and the allocation lives for the rest of the process.
    unsafe { raw.as_ref() }
  }
}

impl sealed::Sealed for DoubleCheckedSingleton {}

impl sealed::Construct for DoubleCheckedSingleton {
  fn construct() -> Result<Self, SingletonError> {
    GUARD.claim()?;
    Ok(DoubleCheckedSingleton { label: LABEL })
  }
}

impl Singleton for DoubleCheckedSingleton {
  const KIND: HolderKind = HolderKind::DoubleChecked;

  fn get() -> &'static Self {
    DoubleCheckedSingleton::get()
  }

  fn is_initialized() -> bool {
    Self::published().is_some()
  }

  fn stats() -> ConstructionStats {
    GUARD.stats()
  }

  fn label(&self) -> &'static str {
    self.label
  }
}

impl Guarded for DoubleCheckedSingleton {}
