//! The closed-enumeration singleton.

use crate::core::{built_by_accessor, ConstructionGuard, ConstructionStats, HolderKind, Singleton};
use once_cell::sync::Lazy;

static GUARD: ConstructionGuard = ConstructionGuard::new(HolderKind::Constant);
static INSTANCE: Lazy<ConstantSingleton> = Lazy::new(|| {
  built_by_accessor(GUARD.claim());
  ConstantSingleton::Instance
});

/// A singleton expressed as the only member of an enum.
///
/// The language guarantees that every value of this type is
/// `ConstantSingleton::Instance`, so uniqueness needs no runtime check and
/// there is no constructor to bypass. [`ConstantSingleton::get`] hands out
/// the one canonical `&'static` reference. This is the strategy to reach
/// for when nothing else is needed.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum ConstantSingleton {
  Instance,
}

impl ConstantSingleton {
  /// Returns the canonical instance.
  pub fn get() -> &'static Self {
    &INSTANCE
  }

  /// A fixed message, to show the instance can carry behaviour.
  pub fn message(&self) -> &'static str {
    "this is a message from the constant singleton"
  }
}

impl crate::core::sealed::Sealed for ConstantSingleton {}

impl Singleton for ConstantSingleton {
  const KIND: HolderKind = HolderKind::Constant;

  fn get() -> &'static Self {
    ConstantSingleton::get()
  }

  fn is_initialized() -> bool {
    Lazy::get(&INSTANCE).is_some()
  }

  fn stats() -> ConstructionStats {
    GUARD.stats()
  }

  fn label(&self) -> &'static str {
    match self {
      ConstantSingleton::Instance => "constant",
    }
  }
}
