//! Core types shared by every holder strategy.

use crate::error::SingletonError;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifies one of the holder strategies provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderKind {
  /// Built when the binary is loaded.
  Eager,
  /// Built on first access, every access takes a lock.
  LockedLazy,
  /// Built on first access, lock only while racing to construct.
  DoubleChecked,
  /// A single-variant enum.
  Constant,
  /// Built on first access through a lazily initialized nested static.
  StaticHolder,
}

impl HolderKind {
  /// Every holder kind, in the order the demo walks through them.
  pub const ALL: [HolderKind; 5] = [
    HolderKind::Eager,
    HolderKind::LockedLazy,
    HolderKind::DoubleChecked,
    HolderKind::Constant,
    HolderKind::StaticHolder,
  ];

  /// Stable type name, also used as the serialized unit-struct name.
  pub const fn name(self) -> &'static str {
    match self {
      HolderKind::Eager => "EagerSingleton",
      HolderKind::LockedLazy => "LockedLazySingleton",
      HolderKind::DoubleChecked => "DoubleCheckedSingleton",
      HolderKind::Constant => "ConstantSingleton",
      HolderKind::StaticHolder => "StaticHolderSingleton",
    }
  }
}

impl fmt::Display for HolderKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      HolderKind::Eager => "eager",
      HolderKind::LockedLazy => "locked lazy",
      HolderKind::DoubleChecked => "double-checked",
      HolderKind::Constant => "constant",
      HolderKind::StaticHolder => "static holder",
    };
    f.write_str(s)
  }
}

/// A snapshot of a holder's construction counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstructionStats {
  /// Number of instances built. Never exceeds one.
  pub constructions: usize,
  /// Number of construction attempts that were refused.
  pub rejected: usize,
}

/// Admits at most one construction for a holder.
///
/// Every private constructor claims its holder's guard before building a
/// value. The accessor gates make sure the claim only happens once on the
/// normal path; any other caller gets [`SingletonError::DuplicateConstruction`].
pub(crate) struct ConstructionGuard {
  kind: HolderKind,
  constructions: AtomicUsize,
  rejected: AtomicUsize,
}

impl ConstructionGuard {
  pub(crate) const fn new(kind: HolderKind) -> Self {
    Self {
      kind,
      constructions: AtomicUsize::new(0),
      rejected: AtomicUsize::new(0),
    }
  }

  pub(crate) fn claim(&self) -> Result<(), SingletonError> {
    match self
      .constructions
      .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
    {
      Ok(_) => {
        tracing::info!(kind = %self.kind, "{} instance created", self.kind.name());
        Ok(())
      }
      Err(_) => {
        self.rejected.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(kind = %self.kind, "rejected duplicate singleton construction");
        Err(SingletonError::DuplicateConstruction { kind: self.kind })
      }
    }
  }

  pub(crate) fn stats(&self) -> ConstructionStats {
    ConstructionStats {
      constructions: self.constructions.load(Ordering::Acquire),
      rejected: self.rejected.load(Ordering::Relaxed),
    }
  }
}

/// Unwraps the result of a construction made from inside an accessor gate.
///
/// The gate guarantees the guard is still unclaimed, so an error here means
/// the holder's invariant is broken.
#[inline]
pub(crate) fn built_by_accessor<T>(result: Result<T, SingletonError>) -> T {
  result.unwrap_or_else(|err| panic!("accessor gate breached: {}", err))
}

pub(crate) mod sealed {
  use crate::error::SingletonError;

  pub trait Sealed {}

  /// The private constructor path. Not reachable from outside the crate.
  pub trait Construct: Sized {
    fn construct() -> Result<Self, SingletonError>;
  }
}

/// A process-wide, single-instance value with a global accessor.
///
/// Implemented by every holder in this crate and sealed against outside
/// implementations.
pub trait Singleton: sealed::Sealed + Sized + Send + Sync + 'static {
  /// Which strategy this holder uses.
  const KIND: HolderKind;

  /// Returns the one shared instance, constructing it first if needed.
  fn get() -> &'static Self;

  /// Whether the instance exists. Never triggers construction.
  fn is_initialized() -> bool;

  /// Construction counters for this holder.
  fn stats() -> ConstructionStats;

  /// Free-form label naming the strategy.
  fn label(&self) -> &'static str;

  /// Address of this instance, the same for every caller.
  #[inline]
  fn identity(&self) -> usize {
    self as *const Self as usize
  }

  /// Example business method.
  fn do_something(&self) {
    tracing::info!(
      kind = %Self::KIND,
      identity = %format_args!("{:#x}", self.identity()),
      "{} is doing its work",
      self.label()
    );
  }
}

/// A holder whose private constructor is guarded against a second
/// construction. See [`crate::bypass::forge`].
pub trait Guarded: Singleton + sealed::Construct {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_guard_admits_exactly_one_claim() {
    let guard = ConstructionGuard::new(HolderKind::LockedLazy);
    assert_eq!(guard.stats(), ConstructionStats::default());

    assert!(guard.claim().is_ok());
    assert_eq!(
      guard.claim(),
      Err(SingletonError::DuplicateConstruction {
        kind: HolderKind::LockedLazy
      })
    );
    assert_eq!(
      guard.stats(),
      ConstructionStats {
        constructions: 1,
        rejected: 1
      }
    );
  }

  #[test]
  fn claimed_guard_keeps_rejecting() {
    let guard = ConstructionGuard::new(HolderKind::Eager);
    assert!(guard.claim().is_ok());
    for _ in 0..3 {
      assert!(guard.claim().is_err());
    }
    assert_eq!(guard.stats().constructions, 1);
    assert_eq!(guard.stats().rejected, 3);
  }

  #[derive(Clone, Default)]
  struct CapturedLog(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

  impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  impl CapturedLog {
    fn contents(&self) -> String {
      String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
  }

  fn capture<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
  }

  #[test]
  fn do_something_logs_identity_in_hex() {
    let instance = crate::LockedLazySingleton::get();
    let output = capture(|| instance.do_something());

    let hex = format!("{:#x}", instance.identity());
    assert!(output.contains(&format!("identity={}", hex)), "unexpected log: {}", output);
    assert!(output.contains("locked lazy is doing its work"));
  }

  #[test]
  fn successful_claim_logs_creation() {
    let guard = ConstructionGuard::new(HolderKind::Eager);
    let output = capture(|| guard.claim().unwrap());
    assert!(output.contains("EagerSingleton instance created"), "unexpected log: {}", output);
  }

  #[test]
  fn racing_claims_have_a_single_winner() {
    let guard = ConstructionGuard::new(HolderKind::DoubleChecked);
    let winners = AtomicUsize::new(0);

    std::thread::scope(|s| {
      for _ in 0..16 {
        s.spawn(|| {
          if guard.claim().is_ok() {
            winners.fetch_add(1, Ordering::SeqCst);
          }
        });
      }
    });

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    assert_eq!(guard.stats().rejected, 15);
  }

  #[test]
  fn kinds_have_distinct_names() {
    let mut names: Vec<_> = HolderKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), HolderKind::ALL.len());
    assert_eq!(HolderKind::DoubleChecked.to_string(), "double-checked");
  }

  #[test]
  #[should_panic(expected = "accessor gate breached")]
  fn breached_gate_panics() {
    built_by_accessor::<()>(Err(SingletonError::DuplicateConstruction {
      kind: HolderKind::StaticHolder,
    }));
  }
}
