//! # Fibre Singleton
//!
//! Five ways to hold a single, process-wide instance behind a thread-safe
//! global accessor.
//!
//! ## Strategies
//!
//! - [`EagerSingleton`]: built by a load-time hook before `main`. No
//!   laziness, nothing to race on afterwards.
//! - [`LockedLazySingleton`]: built on first access. Every access takes a lock.
//! - [`DoubleCheckedSingleton`]: built on first access with double-checked
//!   locking. Lock-free once published.
//! - [`ConstantSingleton`]: a single-variant enum. Uniqueness is enforced by
//!   the type system.
//! - [`StaticHolderSingleton`]: built on first access by a `Lazy` static in a
//!   nested scope.
//!
//! All of them implement the [`Singleton`] trait. The guarded ones reject any
//! construction outside their accessor with [`SingletonError`], see
//! [`bypass::forge`].
//!
//! ## Quick Start
//!
//! ```
//! use fibre_singleton::{ConstantSingleton, DoubleCheckedSingleton, Singleton};
//! use std::thread;
//!
//! let handles: Vec<_> = (0..4)
//!   .map(|_| thread::spawn(|| DoubleCheckedSingleton::get().identity()))
//!   .collect();
//! let main_id = DoubleCheckedSingleton::get().identity();
//! for handle in handles {
//!   assert_eq!(handle.join().unwrap(), main_id);
//! }
//!
//! assert_eq!(*ConstantSingleton::get(), ConstantSingleton::Instance);
//! assert_eq!(DoubleCheckedSingleton::stats().constructions, 1);
//! ```

pub mod bypass;
#[cfg(feature = "serde")]
mod canonical;
mod constant;
mod core;
mod double_checked;
mod eager;
mod error;
mod locked;
mod static_holder;

pub use crate::core::{ConstructionStats, Guarded, HolderKind, Singleton};
pub use constant::ConstantSingleton;
pub use double_checked::DoubleCheckedSingleton;
pub use eager::EagerSingleton;
pub use error::SingletonError;
pub use locked::LockedLazySingleton;
pub use static_holder::StaticHolderSingleton;
