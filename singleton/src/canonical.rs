//! Serialization that always resolves to the canonical instance.
//!
//! Every holder serializes as a unit struct named after its kind. Only
//! `&'static T` implements `Deserialize`, and it yields `T::get()`, so reading
//! a singleton back can never allocate a second one.

use crate::core::Singleton;
use crate::{
  ConstantSingleton, DoubleCheckedSingleton, EagerSingleton, LockedLazySingleton,
  StaticHolderSingleton,
};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

struct CanonicalVisitor<S>(PhantomData<S>);

impl<'de, S: Singleton> Visitor<'de> for CanonicalVisitor<S> {
  type Value = &'static S;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unit struct {}", S::KIND.name())
  }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(S::get())
  }
}

macro_rules! impl_canonical_serde {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Serialize for $ty {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
          serializer.serialize_unit_struct(<$ty as Singleton>::KIND.name())
        }
      }

      impl<'de> Deserialize<'de> for &'static $ty {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
          deserializer.deserialize_unit_struct(
            <$ty as Singleton>::KIND.name(),
            CanonicalVisitor::<$ty>(PhantomData),
          )
        }
      }
    )+
  };
}

impl_canonical_serde!(
  EagerSingleton,
  LockedLazySingleton,
  DoubleCheckedSingleton,
  ConstantSingleton,
  StaticHolderSingleton,
);
