use fibre_singleton::{
  ConstantSingleton, DoubleCheckedSingleton, EagerSingleton, HolderKind, LockedLazySingleton,
  Singleton, StaticHolderSingleton,
};

// --- Helpers ---

fn assert_unique<S: Singleton>(expected_label: &str) {
  // Act
  let first = S::get();
  let second = S::get();

  // Assert
  assert!(std::ptr::eq(first, second), "{} returned two instances", S::KIND);
  assert_eq!(first.identity(), second.identity());
  assert_eq!(first.label(), expected_label);
  assert!(S::is_initialized());
  assert_eq!(S::stats().constructions, 1);

  // The demo action must be callable on the shared instance.
  first.do_something();
}

// --- Tests ---

#[test]
fn test_eager_singleton_is_unique() {
  assert_unique::<EagerSingleton>("eager");
}

#[test]
fn test_locked_lazy_singleton_is_unique() {
  assert_unique::<LockedLazySingleton>("locked lazy");
}

#[test]
fn test_double_checked_singleton_is_unique() {
  assert_unique::<DoubleCheckedSingleton>("double-checked");
}

#[test]
fn test_constant_singleton_is_unique() {
  assert_unique::<ConstantSingleton>("constant");

  let instance = ConstantSingleton::get();
  assert_eq!(*instance, ConstantSingleton::Instance);
  assert!(!instance.message().is_empty());
}

#[test]
fn test_static_holder_singleton_is_unique() {
  assert_unique::<StaticHolderSingleton>("static holder");
}

#[test]
fn test_inherent_and_trait_accessors_agree() {
  assert!(std::ptr::eq(
    LockedLazySingleton::get(),
    <LockedLazySingleton as Singleton>::get()
  ));
  assert!(std::ptr::eq(
    StaticHolderSingleton::get(),
    <StaticHolderSingleton as Singleton>::get()
  ));
}

#[test]
fn test_repeated_access_constructs_once() {
  for _ in 0..1_000 {
    EagerSingleton::get();
    LockedLazySingleton::get();
    DoubleCheckedSingleton::get();
    ConstantSingleton::get();
    StaticHolderSingleton::get();
  }

  assert_eq!(EagerSingleton::stats().constructions, 1);
  assert_eq!(LockedLazySingleton::stats().constructions, 1);
  assert_eq!(DoubleCheckedSingleton::stats().constructions, 1);
  assert_eq!(ConstantSingleton::stats().constructions, 1);
  assert_eq!(StaticHolderSingleton::stats().constructions, 1);
}

#[test]
fn test_kinds_match_types() {
  assert_eq!(EagerSingleton::KIND, HolderKind::Eager);
  assert_eq!(LockedLazySingleton::KIND, HolderKind::LockedLazy);
  assert_eq!(DoubleCheckedSingleton::KIND, HolderKind::DoubleChecked);
  assert_eq!(ConstantSingleton::KIND, HolderKind::Constant);
  assert_eq!(StaticHolderSingleton::KIND, HolderKind::StaticHolder);
}
