use fibre_singleton::{
  ConstantSingleton, DoubleCheckedSingleton, EagerSingleton, LockedLazySingleton, Singleton,
  StaticHolderSingleton,
};
use std::thread;
use tracing_subscriber::EnvFilter;

fn demonstrate<S: Singleton>(title: &str) {
  println!("{}:", title);
  let s1 = S::get();
  let s2 = S::get();
  println!("Instance 1 and 2 are the same: {}", std::ptr::eq(s1, s2));
  println!("Instance 1 identity: {:#x}", s1.identity());
  println!("Instance 2 identity: {:#x}", s2.identity());
  s1.do_something();
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_thread_names(true)
    .init();

  println!("=== Singleton Pattern Demo ===\n");

  // Built by a load-time hook, before this subscriber existed.
  println!(
    "EagerSingleton built before main: {} (constructions: {})",
    EagerSingleton::is_initialized(),
    EagerSingleton::stats().constructions
  );
  demonstrate::<EagerSingleton>("1. Eager singleton");

  println!();
  demonstrate::<LockedLazySingleton>("2. Locked lazy singleton");

  println!();
  demonstrate::<DoubleCheckedSingleton>("3. Double-checked locking singleton");

  println!();
  demonstrate::<ConstantSingleton>("4. Constant (enum) singleton");
  println!(
    "Constant singleton message: {}",
    ConstantSingleton::Instance.message()
  );

  println!();
  demonstrate::<StaticHolderSingleton>("5. Static holder singleton");

  println!("\n6. Thread safety:");
  println!("Resolving the double-checked singleton from 10 threads...");
  let handles: Vec<_> = (0..10)
    .map(|i| {
      thread::Builder::new()
        .name(format!("Thread-{}", i))
        .spawn(|| {
          let instance = DoubleCheckedSingleton::get();
          let name = thread::current().name().unwrap_or("unnamed").to_string();
          println!("{} got instance: {:#x}", name, instance.identity());
          instance.identity()
        })
        .expect("failed to spawn demo thread")
    })
    .collect();

  let main_identity = DoubleCheckedSingleton::get().identity();
  let all_same = handles
    .into_iter()
    .map(|h| h.join().expect("demo thread panicked"))
    .all(|id| id == main_identity);
  println!("All threads observed the same instance: {}", all_same);
  assert!(all_same);
}
