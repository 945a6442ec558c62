//! Unit tests for the execution context

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use ioc_application::{ExecutionContext, ManualDiscovery, WiringOptions};
use ioc_domain::error::{Error, Result};
use ioc_domain::ports::{Discovery, FactoryType, TaggedType};

use crate::fixtures::{IFirst, ILeaf, ITestHostArr, Leaf, address, does_both, plugin_discovery};

/// Discovery that counts how often it is consulted
struct CountingDiscovery {
    inner: ManualDiscovery,
    consulted: Arc<AtomicUsize>,
}

impl Discovery for CountingDiscovery {
    fn tagged_types(&mut self) -> Vec<Result<TaggedType>> {
        self.consulted.fetch_add(1, Ordering::SeqCst);
        self.inner.tagged_types()
    }

    fn factory_types(&mut self) -> Vec<Result<FactoryType>> {
        self.inner.factory_types()
    }
}

/// Test that concurrent first use wires once and builds once
#[test]
fn test_concurrent_first_use() {
    let built = Arc::new(AtomicUsize::new(0));
    let consulted = Arc::new(AtomicUsize::new(0));
    let context = ExecutionContext::new(CountingDiscovery {
        inner: ManualDiscovery::new().with(does_both(&built)),
        consulted: Arc::clone(&consulted),
    });

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| address(&context.resolve_one::<dyn IFirst>().expect("first"))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread"))
            .collect()
    });

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(built.load(Ordering::SeqCst), 1);
    assert_eq!(consulted.load(Ordering::SeqCst), 1);
}

/// Test that discovery is not consulted before the first call
#[test]
fn test_wiring_is_lazy() {
    let consulted = Arc::new(AtomicUsize::new(0));
    let context = ExecutionContext::new(CountingDiscovery {
        inner: plugin_discovery(),
        consulted: Arc::clone(&consulted),
    });
    assert_eq!(consulted.load(Ordering::SeqCst), 0);

    context.list_registrations().expect("registrations");
    context.list_registrations().expect("registrations");
    assert_eq!(consulted.load(Ordering::SeqCst), 1);
}

/// Test that registrations list buckets in first-registration order
#[test]
fn test_list_registrations() {
    let context = ExecutionContext::new(plugin_discovery());
    let registrations = context.list_registrations().expect("registrations");

    let buckets: Vec<String> = registrations
        .iter()
        .map(|registration| registration.capability.to_string())
        .collect();
    assert_eq!(buckets.len(), 4);
    assert!(buckets[0].ends_with("IOnePrefix"));
    assert!(buckets[1].ends_with("IDoSomething"));
    assert_eq!(registrations[1].descriptors.len(), 2);
    assert!(buckets[2].ends_with("ITestHost"));
    assert!(buckets[3].ends_with("ITestHostArr"));
}

/// Test that the context keeps the options it was given
#[test]
fn test_options_are_kept() {
    let context = ExecutionContext::new(ManualDiscovery::new())
        .with_options(WiringOptions::default().with_transcript_function("boot"));
    assert_eq!(context.options().transcript_function, "boot");
}

/// Test that a panicking recipe poisons the context instead of hanging it
#[test]
fn test_panicking_recipe_poisons_context() {
    let context = ExecutionContext::new(ManualDiscovery::new().with(
        TaggedType::component::<Leaf, _>(Vec::new(), |_| -> Result<Leaf> {
            panic!("recipe exploded")
        }),
    ));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| context.resolve_one::<dyn ILeaf>()));
    assert!(outcome.is_err());

    let error = context.resolve_all::<dyn ILeaf>().err().expect("poisoned");
    assert!(matches!(error, Error::Internal { .. }));
}

/// Test that resolved hosts see the plugins through the context
#[test]
fn test_resolve_through_context() {
    let context = ExecutionContext::new(plugin_discovery());
    let host = context.resolve_one::<dyn ITestHostArr>().expect("host");
    assert_eq!(host.run("asdf"), vec!["ONE: asdf", "TWO: asdf"]);
    assert!(format!("{context:?}").starts_with("ExecutionContext"));
}
