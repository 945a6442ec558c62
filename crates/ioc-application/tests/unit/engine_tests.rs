//! Unit tests for materialization through the execution context

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ioc_application::{ExecutionContext, ManualDiscovery};
use ioc_domain::Error;
use ioc_domain::ports::{Capability, FactoryType, TaggedType};
use ioc_domain::value_objects::{CapabilityKey, ComponentType};

use crate::fixtures::{
    IDoSomething, IFirst, IOnePrefix, IPing, ISecond, ITestHost, ITestHostArr, ITestWirer,
    OnePrefix, address, cycle_discovery, does_both, plugin_discovery, wirer_test,
};

/// Test that a type behind two capabilities is built once and shared
#[test]
fn test_singleton_across_capability_views() {
    let built = Arc::new(AtomicUsize::new(0));
    let context = ExecutionContext::new(ManualDiscovery::new().with(does_both(&built)));

    let first = context.resolve_one::<dyn IFirst>().expect("first");
    let second = context.resolve_one::<dyn ISecond>().expect("second");
    let all_first = context.resolve_all::<dyn IFirst>().expect("all first");
    let all_second = context.resolve_all::<dyn ISecond>().expect("all second");

    assert_eq!(first.first(), "First");
    assert_eq!(second.second(), "Second");
    assert_eq!(address(&first), address(&second));
    assert_eq!(all_first.len(), 1);
    assert_eq!(all_second.len(), 1);
    assert!(Arc::ptr_eq(&first, &all_first[0]));
    assert!(Arc::ptr_eq(&second, &all_second[0]));
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

/// Test that the second view adopts the first view's symbol too
#[test]
fn test_adopted_instance_keeps_symbol() {
    let built = Arc::new(AtomicUsize::new(0));
    let context = ExecutionContext::new(ManualDiscovery::new().with(does_both(&built)));

    let first = context.resolve_instance::<dyn IFirst>().expect("first");
    let second = context.resolve_instance::<dyn ISecond>().expect("second");
    assert!(first.same_instance(&second));
    assert_eq!(first.symbol(), second.symbol());
    assert_eq!(first.symbol(), "_000_doesboth");
}

/// Test that repeated collection resolution returns the same instances in order
#[test]
fn test_collection_idempotence() {
    let context = ExecutionContext::new(plugin_discovery());

    let once = context.resolve_all::<dyn IDoSomething>().expect("first pass");
    let twice = context.resolve_all::<dyn IDoSomething>().expect("second pass");

    assert_eq!(once.len(), 2);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(&twice) {
        assert!(Arc::ptr_eq(a, b));
    }
    assert_eq!(once[0].do_something("test"), "ONE: test");
    assert_eq!(once[1].do_something("test"), "TWO: test");
}

/// Test that a host receives every plugin in registration order
#[test]
fn test_host_collects_plugins() {
    let context = ExecutionContext::new(plugin_discovery());

    let host = context.resolve_one::<dyn ITestHostArr>().expect("host");
    assert_eq!(host.run("test"), vec!["ONE: test", "TWO: test"]);

    let base = context.resolve_one::<dyn ITestHost>().expect("host as base");
    assert_eq!(address(&host), address(&base));
}

/// Test that a missing capability fails singly and is empty as a collection
#[test]
fn test_missing_capability() {
    trait Unregistered: Send + Sync {}
    ioc_domain::capability!(dyn Unregistered);

    let context = ExecutionContext::new(plugin_discovery());

    match context.resolve_one::<dyn Unregistered>() {
        Err(Error::NotFound {
            capability,
            attempted,
        }) => {
            assert!(capability.ends_with("Unregistered"));
            assert_eq!(attempted, vec![capability]);
        }
        Err(other) => panic!("Expected NotFound error, got {other}"),
        Ok(_) => panic!("Expected NotFound error"),
    }
    let all = context.resolve_all::<dyn Unregistered>().expect("empty");
    assert!(all.is_empty());
}

/// Test that a multi-binding factory registers its outputs in order
#[test]
fn test_multi_binding_factory() {
    let context = ExecutionContext::new(ManualDiscovery::new().with_wirer(wirer_test()));

    let wirers = context.resolve_all::<dyn ITestWirer>().expect("wirers");
    let values: Vec<i32> = wirers.iter().map(|wirer| wirer.foo()).collect();
    assert_eq!(values, vec![9, 10, 11]);

    let again = context.resolve_all::<dyn ITestWirer>().expect("wirers again");
    for (a, b) in wirers.iter().zip(&again) {
        assert!(Arc::ptr_eq(a, b));
    }

    let first = context.resolve_instance::<dyn ITestWirer>().expect("first wirer");
    assert_eq!(first.symbol(), "_000_wirertest[0]");
    assert!(Arc::ptr_eq(&first.cast::<dyn ITestWirer>().expect("cast"), &wirers[0]));
}

/// Test that a component without a recipe is a configuration error
#[test]
fn test_missing_recipe_is_configuration_error() {
    let context = ExecutionContext::new(
        ManualDiscovery::new().with(TaggedType::concrete(
            <OnePrefix as ioc_domain::ports::Component>::component_type(),
            None,
        )),
    );

    let error = context
        .resolve_one::<dyn IOnePrefix>()
        .err()
        .expect("no recipe");
    assert!(error.is_configuration());
    assert!(error.to_string().contains("OnePrefix"));
}

/// Test that a dependency cycle raises an explicit error instead of recursing
#[test]
fn test_cycle_is_detected() {
    let context = ExecutionContext::new(cycle_discovery());

    match context.resolve_one::<dyn IPing>() {
        Err(Error::Cycle { chain }) => {
            assert_eq!(chain.len(), 3);
            assert!(chain[0].ends_with("IPing"));
            assert!(chain[1].ends_with("IPong"));
            assert!(chain[2].ends_with("IPing"));
        }
        Err(other) => panic!("Expected Cycle error, got {other}"),
        Ok(_) => panic!("Expected Cycle error"),
    }
}

/// Test that a failed construction leaves the context usable
#[test]
fn test_failed_construction_propagates() {
    let context = ExecutionContext::new(ManualDiscovery::new().with(
        TaggedType::component::<OnePrefix, _>(Vec::new(), |_| {
            Err(Error::configuration("prefix store unavailable"))
        }),
    ));

    let error = context.resolve_one::<dyn IOnePrefix>().err().expect("failure");
    assert!(error.to_string().contains("prefix store unavailable"));
    assert!(context.list_registrations().is_ok());
}

/// Test that component types expose the capability key used for lookup
#[test]
fn test_component_views_match_capability_keys() {
    let component: ComponentType = <OnePrefix as ioc_domain::ports::Component>::component_type();
    assert!(component.provides(&<dyn IOnePrefix>::capability_key()));
}

/// Test that a generic capability reports both key forms it tried
#[test]
fn test_missing_generic_capability_lists_template_key() {
    trait IStore<T>: Send + Sync {}
    impl<T: Send + Sync + 'static> Capability for dyn IStore<T> {
        fn capability_key() -> CapabilityKey {
            CapabilityKey::generic::<Self, (T,)>()
        }
    }

    let context = ExecutionContext::new(plugin_discovery());

    match context.resolve_one::<dyn IStore<u8>>() {
        Err(Error::NotFound {
            capability,
            attempted,
        }) => {
            assert!(capability.ends_with("IStore<u8>"));
            assert_eq!(attempted.len(), 2);
            assert_eq!(attempted[0], capability);
            assert!(attempted[1].ends_with("IStore<>"));
        }
        Err(other) => panic!("Expected NotFound error, got {other}"),
        Ok(_) => panic!("Expected NotFound error"),
    }
}

/// Test that a registered factory producing nothing is not found singly
#[test]
fn test_empty_factory_is_not_found() {
    struct NoWirers;

    let context = ExecutionContext::new(ManualDiscovery::new().with_wirer(FactoryType::many::<
        NoWirers,
        dyn ITestWirer,
        _,
    >(
        "none",
        Vec::new(),
        |_| Ok(Vec::new()),
    )));

    match context.resolve_one::<dyn ITestWirer>() {
        Err(Error::NotFound { attempted, .. }) => {
            assert_eq!(attempted.len(), 1);
            assert!(attempted[0].ends_with("ITestWirer"));
        }
        Err(other) => panic!("Expected NotFound error, got {other}"),
        Ok(_) => panic!("Expected NotFound error"),
    }
    assert!(context.resolve_all::<dyn ITestWirer>().expect("empty").is_empty());
}

/// Test that back-registration joins collections without adding descriptors
#[test]
fn test_back_registration_keeps_registrations() {
    struct OnlySecond;
    impl ISecond for OnlySecond {
        fn second(&self) -> &'static str {
            "Only"
        }
    }
    ioc_domain::component!(OnlySecond: dyn ISecond);

    let built = Arc::new(AtomicUsize::new(0));
    let context = ExecutionContext::new(
        ManualDiscovery::new()
            .with(does_both(&built).with_capability::<dyn IFirst>())
            .with(TaggedType::component::<OnlySecond, _>(Vec::new(), |_| Ok(OnlySecond))),
    );

    let before = context.list_registrations().expect("before");
    let first = context.resolve_one::<dyn IFirst>().expect("first");
    let seconds = context.resolve_all::<dyn ISecond>().expect("seconds");
    let after = context.list_registrations().expect("after");

    assert_eq!(before, after);
    assert_eq!(after[1].descriptors.len(), 1);
    assert!(after[1].descriptors[0].ends_with("OnlySecond"));

    let names: Vec<&str> = seconds.iter().map(|second| second.second()).collect();
    assert_eq!(names, vec!["Only", "Second"]);
    assert_eq!(address(&first), address(&seconds[1]));
    assert_eq!(context.resolve_one::<dyn ISecond>().expect("one").second(), "Only");
    assert_eq!(built.load(Ordering::SeqCst), 1);
}
