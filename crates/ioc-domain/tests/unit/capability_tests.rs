//! Unit tests for capability keys and component types

use ioc_domain::ports::Capability;
use ioc_domain::value_objects::{CapabilityKey, ComponentType, TypeArgs};

trait Greeter: Send + Sync {}
trait Store<T>: Send + Sync {}

ioc_domain::capability!(dyn Greeter);

impl<T: Send + Sync + 'static> Capability for dyn Store<T> {
    fn capability_key() -> CapabilityKey {
        CapabilityKey::generic::<Self, (T,)>()
    }
}

struct Hello;
impl Greeter for Hello {}
ioc_domain::component!(Hello: dyn Greeter);

#[test]
fn test_plain_key_is_type_name() {
    let key = <dyn Greeter>::capability_key();
    assert_eq!(key.name(), std::any::type_name::<dyn Greeter>());
    assert!(!key.is_generic());
    assert_eq!(key.lookup_names(), vec![key.name()]);
    assert_eq!(key.template_key(), key);
}

#[test]
fn test_generic_key_carries_arguments_and_template() {
    let key = <dyn Store<i32>>::capability_key();
    assert!(key.is_generic());
    assert!(key.args().is_some_and(TypeArgs::is::<(i32,)>));
    assert!(key.template_name().is_some_and(|t| t.ends_with("Store<>")));

    let names = key.lookup_names();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("Store<i32>"));
    assert!(names[1].ends_with("Store<>"));
}

#[test]
fn test_generic_keys_differ_by_arguments_but_share_template() {
    let ints = <dyn Store<i32>>::capability_key();
    let strings = <dyn Store<String>>::capability_key();
    assert_ne!(ints, strings);
    assert_eq!(ints.template_key(), strings.template_key());
}

#[test]
fn test_keys_compare_by_name_only() {
    let named = CapabilityKey::named(std::any::type_name::<dyn Greeter>());
    assert_eq!(named, <dyn Greeter>::capability_key());
}

#[test]
fn test_key_displays_as_name() {
    let key = CapabilityKey::named("dyn app::IRun");
    assert_eq!(key.to_string(), "dyn app::IRun");
}

#[test]
fn test_component_type_lists_views() {
    use ioc_domain::ports::Component;

    let component = Hello::component_type();
    assert_eq!(component.views().len(), 1);
    assert!(component.provides(&<dyn Greeter>::capability_key()));
    assert!(!component.provides(&<dyn Store<i32>>::capability_key()));
    assert_eq!(component.short_name(), "Hello");
}

#[test]
fn test_component_type_equality_is_type_identity() {
    let a = ComponentType::describe::<Hello>().build();
    let b = ComponentType::describe::<Hello>().build().with_name("renamed");
    assert_eq!(a, b);
    assert_eq!(b.name(), "renamed");
}
