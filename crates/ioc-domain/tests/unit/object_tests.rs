//! Unit tests for type-erased objects

use std::sync::Arc;

use ioc_domain::value_objects::Object;

trait First: Send + Sync {
    fn first(&self) -> u32;
}
trait Second: Send + Sync {
    fn second(&self) -> u32;
}
trait Unrelated: Send + Sync {}

ioc_domain::capability!(dyn First, dyn Second, dyn Unrelated);

struct DoesBoth(u32);
impl First for DoesBoth {
    fn first(&self) -> u32 {
        self.0
    }
}
impl Second for DoesBoth {
    fn second(&self) -> u32 {
        self.0 * 2
    }
}
ioc_domain::component!(DoesBoth: dyn First, dyn Second);

#[test]
fn test_cast_to_each_view_shares_the_instance() {
    let object = Object::new(DoesBoth(21));
    let first = object.cast::<dyn First>().expect("first view");
    let second = object.cast::<dyn Second>().expect("second view");

    assert_eq!(first.first(), 21);
    assert_eq!(second.second(), 42);
    assert_eq!(
        Arc::as_ptr(&first) as *const () as usize,
        Arc::as_ptr(&second) as *const () as usize
    );
    assert_eq!(object.address(), Arc::as_ptr(&first) as *const () as usize);
}

#[test]
fn test_cast_to_missing_view_is_none() {
    let object = Object::new(DoesBoth(1));
    assert!(object.cast::<dyn Unrelated>().is_none());
}

#[test]
fn test_same_instance_follows_allocation() {
    let shared = Arc::new(DoesBoth(3));
    let a = Object::from_arc(Arc::clone(&shared));
    let b = Object::from_arc(shared);
    let c = Object::new(DoesBoth(3));

    assert!(a.same_instance(&b));
    assert!(!a.same_instance(&c));
}

#[test]
fn test_from_capability_round_trips_the_same_arc() {
    let value: Arc<dyn First> = Arc::new(DoesBoth(5));
    let object = Object::from_capability(Arc::clone(&value));

    let back = object.cast::<dyn First>().expect("single view");
    assert!(Arc::ptr_eq(&value, &back));
    assert!(object.cast::<dyn Second>().is_none());
    assert_eq!(object.component_type().views().len(), 1);
}
