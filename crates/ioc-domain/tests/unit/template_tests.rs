//! Unit tests for generic templates

use ioc_domain::entities::{Specialization, Template};
use ioc_domain::ports::Capability;
use ioc_domain::value_objects::{CapabilityKey, ComponentType, TypeArgs};

trait Value<T>: Send + Sync {
    fn get(&self) -> T;
}

impl<T: Send + Sync + 'static> Capability for dyn Value<T> {
    fn capability_key() -> CapabilityKey {
        CapabilityKey::generic::<Self, (T,)>()
    }
}

struct Holder<T>(T);

impl<T: Clone + Send + Sync + 'static> Value<T> for Holder<T> {
    fn get(&self) -> T {
        self.0.clone()
    }
}

impl<T: Clone + Send + Sync + 'static> ioc_domain::ports::Component for Holder<T> {
    fn component_type() -> ComponentType {
        ComponentType::describe::<Self>()
            .provides::<dyn Value<T>>(|it| it)
            .build()
    }
}

fn holder_template() -> Template {
    Template::new::<Holder<()>>()
        .provides::<dyn Value<()>>()
        .bind::<(i32,), _>(|| Specialization::constructor(Vec::new(), |_| Ok(Holder(7_i32))))
        .bind::<(String,), _>(|| {
            Specialization::constructor(Vec::new(), |_| Ok(Holder(String::from("seven"))))
        })
}

#[test]
fn test_template_names_are_erased() {
    let template = holder_template();
    assert!(template.name().ends_with("Holder<>"));
    assert_eq!(template.provided().len(), 1);
    assert!(template.provided()[0].name().ends_with("Value<>"));
}

#[test]
fn test_specialization_for_bound_arguments() {
    let template = holder_template();
    let specialization = template
        .specialization(&TypeArgs::of::<(i32,)>())
        .expect("bound");

    assert!(specialization.component().name().ends_with("Holder<i32>"));
    assert!(
        specialization
            .component()
            .provides(&<dyn Value<i32>>::capability_key())
    );
    assert!(specialization.recipe().is_some());
}

#[test]
fn test_unbound_arguments_have_no_specialization() {
    let template = holder_template();
    assert!(template.specialization(&TypeArgs::of::<(u8,)>()).is_none());
    assert_eq!(template.bound_args().count(), 2);
}

#[test]
fn test_rebinding_replaces_previous_binding() {
    let template = holder_template()
        .bind::<(i32,), _>(|| Specialization::constructor(Vec::new(), |_| Ok(Holder(8_i32))));
    assert_eq!(template.bound_args().count(), 2);
}
