//! Unit tests for discovery metadata

use ioc_domain::entities::{Recipe, Template};
use ioc_domain::ports::{Capability, FactoryType, TaggedType};
use ioc_domain::value_objects::{ComponentType, Object};

trait Command: Send + Sync {}
trait Named: Send + Sync {}
ioc_domain::capability!(dyn Command, dyn Named);

struct Help;
impl Command for Help {}
impl Named for Help {}
ioc_domain::component!(Help: dyn Command, dyn Named);

struct Commands;

#[test]
fn test_component_tag_registers_every_view() {
    let tagged = TaggedType::component::<Help, _>(Vec::new(), |_| Ok(Help));
    match &tagged {
        TaggedType::Concrete {
            component,
            capability,
            recipe,
        } => {
            assert_eq!(component.views().len(), 2);
            assert!(capability.is_none());
            assert!(recipe.is_some());
        }
        TaggedType::Generic { .. } => panic!("Expected concrete tag"),
    }
    assert!(tagged.name().ends_with("Help"));
}

#[test]
fn test_explicit_capability_narrows_registration() {
    let tagged = TaggedType::component::<Help, _>(Vec::new(), |_| Ok(Help))
        .with_capability::<dyn Named>();
    match tagged {
        TaggedType::Concrete { capability, .. } => {
            assert_eq!(capability, Some(<dyn Named>::capability_key()));
        }
        TaggedType::Generic { .. } => panic!("Expected concrete tag"),
    }
}

#[test]
fn test_concrete_tag_without_recipe() {
    let tagged = TaggedType::concrete(ComponentType::describe::<Commands>().build(), None);
    assert!(matches!(tagged, TaggedType::Concrete { recipe: None, .. }));
}

#[test]
fn test_generic_tag() {
    struct Boxed<T>(T);
    let tagged = TaggedType::generic(Template::new::<Boxed<()>>());
    assert!(tagged.name().ends_with("Boxed<>"));
}

#[test]
fn test_factory_types() {
    let many = FactoryType::many::<Commands, dyn Command, _>("wire", Vec::new(), |_| {
        Ok(vec![Object::new(Help)])
    });
    assert_eq!(many.capability(), &<dyn Command>::capability_key());
    assert!(many.owner().name().ends_with("Commands"));
    assert!(matches!(many.factory(), Some(Recipe::Factory { .. })));

    let missing = FactoryType::new(
        ComponentType::describe::<Commands>().build(),
        <dyn Command>::capability_key(),
        None,
    );
    assert!(missing.factory().is_none());
}
