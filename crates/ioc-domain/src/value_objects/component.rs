//! Concrete component types and their capability views

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::capability::CapabilityKey;
use super::type_names::short_type_name;
use crate::ports::Capability;

/// Type-erased, shared instance storage
pub type Erased = Arc<dyn Any + Send + Sync>;

/// Turns an erased instance into a boxed `Arc<dyn Capability>`
type CastFn = Arc<dyn Fn(&Erased) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// One capability a concrete type can be viewed as
#[derive(Clone)]
pub struct View {
    capability: CapabilityKey,
    cast: CastFn,
}

impl View {
    /// Capability offered by this view
    pub fn capability(&self) -> &CapabilityKey {
        &self.capability
    }

    /// Cast an erased instance; `None` when the instance is of another type
    pub(crate) fn cast(&self, erased: &Erased) -> Option<Box<dyn Any + Send + Sync>> {
        (self.cast)(erased)
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("capability", &self.capability.name())
            .finish_non_exhaustive()
    }
}

/// Identity of a concrete type plus the capabilities it implements
#[derive(Clone)]
pub struct ComponentType {
    id: TypeId,
    name: String,
    views: Vec<View>,
}

impl ComponentType {
    /// Start describing the concrete type `T`
    pub fn describe<T: 'static>() -> ComponentTypeBuilder<T> {
        ComponentTypeBuilder {
            component: Self {
                id: TypeId::of::<T>(),
                name: type_name::<T>().to_string(),
                views: Vec::new(),
            },
            _marker: PhantomData,
        }
    }

    /// Type of a stand-in held directly as `Arc<C>`
    ///
    /// Offers exactly one view, `C` itself.
    pub fn of_capability<C: Capability + ?Sized>() -> Self {
        let cast: CastFn = Arc::new(|erased: &Erased| {
            erased
                .downcast_ref::<Arc<C>>()
                .map(|value| Box::new(Arc::clone(value)) as Box<dyn Any + Send + Sync>)
        });
        Self {
            id: TypeId::of::<Arc<C>>(),
            name: type_name::<C>().to_string(),
            views: vec![View {
                capability: C::capability_key(),
                cast,
            }],
        }
    }

    /// Replace the reported type name, keeping the identity
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// `TypeId` of the concrete type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier-safe short name (`Value_1` for `app::Value<i32>`)
    pub fn short_name(&self) -> String {
        short_type_name(&self.name)
    }

    /// Every capability view, in declaration order
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// The view for `capability`, if the type implements it
    pub fn view(&self, capability: &CapabilityKey) -> Option<&View> {
        self.views.iter().find(|view| view.capability == *capability)
    }

    /// Whether the type implements `capability`
    pub fn provides(&self, capability: &CapabilityKey) -> bool {
        self.view(capability).is_some()
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentType {}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentType")
            .field("name", &self.name)
            .field("views", &self.views)
            .finish()
    }
}

/// Builder collecting the capability views of `T`
pub struct ComponentTypeBuilder<T> {
    component: ComponentType,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> ComponentTypeBuilder<T> {
    /// Declare that `T` can be viewed as capability `C`
    ///
    /// `cast` is almost always the identity closure `|it| it`; the unsized
    /// coercion to `Arc<C>` happens at its return.
    #[must_use]
    pub fn provides<C: Capability + ?Sized>(mut self, cast: fn(Arc<T>) -> Arc<C>) -> Self {
        let erased_cast: CastFn = Arc::new(move |erased: &Erased| {
            let concrete = Arc::clone(erased).downcast::<T>().ok()?;
            Some(Box::new(cast(concrete)) as Box<dyn Any + Send + Sync>)
        });
        self.component.views.push(View {
            capability: C::capability_key(),
            cast: erased_cast,
        });
        self
    }
}

impl<T> ComponentTypeBuilder<T> {
    /// Finish the description
    pub fn build(self) -> ComponentType {
        self.component
    }
}
