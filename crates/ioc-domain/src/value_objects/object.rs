//! Type-erased materialized objects

use std::fmt;
use std::sync::Arc;

use super::component::{ComponentType, Erased};
use crate::ports::{Capability, Component};

/// A shared, type-erased instance together with its component type
///
/// Identity is the address of the underlying value: two `Object`s are the
/// same instance iff they point at the same allocation, whatever capability
/// they are later viewed as.
#[derive(Clone)]
pub struct Object {
    value: Erased,
    address: usize,
    component: Arc<ComponentType>,
}

impl Object {
    /// Wrap a freshly built component
    pub fn new<T: Component>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared component
    pub fn from_arc<T: Component>(value: Arc<T>) -> Self {
        let address = Arc::as_ptr(&value) as *const () as usize;
        Self {
            value,
            address,
            component: Arc::new(T::component_type()),
        }
    }

    /// Wrap a value that is only known through capability `C`
    ///
    /// Used for stand-ins and factory outputs; the object offers the single
    /// view `C` and casting it back yields the very same `Arc`.
    pub fn from_capability<C: Capability + ?Sized>(value: Arc<C>) -> Self {
        let address = Arc::as_ptr(&value) as *const () as usize;
        Self {
            value: Arc::new(value),
            address,
            component: Arc::new(ComponentType::of_capability::<C>()),
        }
    }

    /// Component type of the held value
    pub fn component_type(&self) -> &ComponentType {
        &self.component
    }

    /// Address of the held value, the basis of instance identity
    pub fn address(&self) -> usize {
        self.address
    }

    /// Whether both objects are the same instance
    pub fn same_instance(&self, other: &Object) -> bool {
        self.address == other.address && self.component.id() == other.component.id()
    }

    /// View the object as capability `C`
    ///
    /// Returns `None` when the component type does not offer `C`.
    pub fn cast<C: Capability + ?Sized>(&self) -> Option<Arc<C>> {
        let view = self.component.view(&C::capability_key())?;
        let boxed = view.cast(&self.value)?;
        boxed.downcast::<Arc<C>>().ok().map(|value| *value)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("component", &self.component.name())
            .field("address", &format_args!("{:#x}", self.address))
            .finish()
    }
}
