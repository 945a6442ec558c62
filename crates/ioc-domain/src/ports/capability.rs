//! Capability and component traits
//!
//! These are the two seams a host implements: `Capability` for each trait
//! object type that can be requested, and `Component` for each concrete
//! type that can be materialized.

use crate::value_objects::{CapabilityKey, ComponentType};

/// A contract type that concrete components satisfy
///
/// Implemented for trait object types (`dyn Logger`). The default key is the
/// type name; generic capabilities override it with
/// [`CapabilityKey::generic`] so they can be matched against templates.
///
/// ```
/// use ioc_domain::ports::Capability;
/// use ioc_domain::value_objects::CapabilityKey;
///
/// trait Value<T>: Send + Sync {}
///
/// impl<T: Send + Sync + 'static> Capability for dyn Value<T> {
///     fn capability_key() -> CapabilityKey {
///         CapabilityKey::generic::<Self, (T,)>()
///     }
/// }
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Canonical key of this capability
    fn capability_key() -> CapabilityKey {
        CapabilityKey::of::<Self>()
    }
}

/// A concrete type the engine can hold as a materialized instance
pub trait Component: Sized + Send + Sync + 'static {
    /// Type identity and the capability views this type offers
    fn component_type() -> ComponentType;
}

/// Implement [`Capability`] for non-generic trait object types
///
/// ```
/// trait Logger: Send + Sync {}
/// ioc_domain::capability!(dyn Logger);
/// ```
#[macro_export]
macro_rules! capability {
    ($($capability:ty),+ $(,)?) => {
        $(impl $crate::ports::Capability for $capability {})+
    };
}

/// Implement [`Component`] for a non-generic type and list its views
///
/// ```
/// trait First: Send + Sync {}
/// trait Second: Send + Sync {}
/// ioc_domain::capability!(dyn First, dyn Second);
///
/// struct Both;
/// impl First for Both {}
/// impl Second for Both {}
/// ioc_domain::component!(Both: dyn First, dyn Second);
/// ```
#[macro_export]
macro_rules! component {
    ($component:ty $(: $($capability:ty),+)? $(,)?) => {
        impl $crate::ports::Component for $component {
            fn component_type() -> $crate::value_objects::ComponentType {
                $crate::value_objects::ComponentType::describe::<Self>()
                    $($(.provides::<$capability>(|it| it))+)?
                    .build()
            }
        }
    };
}
