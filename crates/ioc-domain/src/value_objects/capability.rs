//! Capability identity
//!
//! A capability is the contract (trait object type) that one or more
//! concrete components satisfy. Its identity is the canonical type name;
//! generic capabilities additionally carry their bound type arguments and
//! an arity-erased template form used to find generic templates.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use super::type_names::erase_type_arguments;

/// Bound type arguments of a generic capability
///
/// Identified by the `TypeId` of the argument tuple (`(i32,)`,
/// `(u8, String)`), so a template binding and a request agree exactly when
/// they name the same tuple type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeArgs {
    id: TypeId,
    name: &'static str,
}

impl TypeArgs {
    /// Arguments described by the tuple type `A`
    pub fn of<A: 'static>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: type_name::<A>(),
        }
    }

    /// `TypeId` of the argument tuple
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Readable name of the argument tuple
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether these are exactly the arguments `A`
    pub fn is<A: 'static>(&self) -> bool {
        self.id == TypeId::of::<A>()
    }
}

impl fmt::Display for TypeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Canonical identity of a capability
///
/// Two keys are the same capability iff their canonical names match.
#[derive(Debug, Clone)]
pub struct CapabilityKey {
    name: String,
    template: Option<String>,
    args: Option<TypeArgs>,
}

impl CapabilityKey {
    /// Key for a non-generic capability with an explicit canonical name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
            args: None,
        }
    }

    /// Key for the capability type `C`, named after `std::any::type_name`
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self::named(type_name::<C>())
    }

    /// Key for the generic capability `C` bound to the argument tuple `A`
    ///
    /// ```
    /// use ioc_domain::value_objects::CapabilityKey;
    ///
    /// trait Store<T>: Send + Sync {}
    ///
    /// let key = CapabilityKey::generic::<dyn Store<i32>, (i32,)>();
    /// assert!(key.name().ends_with("Store<i32>"));
    /// assert!(key.template_name().is_some_and(|t| t.ends_with("Store<>")));
    /// ```
    pub fn generic<C: ?Sized + 'static, A: 'static>() -> Self {
        let name = type_name::<C>().to_string();
        let template = erase_type_arguments(&name);
        Self {
            name,
            template: Some(template),
            args: Some(TypeArgs::of::<A>()),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arity-erased template name, for generic capabilities
    pub fn template_name(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Bound type arguments, for generic capabilities
    pub fn args(&self) -> Option<&TypeArgs> {
        self.args.as_ref()
    }

    /// Whether the capability is a bound generic
    pub fn is_generic(&self) -> bool {
        self.args.is_some()
    }

    /// The template key this capability specializes
    ///
    /// Non-generic keys are their own template.
    pub fn template_key(&self) -> CapabilityKey {
        match &self.template {
            Some(template) => Self::named(template.clone()),
            None => self.clone(),
        }
    }

    /// Key forms to try on lookup, exact name first
    pub fn lookup_names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        if let Some(template) = self.template.as_deref() {
            if template != self.name {
                names.push(template);
            }
        }
        names
    }
}

impl PartialEq for CapabilityKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CapabilityKey {}

impl Hash for CapabilityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for CapabilityKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
