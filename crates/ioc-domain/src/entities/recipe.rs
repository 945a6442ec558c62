//! Recipes: how a descriptor turns resolved parameters into instances
//!
//! A recipe is a tagged variant closed over its ordered requirements.
//! Construction is an indirect call through a stored closure; the engine
//! never inspects the concrete type beyond its [`ComponentType`].

use std::fmt;
use std::sync::Arc;

use super::instance::ResolvedInstance;
use crate::error::{Error, Result};
use crate::ports::{Capability, Component};
use crate::value_objects::type_names::expression_path;
use crate::value_objects::{ComponentType, Object, Quantifier, Requirement};

/// Builds exactly one object
pub type ConstructFn = Arc<dyn Fn(&Arguments) -> Result<Object> + Send + Sync>;

/// Builds an ordered batch of objects
pub type ProduceFn = Arc<dyn Fn(&Arguments) -> Result<Vec<Object>> + Send + Sync>;

/// What a factory function returns
#[derive(Clone)]
pub enum FactoryOutput {
    /// A single instance
    One(ConstructFn),
    /// An array of instances, each bound separately
    Many(ProduceFn),
}

/// One way to obtain instances of a concrete type
#[derive(Clone)]
pub enum Recipe {
    /// Associated constructor taking the resolved requirements in parameter order
    Constructor {
        function: String,
        requirements: Vec<Requirement>,
        construct: ConstructFn,
    },
    /// Associated factory function of an owner type
    Factory {
        function: String,
        requirements: Vec<Requirement>,
        output: FactoryOutput,
    },
}

impl Recipe {
    /// Constructor recipe producing a `T`
    ///
    /// ```
    /// use ioc_domain::entities::Recipe;
    ///
    /// struct Clock;
    /// ioc_domain::component!(Clock);
    ///
    /// let recipe = Recipe::constructor(Vec::new(), |_| Ok(Clock));
    /// assert!(recipe.requirements().is_empty());
    /// ```
    pub fn constructor<T, F>(requirements: Vec<Requirement>, construct: F) -> Self
    where
        T: Component,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self::constructor_named("new", requirements, construct)
    }

    /// Constructor recipe whose replayed call is `T::function(..)`
    ///
    /// ```
    /// use ioc_domain::entities::Recipe;
    /// use ioc_domain::value_objects::ComponentType;
    ///
    /// struct Clock;
    /// impl Clock {
    ///     fn system() -> Self {
    ///         Clock
    ///     }
    /// }
    /// ioc_domain::component!(Clock);
    ///
    /// let recipe = Recipe::constructor_named("system", Vec::new(), |_| Ok(Clock::system()));
    /// let owner = ComponentType::describe::<Clock>().build();
    /// assert!(recipe.invocation(&owner).ends_with("Clock::system"));
    /// ```
    pub fn constructor_named<T, F>(
        function: impl Into<String>,
        requirements: Vec<Requirement>,
        construct: F,
    ) -> Self
    where
        T: Component,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self::Constructor {
            function: function.into(),
            requirements,
            construct: Arc::new(move |args: &Arguments| construct(args).map(Object::new)),
        }
    }

    /// Factory recipe yielding one object
    pub fn factory<F>(function: impl Into<String>, requirements: Vec<Requirement>, produce: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Object> + Send + Sync + 'static,
    {
        Self::Factory {
            function: function.into(),
            requirements,
            output: FactoryOutput::One(Arc::new(produce)),
        }
    }

    /// Factory recipe yielding an array of objects
    pub fn factory_many<F>(
        function: impl Into<String>,
        requirements: Vec<Requirement>,
        produce: F,
    ) -> Self
    where
        F: Fn(&Arguments) -> Result<Vec<Object>> + Send + Sync + 'static,
    {
        Self::Factory {
            function: function.into(),
            requirements,
            output: FactoryOutput::Many(Arc::new(produce)),
        }
    }

    /// Ordered dependency requirements
    pub fn requirements(&self) -> &[Requirement] {
        match self {
            Self::Constructor { requirements, .. } | Self::Factory { requirements, .. } => {
                requirements
            }
        }
    }

    /// Whether the recipe produces one instance or an array
    pub fn yields(&self) -> Quantifier {
        match self {
            Self::Factory {
                output: FactoryOutput::Many(_),
                ..
            } => Quantifier::Collection,
            _ => Quantifier::Single,
        }
    }

    /// Short label for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constructor { .. } => "constructor",
            Self::Factory { .. } => "factory",
        }
    }

    /// Associated function the transcript calls
    pub fn function(&self) -> &str {
        match self {
            Self::Constructor { function, .. } | Self::Factory { function, .. } => function,
        }
    }

    /// Call expression that replays this recipe for `owner`
    pub fn invocation(&self, owner: &ComponentType) -> String {
        format!("{}::{}", expression_path(owner.name()), self.function())
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("kind", &self.kind())
            .field("function", &self.function())
            .field("requirements", &self.requirements())
            .field("yields", &self.yields())
            .finish()
    }
}

/// One resolved parameter value
#[derive(Debug, Clone)]
pub enum Argument {
    Single(ResolvedInstance),
    Collection(Vec<ResolvedInstance>),
}

impl Argument {
    /// Symbols referenced by this argument, in order
    pub fn symbols(&self) -> Vec<&str> {
        match self {
            Self::Single(instance) => vec![instance.symbol()],
            Self::Collection(instances) => instances.iter().map(ResolvedInstance::symbol).collect(),
        }
    }
}

/// Resolved parameter values handed to a recipe, in parameter order
#[derive(Debug, Clone)]
pub struct Arguments {
    component: String,
    values: Vec<Argument>,
}

impl Arguments {
    pub fn new(component: impl Into<String>, values: Vec<Argument>) -> Self {
        Self {
            component: component.into(),
            values,
        }
    }

    /// Name of the component being built
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.values.iter()
    }

    /// The single-instance parameter at `index`, viewed as `C`
    pub fn single<C: Capability + ?Sized>(&self, index: usize) -> Result<Arc<C>> {
        match self.values.get(index) {
            Some(Argument::Single(instance)) => instance.cast::<C>(),
            Some(Argument::Collection(_)) => Err(Error::configuration(format!(
                "Parameter {index} of {} is a collection, not a single instance",
                self.component
            ))),
            None => Err(self.missing(index)),
        }
    }

    /// The collection parameter at `index`, every element viewed as `C`
    pub fn collection<C: Capability + ?Sized>(&self, index: usize) -> Result<Vec<Arc<C>>> {
        match self.values.get(index) {
            Some(Argument::Collection(instances)) => {
                instances.iter().map(ResolvedInstance::cast::<C>).collect()
            }
            Some(Argument::Single(_)) => Err(Error::configuration(format!(
                "Parameter {index} of {} is a single instance, not a collection",
                self.component
            ))),
            None => Err(self.missing(index)),
        }
    }

    fn missing(&self, index: usize) -> Error {
        Error::configuration(format!(
            "{} has {} resolved parameters, no parameter {index}",
            self.component,
            self.values.len()
        ))
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
