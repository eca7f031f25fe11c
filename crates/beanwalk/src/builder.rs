//! # Bean Builder
//!
//! Instantiates a bean class and populates its whole graph in one walk.
//!
//! Each visited property takes, in priority order:
//! 1. an exact path override (`with_path_value("engine.capacity", ..)`),
//! 2. a name override (`with_property_value("capacity", ..)`, any depth),
//! 3. a generated value from the configured [`ValueSource`].
//!
//! A null override counts as absent and falls through to the next step.
//! Nested beans written in step 3 are then filled by the same walk.
//! Generated properties whose type refers back to a class already on the
//! ancestor path are left null, so self-referencing types terminate.
//!
//! ```ignore
//! let car = BeanBuilder::random_instance_of(&CAR)
//!     .with_path_value("engine.capacity", 400)
//!     .build_as::<Car>()?;
//! ```

use crate::class::{BeanClass, PropertyAccess};
use crate::config::BuilderConfig;
use crate::error::{BeanError, Result};
use crate::generator::{CollectionSize, EmptyValues, RandomValues, ValueGenerator, ValueSource};
use crate::introspect::{ClassIntrospector, Introspector};
use crate::types::TypeRef;
use crate::value::{BeanRef, IntoValue, Shared, Value};
use crate::walker::{from_fn, GraphWalker, Walk};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Builder for populated bean graphs
pub struct BeanBuilder {
    class: &'static BeanClass,
    properties: HashMap<String, Value>,
    paths: HashMap<String, Value>,
    source: Box<dyn ValueSource>,
    sizes: CollectionSize,
    rng: StdRng,
    introspector: Rc<dyn Introspector>,
}

impl BeanBuilder {
    /// Builder with no value source; populate it with [`populated_with`](Self::populated_with)
    pub fn new(class: &'static BeanClass) -> Self {
        Self {
            class,
            properties: HashMap::new(),
            paths: HashMap::new(),
            source: Box::new(EmptyValues),
            sizes: CollectionSize::default(),
            rng: StdRng::from_entropy(),
            introspector: Rc::new(ClassIntrospector::new()),
        }
    }

    /// Random values throughout the graph
    pub fn random_instance_of(class: &'static BeanClass) -> Self {
        Self::new(class).populated_with(RandomValues::from_entropy())
    }

    /// Reproducible random values
    pub fn random_instance_of_seeded(class: &'static BeanClass, seed: u64) -> Self {
        Self::new(class)
            .populated_with(RandomValues::seeded(seed))
            .with_seed(seed)
    }

    /// Nullable properties stay null, primitives get their zero value,
    /// containers get their drawn number of empty elements
    pub fn empty_instance_of(class: &'static BeanClass) -> Self {
        Self::new(class)
    }

    /// Random builder using the sizes and seed of `config`
    pub fn from_config(class: &'static BeanClass, config: &BuilderConfig) -> Result<Self> {
        config.validate()?;
        let builder = match config.seed {
            Some(seed) => Self::random_instance_of_seeded(class, seed),
            None => Self::random_instance_of(class),
        };
        Ok(builder.with_collection_size(config.min_collection_size, config.max_collection_size))
    }

    pub fn populated_with(mut self, source: impl ValueSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Use `value` for every property called `name`
    pub fn with_property_value(mut self, name: impl Into<String>, value: impl IntoValue) -> Self {
        self.properties.insert(name.into(), value.into_value());
        self
    }

    /// Use `value` for the property at `path` only, e.g. `wheels[0].diameter`
    pub fn with_path_value(mut self, path: impl Into<String>, value: impl IntoValue) -> Self {
        self.paths.insert(path.into(), value.into_value());
        self
    }

    /// Container sizes are drawn from `[min, max)`; requires `min < max`
    pub fn with_collection_size(mut self, min: usize, max: usize) -> Self {
        self.sizes = CollectionSize::new(min, max);
        self
    }

    /// Seed the collection size draws
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_introspector(mut self, introspector: Rc<dyn Introspector>) -> Self {
        self.introspector = introspector;
        self
    }

    /// Instantiate and populate a new graph
    pub fn build(&mut self) -> Result<BeanRef> {
        let class = self.class;
        debug!(class = class.name(), "build started");
        let root = class.instantiate()?;
        let introspector = self.introspector.clone();
        let properties = &self.properties;
        let paths = &self.paths;
        let mut generator = ValueGenerator::new(self.source.as_mut(), self.sizes, &mut self.rng);
        let mut written = 0usize;

        GraphWalker::new(introspector.as_ref()).walk(
            &root,
            &mut from_fn(|property, _, path, stack| {
                let value = match paths
                    .get(&path.to_string())
                    .filter(|value| !value.is_null())
                    .or_else(|| properties.get(property.name()).filter(|value| !value.is_null()))
                {
                    Some(value) => value.clone(),
                    None if refers_to_ancestor(property.property_type(), stack) => Value::Null,
                    None => generator.generate(property.descriptor())?,
                };
                property.write(value)?;
                written += 1;
                Ok(Walk::Continue)
            }),
        )?;

        debug!(class = class.name(), properties = written, "build finished");
        Ok(root)
    }

    /// Build and recover the typed root
    pub fn build_as<T: PropertyAccess>(&mut self) -> Result<Shared<T>> {
        let root = self.build()?;
        root.downcast::<T>().ok_or_else(|| BeanError::Instantiation {
            type_name: self.class.name(),
            reason: format!("built instance is not a {}", std::any::type_name::<T>()),
        })
    }
}

/// Whether `ty` mentions a bean class that is already an ancestor, by identity
fn refers_to_ancestor(ty: &TypeRef, stack: &[BeanRef]) -> bool {
    match ty {
        TypeRef::Bean(class) => stack
            .iter()
            .any(|ancestor| ancestor.bean_class() == Some(*class)),
        TypeRef::Scalar { .. } => false,
        _ => ty
            .type_parameters()
            .iter()
            .chain(ty.component_type())
            .any(|inner| refers_to_ancestor(inner, stack)),
    }
}
