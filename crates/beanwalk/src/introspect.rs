//! # Property Enumeration
//!
//! The [`Introspector`] contract: enumerate the walkable descriptors of a
//! class and bind them to instances. [`ClassIntrospector`] is the default
//! implementation over [`BeanClass`] member lists, caching each class's
//! descriptor set after the first request.

use crate::class::BeanClass;
use crate::descriptor::PropertyDescriptor;
use crate::error::{BeanError, Result};
use crate::path::PropertyPath;
use crate::property::BoundProperty;
use crate::value::BeanRef;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::trace;

/// Ordered descriptor set of one class
pub type PropertySet = Arc<[Arc<PropertyDescriptor>]>;

/// Member discovery capability used by the walker, the facade and the builder
pub trait Introspector {
    /// Walkable descriptors of `class`, in a stable order
    fn enumerate(&self, class: &'static BeanClass) -> PropertySet;

    /// Bind `descriptor` to `instance`. Fails when the instance's class does
    /// not declare a walkable property of that name.
    fn bind(&self, descriptor: &PropertyDescriptor, instance: &BeanRef) -> Result<BoundProperty> {
        self.bind_named(instance, descriptor.name())
    }

    /// Bind the property called `name` on `instance`
    fn bind_named(&self, instance: &BeanRef, name: &str) -> Result<BoundProperty> {
        let class = class_of(instance)?;
        self.enumerate(class)
            .iter()
            .find(|descriptor| descriptor.name() == name)
            .map(|descriptor| {
                BoundProperty::new(
                    descriptor.clone(),
                    instance.clone(),
                    PropertyPath::root().property(name),
                )
            })
            .ok_or_else(|| BeanError::PropertyNotFound {
                declaring_type: class.name(),
                property: name.to_string(),
            })
    }
}

/// Class of a live instance
pub(crate) fn class_of(instance: &BeanRef) -> Result<&'static BeanClass> {
    instance
        .try_borrow()
        .map(|bean| bean.bean_class())
        .map_err(|err| BeanError::PropertyAccess {
            declaring_type: "<borrowed>",
            property: String::new(),
            path: String::new(),
            reason: err.to_string(),
        })
}

/// Introspector over [`BeanClass`] member lists
#[derive(Default)]
pub struct ClassIntrospector {
    /// Keyed by class address; names are not unique
    cache: RwLock<HashMap<usize, PropertySet>>,
}

impl ClassIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes enumerated so far
    pub fn cached_classes(&self) -> usize {
        self.cache.read().len()
    }

    fn describe(class: &'static BeanClass) -> PropertySet {
        let mut seen = HashSet::new();
        class
            .members()
            .into_iter()
            .filter(|member| member.is_read_write())
            .filter(|member| seen.insert(member.name))
            .map(|member| Arc::new(PropertyDescriptor::from_member(class, member)))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Introspector for ClassIntrospector {
    fn enumerate(&self, class: &'static BeanClass) -> PropertySet {
        let key = class as *const BeanClass as usize;
        if let Some(properties) = self.cache.read().get(&key) {
            return properties.clone();
        }
        let properties = Self::describe(class);
        trace!(class = class.name(), count = properties.len(), "enumerated properties");
        self.cache
            .write()
            .entry(key)
            .or_insert(properties)
            .clone()
    }
}

/// Bind `name` on `instance` with a fresh [`ClassIntrospector`]
pub fn bind_property(instance: &BeanRef, name: &str) -> Result<BoundProperty> {
    ClassIntrospector::new().bind_named(instance, name)
}
