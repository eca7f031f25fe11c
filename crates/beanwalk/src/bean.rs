//! # Bean Facade
//!
//! Convenience queries over the whole graph rooted at one instance. Every
//! query is a walk with a purpose-built visitor; lookups by name search the
//! entire graph, not just the root's own properties.
//!
//! ```ignore
//! let car = Bean::new(BeanRef::new(car));
//! let capacity = car.find_any(with_name("capacity"))?;
//! car.set_property_named("name", "Roadster")?;
//! ```

use crate::error::{BeanError, Result};
use crate::introspect::{ClassIntrospector, Introspector};
use crate::predicates::{with_name, BeanPredicate};
use crate::property::BoundProperty;
use crate::types::TypeRef;
use crate::value::{BeanRef, FromValue, IntoValue, Value};
use crate::walker::{from_fn, BeanVisitor, GraphWalker, Walk};
use std::collections::HashMap;
use std::rc::Rc;

/// Facade over a bean graph
#[derive(Clone)]
pub struct Bean {
    instance: BeanRef,
    introspector: Rc<dyn Introspector>,
}

/// Shorthand for [`Bean::new`]
pub fn bean(instance: BeanRef) -> Bean {
    Bean::new(instance)
}

impl Bean {
    pub fn new(instance: BeanRef) -> Self {
        Self {
            instance,
            introspector: Rc::new(ClassIntrospector::new()),
        }
    }

    /// Replace the member discovery strategy
    pub fn with_introspector(mut self, introspector: Rc<dyn Introspector>) -> Self {
        self.introspector = introspector;
        self
    }

    /// Root instance
    pub fn instance(&self) -> &BeanRef {
        &self.instance
    }

    /// Walk the graph with `visitor`
    pub fn visit(&self, visitor: &mut dyn BeanVisitor) -> Result<()> {
        GraphWalker::new(self.introspector.as_ref()).walk(&self.instance, visitor)?;
        Ok(())
    }

    /// Every visited property in traversal order
    pub fn property_list(&self) -> Result<Vec<BoundProperty>> {
        self.find(|_: &BoundProperty| true)
    }

    /// Visited properties keyed by name; a later visit replaces an earlier one
    pub fn property_map(&self) -> Result<HashMap<String, BoundProperty>> {
        let mut properties = HashMap::new();
        self.visit(&mut from_fn(|property, _, _, _| {
            properties.insert(property.name().to_string(), property.clone());
            Ok(Walk::Continue)
        }))?;
        Ok(properties)
    }

    /// All matches in traversal order
    pub fn find(&self, predicate: impl BeanPredicate) -> Result<Vec<BoundProperty>> {
        let mut found = Vec::new();
        self.visit(&mut from_fn(|property, _, _, _| {
            if predicate.matches(property) {
                found.push(property.clone());
            }
            Ok(Walk::Continue)
        }))?;
        Ok(found)
    }

    /// First match in traversal order; the walk stops there
    pub fn find_any(&self, predicate: impl BeanPredicate) -> Result<Option<BoundProperty>> {
        let mut found = None;
        self.visit(&mut from_fn(|property, _, _, _| {
            if predicate.matches(property) {
                found = Some(property.clone());
                return Ok(Walk::Halt);
            }
            Ok(Walk::Continue)
        }))?;
        Ok(found)
    }

    /// Alias for [`find_any`](Self::find_any)
    pub fn get_where(&self, predicate: impl BeanPredicate) -> Result<Option<BoundProperty>> {
        self.find_any(predicate)
    }

    /// First property called `name` anywhere in the graph
    pub fn property_named(&self, name: &str) -> Result<BoundProperty> {
        self.find_any(with_name(name))?
            .ok_or_else(|| BeanError::PropertyNotFound {
                declaring_type: self.instance.class_name(),
                property: name.to_string(),
            })
    }

    /// Alias for [`property_named`](Self::property_named)
    pub fn get(&self, name: &str) -> Result<BoundProperty> {
        self.property_named(name)
    }

    pub fn has_property(&self, name: &str) -> Result<bool> {
        self.has_property_where(with_name(name))
    }

    pub fn has_property_where(&self, predicate: impl BeanPredicate) -> Result<bool> {
        Ok(self.find_any(predicate)?.is_some())
    }

    pub fn property_value(&self, name: &str) -> Result<Value> {
        self.property_named(name)?.read()
    }

    pub fn property_value_as<T: FromValue>(&self, name: &str) -> Result<T> {
        self.property_named(name)?.value_as()
    }

    /// Value of the first match, `None` if nothing matches
    pub fn property_value_where(&self, predicate: impl BeanPredicate) -> Result<Option<Value>> {
        self.find_any(predicate)?
            .map(|property| property.read())
            .transpose()
    }

    pub fn property_type(&self, name: &str) -> Result<TypeRef> {
        Ok(self.property_named(name)?.property_type().clone())
    }

    pub fn property_type_where(&self, predicate: impl BeanPredicate) -> Result<Option<TypeRef>> {
        Ok(self
            .find_any(predicate)?
            .map(|property| property.property_type().clone()))
    }

    pub fn is_property_type(&self, name: &str, ty: &TypeRef) -> Result<bool> {
        Ok(self.property_named(name)?.is_type(ty))
    }

    /// Some property matches `predicate` and is declared as `ty`
    pub fn is_property_type_where(&self, predicate: impl BeanPredicate, ty: &TypeRef) -> Result<bool> {
        self.has_property_where(|property: &BoundProperty| {
            predicate.matches(property) && property.is_type(ty)
        })
    }

    /// Write `value` to every match. Returns whether anything was written.
    pub fn set_property(&self, predicate: impl BeanPredicate, value: impl IntoValue) -> Result<bool> {
        let value = value.into_value();
        let mut written = false;
        self.visit(&mut from_fn(|property, _, _, _| {
            if predicate.matches(property) {
                written |= property.write(value.clone())?;
            }
            Ok(Walk::Continue)
        }))?;
        Ok(written)
    }

    /// Write `value` to the first property called `name`
    pub fn set_property_named(&self, name: &str, value: impl IntoValue) -> Result<bool> {
        self.property_named(name)?.write(value)
    }

    /// Run `function` on every match
    pub fn apply<F>(&self, mut function: F, predicate: impl BeanPredicate) -> Result<()>
    where
        F: FnMut(&BoundProperty) -> Result<()>,
    {
        self.visit(&mut from_fn(|property, _, _, _| {
            if predicate.matches(property) {
                function(property)?;
            }
            Ok(Walk::Continue)
        }))
    }
}
