//! # Graph Walker
//!
//! Depth-first, pre-order traversal of a bean graph.
//!
//! ## Table of Contents
//! 1. Walk / BeanVisitor - Visitor callback and its halt signal
//! 2. VisitStack - Ancestor instances, compared by identity
//! 3. GraphWalker - The traversal itself
//!
//! For every property of the current instance the visitor runs first, then
//! the property's (possibly just written) value is read and descended into:
//! nested beans directly, arrays/lists/sets element by element (`[index]`),
//! maps entry value by entry value (`[key]`). An instance already on the
//! ancestor stack is emitted as a property but never re-entered.

use crate::error::Result;
use crate::introspect::{class_of, Introspector};
use crate::path::PropertyPath;
use crate::property::BoundProperty;
use crate::value::{BeanRef, Value};
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

// ============================================================================
// Visitor
// ============================================================================

/// Whether the walk goes on after a visitor call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    Continue,
    /// Stop the whole walk; remaining properties and subtrees are skipped
    Halt,
}

/// Callback invoked once per visited property
pub trait BeanVisitor {
    fn visit(
        &mut self,
        property: &BoundProperty,
        current: &BeanRef,
        path: &PropertyPath,
        stack: &[BeanRef],
    ) -> Result<Walk>;
}

impl<F> BeanVisitor for F
where
    F: FnMut(&BoundProperty, &BeanRef, &PropertyPath, &[BeanRef]) -> Result<Walk>,
{
    fn visit(
        &mut self,
        property: &BoundProperty,
        current: &BeanRef,
        path: &PropertyPath,
        stack: &[BeanRef],
    ) -> Result<Walk> {
        self(property, current, path, stack)
    }
}

/// Pins a closure to the visitor signature so its reference parameters
/// need no annotations
pub fn from_fn<F>(f: F) -> F
where
    F: FnMut(&BoundProperty, &BeanRef, &PropertyPath, &[BeanRef]) -> Result<Walk>,
{
    f
}

// ============================================================================
// Visit Stack
// ============================================================================

/// Ancestors of the current node, root first
#[derive(Default)]
pub struct VisitStack {
    ancestors: Vec<BeanRef>,
}

impl VisitStack {
    /// Identity membership
    pub fn contains(&self, instance: &BeanRef) -> bool {
        self.ancestors.iter().any(|ancestor| ancestor.same_instance(instance))
    }

    pub fn as_slice(&self) -> &[BeanRef] {
        &self.ancestors
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Push `instance` for the lifetime of the returned frame
    fn enter(&mut self, instance: BeanRef) -> StackFrame<'_> {
        self.ancestors.push(instance);
        StackFrame { stack: self }
    }
}

/// Pops its instance on drop, including early returns through `?`
struct StackFrame<'s> {
    stack: &'s mut VisitStack,
}

impl Deref for StackFrame<'_> {
    type Target = VisitStack;

    fn deref(&self) -> &VisitStack {
        self.stack
    }
}

impl DerefMut for StackFrame<'_> {
    fn deref_mut(&mut self) -> &mut VisitStack {
        self.stack
    }
}

impl Drop for StackFrame<'_> {
    fn drop(&mut self) {
        self.stack.ancestors.pop();
    }
}

// ============================================================================
// Graph Walker
// ============================================================================

/// Walks bean graphs using an [`Introspector`] for member discovery
pub struct GraphWalker<'i> {
    introspector: &'i dyn Introspector,
}

impl<'i> GraphWalker<'i> {
    pub fn new(introspector: &'i dyn Introspector) -> Self {
        Self { introspector }
    }

    /// Walk every property reachable from `root`.
    /// Returns [`Walk::Halt`] if the visitor stopped the walk early.
    pub fn walk(&self, root: &BeanRef, visitor: &mut dyn BeanVisitor) -> Result<Walk> {
        debug!(root = %root, "walk started");
        let mut stack = VisitStack::default();
        let outcome = self.walk_instance(root, &PropertyPath::root(), &mut stack, visitor)?;
        debug!(root = %root, ?outcome, "walk finished");
        Ok(outcome)
    }

    fn walk_instance(
        &self,
        current: &BeanRef,
        path: &PropertyPath,
        stack: &mut VisitStack,
        visitor: &mut dyn BeanVisitor,
    ) -> Result<Walk> {
        let class = class_of(current)?;
        let mut frame = stack.enter(current.clone());
        for descriptor in self.introspector.enumerate(class).iter() {
            let property_path = path.property(descriptor.name());
            let property =
                BoundProperty::new(descriptor.clone(), current.clone(), property_path.clone());
            trace!(path = %property_path, property = %property, "visit");
            if visitor.visit(&property, current, &property_path, frame.as_slice())? == Walk::Halt {
                return Ok(Walk::Halt);
            }
            let value = property.read()?;
            if self.descend(value, &property_path, &mut frame, visitor)? == Walk::Halt {
                return Ok(Walk::Halt);
            }
        }
        Ok(Walk::Continue)
    }

    fn descend(
        &self,
        value: Value,
        path: &PropertyPath,
        stack: &mut VisitStack,
        visitor: &mut dyn BeanVisitor,
    ) -> Result<Walk> {
        match value {
            Value::Bean(bean) => {
                if stack.contains(&bean) {
                    trace!(path = %path, instance = %bean, "cycle, not descending");
                    return Ok(Walk::Continue);
                }
                self.walk_instance(&bean, path, stack, visitor)
            }
            Value::Array(items) | Value::List(items) | Value::Set(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    if self.descend(item, &path.index(index), stack, visitor)? == Walk::Halt {
                        return Ok(Walk::Halt);
                    }
                }
                Ok(Walk::Continue)
            }
            Value::Map(entries) => {
                for (key, item) in entries {
                    if self.descend(item, &path.key(key.to_string()), stack, visitor)? == Walk::Halt {
                        return Ok(Walk::Halt);
                    }
                }
                Ok(Walk::Continue)
            }
            _ => Ok(Walk::Continue),
        }
    }
}
