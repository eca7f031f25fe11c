//! # beanwalk
//!
//! Object-graph introspection for bean-style types: enumerate the
//! read/write properties of a type, walk a graph of instances depth-first
//! with cycle protection, query and mutate properties anywhere in the graph,
//! and build fully populated graphs from synthetic values.
//!
//! ## Features
//! - `BeanClass` / `PropertyAccess`: Per-type schema and per-instance access
//! - `GraphWalker`: Pre-order traversal into beans, collections and map values
//! - `Bean`: Facade queries (`find_any`, `property_named`, `set_property`, ...)
//! - `BeanBuilder`: Graph population with path and name overrides
//!
//! ## Table of Contents
//! 1. Error types (`error`)
//! 2. Type model (`types`, `value`, `class`)
//! 3. Properties (`descriptor`, `path`, `property`, `introspect`)
//! 4. Traversal (`walker`, `visitors`, `predicates`, `bean`)
//! 5. Population (`generator`, `builder`, `config`)

mod bean;
mod builder;
mod class;
mod config;
mod descriptor;
mod error;
mod generator;
mod introspect;
mod path;
mod predicates;
mod property;
mod types;
mod value;
mod visitors;
mod walker;

#[cfg(test)]
mod fixtures;

pub use bean::*;
pub use builder::*;
pub use class::*;
pub use config::*;
pub use descriptor::*;
pub use error::*;
pub use generator::*;
pub use introspect::*;
pub use path::*;
pub use predicates::*;
pub use property::*;
pub use types::*;
pub use value::*;
pub use visitors::*;
pub use walker::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bean::{bean, Bean};
    pub use crate::builder::BeanBuilder;
    pub use crate::class::{BeanClass, Member, PropertyAccess};
    pub use crate::error::{BeanError, Result};
    pub use crate::generator::{EmptyValues, RandomValues, ValueSource};
    pub use crate::predicates::{any_property, with_name, with_type, BeanPredicate};
    pub use crate::property::BoundProperty;
    pub use crate::types::{ScalarKind, TypeRef};
    pub use crate::value::{shared, BeanRef, FromValue, IntoValue, Shared, Value};
    pub use crate::walker::{from_fn, BeanVisitor, Walk};
}
