//! # Bean Classes
//!
//! Host-side schema for beans. Every bean type declares a static
//! [`BeanClass`] (its name, member list and optional default constructor)
//! and implements [`PropertyAccess`] for per-instance reads and writes.
//!
//! ```ignore
//! static ENGINE: BeanClass = BeanClass::new("Engine", engine_members).constructible::<Engine>();
//!
//! fn engine_members() -> Vec<Member> {
//!     vec![Member::new("capacity", TypeRef::scalar(ScalarKind::Integer))]
//! }
//! ```

use crate::error::{BeanError, Result};
use crate::types::TypeRef;
use crate::value::{BeanRef, Value};
use std::any::Any;
use std::fmt;

// ============================================================================
// Property Access Trait
// ============================================================================

/// Unified property access implemented by every bean type.
///
/// Reasons are plain strings; the caller wraps them with the declaring type,
/// property name and path.
pub trait PropertyAccess: Any {
    /// Static class of this instance
    fn bean_class(&self) -> &'static BeanClass;

    /// Read a property. Unknown names and failing accessors return `Err`.
    fn get_property(&self, name: &str) -> std::result::Result<Value, String>;

    /// Write a property. Type mismatches and rejected values return `Err`.
    fn set_property(&mut self, name: &str, value: Value) -> std::result::Result<(), String>;
}

// ============================================================================
// Members
// ============================================================================

/// Which half of the accessor/mutator pair a member exposes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// One declared member of a bean class
#[derive(Clone, Debug)]
pub struct Member {
    pub name: &'static str,
    pub ty: TypeRef,
    pub access: Access,
}

impl Member {
    /// Readable and writable member
    pub fn new(name: &'static str, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            access: Access::ReadWrite,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.access = Access::ReadOnly;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.access = Access::WriteOnly;
        self
    }

    /// Only members with both an accessor and a mutator are walked
    pub fn is_read_write(&self) -> bool {
        self.access == Access::ReadWrite
    }
}

// ============================================================================
// Bean Class
// ============================================================================

type Constructor = fn() -> std::result::Result<BeanRef, String>;

/// Static description of a bean type
pub struct BeanClass {
    name: &'static str,
    members: fn() -> Vec<Member>,
    constructor: Option<Constructor>,
}

impl BeanClass {
    /// Class without a default constructor
    pub const fn new(name: &'static str, members: fn() -> Vec<Member>) -> Self {
        Self {
            name,
            members,
            constructor: None,
        }
    }

    /// Use `T::default()` as the default constructor
    pub const fn constructible<T: PropertyAccess + Default>(self) -> Self {
        self.with_constructor(construct_default::<T>)
    }

    /// Use a custom, possibly failing, constructor
    pub const fn with_constructor(self, constructor: Constructor) -> Self {
        Self {
            name: self.name,
            members: self.members,
            constructor: Some(constructor),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every declared member, including read-only and write-only ones
    pub fn members(&self) -> Vec<Member> {
        (self.members)()
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Default-construct a fresh instance
    pub fn instantiate(&self) -> Result<BeanRef> {
        let constructor = self.constructor.ok_or_else(|| BeanError::Instantiation {
            type_name: self.name,
            reason: "no default constructor".to_string(),
        })?;
        constructor().map_err(|reason| BeanError::Instantiation {
            type_name: self.name,
            reason,
        })
    }
}

fn construct_default<T: PropertyAccess + Default>() -> std::result::Result<BeanRef, String> {
    Ok(BeanRef::new(T::default()))
}

/// Classes compare by identity; two statics may share a name
impl PartialEq for BeanClass {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for BeanClass {}

impl fmt::Debug for BeanClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanClass")
            .field("name", &self.name)
            .field("constructible", &self.has_constructor())
            .finish()
    }
}
