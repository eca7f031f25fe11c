//! Property type model
//!
//! ## Table of Contents
//! 1. ScalarKind - Leaf value kinds supplied by a `ValueSource`
//! 2. TypeRef - Closed shape of a declared property type

use crate::class::BeanClass;
use crate::value::Value;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

// ============================================================================
// Scalar Kinds
// ============================================================================

/// Leaf value kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Byte,
    Character,
    /// UTC timestamp
    Date,
    /// Arbitrary-precision decimal
    Decimal,
}

impl ScalarKind {
    /// Rust-facing name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::String => "String",
            ScalarKind::Short => "i16",
            ScalarKind::Integer => "i32",
            ScalarKind::Long => "i64",
            ScalarKind::Float => "f32",
            ScalarKind::Double => "f64",
            ScalarKind::Boolean => "bool",
            ScalarKind::Byte => "i8",
            ScalarKind::Character => "char",
            ScalarKind::Date => "DateTime<Utc>",
            ScalarKind::Decimal => "Decimal",
        }
    }

    /// Value a non-nullable property of this kind gets when the source
    /// yields nothing: zero, `false`, `'\0'`, the empty string, the Unix
    /// epoch or a zero decimal
    pub fn zero_value(&self) -> Value {
        match self {
            ScalarKind::String => Value::String(String::new()),
            ScalarKind::Short => Value::Short(0),
            ScalarKind::Integer => Value::Integer(0),
            ScalarKind::Long => Value::Long(0),
            ScalarKind::Float => Value::Float(0.0),
            ScalarKind::Double => Value::Double(0.0),
            ScalarKind::Boolean => Value::Boolean(false),
            ScalarKind::Byte => Value::Byte(0),
            ScalarKind::Character => Value::Character('\0'),
            ScalarKind::Date => Value::Date(DateTime::<Utc>::UNIX_EPOCH),
            ScalarKind::Decimal => Value::Decimal(Decimal::ZERO),
        }
    }

    /// Whether `value` carries this kind
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ScalarKind::String, Value::String(_))
                | (ScalarKind::Short, Value::Short(_))
                | (ScalarKind::Integer, Value::Integer(_))
                | (ScalarKind::Long, Value::Long(_))
                | (ScalarKind::Float, Value::Float(_))
                | (ScalarKind::Double, Value::Double(_))
                | (ScalarKind::Boolean, Value::Boolean(_))
                | (ScalarKind::Byte, Value::Byte(_))
                | (ScalarKind::Character, Value::Character(_))
                | (ScalarKind::Date, Value::Date(_))
                | (ScalarKind::Decimal, Value::Decimal(_))
        )
    }
}

// ============================================================================
// Type References
// ============================================================================

/// Declared shape of a property, resolved once when the property is enumerated
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    /// Leaf value. `nullable == false` marks a primitive that is never null
    Scalar { kind: ScalarKind, nullable: bool },
    /// Fixed-length sequence
    Array(Box<TypeRef>),
    /// Ordered, duplicate-permitting sequence
    List(Box<TypeRef>),
    /// General collection, generated and walked like a list
    Collection(Box<TypeRef>),
    /// Duplicate-free collection
    Set(Box<TypeRef>),
    /// Key/value pairs with unique keys
    Map(Box<TypeRef>, Box<TypeRef>),
    /// Nested bean with its own declared properties
    Bean(&'static BeanClass),
}

impl TypeRef {
    /// Nullable scalar (`Option<T>` on the host side)
    pub fn scalar(kind: ScalarKind) -> Self {
        TypeRef::Scalar { kind, nullable: true }
    }

    /// Non-nullable scalar (plain `T` on the host side)
    pub fn primitive(kind: ScalarKind) -> Self {
        TypeRef::Scalar {
            kind,
            nullable: false,
        }
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    pub fn list_of(element: TypeRef) -> Self {
        TypeRef::List(Box::new(element))
    }

    pub fn collection_of(element: TypeRef) -> Self {
        TypeRef::Collection(Box::new(element))
    }

    pub fn set_of(element: TypeRef) -> Self {
        TypeRef::Set(Box::new(element))
    }

    pub fn map_of(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map(Box::new(key), Box::new(value))
    }

    pub fn bean(class: &'static BeanClass) -> Self {
        TypeRef::Bean(class)
    }

    /// Generic parameters in declaration order: element for list, collection
    /// and set, key then value for map. Arrays and scalars have none.
    pub fn type_parameters(&self) -> Vec<TypeRef> {
        match self {
            TypeRef::List(element) | TypeRef::Collection(element) | TypeRef::Set(element) => {
                vec![element.as_ref().clone()]
            }
            TypeRef::Map(key, value) => vec![key.as_ref().clone(), value.as_ref().clone()],
            TypeRef::Scalar { .. } | TypeRef::Array(_) | TypeRef::Bean(_) => Vec::new(),
        }
    }

    /// Component type of an array
    pub fn component_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            TypeRef::Scalar { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_kind(&self, kind: ScalarKind) -> bool {
        self.scalar_kind() == Some(kind)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Scalar { nullable: false, .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, TypeRef::Set(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TypeRef::Map(..))
    }

    /// Lists, sets and general collections
    pub fn is_collection(&self) -> bool {
        matches!(self, TypeRef::List(_) | TypeRef::Set(_) | TypeRef::Collection(_))
    }

    /// Anything iterable element by element (collections, not arrays)
    pub fn is_iterable(&self) -> bool {
        self.is_collection()
    }

    pub fn is_bean(&self) -> bool {
        matches!(self, TypeRef::Bean(_))
    }

    /// Display name of the type, e.g. `Option<i32>`, `Vec<String>`, `Engine`
    pub fn type_name(&self) -> String {
        self.to_string()
    }

    /// Name without nullability or generic arguments, e.g. `i32`, `Vec`
    pub fn simple_name(&self) -> &'static str {
        match self {
            TypeRef::Scalar { kind, .. } => kind.name(),
            TypeRef::Array(_) => "Box<[_]>",
            TypeRef::List(_) => "Vec",
            TypeRef::Collection(_) => "Collection",
            TypeRef::Set(_) => "Set",
            TypeRef::Map(..) => "Map",
            TypeRef::Bean(class) => class.name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Scalar { kind, nullable: true } => write!(f, "Option<{}>", kind.name()),
            TypeRef::Scalar { kind, nullable: false } => f.write_str(kind.name()),
            TypeRef::Array(component) => write!(f, "Box<[{}]>", component),
            TypeRef::List(element) => write!(f, "Vec<{}>", element),
            TypeRef::Collection(element) => write!(f, "Collection<{}>", element),
            TypeRef::Set(element) => write!(f, "Set<{}>", element),
            TypeRef::Map(key, value) => write!(f, "Map<{}, {}>", key, value),
            TypeRef::Bean(class) => f.write_str(class.name()),
        }
    }
}
