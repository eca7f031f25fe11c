//! Dynamic property values
//!
//! ## Table of Contents
//! 1. Value - Runtime value of any property shape
//! 2. BeanRef - Shared, identity-comparable handle to a bean instance
//! 3. IntoValue / FromValue - Conversions used by host `PropertyAccess` impls

use crate::class::{BeanClass, PropertyAccess};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::any::{self, Any};
use std::cell::{BorrowError, BorrowMutError, Ref, RefCell, RefMut};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Shared mutable bean storage used for nested beans on the host side
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in [`Shared`] storage
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// ============================================================================
// Value
// ============================================================================

/// Runtime value read from, or written to, a property
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Byte(i8),
    Character(char),
    Date(DateTime<Utc>),
    Decimal(Decimal),
    Array(Vec<Value>),
    List(Vec<Value>),
    /// Distinct elements; equality ignores order
    Set(Vec<Value>),
    /// Entries with distinct keys; equality ignores order
    Map(Vec<(Value, Value)>),
    Bean(BeanRef),
}

impl Value {
    /// Build a fixed-length array value
    pub fn array<T: IntoValue>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Array(items.into_iter().map(IntoValue::into_value).collect())
    }

    /// Build a set value, collapsing equal elements
    pub fn set_of(items: impl IntoIterator<Item = Value>) -> Self {
        let mut set = Vec::new();
        for item in items {
            insert_distinct(&mut set, item);
        }
        Value::Set(set)
    }

    /// Build a map value; a repeated key keeps its first position and last value
    pub fn map_of(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            insert_entry(&mut map, key, value);
        }
        Value::Map(map)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bean(&self) -> Option<&BeanRef> {
        match self {
            Value::Bean(bean) => Some(bean),
            _ => None,
        }
    }

    /// Number of elements or entries of a container value
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) | Value::List(items) | Value::Set(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Convert into a typed host value
    pub fn extract<T: FromValue>(self) -> Result<T, String> {
        T::from_value(self)
    }

    /// Short name of the runtime shape, used in mismatch messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "String",
            Value::Short(_) => "i16",
            Value::Integer(_) => "i32",
            Value::Long(_) => "i64",
            Value::Float(_) => "f32",
            Value::Double(_) => "f64",
            Value::Boolean(_) => "bool",
            Value::Byte(_) => "i8",
            Value::Character(_) => "char",
            Value::Date(_) => "DateTime<Utc>",
            Value::Decimal(_) => "Decimal",
            Value::Array(_) => "array",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Bean(_) => "bean",
        }
    }
}

fn insert_distinct(set: &mut Vec<Value>, item: Value) {
    if !set.contains(&item) {
        set.push(item);
    }
}

fn insert_entry(map: &mut Vec<(Value, Value)>, key: Value, value: Value) {
    match map.iter_mut().find(|(existing, _)| *existing == key) {
        Some(entry) => entry.1 = value,
        None => map.push((key, value)),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a.len() == b.len() && a.iter().all(|item| b.contains(item)),
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(other_key, other_value)| key == other_key && value == other_value)
                    })
            }
            (Value::Bean(a), Value::Bean(b)) => a.same_instance(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Short(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Character(v) => write!(f, "{}", v),
            Value::Date(v) => f.write_str(&v.to_rfc3339()),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Array(items) | Value::List(items) | Value::Set(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Bean(bean) => write!(f, "{}", bean),
        }
    }
}

// ============================================================================
// Bean References
// ============================================================================

/// Shared handle to a bean instance.
///
/// Clones point at the same instance; equality is identity.
#[derive(Clone)]
pub struct BeanRef {
    bean: Rc<RefCell<dyn PropertyAccess>>,
    any: Rc<dyn Any>,
}

impl BeanRef {
    /// Move a bean into fresh shared storage
    pub fn new<T: PropertyAccess>(value: T) -> Self {
        Self::from_shared(shared(value))
    }

    /// Wrap existing shared storage without copying
    pub fn from_shared<T: PropertyAccess>(shared: Shared<T>) -> Self {
        let any: Rc<dyn Any> = shared.clone();
        Self { bean: shared, any }
    }

    /// Typed storage, if the instance is a `T`
    pub fn downcast<T: PropertyAccess>(&self) -> Option<Shared<T>> {
        self.any.clone().downcast::<RefCell<T>>().ok()
    }

    /// Address of the instance, stable for its lifetime
    pub fn addr(&self) -> *const () {
        Rc::as_ptr(&self.bean) as *const ()
    }

    /// Identity comparison
    pub fn same_instance(&self, other: &BeanRef) -> bool {
        self.addr() == other.addr()
    }

    /// Class of the instance, `None` while it is mutably borrowed
    pub fn bean_class(&self) -> Option<&'static BeanClass> {
        self.try_borrow().ok().map(|bean| bean.bean_class())
    }

    /// Class name, or `"<borrowed>"` when the instance is mutably borrowed
    pub fn class_name(&self) -> &'static str {
        self.bean_class().map_or("<borrowed>", BeanClass::name)
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, dyn PropertyAccess>, BorrowError> {
        self.bean.try_borrow()
    }

    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, dyn PropertyAccess>, BorrowMutError> {
        self.bean.try_borrow_mut()
    }
}

impl PartialEq for BeanRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for BeanRef {}

impl Hash for BeanRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Display for BeanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.class_name(), self.addr())
    }
}

impl fmt::Debug for BeanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BeanRef({})", self)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Conversion of a host value into a [`Value`]
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Conversion of a [`Value`] back into a host value.
/// The error is a human-readable mismatch reason.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, String>;
}

fn mismatch(expected: &str, found: &Value) -> String {
    format!("expected {}, found {}", expected, found.kind_name())
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, String> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(mismatch(stringify!($ty), &other)),
                }
            }
        }
    )*};
}

scalar_conversions! {
    String => String,
    i16 => Short,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    i8 => Byte,
    char => Character,
    DateTime<Utc> => Date,
    Decimal => Decimal,
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, String> {
        Ok(value)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

fn elements(value: Value, expected: &str) -> Result<Vec<Value>, String> {
    match value {
        Value::Array(items) | Value::List(items) | Value::Set(items) => Ok(items),
        other => Err(mismatch(expected, &other)),
    }
}

fn entries(value: Value, expected: &str) -> Result<Vec<(Value, Value)>, String> {
    match value {
        Value::Map(entries) => Ok(entries),
        other => Err(mismatch(expected, &other)),
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        elements(value, "list")?.into_iter().map(T::from_value).collect()
    }
}

impl<T: IntoValue> IntoValue for Box<[T]> {
    fn into_value(self) -> Value {
        Value::array(self.into_vec())
    }
}

impl<T: FromValue> FromValue for Box<[T]> {
    fn from_value(value: Value) -> Result<Self, String> {
        Vec::<T>::from_value(value).map(Vec::into_boxed_slice)
    }
}

impl<T: IntoValue> IntoValue for BTreeSet<T> {
    fn into_value(self) -> Value {
        Value::Set(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        elements(value, "set")?.into_iter().map(T::from_value).collect()
    }
}

impl<T: IntoValue> IntoValue for HashSet<T> {
    fn into_value(self) -> Value {
        Value::Set(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue + Eq + Hash> FromValue for HashSet<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        elements(value, "set")?.into_iter().map(T::from_value).collect()
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(key, value)| (key.into_value(), value.into_value()))
                .collect(),
        )
    }
}

impl<K: FromValue + Ord, V: FromValue> FromValue for BTreeMap<K, V> {
    fn from_value(value: Value) -> Result<Self, String> {
        entries(value, "map")?
            .into_iter()
            .map(|(key, value)| -> Result<(K, V), String> {
                Ok((K::from_value(key)?, V::from_value(value)?))
            })
            .collect()
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for HashMap<K, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(key, value)| (key.into_value(), value.into_value()))
                .collect(),
        )
    }
}

impl<K: FromValue + Eq + Hash, V: FromValue> FromValue for HashMap<K, V> {
    fn from_value(value: Value) -> Result<Self, String> {
        entries(value, "map")?
            .into_iter()
            .map(|(key, value)| -> Result<(K, V), String> {
                Ok((K::from_value(key)?, V::from_value(value)?))
            })
            .collect()
    }
}

impl<T: PropertyAccess> IntoValue for Shared<T> {
    fn into_value(self) -> Value {
        Value::Bean(BeanRef::from_shared(self))
    }
}

impl<T: PropertyAccess> FromValue for Shared<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Bean(bean) => bean.downcast::<T>().ok_or_else(|| {
                format!(
                    "expected bean {}, found {}",
                    any::type_name::<T>(),
                    bean.class_name()
                )
            }),
            other => Err(mismatch(any::type_name::<T>(), &other)),
        }
    }
}

impl IntoValue for BeanRef {
    fn into_value(self) -> Value {
        Value::Bean(self)
    }
}
