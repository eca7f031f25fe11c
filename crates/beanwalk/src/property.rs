//! # Bound Properties
//!
//! A [`PropertyDescriptor`] attached to one live instance. Reads and writes
//! go through the owner's [`PropertyAccess`](crate::PropertyAccess) impl and
//! are wrapped into [`BeanError`] with the declaring type, name and path.

use crate::descriptor::PropertyDescriptor;
use crate::error::{BeanError, Result};
use crate::path::PropertyPath;
use crate::types::{ScalarKind, TypeRef};
use crate::value::{BeanRef, FromValue, IntoValue, Value};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::warn;

/// A property of a specific instance
#[derive(Clone)]
pub struct BoundProperty {
    descriptor: Arc<PropertyDescriptor>,
    instance: BeanRef,
    path: PropertyPath,
}

impl BoundProperty {
    pub fn new(descriptor: Arc<PropertyDescriptor>, instance: BeanRef, path: PropertyPath) -> Self {
        Self {
            descriptor,
            instance,
            path,
        }
    }

    pub fn descriptor(&self) -> &PropertyDescriptor {
        &self.descriptor
    }

    /// Instance this property is bound to
    pub fn instance(&self) -> &BeanRef {
        &self.instance
    }

    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn declaring_type(&self) -> &'static str {
        self.descriptor.declaring_type()
    }

    pub fn property_type(&self) -> &TypeRef {
        self.descriptor.property_type()
    }

    pub fn type_name(&self) -> String {
        self.property_type().type_name()
    }

    pub fn type_simple_name(&self) -> &'static str {
        self.property_type().simple_name()
    }

    pub fn type_parameters(&self) -> &[TypeRef] {
        self.descriptor.type_parameters()
    }

    pub fn type_parameter(&self, index: usize) -> Result<&TypeRef> {
        self.descriptor.type_parameter(index)
    }

    pub fn is_generic(&self) -> bool {
        self.descriptor.is_generic()
    }

    // ------------------------------------------------------------------------
    // Read / write
    // ------------------------------------------------------------------------

    fn access_error(&self, reason: impl Into<String>) -> BeanError {
        BeanError::PropertyAccess {
            declaring_type: self.declaring_type(),
            property: self.name().to_string(),
            path: self.path.to_string(),
            reason: reason.into(),
        }
    }

    fn write_error(&self, reason: impl Into<String>) -> BeanError {
        BeanError::PropertyWrite {
            declaring_type: self.declaring_type(),
            property: self.name().to_string(),
            path: self.path.to_string(),
            reason: reason.into(),
        }
    }

    /// Current value on the bound instance
    pub fn read(&self) -> Result<Value> {
        let bean = self
            .instance
            .try_borrow()
            .map_err(|err| self.access_error(err.to_string()))?;
        bean.get_property(self.name())
            .map_err(|reason| self.access_error(reason))
    }

    /// Current value converted to a host type
    pub fn value_as<T: FromValue>(&self) -> Result<T> {
        T::from_value(self.read()?).map_err(|reason| self.access_error(reason))
    }

    /// Write `value` to the bound instance. Returns `true` once the mutator
    /// accepted the value.
    pub fn write(&self, value: impl IntoValue) -> Result<bool> {
        let value = value.into_value();
        let mut bean = self
            .instance
            .try_borrow_mut()
            .map_err(|err| self.write_error(err.to_string()))?;
        match bean.set_property(self.name(), value) {
            Ok(()) => Ok(true),
            Err(reason) => {
                warn!(
                    property = %self,
                    path = %self.path,
                    "write rejected: {}",
                    reason
                );
                Err(self.write_error(reason))
            }
        }
    }

    pub fn has_value(&self, value: &Value) -> Result<bool> {
        Ok(self.read()? == *value)
    }

    pub fn is_null(&self) -> Result<bool> {
        Ok(self.read()?.is_null())
    }

    // ------------------------------------------------------------------------
    // Type queries
    // ------------------------------------------------------------------------

    pub fn has_name(&self, name: &str) -> bool {
        self.name() == name
    }

    /// Declared type equals `ty`
    pub fn is_type(&self, ty: &TypeRef) -> bool {
        self.property_type() == ty
    }

    pub fn is_string(&self) -> bool {
        self.property_type().is_kind(ScalarKind::String)
    }

    pub fn is_short(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Short)
    }

    pub fn is_integer(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Integer)
    }

    pub fn is_long(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Long)
    }

    pub fn is_float(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Float)
    }

    pub fn is_double(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Double)
    }

    pub fn is_boolean(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Boolean)
    }

    pub fn is_byte(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Byte)
    }

    pub fn is_character(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Character)
    }

    pub fn is_date(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Date)
    }

    pub fn is_decimal(&self) -> bool {
        self.property_type().is_kind(ScalarKind::Decimal)
    }

    pub fn is_primitive(&self) -> bool {
        self.property_type().is_primitive()
    }

    pub fn is_array(&self) -> bool {
        self.property_type().is_array()
    }

    pub fn is_list(&self) -> bool {
        self.property_type().is_list()
    }

    pub fn is_set(&self) -> bool {
        self.property_type().is_set()
    }

    pub fn is_map(&self) -> bool {
        self.property_type().is_map()
    }

    pub fn is_collection(&self) -> bool {
        self.property_type().is_collection()
    }

    pub fn is_iterable(&self) -> bool {
        self.property_type().is_iterable()
    }

    pub fn is_bean(&self) -> bool {
        self.property_type().is_bean()
    }
}

impl PartialEq for BoundProperty {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_type() == other.declaring_type()
            && self.name() == other.name()
            && self.instance.same_instance(&other.instance)
    }
}

impl Eq for BoundProperty {}

impl Hash for BoundProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declaring_type().hash(state);
        self.name().hash(state);
        self.instance.hash(state);
    }
}

impl fmt::Display for BoundProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type(), self.name())
    }
}

impl fmt::Debug for BoundProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundProperty [{}.{} [{}]]",
            self.declaring_type(),
            self.name(),
            self.instance
        )
    }
}
