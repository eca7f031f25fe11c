//! Instance-independent property descriptors

use crate::class::{BeanClass, Member};
use crate::error::{BeanError, Result};
use crate::types::TypeRef;

/// Name, declared type and type parameters of one walkable property
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDescriptor {
    declaring_type: &'static str,
    name: &'static str,
    property_type: TypeRef,
    type_parameters: Vec<TypeRef>,
}

impl PropertyDescriptor {
    pub fn new(declaring_type: &'static str, name: &'static str, property_type: TypeRef) -> Self {
        let type_parameters = property_type.type_parameters();
        Self {
            declaring_type,
            name,
            property_type,
            type_parameters,
        }
    }

    /// Descriptor for a member of `class`
    pub fn from_member(class: &BeanClass, member: Member) -> Self {
        Self::new(class.name(), member.name, member.ty)
    }

    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn property_type(&self) -> &TypeRef {
        &self.property_type
    }

    pub fn type_parameters(&self) -> &[TypeRef] {
        &self.type_parameters
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Generic parameter at `index`
    pub fn type_parameter(&self, index: usize) -> Result<&TypeRef> {
        self.type_parameters
            .get(index)
            .ok_or_else(|| BeanError::TypeParameterIndex {
                declaring_type: self.declaring_type,
                property: self.name.to_string(),
                index,
                declared: self.type_parameters.len(),
            })
    }
}
