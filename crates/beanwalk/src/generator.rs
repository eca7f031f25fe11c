//! # Synthetic Values
//!
//! ## Table of Contents
//! 1. ValueSource - Optional value per scalar kind
//! 2. RandomValues / EmptyValues - Stock sources
//! 3. CollectionSize - Size policy for generated containers
//! 4. ValueGenerator - Recursive generation for any declared type

use crate::descriptor::PropertyDescriptor;
use crate::error::Result;
use crate::types::{ScalarKind, TypeRef};
use crate::value::Value;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Length of generated strings
const STRING_LENGTH: usize = 10;

/// Upper bound for generated timestamps (2100-01-01T00:00:00Z)
const MAX_TIMESTAMP: i64 = 4_102_444_800;

// ============================================================================
// Value Sources
// ============================================================================

/// Supplies leaf values. `None` means "no value": nullable properties get
/// null, non-nullable ones [`ScalarKind::zero_value`].
pub trait ValueSource {
    fn string_value(&mut self) -> Option<String> {
        None
    }

    fn short_value(&mut self) -> Option<i16> {
        None
    }

    fn int_value(&mut self) -> Option<i32> {
        None
    }

    fn long_value(&mut self) -> Option<i64> {
        None
    }

    fn float_value(&mut self) -> Option<f32> {
        None
    }

    fn double_value(&mut self) -> Option<f64> {
        None
    }

    fn boolean_value(&mut self) -> Option<bool> {
        None
    }

    fn byte_value(&mut self) -> Option<i8> {
        None
    }

    fn char_value(&mut self) -> Option<char> {
        None
    }

    fn date_value(&mut self) -> Option<DateTime<Utc>> {
        None
    }

    fn decimal_value(&mut self) -> Option<Decimal> {
        None
    }

    /// Dispatch on `kind`
    fn value_of(&mut self, kind: ScalarKind) -> Option<Value> {
        match kind {
            ScalarKind::String => self.string_value().map(Value::String),
            ScalarKind::Short => self.short_value().map(Value::Short),
            ScalarKind::Integer => self.int_value().map(Value::Integer),
            ScalarKind::Long => self.long_value().map(Value::Long),
            ScalarKind::Float => self.float_value().map(Value::Float),
            ScalarKind::Double => self.double_value().map(Value::Double),
            ScalarKind::Boolean => self.boolean_value().map(Value::Boolean),
            ScalarKind::Byte => self.byte_value().map(Value::Byte),
            ScalarKind::Character => self.char_value().map(Value::Character),
            ScalarKind::Date => self.date_value().map(Value::Date),
            ScalarKind::Decimal => self.decimal_value().map(Value::Decimal),
        }
    }
}

/// Random value for every kind
pub struct RandomValues {
    rng: StdRng,
}

impl RandomValues {
    /// Reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn alphanumeric(&mut self) -> char {
        char::from(self.rng.sample(Alphanumeric))
    }
}

impl ValueSource for RandomValues {
    fn string_value(&mut self) -> Option<String> {
        Some((0..STRING_LENGTH).map(|_| self.alphanumeric()).collect())
    }

    fn short_value(&mut self) -> Option<i16> {
        Some(self.rng.gen())
    }

    fn int_value(&mut self) -> Option<i32> {
        Some(self.rng.gen())
    }

    fn long_value(&mut self) -> Option<i64> {
        Some(self.rng.gen())
    }

    fn float_value(&mut self) -> Option<f32> {
        Some(self.rng.gen())
    }

    fn double_value(&mut self) -> Option<f64> {
        Some(self.rng.gen())
    }

    fn boolean_value(&mut self) -> Option<bool> {
        Some(self.rng.gen())
    }

    fn byte_value(&mut self) -> Option<i8> {
        Some(self.rng.gen())
    }

    fn char_value(&mut self) -> Option<char> {
        Some(self.alphanumeric())
    }

    fn date_value(&mut self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.rng.gen_range(0..MAX_TIMESTAMP), 0)
    }

    fn decimal_value(&mut self) -> Option<Decimal> {
        Some(Decimal::new(self.rng.gen_range(0..10_000_000), 2))
    }
}

/// Source that never yields a value
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyValues;

impl ValueSource for EmptyValues {}

// ============================================================================
// Collection Size
// ============================================================================

/// Size bounds for generated containers: `min` inclusive, `max` exclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionSize {
    pub min: usize,
    pub max: usize,
}

impl Default for CollectionSize {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl CollectionSize {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Uniform draw from `[min, max)`. Requires `min < max`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        debug_assert!(
            self.min < self.max,
            "collection size bounds [{}, {}) are empty",
            self.min,
            self.max
        );
        rng.gen_range(self.min..self.max)
    }
}

// ============================================================================
// Value Generator
// ============================================================================

/// Generates a [`Value`] for any declared type.
///
/// Nested beans are only default-constructed here; filling their properties
/// is the builder's walk.
pub struct ValueGenerator<'a> {
    source: &'a mut dyn ValueSource,
    sizes: CollectionSize,
    rng: &'a mut StdRng,
}

impl<'a> ValueGenerator<'a> {
    pub fn new(source: &'a mut dyn ValueSource, sizes: CollectionSize, rng: &'a mut StdRng) -> Self {
        Self { source, sizes, rng }
    }

    pub fn generate(&mut self, descriptor: &PropertyDescriptor) -> Result<Value> {
        self.generate_type(descriptor.property_type())
    }

    pub fn generate_type(&mut self, ty: &TypeRef) -> Result<Value> {
        let value = match ty {
            TypeRef::Scalar { kind, nullable } => match self.source.value_of(*kind) {
                Some(value) => value,
                None if *nullable => Value::Null,
                None => kind.zero_value(),
            },
            TypeRef::Array(component) => Value::Array(self.elements(component)?),
            TypeRef::List(element) | TypeRef::Collection(element) => {
                Value::List(self.elements(element)?)
            }
            TypeRef::Set(element) => Value::set_of(self.elements(element)?),
            TypeRef::Map(key, value) => {
                let size = self.sizes.draw(&mut *self.rng);
                let mut entries = Vec::with_capacity(size);
                for _ in 0..size {
                    entries.push((self.generate_type(key)?, self.generate_type(value)?));
                }
                Value::map_of(entries)
            }
            TypeRef::Bean(class) => Value::Bean(class.instantiate()?),
        };
        Ok(value)
    }

    /// Exactly one draw's worth of elements
    fn elements(&mut self, element: &TypeRef) -> Result<Vec<Value>> {
        let size = self.sizes.draw(&mut *self.rng);
        (0..size).map(|_| self.generate_type(element)).collect()
    }
}
