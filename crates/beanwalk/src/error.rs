//! Error types for beanwalk
//!
//! ## Table of Contents
//! 1. BeanError - Main error enum
//! 2. Result type alias

use thiserror::Error;

/// Result type alias for beanwalk operations
pub type Result<T> = std::result::Result<T, BeanError>;

/// Errors raised while enumerating, reading, writing or building beans
#[derive(Error, Debug)]
pub enum BeanError {
    /// Requested property name is absent from the type's property set
    #[error("Property '{property}' not found on '{declaring_type}'")]
    PropertyNotFound {
        declaring_type: &'static str,
        property: String,
    },

    /// The accessor failed, or the instance could not be borrowed for reading
    #[error("Failed to read '{declaring_type}.{property}' at '{path}': {reason}")]
    PropertyAccess {
        declaring_type: &'static str,
        property: String,
        path: String,
        reason: String,
    },

    /// The mutator rejected the value (type mismatch, validation failure)
    #[error("Failed to write '{declaring_type}.{property}' at '{path}': {reason}")]
    PropertyWrite {
        declaring_type: &'static str,
        property: String,
        path: String,
        reason: String,
    },

    /// Default construction of a bean type failed
    #[error("Failed to instantiate '{type_name}': {reason}")]
    Instantiation {
        type_name: &'static str,
        reason: String,
    },

    /// Generic type parameter requested beyond those declared
    #[error("Type parameter {index} requested on '{declaring_type}.{property}' which declares {declared}")]
    TypeParameterIndex {
        declaring_type: &'static str,
        property: String,
        index: usize,
        declared: usize,
    },

    /// Builder configuration could not be parsed or is out of range
    #[error("Invalid builder configuration: {0}")]
    Config(String),

    /// I/O error (configuration files, print visitor)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for BeanError {
    fn from(err: toml::de::Error) -> Self {
        BeanError::Config(err.to_string())
    }
}
