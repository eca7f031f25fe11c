//! Property predicates used by the [`Bean`](crate::Bean) facade queries

use crate::property::BoundProperty;
use crate::types::TypeRef;

/// Test applied to each visited property
pub trait BeanPredicate {
    fn matches(&self, property: &BoundProperty) -> bool;
}

impl<F> BeanPredicate for F
where
    F: Fn(&BoundProperty) -> bool,
{
    fn matches(&self, property: &BoundProperty) -> bool {
        self(property)
    }
}

/// Property name equals `name`
pub fn with_name(name: &str) -> impl BeanPredicate {
    let name = name.to_string();
    move |property: &BoundProperty| property.has_name(&name)
}

/// Declared type equals `ty`
pub fn with_type(ty: TypeRef) -> impl BeanPredicate {
    move |property: &BoundProperty| property.is_type(&ty)
}

/// Matches every property
pub fn any_property() -> impl BeanPredicate {
    |_: &BoundProperty| true
}

/// All of `predicates` match. An empty list matches everything.
pub fn matches_all(predicates: Vec<Box<dyn BeanPredicate>>) -> impl BeanPredicate {
    move |property: &BoundProperty| predicates.iter().all(|predicate| predicate.matches(property))
}

/// At least one of `predicates` matches
pub fn matches_any(predicates: Vec<Box<dyn BeanPredicate>>) -> impl BeanPredicate {
    move |property: &BoundProperty| predicates.iter().any(|predicate| predicate.matches(property))
}
