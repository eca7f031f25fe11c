//! Sample beans shared by the unit tests

use crate::class::{BeanClass, Member, PropertyAccess};
use crate::types::{ScalarKind, TypeRef};
use crate::value::{BeanRef, IntoValue, Shared, Value};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

fn unknown(class: &str, name: &str) -> String {
    format!("{} has no property '{}'", class, name)
}

// ============================================================================
// Car / Engine / Wheel
// ============================================================================

pub static CAR: BeanClass = BeanClass::new("Car", car_members).constructible::<Car>();
pub static ENGINE: BeanClass = BeanClass::new("Engine", engine_members).constructible::<Engine>();
pub static WHEEL: BeanClass = BeanClass::new("Wheel", wheel_members).constructible::<Wheel>();

fn car_members() -> Vec<Member> {
    vec![
        Member::new("name", TypeRef::string()),
        Member::new("engine", TypeRef::bean(&ENGINE)),
        Member::new("wheels", TypeRef::list_of(TypeRef::bean(&WHEEL))),
    ]
}

fn engine_members() -> Vec<Member> {
    vec![Member::new("capacity", TypeRef::scalar(ScalarKind::Integer))]
}

fn wheel_members() -> Vec<Member> {
    vec![Member::new("diameter", TypeRef::scalar(ScalarKind::Integer))]
}

#[derive(Debug, Default)]
pub struct Car {
    pub name: Option<String>,
    pub engine: Option<Shared<Engine>>,
    pub wheels: Option<Vec<Shared<Wheel>>>,
}

impl PropertyAccess for Car {
    fn bean_class(&self) -> &'static BeanClass {
        &CAR
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "name" => Ok(self.name.clone().into_value()),
            "engine" => Ok(self.engine.clone().into_value()),
            "wheels" => Ok(self.wheels.clone().into_value()),
            _ => Err(unknown("Car", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "name" => self.name = value.extract()?,
            "engine" => self.engine = value.extract()?,
            "wheels" => self.wheels = value.extract()?,
            _ => return Err(unknown("Car", name)),
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    pub capacity: Option<i32>,
}

impl PropertyAccess for Engine {
    fn bean_class(&self) -> &'static BeanClass {
        &ENGINE
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "capacity" => Ok(self.capacity.into_value()),
            _ => Err(unknown("Engine", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "capacity" => self.capacity = value.extract()?,
            _ => return Err(unknown("Engine", name)),
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Wheel {
    pub diameter: Option<i32>,
}

impl PropertyAccess for Wheel {
    fn bean_class(&self) -> &'static BeanClass {
        &WHEEL
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "diameter" => Ok(self.diameter.into_value()),
            _ => Err(unknown("Wheel", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "diameter" => self.diameter = value.extract()?,
            _ => return Err(unknown("Wheel", name)),
        }
        Ok(())
    }
}

// ============================================================================
// Fleet / Garage
// ============================================================================

pub static FLEET: BeanClass = BeanClass::new("Fleet", fleet_members).constructible::<Fleet>();
pub static GARAGE: BeanClass = BeanClass::new("Garage", garage_members).constructible::<Garage>();

fn fleet_members() -> Vec<Member> {
    vec![
        Member::new("flagship", TypeRef::bean(&CAR)),
        Member::new("capacity", TypeRef::primitive(ScalarKind::Integer)),
    ]
}

fn garage_members() -> Vec<Member> {
    vec![Member::new(
        "cars",
        TypeRef::map_of(TypeRef::primitive(ScalarKind::String), TypeRef::bean(&CAR)),
    )]
}

#[derive(Debug, Default)]
pub struct Fleet {
    pub flagship: Option<Shared<Car>>,
    pub capacity: i32,
}

impl PropertyAccess for Fleet {
    fn bean_class(&self) -> &'static BeanClass {
        &FLEET
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "flagship" => Ok(self.flagship.clone().into_value()),
            "capacity" => Ok(self.capacity.into_value()),
            _ => Err(unknown("Fleet", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "flagship" => self.flagship = value.extract()?,
            "capacity" => self.capacity = value.extract()?,
            _ => return Err(unknown("Fleet", name)),
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Garage {
    pub cars: Option<BTreeMap<String, Shared<Car>>>,
}

impl PropertyAccess for Garage {
    fn bean_class(&self) -> &'static BeanClass {
        &GARAGE
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "cars" => Ok(self.cars.clone().into_value()),
            _ => Err(unknown("Garage", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "cars" => self.cars = value.extract()?,
            _ => return Err(unknown("Garage", name)),
        }
        Ok(())
    }
}

// ============================================================================
// Person (cyclic)
// ============================================================================

pub static PERSON: BeanClass = BeanClass::new("Person", person_members).constructible::<Person>();

fn person_members() -> Vec<Member> {
    vec![
        Member::new("firstname", TypeRef::string()),
        Member::new("surname", TypeRef::string()),
        Member::new("partner", TypeRef::bean(&PERSON)),
        Member::new("siblings", TypeRef::list_of(TypeRef::bean(&PERSON))),
    ]
}

#[derive(Debug, Default)]
pub struct Person {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub partner: Option<Shared<Person>>,
    pub siblings: Option<Vec<Shared<Person>>>,
}

impl Person {
    pub fn named(firstname: &str) -> Self {
        Self {
            firstname: Some(firstname.to_string()),
            ..Self::default()
        }
    }
}

impl PropertyAccess for Person {
    fn bean_class(&self) -> &'static BeanClass {
        &PERSON
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "firstname" => Ok(self.firstname.clone().into_value()),
            "surname" => Ok(self.surname.clone().into_value()),
            "partner" => Ok(self.partner.clone().into_value()),
            "siblings" => Ok(self.siblings.clone().into_value()),
            _ => Err(unknown("Person", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "firstname" => self.firstname = value.extract()?,
            "surname" => self.surname = value.extract()?,
            "partner" => self.partner = value.extract()?,
            "siblings" => self.siblings = value.extract()?,
            _ => return Err(unknown("Person", name)),
        }
        Ok(())
    }
}

// ============================================================================
// Thrower / NoDefault / Depot
// ============================================================================

pub static THROWER: BeanClass =
    BeanClass::new("Thrower", thrower_members).with_constructor(refuse_construction);
pub static NO_DEFAULT: BeanClass = BeanClass::new("NoDefault", thrower_members);

fn thrower_members() -> Vec<Member> {
    vec![Member::new("property", TypeRef::scalar(ScalarKind::Integer))]
}

fn refuse_construction() -> Result<BeanRef, String> {
    Err("Thrower refuses to be constructed".to_string())
}

/// Every accessor and mutator fails
#[derive(Debug)]
pub struct Thrower;

impl PropertyAccess for Thrower {
    fn bean_class(&self) -> &'static BeanClass {
        &THROWER
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        Err(format!("Thrower refuses to read '{}'", name))
    }

    fn set_property(&mut self, name: &str, _value: Value) -> Result<(), String> {
        Err(format!("Thrower refuses to write '{}'", name))
    }
}

/// Holds a [`Thrower`] one level down
pub static DEPOT: BeanClass = BeanClass::new("Depot", depot_members).constructible::<Depot>();

fn depot_members() -> Vec<Member> {
    vec![
        Member::new("label", TypeRef::string()),
        Member::new("thrower", TypeRef::bean(&THROWER)),
    ]
}

#[derive(Debug, Default)]
pub struct Depot {
    pub label: Option<String>,
    pub thrower: Option<Shared<Thrower>>,
}

impl PropertyAccess for Depot {
    fn bean_class(&self) -> &'static BeanClass {
        &DEPOT
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        match name {
            "label" => Ok(self.label.clone().into_value()),
            "thrower" => Ok(self.thrower.clone().into_value()),
            _ => Err(unknown("Depot", name)),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "label" => self.label = value.extract()?,
            "thrower" => self.thrower = value.extract()?,
            _ => return Err(unknown("Depot", name)),
        }
        Ok(())
    }
}

// ============================================================================
// AllTypes
// ============================================================================

pub static ALL_TYPES: BeanClass =
    BeanClass::new("AllTypes", all_types_members).constructible::<AllTypes>();

fn all_types_members() -> Vec<Member> {
    let object = TypeRef::scalar;
    let primitive = TypeRef::primitive;
    vec![
        Member::new("string_value", TypeRef::string()),
        Member::new("short_value", primitive(ScalarKind::Short)),
        Member::new("short_object_value", object(ScalarKind::Short)),
        Member::new("integer_value", primitive(ScalarKind::Integer)),
        Member::new("integer_object_value", object(ScalarKind::Integer)),
        Member::new("long_value", primitive(ScalarKind::Long)),
        Member::new("long_object_value", object(ScalarKind::Long)),
        Member::new("double_value", primitive(ScalarKind::Double)),
        Member::new("double_object_value", object(ScalarKind::Double)),
        Member::new("float_value", primitive(ScalarKind::Float)),
        Member::new("float_object_value", object(ScalarKind::Float)),
        Member::new("boolean_value", primitive(ScalarKind::Boolean)),
        Member::new("boolean_object_value", object(ScalarKind::Boolean)),
        Member::new("byte_value", primitive(ScalarKind::Byte)),
        Member::new("byte_object_value", object(ScalarKind::Byte)),
        Member::new("char_value", primitive(ScalarKind::Character)),
        Member::new("char_object_value", object(ScalarKind::Character)),
        Member::new("date_value", object(ScalarKind::Date)),
        Member::new("decimal_value", object(ScalarKind::Decimal)),
        Member::new("array", TypeRef::array_of(primitive(ScalarKind::Integer))),
        Member::new("collection", TypeRef::collection_of(primitive(ScalarKind::String))),
        Member::new("list", TypeRef::list_of(primitive(ScalarKind::String))),
        Member::new("set", TypeRef::set_of(primitive(ScalarKind::String))),
        Member::new(
            "map",
            TypeRef::map_of(primitive(ScalarKind::Long), primitive(ScalarKind::String)),
        ),
        // shadowed by the first declaration
        Member::new("string_value", object(ScalarKind::Integer)),
        Member::new("class_name", TypeRef::string()).read_only(),
        Member::new("secret", TypeRef::string()).write_only(),
    ]
}

#[derive(Debug, Default, PartialEq)]
pub struct AllTypes {
    pub string_value: Option<String>,
    pub short_value: i16,
    pub short_object_value: Option<i16>,
    pub integer_value: i32,
    pub integer_object_value: Option<i32>,
    pub long_value: i64,
    pub long_object_value: Option<i64>,
    pub double_value: f64,
    pub double_object_value: Option<f64>,
    pub float_value: f32,
    pub float_object_value: Option<f32>,
    pub boolean_value: bool,
    pub boolean_object_value: Option<bool>,
    pub byte_value: i8,
    pub byte_object_value: Option<i8>,
    pub char_value: char,
    pub char_object_value: Option<char>,
    pub date_value: Option<DateTime<Utc>>,
    pub decimal_value: Option<Decimal>,
    pub array: Option<Box<[i32]>>,
    pub collection: Option<Vec<String>>,
    pub list: Option<Vec<String>>,
    pub set: Option<BTreeSet<String>>,
    pub map: Option<BTreeMap<i64, String>>,
    pub secret: Option<String>,
}

impl PropertyAccess for AllTypes {
    fn bean_class(&self) -> &'static BeanClass {
        &ALL_TYPES
    }

    fn get_property(&self, name: &str) -> Result<Value, String> {
        let value = match name {
            "string_value" => self.string_value.clone().into_value(),
            "short_value" => self.short_value.into_value(),
            "short_object_value" => self.short_object_value.into_value(),
            "integer_value" => self.integer_value.into_value(),
            "integer_object_value" => self.integer_object_value.into_value(),
            "long_value" => self.long_value.into_value(),
            "long_object_value" => self.long_object_value.into_value(),
            "double_value" => self.double_value.into_value(),
            "double_object_value" => self.double_object_value.into_value(),
            "float_value" => self.float_value.into_value(),
            "float_object_value" => self.float_object_value.into_value(),
            "boolean_value" => self.boolean_value.into_value(),
            "boolean_object_value" => self.boolean_object_value.into_value(),
            "byte_value" => self.byte_value.into_value(),
            "byte_object_value" => self.byte_object_value.into_value(),
            "char_value" => self.char_value.into_value(),
            "char_object_value" => self.char_object_value.into_value(),
            "date_value" => self.date_value.into_value(),
            "decimal_value" => self.decimal_value.into_value(),
            "array" => self.array.clone().into_value(),
            "collection" => self.collection.clone().into_value(),
            "list" => self.list.clone().into_value(),
            "set" => self.set.clone().into_value(),
            "map" => self.map.clone().into_value(),
            "class_name" => "AllTypes".into_value(),
            _ => return Err(unknown("AllTypes", name)),
        };
        Ok(value)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), String> {
        match name {
            "string_value" => self.string_value = value.extract()?,
            "short_value" => self.short_value = value.extract()?,
            "short_object_value" => self.short_object_value = value.extract()?,
            "integer_value" => self.integer_value = value.extract()?,
            "integer_object_value" => self.integer_object_value = value.extract()?,
            "long_value" => self.long_value = value.extract()?,
            "long_object_value" => self.long_object_value = value.extract()?,
            "double_value" => self.double_value = value.extract()?,
            "double_object_value" => self.double_object_value = value.extract()?,
            "float_value" => self.float_value = value.extract()?,
            "float_object_value" => self.float_object_value = value.extract()?,
            "boolean_value" => self.boolean_value = value.extract()?,
            "boolean_object_value" => self.boolean_object_value = value.extract()?,
            "byte_value" => self.byte_value = value.extract()?,
            "byte_object_value" => self.byte_object_value = value.extract()?,
            "char_value" => self.char_value = value.extract()?,
            "char_object_value" => self.char_object_value = value.extract()?,
            "date_value" => self.date_value = value.extract()?,
            "decimal_value" => self.decimal_value = value.extract()?,
            "array" => self.array = value.extract()?,
            "collection" => self.collection = value.extract()?,
            "list" => self.list = value.extract()?,
            "set" => self.set = value.extract()?,
            "map" => self.map = value.extract()?,
            "secret" => self.secret = value.extract()?,
            _ => return Err(unknown("AllTypes", name)),
        }
        Ok(())
    }
}
