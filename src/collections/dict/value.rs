use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;
use indexmap::IndexMap;

use super::{Dict, Key, Object};
use crate::util::fmt::Joined;

/// A raw, insertion-ordered mapping. This is what a [`Dict`] is built from and what it flattens
/// back into.
pub type RawMap = IndexMap<Key, Value>;

/// A dynamically typed value, as stored in a [`Dict`].
///
/// Nested data starts out as [`Value::Map`] and is replaced with [`Value::Dict`] the first time
/// it is read through [`Dict::get`]. The two variants compare equal when their contents do, so
/// whether an entry has been promoted yet is only observable by matching on it.
#[derive(Debug, Default, Clone, IsVariant)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object(Object),
    List(Vec<Value>),
    Map(RawMap),
    Dict(Dict),
}

impl Value {
    /// A short, human readable name for the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Dict(_) => "dict",
        }
    }

    /// Returns true for both raw mappings and promoted dicts.
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Dict(_))
    }

    /// Returns the entries of a raw mapping or a dict, without promoting anything.
    pub fn as_mapping(&self) -> Option<&RawMap> {
        match self {
            Value::Map(map) => Some(map),
            Value::Dict(dict) => Some(&dict.items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a copy of this value with every dict, however deeply nested, turned back into a
    /// raw mapping.
    pub fn flatten(&self) -> Value {
        match self {
            Value::Dict(dict) => Value::Map(dict.all()),
            Value::Map(map) => Value::Map(
                map.iter().map(|(k, v)| (k.clone(), v.flatten())).collect()
            ),
            Value::List(items) => Value::List(items.iter().map(Value::flatten).collect()),
            other => other.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Map(map), Value::Dict(dict)) | (Value::Dict(dict), Value::Map(map)) => {
                dict.items == *map
            },
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Object(o) => write!(f, "{o:?}"),
            Value::List(items) => {
                write!(f, "[{}]", Joined { items: items.iter(), separator: ", " })
            },
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            },
            Value::Dict(dict) => Display::fmt(dict, f),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<RawMap> for Value {
    fn from(value: RawMap) -> Self {
        Value::Map(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
