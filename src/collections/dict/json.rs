use serde_json::{Map, Number, Value as Json};

use super::{Dict, DictError, Key, NotAMapping, Value};

impl Value {
    /// Converts parsed JSON into a Value. Objects become raw mappings, keeping their order only if
    /// `serde_json` is built with `preserve_order`.
    pub fn from_json(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from_json).collect()),
            Json::Object(map) => Value::Map(
                map.into_iter().map(|(k, v)| (Key::Name(k), Value::from_json(v))).collect()
            ),
        }
    }

    /// Converts this value into JSON. Dicts are flattened, object keys are written with their
    /// [`Display`](std::fmt::Display) form and values that JSON can't represent (objects and
    /// non-finite floats) become `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null | Value::Object(_) => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::Number((*i).into()),
            Value::Float(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
            Value::Str(s) => Json::String(s.clone()),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(map) => Json::Object(
                map.iter().map(|(k, v)| (k.to_string(), v.to_json())).collect::<Map<_, _>>()
            ),
            Value::Dict(dict) => dict.to_json(),
        }
    }
}

impl Dict {
    /// Creates a Dict from a parsed JSON object, as if by [`Dict::from_map`].
    ///
    /// # Errors
    /// [`NotAMapping`] if `json` isn't an object.
    pub fn from_json(json: Json, delimiter: Option<&str>) -> Result<Dict, DictError> {
        match Value::from_json(json) {
            Value::Map(map) => Ok(Dict::from_map(map, delimiter)),
            _ => Err(NotAMapping.into()),
        }
    }

    /// Converts every entry into a JSON object, see [`Value::to_json`].
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.iter().map(|(k, v)| (k.to_string(), v.to_json())).collect::<Map<_, _>>()
        )
    }
}
