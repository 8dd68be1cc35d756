use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;
use std::rc::Rc;

use indexmap::Equivalent;

use super::{InvalidKey, Value};

/// An opaque handle to any value, compared and hashed by identity rather than contents.
///
/// Two Objects are equal only if they were cloned from the same handle. This allows a [`Dict`]
/// to be keyed by a reference, the same way a value can be.
///
/// [`Dict`]: super::Dict
#[derive(Clone)]
pub struct Object(Rc<dyn Any>);

impl Object {
    /// Wraps `value` in a new handle with its own identity.
    pub fn new<T: Any>(value: T) -> Object {
        Object(Rc::new(value))
    }

    /// Creates a handle sharing the identity of an existing [`Rc`].
    pub fn from_rc<T: Any>(rc: Rc<T>) -> Object {
        Object(rc)
    }

    /// Returns a reference to the contained value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Returns true if both handles refer to the same allocation.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:p})", self.addr())
    }
}

/// The key of a single [`Dict`](super::Dict) entry: either a name or an [`Object`] identity.
///
/// Only names take part in delimited path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Name(String),
    Object(Object),
}

impl Key {
    /// Returns the name of this key, or None if it is an object identity.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Object(_) => None,
        }
    }

    /// Borrows this key for lookups.
    pub fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            Key::Name(name) => KeyRef::Name(name),
            Key::Object(object) => KeyRef::Object(object),
        }
    }
}

// Names hash as their bare string, so that a KeyRef can look them up without allocating. Both
// hashes have to agree with KeyRef's.
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key_ref().hash(state);
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_key_ref(), f)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<Object> for Key {
    fn from(value: Object) -> Self {
        Key::Object(value)
    }
}

impl From<KeyRef<'_>> for Key {
    fn from(value: KeyRef<'_>) -> Self {
        match value {
            KeyRef::Name(name) => Key::Name(name.to_owned()),
            KeyRef::Object(object) => Key::Object(object.clone()),
        }
    }
}

/// A borrowed [`Key`], used for every lookup so that reading a name never allocates.
#[derive(Debug, Clone, Copy)]
pub enum KeyRef<'a> {
    Name(&'a str),
    Object(&'a Object),
}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            KeyRef::Name(name) => name.hash(state),
            KeyRef::Object(object) => object.hash(state),
        }
    }
}

impl Equivalent<Key> for KeyRef<'_> {
    fn equivalent(&self, key: &Key) -> bool {
        match (self, key) {
            (KeyRef::Name(name), Key::Name(other)) => *name == other.as_str(),
            (KeyRef::Object(object), Key::Object(other)) => object.ptr_eq(other),
            _ => false,
        }
    }
}

impl Display for KeyRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Name(name) => write!(f, "{name}"),
            KeyRef::Object(object) => write!(f, "{object:?}"),
        }
    }
}

impl<'a> From<&'a str> for KeyRef<'a> {
    fn from(value: &'a str) -> Self {
        KeyRef::Name(value)
    }
}

impl<'a> From<&'a String> for KeyRef<'a> {
    fn from(value: &'a String) -> Self {
        KeyRef::Name(value)
    }
}

impl<'a> From<&'a Object> for KeyRef<'a> {
    fn from(value: &'a Object) -> Self {
        KeyRef::Object(value)
    }
}

impl<'a> From<&'a Key> for KeyRef<'a> {
    fn from(value: &'a Key) -> Self {
        value.as_key_ref()
    }
}

/// Conversion of a dynamically typed key into a [`Key`].
///
/// Strings and objects convert, anything else is rejected with [`InvalidKey`]. Numbers and
/// [`Value`]s implement this trait so that keys coming from untyped data are rejected at the
/// call site, rather than being coerced.
pub trait IntoKey {
    fn into_key(self) -> Result<Key, InvalidKey>;
}

impl IntoKey for Key {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self)
    }
}

impl IntoKey for KeyRef<'_> {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.into())
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.into())
    }
}

impl IntoKey for String {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.into())
    }
}

impl IntoKey for &String {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.as_str().into())
    }
}

impl IntoKey for Object {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.into())
    }
}

impl IntoKey for Value {
    fn into_key(self) -> Result<Key, InvalidKey> {
        match self {
            Value::Str(name) => Ok(Key::Name(name)),
            Value::Object(object) => Ok(Key::Object(object)),
            other => Err(InvalidKey { kind: other.kind() }),
        }
    }
}

macro_rules! reject_key {
    ($kind:literal: $($t:ty),+) => {
        $(
            impl IntoKey for $t {
                fn into_key(self) -> Result<Key, InvalidKey> {
                    Err(InvalidKey { kind: $kind })
                }
            }
        )+
    };
}

reject_key!("int": i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
reject_key!("float": f32, f64);
reject_key!("bool": bool);
