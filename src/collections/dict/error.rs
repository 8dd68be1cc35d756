use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKey {
    pub kind: &'static str,
}

impl Display for InvalidKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dict key must be a string or object, got {}!", self.kind)
    }
}

impl Error for InvalidKey {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub key: String,
}

impl Display for MissingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The dict has no key named \"{}\"!", self.key)
    }
}

impl Error for MissingKey {}

/// A write under a delimited path whose parent doesn't resolve to a [`Dict`](super::Dict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPath {
    pub path: String,
}

impl Display for MissingPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to set \"{}\", its parent isn't a dict!", self.path)
    }
}

impl Error for MissingPath {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAMapping;

impl Display for NotAMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "A dict can only be built from a mapping!")
    }
}

impl Error for NotAMapping {}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum DictError {
    InvalidKey(InvalidKey),
    MissingKey(MissingKey),
    MissingPath(MissingPath),
    NotAMapping(NotAMapping),
}
