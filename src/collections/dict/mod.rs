//! A module containing [`Dict`] and associated types.
//!
//! A Dict stores dynamically typed [`Value`]s under [`Key`]s, which are either names or
//! [`Object`] identities. Nested data can be read and written with delimited paths, see
//! [`Dict`] for how nested mappings are promoted to child dicts.
//!
//! The other included types are for iteration, borrowed key lookups ([`KeyRef`]) and errors.
//!
//! [`Dict`] is also re-exported under the parent module.

mod dict;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod json;
mod key;
mod policy;
mod tests;
mod value;

pub use dict::*;
pub use error::*;
pub use iter::*;
pub use key::*;
pub use policy::*;
pub use value::*;
