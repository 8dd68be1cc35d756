//! General-purpose collection types for loosely structured data.
//!
//! # Method
//! [`Dict`] stores dynamically typed values and resolves delimited paths into nested data.
//! [`Queue`] and [`SortedQueue`] hold values of a single type, addressed by position and by
//! priority respectively.

#[cfg(feature = "dict")]
pub mod dict;
#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "dict")]
#[doc(inline)]
pub use dict::Dict;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::{Queue, SortedQueue};
