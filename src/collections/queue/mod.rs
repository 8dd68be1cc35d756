//! A module containing [`Queue`], [`SortedQueue`] and associated types.
//!
//! [`Queue`] is a plain sequence addressed by position. [`SortedQueue`] pairs values with
//! priorities and reads them back in priority order, see [`Order`].
//!
//! Both are re-exported under the parent module.

mod error;
mod iter;
mod order;
mod queue;
mod sorted_queue;

pub use error::*;
pub use iter::*;
pub use order::*;
pub use queue::*;
pub use sorted_queue::*;
